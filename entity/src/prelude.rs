pub use super::mentor_profile::Entity as MentorProfile;
pub use super::mentorship_request::Entity as MentorshipRequest;
pub use super::message::Entity as Message;
pub use super::student_profile::Entity as StudentProfile;
pub use super::user::Entity as User;
