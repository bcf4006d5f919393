use crate::server::{
    error::{message::MessageError, AppError},
    model::{message::Attachment, user::User},
    service::message::MessageService,
};
use entity::mentorship_request::RequestStatus;
use test_utils::{
    builder::TestBuilder,
    factory::{
        helpers::{create_matched_pair, create_mentor, create_student},
        mentorship_request::MentorshipRequestFactory,
        message::MessageFactory,
    },
};

mod fetch_history;
mod send_message;
