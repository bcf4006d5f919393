use crate::server::{
    data::request::MentorshipRequestRepository, model::request::CreateRequestParam,
};
use entity::mentorship_request::RequestStatus;
use sea_orm::DbErr;
use test_utils::{
    builder::TestBuilder,
    factory::{
        helpers::{create_mentor, create_student},
        mentorship_request::MentorshipRequestFactory,
    },
};

mod accept_with_cascade;
mod decline;
