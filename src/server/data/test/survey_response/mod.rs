use crate::server::{
    data::survey_response::SurveyResponseRepository,
    model::survey::CreateSurveyResponseParam,
};
use chrono::{Duration, TimeZone, Utc};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_all;
mod ping;
