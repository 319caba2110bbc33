pub use super::survey_response::Entity as SurveyResponse;
