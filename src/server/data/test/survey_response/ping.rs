use super::*;

/// Tests pinging a live connection.
///
/// Expected: Ok(())
#[tokio::test]
async fn succeeds_on_open_connection() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_survey_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    SurveyResponseRepository::new(db).ping().await?;

    Ok(())
}
