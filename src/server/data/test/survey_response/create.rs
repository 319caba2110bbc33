use super::*;

fn param() -> CreateSurveyResponseParam {
    CreateSurveyResponseParam {
        in_game_name: "Sable".to_string(),
        time_zone: "GMT+2_cairo".to_string(),
        time_ranges: vec!["09:00 - 10:00".to_string(), "10:00 - 11:00".to_string()],
    }
}

/// Tests storing a validated submission.
///
/// Verifies that the returned row carries a generated id and the submitted values,
/// with slot labels stored as a JSON array in submission order.
///
/// Expected: Ok(Model)
#[tokio::test]
async fn stores_submission_and_returns_row() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_survey_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SurveyResponseRepository::new(db);
    let before = Utc::now();
    let stored = repo.create(param()).await?;

    assert!(stored.id > 0);
    assert_eq!(stored.in_game_name, "Sable");
    assert_eq!(stored.time_zone, "GMT+2_cairo");
    assert_eq!(
        stored.time_ranges,
        serde_json::json!(["09:00 - 10:00", "10:00 - 11:00"])
    );
    assert!(stored.created_at >= before);

    let count = entity::prelude::SurveyResponse::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests that each submission gets its own row.
///
/// Expected: Ok with distinct ids
#[tokio::test]
async fn assigns_distinct_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_survey_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SurveyResponseRepository::new(db);
    let first = repo.create(param()).await?;
    let second = repo.create(param()).await?;

    assert_ne!(first.id, second.id);

    Ok(())
}

/// Tests insert failure when the table does not exist.
///
/// Expected: Err(DbErr)
#[tokio::test]
async fn fails_without_table() {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = SurveyResponseRepository::new(db).create(param()).await;

    assert!(result.is_err());
}
