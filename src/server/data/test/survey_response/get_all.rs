use super::*;

/// Tests listing with no stored responses.
///
/// Expected: Ok(empty Vec)
#[tokio::test]
async fn returns_empty_when_no_responses() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_survey_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let responses = SurveyResponseRepository::new(db).get_all().await?;

    assert!(responses.is_empty());

    Ok(())
}

/// Tests that responses are listed newest first.
///
/// Inserts rows out of chronological order and verifies the listing is sorted by
/// submission time descending.
///
/// Expected: Ok(Vec) ordered newest to oldest
#[tokio::test]
async fn lists_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_survey_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let base = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
    let middle = factory::survey_response::SurveyResponseFactory::new(db)
        .in_game_name("Middle")
        .created_at(base)
        .build()
        .await?;
    let oldest = factory::survey_response::SurveyResponseFactory::new(db)
        .in_game_name("Oldest")
        .created_at(base - Duration::hours(2))
        .build()
        .await?;
    let newest = factory::survey_response::SurveyResponseFactory::new(db)
        .in_game_name("Newest")
        .created_at(base + Duration::hours(2))
        .build()
        .await?;

    let responses = SurveyResponseRepository::new(db).get_all().await?;
    let ids: Vec<i32> = responses.iter().map(|r| r.id).collect();

    assert_eq!(ids, vec![newest.id, middle.id, oldest.id]);

    Ok(())
}

/// Tests ordering of responses submitted at the same instant.
///
/// Expected: Ok(Vec) with the higher id first
#[tokio::test]
async fn breaks_ties_by_id_descending() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_survey_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let at = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
    let first = factory::survey_response::SurveyResponseFactory::new(db)
        .created_at(at)
        .build()
        .await?;
    let second = factory::survey_response::SurveyResponseFactory::new(db)
        .created_at(at)
        .build()
        .await?;

    let responses = SurveyResponseRepository::new(db).get_all().await?;

    assert_eq!(responses[0].id, second.id);
    assert_eq!(responses[1].id, first.id);

    Ok(())
}

/// Tests that stored values come back unchanged.
///
/// Expected: Ok(Vec) containing the factory row verbatim
#[tokio::test]
async fn returns_stored_values() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_survey_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::survey_response::SurveyResponseFactory::new(db)
        .in_game_name("Sable")
        .time_zone("UTC-3")
        .time_ranges(["03:00", "04:00 - 05:00"])
        .created_at(Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap())
        .build()
        .await?;

    let responses = SurveyResponseRepository::new(db).get_all().await?;

    assert_eq!(responses, vec![created]);

    Ok(())
}

/// Tests listing a response created with factory defaults.
///
/// Expected: Ok(Vec) with the default time zone and slots
#[tokio::test]
async fn lists_default_response() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_survey_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_survey_response(db).await?;

    let responses = SurveyResponseRepository::new(db).get_all().await?;

    assert_eq!(responses.len(), 1);
    assert_eq!(responses[0].id, created.id);
    assert_eq!(responses[0].time_zone, "GMT+2_cairo");
    assert_eq!(responses[0].time_ranges, serde_json::json!(["09:00", "10:00"]));

    Ok(())
}
