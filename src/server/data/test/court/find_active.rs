use super::*;

/// Tests that only active courts are returned, ascending by court number.
///
/// Expected: Ok with courts 1 and 4 in order, inactive court 2 excluded
#[tokio::test]
async fn returns_active_courts_in_number_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Court)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    CourtFactory::new(db).court_number(4).build().await?;
    CourtFactory::new(db)
        .court_number(2)
        .active(false)
        .build()
        .await?;
    CourtFactory::new(db).court_number(1).build().await?;

    let repo = CourtRepository::new(db);
    let active: Vec<i32> = repo
        .find_active()
        .await?
        .into_iter()
        .map(|c| c.court_number)
        .collect();
    let all: Vec<i32> = repo
        .find_all()
        .await?
        .into_iter()
        .map(|c| c.court_number)
        .collect();

    assert_eq!(active, vec![1, 4]);
    assert_eq!(all, vec![1, 2, 4]);

    Ok(())
}
