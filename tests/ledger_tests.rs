use chrono::{NaiveDate, NaiveTime};
use pontobot::core::{Listing, list_events};
use pontobot::models::Action;
use pontobot::ui::messages::{NO_RECORDS, listing_pages};

mod common;
use common::{open_store, recorder_at, sao_paulo, temp_db};

const ANA: u64 = 111_111_111_111_111_111;
const BRUNO: u64 = 222_222_222_222_222_222;

#[tokio::test]
async fn test_clock_in_then_out_scenario() {
    let (_dir, path) = temp_db("scenario");
    let store = open_store(&path).await;

    let morning = recorder_at(store.clone(), sao_paulo(2024, 3, 1, 9, 0, 0));
    let saved = morning.punch("ana", ANA, Action::Entry).await.unwrap();
    assert_eq!(saved.date, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
    assert_eq!(saved.time, NaiveTime::from_hms_opt(9, 0, 0).unwrap());
    assert_eq!(saved.action, Action::Entry);

    let rows = store.query(None).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0], saved);

    let evening = recorder_at(store.clone(), sao_paulo(2024, 3, 1, 17, 30, 0));
    evening.punch("ana", ANA, Action::Exit).await.unwrap();

    let listing = list_events(&*store, Some(ANA)).await.unwrap();
    let Listing::Rows(rows) = listing else {
        panic!("expected rows for ana");
    };
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].action, Action::Entry);
    assert_eq!(rows[0].time_str(), "09:00:00");
    assert_eq!(rows[1].action, Action::Exit);
    assert_eq!(rows[1].time_str(), "17:30:00");
    assert!(rows.iter().all(|r| r.date_str() == "2024-03-01"));

    let none = list_events(&*store, Some(BRUNO)).await.unwrap();
    assert_eq!(none, Listing::Empty);
}

#[tokio::test]
async fn test_filter_returns_only_that_users_rows() {
    let (_dir, path) = temp_db("filter");
    let store = open_store(&path).await;
    let rec = recorder_at(store.clone(), sao_paulo(2024, 5, 10, 8, 15, 30));

    rec.punch("ana", ANA, Action::Entry).await.unwrap();
    rec.punch("bruno", BRUNO, Action::Entry).await.unwrap();
    rec.punch("ana", ANA, Action::Exit).await.unwrap();

    let all = store.query(None).await.unwrap();
    assert_eq!(all.len(), 3);

    let ana = store.query(Some(ANA)).await.unwrap();
    assert_eq!(ana.len(), 2);
    assert!(ana.iter().all(|r| r.user_id == ANA && r.user_display_name == "ana"));

    let bruno = store.query(Some(BRUNO)).await.unwrap();
    assert_eq!(bruno.len(), 1);
    assert_eq!(bruno[0].user_display_name, "bruno");
}

#[tokio::test]
async fn test_repeated_entries_are_accepted() {
    let (_dir, path) = temp_db("repeated");
    let store = open_store(&path).await;
    let rec = recorder_at(store.clone(), sao_paulo(2024, 3, 1, 9, 0, 0));

    // Exit without a prior entry, then two entries in a row.
    rec.punch("ana", ANA, Action::Exit).await.unwrap();
    rec.punch("ana", ANA, Action::Entry).await.unwrap();
    rec.punch("ana", ANA, Action::Entry).await.unwrap();

    let actions: Vec<Action> = store
        .query(Some(ANA))
        .await
        .unwrap()
        .into_iter()
        .map(|r| r.action)
        .collect();
    assert_eq!(actions, vec![Action::Exit, Action::Entry, Action::Entry]);
}

#[tokio::test]
async fn test_empty_store_lists_as_empty() {
    let (_dir, path) = temp_db("empty");
    let store = open_store(&path).await;

    assert_eq!(list_events(&*store, None).await.unwrap(), Listing::Empty);
    assert!(!NO_RECORDS.is_empty());
}

#[tokio::test]
async fn test_reopening_an_initialized_db_keeps_rows() {
    let (_dir, path) = temp_db("reopen");
    {
        let store = open_store(&path).await;
        recorder_at(store, sao_paulo(2024, 3, 1, 9, 0, 0))
            .punch("ana", ANA, Action::Entry)
            .await
            .unwrap();
    }

    let store = open_store(&path).await;
    let rows = store.query(None).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].user_display_name, "ana");
}

#[tokio::test]
async fn test_display_name_is_a_snapshot() {
    let (_dir, path) = temp_db("snapshot");
    let store = open_store(&path).await;
    let rec = recorder_at(store.clone(), sao_paulo(2024, 3, 1, 9, 0, 0));

    rec.punch("ana", ANA, Action::Entry).await.unwrap();
    rec.punch("ana.silva", ANA, Action::Exit).await.unwrap();

    let names: Vec<String> = store
        .query(Some(ANA))
        .await
        .unwrap()
        .into_iter()
        .map(|r| r.user_display_name)
        .collect();
    assert_eq!(names, vec!["ana", "ana.silva"]);
}

#[tokio::test]
async fn test_listing_renders_every_stored_row() {
    let (_dir, path) = temp_db("render");
    let store = open_store(&path).await;
    let rec = recorder_at(store.clone(), sao_paulo(2024, 3, 1, 9, 0, 0));
    for _ in 0..30 {
        rec.punch("ana", ANA, Action::Entry).await.unwrap();
    }

    let Listing::Rows(rows) = list_events(&*store, None).await.unwrap() else {
        panic!("expected rows");
    };
    let pages = listing_pages(&rows);
    let rendered: usize = pages.iter().map(|p| p.fields.len()).sum();
    assert_eq!(rendered, 30);
    assert_eq!(pages.len(), 2);
}
