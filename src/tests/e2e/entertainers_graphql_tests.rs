use chrono::NaiveDate;

use crate::shell::graphql::build_schema;
use crate::tests::fixtures::state::{make_offline_store_state, make_test_state};

#[tokio::test]
async fn creates_and_lists_entertainers_through_graphql() {
    let (state, store) = make_test_state();
    let schema = build_schema(state);

    let created = schema
        .execute(
            r#"mutation { createEntertainer(input: { stageName: "Jazz Persuasion", city: "Bellevue" }) {
                entertainerId stageName city dateEntered
            } }"#,
        )
        .await;
    assert!(created.errors.is_empty(), "{:?}", created.errors);
    let created = created.data.into_json().unwrap();
    assert_eq!(created["createEntertainer"]["entertainerId"], 1);
    assert_eq!(created["createEntertainer"]["city"], "Bellevue");

    store
        .record_engagement(1, NaiveDate::from_ymd_opt(2024, 2, 2).unwrap())
        .await
        .unwrap();

    let listed = schema
        .execute("{ entertainers { entertainerId stageName bookingCount lastBookedDate } }")
        .await;
    assert!(listed.errors.is_empty(), "{:?}", listed.errors);
    assert_eq!(
        listed.data.into_json().unwrap(),
        serde_json::json!({
            "entertainers": [{
                "entertainerId": 1,
                "stageName": "Jazz Persuasion",
                "bookingCount": 1,
                "lastBookedDate": "2024-02-02"
            }]
        })
    );
}

#[tokio::test]
async fn reports_validation_and_missing_records_as_errors() {
    let (state, _) = make_test_state();
    let schema = build_schema(state);

    let blank = schema
        .execute(r#"mutation { createEntertainer(input: { stageName: "  " }) { entertainerId } }"#)
        .await;
    assert_eq!(blank.errors[0].message, "Stage name is required");

    let mismatch = schema
        .execute(r#"mutation { updateEntertainer(id: 5, input: { entertainerId: 7, stageName: "Max" }) }"#)
        .await;
    assert_eq!(mismatch.errors[0].message, "ID mismatch");

    let missing = schema.execute("{ entertainer(id: 3) { stageName } }").await;
    assert_eq!(missing.errors[0].message, "entertainer 3 not found");

    let deleted = schema.execute("mutation { deleteEntertainer(id: 3) }").await;
    assert_eq!(deleted.errors[0].message, "entertainer 3 not found");
}

#[tokio::test]
async fn updates_and_deletes_through_graphql() {
    let (state, _) = make_test_state();
    let schema = build_schema(state);
    schema
        .execute(r#"mutation { createEntertainer(input: { stageName: "Topazz" }) { entertainerId } }"#)
        .await;

    let updated = schema
        .execute(
            r#"mutation { updateEntertainer(id: 1, input: { entertainerId: 1, stageName: "Topazz II" }) }"#,
        )
        .await;
    assert!(updated.errors.is_empty(), "{:?}", updated.errors);

    let fetched = schema.execute("{ entertainer(id: 1) { stageName } }").await;
    assert_eq!(
        fetched.data.into_json().unwrap()["entertainer"]["stageName"],
        "Topazz II"
    );

    let deleted = schema.execute("mutation { deleteEntertainer(id: 1) }").await;
    assert_eq!(
        deleted.data.into_json().unwrap(),
        serde_json::json!({"deleteEntertainer": true})
    );
}

#[tokio::test]
async fn surfaces_store_failures_as_errors() {
    let schema = build_schema(make_offline_store_state());

    let listed = schema.execute("{ entertainers { entertainerId } }").await;

    assert!(listed.errors[0].message.contains("Entertainer store offline"));
}
