//! Tests for the entry writer service.

use std::sync::Arc;

use chrono::NaiveDate;
use rstest::{fixture, rstest};
use serde_json::json;

use super::*;
use crate::domain::ports::{MockCalorieEntryRepository, MockUserRepository, UserPersistenceError};
use crate::domain::{ErrorCode, MealCategory, User, UserId};

#[fixture]
fn draft() -> CalorieEntryDraft {
    CalorieEntryDraft {
        user_id: 1,
        year: 2024,
        month: 5,
        day: 5,
        description: "Lunch at restaurant".to_owned(),
        category: "breakfast".to_owned(),
        amount: 650.0,
    }
}

fn john_doe() -> User {
    let birthday = NaiveDate::from_ymd_opt(1990, 1, 10).expect("valid date");
    User::try_from_parts(1, "John", "Doe", birthday).expect("valid user")
}

fn service(
    users: MockUserRepository,
    entries: MockCalorieEntryRepository,
) -> CalorieEntryService<MockUserRepository, MockCalorieEntryRepository> {
    CalorieEntryService::new(Arc::new(users), Arc::new(entries))
}

#[rstest]
#[tokio::test]
async fn add_entry_persists_and_returns_business_fields(draft: CalorieEntryDraft) {
    let mut users = MockUserRepository::new();
    users
        .expect_find_by_id()
        .withf(|id| *id == UserId::FIRST)
        .times(1)
        .return_once(|_| Ok(Some(john_doe())));
    let mut entries = MockCalorieEntryRepository::new();
    entries
        .expect_insert()
        .withf(|entry| entry.category() == MealCategory::Breakfast)
        .times(1)
        .return_once(|_| Ok(()));

    let entry = service(users, entries)
        .add_entry(draft)
        .await
        .expect("entry recorded");

    assert_eq!(
        serde_json::to_value(&entry).expect("serialise entry"),
        json!({
            "user_id": 1,
            "year": 2024,
            "month": 5,
            "day": 5,
            "description": "Lunch at restaurant",
            "category": "breakfast",
            "amount": 650,
        })
    );
}

#[rstest]
#[tokio::test]
async fn unknown_user_is_reference_not_found_and_not_written(draft: CalorieEntryDraft) {
    let mut draft = draft;
    draft.user_id = 999;
    let mut users = MockUserRepository::new();
    users.expect_find_by_id().times(1).return_once(|_| Ok(None));
    let mut entries = MockCalorieEntryRepository::new();
    entries.expect_insert().times(0);

    let err = service(users, entries)
        .add_entry(draft)
        .await
        .expect_err("unknown user");

    assert_eq!(err.code(), ErrorCode::ReferenceNotFound);
    assert_eq!(err.message(), "User not found.");
}

#[rstest]
#[case::zero(0)]
#[case::negative(-1)]
#[case::above_u32(5_000_000_000)]
#[tokio::test]
async fn out_of_range_user_id_is_reference_not_found(
    draft: CalorieEntryDraft,
    #[case] user_id: i64,
) {
    let mut draft = draft;
    draft.user_id = user_id;
    let mut users = MockUserRepository::new();
    users.expect_find_by_id().times(0);
    let mut entries = MockCalorieEntryRepository::new();
    entries.expect_insert().times(0);

    let err = service(users, entries)
        .add_entry(draft)
        .await
        .expect_err("no such user");

    assert_eq!(err.code(), ErrorCode::ReferenceNotFound);
    assert_eq!(err.message(), "User not found.");
}

#[rstest]
#[tokio::test]
async fn invalid_category_fails_before_any_store_call(draft: CalorieEntryDraft) {
    let mut draft = draft;
    draft.category = "snack".to_owned();
    let mut users = MockUserRepository::new();
    users.expect_find_by_id().times(0);
    let mut entries = MockCalorieEntryRepository::new();
    entries.expect_insert().times(0);

    let err = service(users, entries)
        .add_entry(draft)
        .await
        .expect_err("invalid category");

    assert_eq!(err.code(), ErrorCode::InvalidRequest);
    assert_eq!(
        err.details(),
        Some(&json!({ "field": "category", "code": "invalid_category" }))
    );
}

#[rstest]
#[tokio::test]
async fn user_lookup_failure_is_internal(draft: CalorieEntryDraft) {
    let mut users = MockUserRepository::new();
    users
        .expect_find_by_id()
        .return_once(|_| Err(UserPersistenceError::connection("refused")));
    let mut entries = MockCalorieEntryRepository::new();
    entries.expect_insert().times(0);

    let err = service(users, entries)
        .add_entry(draft)
        .await
        .expect_err("lookup fails");

    assert_eq!(err.code(), ErrorCode::InternalError);
}

#[rstest]
#[tokio::test]
async fn insert_failure_is_internal(draft: CalorieEntryDraft) {
    let mut users = MockUserRepository::new();
    users
        .expect_find_by_id()
        .return_once(|_| Ok(Some(john_doe())));
    let mut entries = MockCalorieEntryRepository::new();
    entries
        .expect_insert()
        .times(1)
        .return_once(|_| Err(CalorieEntryPersistenceError::query("disk full")));

    let err = service(users, entries)
        .add_entry(draft)
        .await
        .expect_err("insert fails");

    assert_eq!(err.code(), ErrorCode::InternalError);
}
