//! Tests for the user lookup handler.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use chrono::NaiveDate;
use rstest::rstest;
use serde_json::{Value, json};

use super::*;
use crate::domain::ports::{MockCalorieEntryCommand, MockCalorieReportQuery, MockUserQuery};

fn state_with(users: MockUserQuery) -> web::Data<HttpState> {
    web::Data::new(HttpState::new(
        Arc::new(users),
        Arc::new(MockCalorieEntryCommand::new()),
        Arc::new(MockCalorieReportQuery::new()),
    ))
}

async fn get(users: MockUserQuery, uri: &str) -> (StatusCode, Value) {
    let app = test::init_service(App::new().app_data(state_with(users)).service(get_user)).await;
    let res = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
    let status = res.status();
    let body: Value = test::read_body_json(res).await;
    (status, body)
}

#[rstest]
#[actix_web::test]
async fn returns_user_with_long_form_birthday() {
    let mut users = MockUserQuery::new();
    users
        .expect_get_user()
        .withf(|id| id.get() == 1)
        .times(1)
        .return_once(|_| {
            let birthday = NaiveDate::from_ymd_opt(1990, 1, 10).expect("valid date");
            User::try_from_parts(1, "John", "Doe", birthday)
                .map_err(|err| Error::internal(err.to_string()))
        });

    let (status, body) = get(users, "/users/1").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "id": 1,
            "first_name": "John",
            "last_name": "Doe",
            "birthday": "January 10th, 1990",
        })
    );
}

#[rstest]
#[actix_web::test]
async fn unknown_user_is_404() {
    let mut users = MockUserQuery::new();
    users
        .expect_get_user()
        .return_once(|_| Err(Error::not_found("User not found")));

    let (status, body) = get(users, "/users/42").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "not_found");
    assert_eq!(body["message"], "User not found");
}

#[rstest]
#[case("/users/0")]
#[case("/users/-4")]
#[case("/users/99999999999")]
#[actix_web::test]
async fn ids_outside_range_are_404_without_lookup(#[case] uri: &str) {
    let mut users = MockUserQuery::new();
    users.expect_get_user().times(0);

    let (status, _) = get(users, uri).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[rstest]
#[actix_web::test]
async fn non_integer_id_is_invalid_request() {
    let mut users = MockUserQuery::new();
    users.expect_get_user().times(0);

    let (status, body) = get(users, "/users/abc").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["code"], "invalid_id");
}
