use serde_json::{Value, json};

use crate::helpers::TestApp;

fn payload(old: &str, new: &str, repeat: &str) -> Value {
    json!({
        "old_password": old,
        "new_password": new,
        "repeat_new_password": repeat,
    })
}

#[tokio::test]
async fn logged_in_account_can_change_its_password() {
    let app = TestApp::spawn().await;
    app.register_and_validate("jackdorsey", "jack@twitter.com", "drowssap1")
        .await;
    app.login("jackdorsey", "drowssap1").await;

    let response = app
        .post_json(
            "/users/change-password",
            &payload("drowssap1", "newpassword", "newpassword"),
        )
        .await;
    assert_eq!(response.status().as_u16(), 200);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Password changed successfully!");

    let response = app.login("jackdorsey", "drowssap1").await;
    assert_eq!(response.status().as_u16(), 401);

    let response = app.login("jackdorsey", "newpassword").await;
    assert_eq!(response.status().as_u16(), 200);
}

#[tokio::test]
async fn requires_a_session() {
    let app = TestApp::spawn().await;

    let response = app
        .post_json(
            "/users/change-password",
            &payload("drowssap1", "newpassword", "newpassword"),
        )
        .await;
    assert_eq!(response.status().as_u16(), 401);
}

#[tokio::test]
async fn wrong_old_password_is_a_400() {
    let app = TestApp::spawn().await;
    app.register_and_validate("jackdorsey", "jack@twitter.com", "drowssap1")
        .await;
    app.login("jackdorsey", "drowssap1").await;

    let response = app
        .post_json(
            "/users/change-password",
            &payload("wrongwrong", "newpassword", "newpassword"),
        )
        .await;
    assert_eq!(response.status().as_u16(), 400);

    // password unchanged
    let response = app.login("jackdorsey", "drowssap1").await;
    assert_eq!(response.status().as_u16(), 200);
}

#[tokio::test]
async fn mismatched_repeat_is_a_400() {
    let app = TestApp::spawn().await;
    app.register_and_validate("jackdorsey", "jack@twitter.com", "drowssap1")
        .await;
    app.login("jackdorsey", "drowssap1").await;

    let response = app
        .post_json(
            "/users/change-password",
            &payload("drowssap1", "newpassword", "different1"),
        )
        .await;
    assert_eq!(response.status().as_u16(), 400);
}

#[tokio::test]
async fn unchanged_password_is_a_400() {
    let app = TestApp::spawn().await;
    app.register_and_validate("jackdorsey", "jack@twitter.com", "drowssap1")
        .await;
    app.login("jackdorsey", "drowssap1").await;

    let response = app
        .post_json(
            "/users/change-password",
            &payload("drowssap1", "drowssap1", "drowssap1"),
        )
        .await;
    assert_eq!(response.status().as_u16(), 400);
}
