use serde_json::{Value, json};

use crate::helpers::TestApp;

#[tokio::test]
async fn successful_login_sets_the_session_cookie() {
    let app = TestApp::spawn().await;
    app.register_and_validate("jackdorsey", "jack@twitter.com", "drowssap1")
        .await;

    let response = app.login("jackdorsey", "drowssap1").await;
    assert_eq!(response.status().as_u16(), 200);

    let cookie_header = response
        .headers()
        .get("set-cookie")
        .expect("No session cookie was set")
        .to_str()
        .unwrap();
    assert!(cookie_header.starts_with("chirper_session="));
    assert!(cookie_header.contains("HttpOnly"));

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["username"], "jackdorsey");
}

#[tokio::test]
async fn wrong_password_is_a_401() {
    let app = TestApp::spawn().await;
    app.register_and_validate("jackdorsey", "jack@twitter.com", "drowssap1")
        .await;

    let response = app.login("jackdorsey", "wrongwrong").await;
    assert_eq!(response.status().as_u16(), 401);
}

#[tokio::test]
async fn unknown_username_is_a_401() {
    let app = TestApp::spawn().await;

    let response = app.login("ghost", "drowssap1").await;
    assert_eq!(response.status().as_u16(), 401);
}

#[tokio::test]
async fn malformed_username_is_a_401_not_a_400() {
    let app = TestApp::spawn().await;

    // a username that could never be stored gets the same answer as a
    // wrong password
    let response = app.login("not a username!", "drowssap1").await;
    assert_eq!(response.status().as_u16(), 401);
}

#[tokio::test]
async fn logout_clears_the_session() {
    let app = TestApp::spawn().await;
    app.register_and_validate("jackdorsey", "jack@twitter.com", "drowssap1")
        .await;
    app.login("jackdorsey", "drowssap1").await;

    let response = app.post_json("/logout", &json!({})).await;
    assert_eq!(response.status().as_u16(), 200);

    // the session-bound endpoint no longer accepts us
    let response = app
        .post_json(
            "/users/change-password",
            &json!({
                "old_password": "drowssap1",
                "new_password": "newpassword",
                "repeat_new_password": "newpassword",
            }),
        )
        .await;
    assert_eq!(response.status().as_u16(), 401);
}
