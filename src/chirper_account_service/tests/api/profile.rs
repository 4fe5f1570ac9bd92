use serde_json::{Value, json};

use crate::helpers::TestApp;

#[tokio::test]
async fn logged_in_account_can_update_its_profile() {
    let app = TestApp::spawn().await;
    app.register_and_validate("jackdorsey", "jack@twitter.com", "drowssap1")
        .await;
    app.login("jackdorsey", "drowssap1").await;

    let response = app
        .post_json(
            "/users/profile",
            &json!({
                "first_name": "evan",
                "last_name": "williams",
                "birth_date": "1972-03-31",
                "avatar": "avatars/evan.jpg",
            }),
        )
        .await;
    assert_eq!(response.status().as_u16(), 200);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Profile updated successfully!");
}

#[tokio::test]
async fn requires_a_session() {
    let app = TestApp::spawn().await;

    let response = app
        .post_json(
            "/users/profile",
            &json!({ "first_name": "evan", "last_name": "williams" }),
        )
        .await;
    assert_eq!(response.status().as_u16(), 401);
}

#[tokio::test]
async fn names_with_digits_are_a_400() {
    let app = TestApp::spawn().await;
    app.register_and_validate("jackdorsey", "jack@twitter.com", "drowssap1")
        .await;
    app.login("jackdorsey", "drowssap1").await;

    let response = app
        .post_json(
            "/users/profile",
            &json!({ "first_name": "ev4n", "last_name": "williams" }),
        )
        .await;
    assert_eq!(response.status().as_u16(), 400);
}
