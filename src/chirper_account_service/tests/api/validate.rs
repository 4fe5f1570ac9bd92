use serde_json::Value;

use crate::helpers::TestApp;

#[tokio::test]
async fn emailed_link_activates_the_account() {
    let app = TestApp::spawn().await;

    let response = app
        .register("jackdorsey", "jack@twitter.com", "drowssap1")
        .await;
    assert_eq!(response.status().as_u16(), 201);

    let link = app.last_emailed_link().await;
    let response = app.get(&link).await;
    assert_eq!(response.status().as_u16(), 200);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Account validated");

    let response = app.login("jackdorsey", "drowssap1").await;
    assert_eq!(response.status().as_u16(), 200);
}

#[tokio::test]
async fn login_before_validation_is_forbidden() {
    let app = TestApp::spawn().await;

    app.register("jackdorsey", "jack@twitter.com", "drowssap1")
        .await;

    let response = app.login("jackdorsey", "drowssap1").await;
    assert_eq!(response.status().as_u16(), 403);
}

#[tokio::test]
async fn validation_link_is_single_use() {
    let app = TestApp::spawn().await;

    app.register("jackdorsey", "jack@twitter.com", "drowssap1")
        .await;
    let link = app.last_emailed_link().await;

    let response = app.get(&link).await;
    assert_eq!(response.status().as_u16(), 200);

    let response = app.get(&link).await;
    assert_eq!(response.status().as_u16(), 404);
}

#[tokio::test]
async fn unknown_token_is_a_404() {
    let app = TestApp::spawn().await;

    let response = app
        .get(&format!("{}/users/validate/deadbeefdeadbeef", app.address))
        .await;
    assert_eq!(response.status().as_u16(), 404);
}

#[tokio::test]
async fn reset_token_does_not_validate_an_account() {
    let app = TestApp::spawn().await;

    app.register_and_validate("jackdorsey", "jack@twitter.com", "drowssap1")
        .await;
    app.post_json(
        "/users/reset-password",
        &serde_json::json!({ "email": "jack@twitter.com" }),
    )
    .await;

    // lift the reset token out of its link and feed it to the
    // validation endpoint
    let reset_link = app.last_emailed_link().await;
    let token = reset_link.rsplit_once('/').unwrap().1;

    let response = app
        .get(&format!("{}/users/validate/{token}", app.address))
        .await;
    assert_eq!(response.status().as_u16(), 404);
}
