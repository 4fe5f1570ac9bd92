use secrecy::Secret;
use serde_json::{Value, json};

use chirper_core::{Email, TokenPurpose, TokenStore};

use crate::helpers::TestApp;

#[tokio::test]
async fn reset_email_carries_the_confirmation_link() {
    let app = TestApp::spawn().await;
    app.register_and_validate("jackdorsey", "jack@twitter.com", "drowssap1")
        .await;

    let response = app
        .post_json("/users/reset-password", &json!({ "email": "jack@twitter.com" }))
        .await;
    assert_eq!(response.status().as_u16(), 200);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Email sent!");

    let email = app.email_client.last_sent().await.unwrap();
    assert_eq!(email.to, "jack@twitter.com");
    assert_eq!(email.subject, "Password recovery.");

    let link = app.last_emailed_link().await;
    assert!(link.starts_with(&format!("{}/users/confirm-reset-password/", app.address)));
    assert_eq!(
        email.body,
        format!("To reset your password, please click in the link below: {link}")
    );
}

#[tokio::test]
async fn reset_flow_replaces_the_password() {
    let app = TestApp::spawn().await;
    app.register_and_validate("jackdorsey", "jack@twitter.com", "drowssap1")
        .await;

    app.post_json("/users/reset-password", &json!({ "email": "jack@twitter.com" }))
        .await;
    let link = app.last_emailed_link().await;

    let response = app
        .http_client
        .post(&link)
        .json(&json!({
            "new_password": "newpassword",
            "repeat_new_password": "newpassword",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 200);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Password changed successfully!");

    let response = app.login("jackdorsey", "drowssap1").await;
    assert_eq!(response.status().as_u16(), 401);

    let response = app.login("jackdorsey", "newpassword").await;
    assert_eq!(response.status().as_u16(), 200);
}

#[tokio::test]
async fn unknown_email_gets_a_generic_success() {
    let app = TestApp::spawn().await;

    let response = app
        .post_json("/users/reset-password", &json!({ "email": "ghost@twitter.com" }))
        .await;
    assert_eq!(response.status().as_u16(), 200);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Email sent!");

    assert!(app.email_client.sent().await.is_empty());
}

#[tokio::test]
async fn reset_token_is_single_use() {
    let app = TestApp::spawn().await;
    app.register_and_validate("jackdorsey", "jack@twitter.com", "drowssap1")
        .await;

    app.post_json("/users/reset-password", &json!({ "email": "jack@twitter.com" }))
        .await;
    let link = app.last_emailed_link().await;

    let payload = json!({
        "new_password": "newpassword",
        "repeat_new_password": "newpassword",
    });

    let response = app.http_client.post(&link).json(&payload).send().await.unwrap();
    assert_eq!(response.status().as_u16(), 200);

    let response = app.http_client.post(&link).json(&payload).send().await.unwrap();
    assert_eq!(response.status().as_u16(), 404);
}

#[tokio::test]
async fn password_mismatch_leaves_the_token_live() {
    let app = TestApp::spawn().await;
    app.register_and_validate("jackdorsey", "jack@twitter.com", "drowssap1")
        .await;

    app.post_json("/users/reset-password", &json!({ "email": "jack@twitter.com" }))
        .await;
    let link = app.last_emailed_link().await;

    let response = app
        .http_client
        .post(&link)
        .json(&json!({
            "new_password": "newpassword",
            "repeat_new_password": "different1",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 400);

    let email = Email::try_from(Secret::new("jack@twitter.com".to_string())).unwrap();
    let live = app
        .token_store
        .live_token_count(&email, TokenPurpose::PasswordReset)
        .await
        .unwrap();
    assert_eq!(live, 1);

    // the same link still works once the passwords agree
    let response = app
        .http_client
        .post(&link)
        .json(&json!({
            "new_password": "newpassword",
            "repeat_new_password": "newpassword",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 200);
}
