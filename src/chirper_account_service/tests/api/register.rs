use serde_json::{Value, json};

use crate::helpers::TestApp;

#[tokio::test]
async fn register_returns_201_and_sends_the_validation_email() {
    let app = TestApp::spawn().await;

    let response = app
        .register("jackdorsey", "jack@twitter.com", "drowssap1")
        .await;
    assert_eq!(response.status().as_u16(), 201);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "User created successfully");

    let email = app.email_client.last_sent().await.unwrap();
    assert_eq!(email.to, "jack@twitter.com");
    assert_eq!(email.subject, "Validate your account.");

    let link = app.last_emailed_link().await;
    assert!(link.starts_with(&format!("{}/users/validate/", app.address)));
    assert_eq!(
        email.body,
        format!(
            "Thanks for registering. To complete the process, \
             please click in the link below: {link}"
        )
    );
}

#[tokio::test]
async fn duplicate_username_is_a_409() {
    let app = TestApp::spawn().await;

    let response = app
        .register("jackdorsey", "jack@twitter.com", "drowssap1")
        .await;
    assert_eq!(response.status().as_u16(), 201);

    let response = app
        .register("jackdorsey", "other@twitter.com", "drowssap1")
        .await;
    assert_eq!(response.status().as_u16(), 409);

    // no mail for the rejected attempt
    assert_eq!(app.email_client.sent().await.len(), 1);
}

#[tokio::test]
async fn malformed_fields_are_a_400() {
    let app = TestApp::spawn().await;

    let cases: Vec<(&str, Value)> = vec![
        (
            "email without a domain",
            json!({
                "username": "jackdorsey",
                "password": "drowssap1",
                "first_name": "jack",
                "last_name": "dorsey",
                "email": "jack@",
            }),
        ),
        (
            "password below the minimum length",
            json!({
                "username": "jackdorsey",
                "password": "short",
                "first_name": "jack",
                "last_name": "dorsey",
                "email": "jack@twitter.com",
            }),
        ),
        (
            "username with spaces",
            json!({
                "username": "jack dorsey",
                "password": "drowssap1",
                "first_name": "jack",
                "last_name": "dorsey",
                "email": "jack@twitter.com",
            }),
        ),
        (
            "numeric first name",
            json!({
                "username": "jackdorsey",
                "password": "drowssap1",
                "first_name": "j4ck",
                "last_name": "dorsey",
                "email": "jack@twitter.com",
            }),
        ),
    ];

    for (reason, body) in cases {
        let response = app.post_json("/register", &body).await;
        assert_eq!(response.status().as_u16(), 400, "case: {reason}");
    }

    assert!(app.email_client.sent().await.is_empty());
}

#[tokio::test]
async fn failed_email_delivery_is_a_500() {
    let app = TestApp::spawn().await;
    app.email_client.fail_next();

    let response = app
        .register("jackdorsey", "jack@twitter.com", "drowssap1")
        .await;
    assert_eq!(response.status().as_u16(), 500);
}
