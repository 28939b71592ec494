mod common;

use auth::ClaimsIdentity;
use auth::Role;
use auth_service::proto::GetUserInfoRequest;
use auth_service::proto::IsAdminRequest;
use auth_service::proto::LoginRequest;
use chrono::Duration;
use common::mint_token;
use common::with_token;
use common::TestApp;
use common::FOREIGN_PRIVATE_KEY;
use common::PRIVATE_KEY;
use tonic::Code;

#[tokio::test]
async fn test_register_login_and_get_user_info() {
    let app = TestApp::spawn().await;

    let user_id = app
        .register("nicola@example.com", "pass_word!")
        .await
        .expect("Registration failed");
    assert!(user_id > 0);

    let token = app
        .login("nicola@example.com", "pass_word!")
        .await
        .expect("Login failed");

    let claims = app.validator.parse(&token).expect("Token does not verify");
    assert_eq!(
        claims.identity(),
        ClaimsIdentity::new(user_id, "nicola@example.com", Role::User)
    );

    let info = app
        .client
        .clone()
        .get_user_info(with_token(GetUserInfoRequest {}, &token))
        .await
        .expect("GetUserInfo failed")
        .into_inner();

    assert_eq!(info.user_id, user_id);
    assert_eq!(info.email, "nicola@example.com");
    assert_eq!(info.role, "USER");
    assert!(chrono::DateTime::parse_from_rfc3339(&info.date_registered).is_ok());
}

#[tokio::test]
async fn test_register_stores_hash_not_password() {
    let app = TestApp::spawn().await;

    let user_id = app.register("nicola@example.com", "pass_word!").await.unwrap();

    let stored = app.repository.stored_hash(user_id).unwrap();
    assert_ne!(stored, "pass_word!");
    assert!(stored.starts_with("$argon2id$"));
}

#[tokio::test]
async fn test_register_duplicate_email() {
    let app = TestApp::spawn().await;

    app.register("nicola@example.com", "pass_word!").await.unwrap();

    let status = app
        .register("nicola@example.com", "another_pass")
        .await
        .unwrap_err();
    assert_eq!(status.code(), Code::AlreadyExists);
}

#[tokio::test]
async fn test_register_validation() {
    let app = TestApp::spawn().await;

    let status = app.register("", "pass_word!").await.unwrap_err();
    assert_eq!(status.code(), Code::InvalidArgument);

    let status = app.register("nicola@example.com", "").await.unwrap_err();
    assert_eq!(status.code(), Code::InvalidArgument);

    let status = app.register("not-an-email", "pass_word!").await.unwrap_err();
    assert_eq!(status.code(), Code::InvalidArgument);
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let app = TestApp::spawn().await;

    app.register("nicola@example.com", "pass_word!").await.unwrap();

    let wrong_password = app
        .login("nicola@example.com", "wrong_pass")
        .await
        .unwrap_err();
    let unknown_email = app
        .login("ghost@example.com", "pass_word!")
        .await
        .unwrap_err();

    assert_eq!(wrong_password.code(), Code::Unauthenticated);
    assert_eq!(unknown_email.code(), Code::Unauthenticated);
    assert_eq!(wrong_password.message(), unknown_email.message());
}

#[tokio::test]
async fn test_login_email_is_case_sensitive() {
    let app = TestApp::spawn().await;

    app.register("nicola@example.com", "pass_word!").await.unwrap();

    let status = app
        .login("Nicola@Example.com", "pass_word!")
        .await
        .unwrap_err();
    assert_eq!(status.code(), Code::Unauthenticated);
}

#[tokio::test]
async fn test_login_validation() {
    let app = TestApp::spawn().await;

    let status = app.login("", "pass_word!").await.unwrap_err();
    assert_eq!(status.code(), Code::InvalidArgument);

    let status = app.login("nicola@example.com", "").await.unwrap_err();
    assert_eq!(status.code(), Code::InvalidArgument);
}

#[tokio::test]
async fn test_login_accepts_app_id() {
    let app = TestApp::spawn().await;

    app.register("nicola@example.com", "pass_word!").await.unwrap();

    let response = app
        .client
        .clone()
        .login(LoginRequest {
            email: "nicola@example.com".to_string(),
            password: "pass_word!".to_string(),
            app_id: Some(3),
        })
        .await
        .expect("Login failed")
        .into_inner();

    assert!(app.validator.parse(&response.token).is_ok());
}

#[tokio::test]
async fn test_is_admin() {
    let app = TestApp::spawn().await;

    let admin_id = app.register("root@example.com", "pass_word!").await.unwrap();
    let user_id = app.register("user@example.com", "pass_word!").await.unwrap();
    app.repository.set_role(admin_id, Role::Admin);

    let is_admin = |user_id: i64| {
        let mut client = app.client.clone();
        async move {
            client
                .is_admin(IsAdminRequest { user_id })
                .await
                .map(|response| response.into_inner().is_admin)
        }
    };

    assert!(is_admin(admin_id).await.unwrap());
    assert!(!is_admin(user_id).await.unwrap());
    assert_eq!(is_admin(999).await.unwrap_err().code(), Code::NotFound);
    assert_eq!(is_admin(0).await.unwrap_err().code(), Code::InvalidArgument);
}

#[tokio::test]
async fn test_get_user_info_reads_current_role() {
    let app = TestApp::spawn().await;

    let user_id = app.register("nicola@example.com", "pass_word!").await.unwrap();
    let token = app.login("nicola@example.com", "pass_word!").await.unwrap();
    app.repository.set_role(user_id, Role::Admin);

    let info = app
        .client
        .clone()
        .get_user_info(with_token(GetUserInfoRequest {}, &token))
        .await
        .unwrap()
        .into_inner();

    // The token still says USER; the response reflects the store.
    assert_eq!(app.validator.parse(&token).unwrap().role, Role::User);
    assert_eq!(info.role, "ADMIN");
}

#[tokio::test]
async fn test_get_user_info_without_token() {
    let app = TestApp::spawn().await;

    let status = app
        .client
        .clone()
        .get_user_info(GetUserInfoRequest {})
        .await
        .unwrap_err();

    assert_eq!(status.code(), Code::Unauthenticated);
    assert_eq!(status.message(), "missing token");
}

#[tokio::test]
async fn test_get_user_info_expired_token() {
    let app = TestApp::spawn().await;

    let user_id = app.register("nicola@example.com", "pass_word!").await.unwrap();
    let identity = ClaimsIdentity::new(user_id, "nicola@example.com", Role::User);
    let token = mint_token(PRIVATE_KEY, &identity, Duration::minutes(-1));

    let status = app
        .client
        .clone()
        .get_user_info(with_token(GetUserInfoRequest {}, &token))
        .await
        .unwrap_err();

    assert_eq!(status.code(), Code::Unauthenticated);
    assert_eq!(status.message(), "token expired");
}

#[tokio::test]
async fn test_get_user_info_foreign_signature() {
    let app = TestApp::spawn().await;

    let user_id = app.register("nicola@example.com", "pass_word!").await.unwrap();
    let identity = ClaimsIdentity::new(user_id, "nicola@example.com", Role::Admin);
    let token = mint_token(FOREIGN_PRIVATE_KEY, &identity, Duration::minutes(5));

    let status = app
        .client
        .clone()
        .get_user_info(with_token(GetUserInfoRequest {}, &token))
        .await
        .unwrap_err();

    assert_eq!(status.code(), Code::Unauthenticated);
    assert_eq!(status.message(), "invalid token");
}

#[tokio::test]
async fn test_get_user_info_for_deleted_user() {
    let app = TestApp::spawn().await;

    let user_id = app.register("nicola@example.com", "pass_word!").await.unwrap();
    let token = app.login("nicola@example.com", "pass_word!").await.unwrap();
    app.repository.remove(user_id);

    let status = app
        .client
        .clone()
        .get_user_info(with_token(GetUserInfoRequest {}, &token))
        .await
        .unwrap_err();

    assert_eq!(status.code(), Code::Unauthenticated);
    assert_eq!(status.message(), "invalid credentials");
}
