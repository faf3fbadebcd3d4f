//! Integration tests for the bearer token middleware

mod common;

use actix_web::{http::StatusCode, test, web, App, HttpResponse};
use fm_api::config::ErrorConfig;
use fm_api::create_app;
use fm_api::middleware::auth::{AuthContext, JwtAuth};
use serde_json::Value;

use common::{bearer, context, corrupt_signature};

#[actix_web::test]
async fn test_missing_token_is_rejected() {
    let ctx = context();
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::get().uri("/api/user/me").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "unauthenticated");
    assert_eq!(body["message"], "Not authorized, no token");
}

#[actix_web::test]
async fn test_non_bearer_header_counts_as_missing_token() {
    let ctx = context();
    let (_, token) = ctx.register("Asha", "asha@example.com").await;
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::get()
        .uri("/api/user/me")
        .insert_header(("Authorization", token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Not authorized, no token");
}

#[actix_web::test]
async fn test_malformed_token_is_rejected() {
    let ctx = context();
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::get()
        .uri("/api/user/me")
        .insert_header(bearer("invalid-token"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Invalid token");
}

#[actix_web::test]
async fn test_expired_and_tampered_tokens_are_distinguished() {
    let ctx = context();
    let (user_id, token) = ctx.register("Asha", "asha@example.com").await;
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::get()
        .uri("/api/user/me")
        .insert_header(bearer(&ctx.expired_token(user_id)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Token expired");

    let req = test::TestRequest::get()
        .uri("/api/user/me")
        .insert_header(bearer(&corrupt_signature(&token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Invalid token");
}

#[actix_web::test]
async fn test_token_for_deleted_user_is_rejected() {
    let ctx = context();
    let (user_id, token) = ctx.register("Asha", "asha@example.com").await;
    assert!(ctx.users.remove_user(user_id).await);
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::get()
        .uri("/api/user/me")
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "unauthenticated");
}

#[actix_web::test]
async fn test_valid_token_reaches_handler_with_user() {
    let ctx = context();
    let (user_id, token) = ctx.register("Asha", "asha@example.com").await;
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::get()
        .uri("/api/user/me")
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["id"], user_id.to_string());
    assert_eq!(body["savedFundsCount"], 0);
}

#[actix_web::test]
async fn test_middleware_without_resolver_fails_closed() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(ErrorConfig::production()))
            .service(
                web::resource("/protected")
                    .wrap(JwtAuth::new())
                    .route(web::get().to(|| async { HttpResponse::Ok().finish() })),
            ),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/protected")
        .insert_header(bearer("anything"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[actix_web::test]
async fn test_auth_context_extractor_requires_middleware() {
    async fn protected_handler(auth: AuthContext) -> HttpResponse {
        HttpResponse::Ok().json(serde_json::json!({ "id": auth.user.id }))
    }

    let app = test::init_service(
        App::new().route("/protected", web::get().to(protected_handler)),
    )
    .await;

    let req = test::TestRequest::get().uri("/protected").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}
