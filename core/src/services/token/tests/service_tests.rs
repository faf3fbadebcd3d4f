//! Unit tests for token service

use uuid::Uuid;

use crate::domain::entities::token::Claims;
use crate::errors::{DomainError, TokenError};
use crate::services::token::{TokenService, TokenServiceConfig};

fn service() -> TokenService {
    TokenService::new(TokenServiceConfig::new("test-secret"))
}

#[test]
fn test_issue_then_verify_returns_subject() {
    let service = service();
    let user_id = Uuid::new_v4();

    let token = service.issue(user_id).unwrap();
    assert_eq!(token.split('.').count(), 3);

    assert_eq!(service.verify(&token).unwrap(), user_id);
}

#[test]
fn test_claims_carry_configured_lifetime() {
    let service = TokenService::new(TokenServiceConfig::new("test-secret").with_ttl_seconds(600));
    let token = service.issue(Uuid::new_v4()).unwrap();

    let claims = service.verify_claims(&token).unwrap();
    assert_eq!(claims.exp - claims.iat, 600);
    assert_eq!(claims.iss, "fundmate");
}

#[test]
fn test_out_of_range_lifetime_fails_without_panicking() {
    for ttl in [i64::MAX / 10, i64::MAX, i64::MIN] {
        let service =
            TokenService::new(TokenServiceConfig::new("test-secret").with_ttl_seconds(ttl));
        assert!(matches!(
            service.issue(Uuid::new_v4()),
            Err(DomainError::Token(TokenError::TokenGenerationFailed))
        ));
    }
}

#[test]
fn test_distinct_tokens_for_same_user() {
    let service = service();
    let user_id = Uuid::new_v4();

    let first = service.issue(user_id).unwrap();
    let second = service.issue(user_id).unwrap();
    assert_ne!(first, second);
}

#[test]
fn test_expired_token_rejected() {
    let service = service();
    let claims = Claims::new(Uuid::new_v4(), "fundmate", -60).unwrap();
    let token = service.encode_jwt(&claims).unwrap();

    assert!(matches!(
        service.verify(&token),
        Err(DomainError::Token(TokenError::TokenExpired))
    ));
}

#[test]
fn test_token_expiring_now_rejected() {
    let service = service();
    let claims = Claims::new(Uuid::new_v4(), "fundmate", 0).unwrap();
    let token = service.encode_jwt(&claims).unwrap();

    assert!(matches!(
        service.verify(&token),
        Err(DomainError::Token(TokenError::TokenExpired))
    ));
}

#[test]
fn test_wrong_secret_rejected() {
    let issuer = TokenService::new(TokenServiceConfig::new("secret-a"));
    let verifier = TokenService::new(TokenServiceConfig::new("secret-b"));

    let token = issuer.issue(Uuid::new_v4()).unwrap();

    assert!(matches!(
        verifier.verify(&token),
        Err(DomainError::Token(TokenError::InvalidSignature))
    ));
}

#[test]
fn test_tampered_payload_rejected() {
    let service = service();
    let token = service.issue(Uuid::new_v4()).unwrap();
    let other = service.issue(Uuid::new_v4()).unwrap();

    let parts: Vec<&str> = token.split('.').collect();
    let other_parts: Vec<&str> = other.split('.').collect();
    let forged = format!("{}.{}.{}", parts[0], other_parts[1], parts[2]);

    assert!(matches!(
        service.verify(&forged),
        Err(DomainError::Token(TokenError::InvalidSignature))
    ));
}

#[test]
fn test_malformed_token_rejected() {
    let service = service();

    for token in ["", "not-a-token", "a.b", "a.b.c"] {
        assert!(
            matches!(
                service.verify(token),
                Err(DomainError::Token(TokenError::InvalidTokenFormat))
            ),
            "token {:?} should be malformed",
            token
        );
    }
}

#[test]
fn test_non_uuid_subject_rejected() {
    let service = service();
    let mut claims = Claims::new(Uuid::new_v4(), "fundmate", 600).unwrap();
    claims.sub = "someone".to_string();
    let token = service.encode_jwt(&claims).unwrap();

    assert!(matches!(
        service.verify(&token),
        Err(DomainError::Token(TokenError::InvalidTokenFormat))
    ));
}

#[test]
fn test_foreign_issuer_rejected() {
    let service = service();
    let claims = Claims::new(Uuid::new_v4(), "someone-else", 600).unwrap();
    let token = service.encode_jwt(&claims).unwrap();

    assert!(service.verify(&token).is_err());
}
