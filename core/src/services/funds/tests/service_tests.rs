//! Unit tests for the saved-funds service

use std::sync::Arc;

use crate::domain::entities::user::User;
use crate::errors::{DomainError, ErrorKind, FundError, ValidationError};
use crate::repositories::{MockUserRepository, UserRepository};
use crate::services::funds::{FundService, SaveFundInput};

async fn setup() -> (Arc<MockUserRepository>, FundService<MockUserRepository>, User) {
    let repo = Arc::new(MockUserRepository::new());
    let user = repo
        .create(User::new(
            "Asha".to_string(),
            "asha@example.com",
            "hash".to_string(),
        ))
        .await
        .unwrap();
    let service = FundService::new(repo.clone());
    (repo, service, user)
}

fn codes(list: &crate::domain::value_objects::SavedFundList) -> Vec<&str> {
    list.funds.iter().map(|f| f.scheme_code.as_str()).collect()
}

#[tokio::test]
async fn test_save_list_remove_round_trip() {
    let (_, service, user) = setup().await;

    let saved = service
        .save(&user, SaveFundInput::new("100123", "Alpha Fund"))
        .await
        .unwrap();
    assert_eq!(saved.scheme_code, "100123");
    assert_eq!(saved.scheme_name, "Alpha Fund");

    let list = service.list(&user).await.unwrap();
    assert_eq!(list.count, 1);
    assert_eq!(list.funds[0].scheme_code, "100123");
    assert_eq!(list.funds[0].scheme_name, "Alpha Fund");

    let removed = service.remove(&user, "100123").await.unwrap();
    assert_eq!(removed, "100123");

    let list = service.list(&user).await.unwrap();
    assert_eq!(list.count, 0);
    assert!(list.funds.is_empty());
}

#[tokio::test]
async fn test_duplicate_save_conflicts_without_mutation() {
    let (_, service, user) = setup().await;
    service
        .save(&user, SaveFundInput::new("100123", "Alpha Fund"))
        .await
        .unwrap();

    let error = service
        .save(&user, SaveFundInput::new("100123", "Alpha Fund Again"))
        .await
        .unwrap_err();

    assert!(matches!(
        error,
        DomainError::Fund(FundError::AlreadySaved { ref scheme_code }) if scheme_code == "100123"
    ));
    assert_eq!(error.kind(), ErrorKind::Conflict);

    let list = service.list(&user).await.unwrap();
    assert_eq!(list.count, 1);
    assert_eq!(list.funds[0].scheme_name, "Alpha Fund");
}

#[tokio::test]
async fn test_remove_missing_is_not_found() {
    let (repo, service, user) = setup().await;
    service
        .save(&user, SaveFundInput::new("1", "One"))
        .await
        .unwrap();
    let writes = repo.write_count();

    let error = service.remove(&user, "999999").await.unwrap_err();
    assert!(matches!(error, DomainError::Fund(FundError::NotSaved { .. })));
    assert_eq!(error.kind(), ErrorKind::NotFound);

    assert_eq!(repo.write_count(), writes);
    assert_eq!(service.list(&user).await.unwrap().count, 1);
}

#[tokio::test]
async fn test_order_preserved_after_removal() {
    let (_, service, user) = setup().await;
    for code in ["A", "B", "C"] {
        service
            .save(&user, SaveFundInput::new(code, format!("Fund {}", code)))
            .await
            .unwrap();
    }

    service.remove(&user, "B").await.unwrap();

    let list = service.list(&user).await.unwrap();
    assert_eq!(codes(&list), vec!["A", "C"]);
}

#[tokio::test]
async fn test_check_saved_is_idempotent() {
    let (_, service, user) = setup().await;

    for _ in 0..3 {
        let status = service.check_saved(&user, "42").await.unwrap();
        assert!(!status.is_saved);
        assert_eq!(status.scheme_code, "42");
    }

    service
        .save(&user, SaveFundInput::new("42", "Answer Fund"))
        .await
        .unwrap();

    for _ in 0..3 {
        assert!(service.check_saved(&user, "42").await.unwrap().is_saved);
    }
}

#[tokio::test]
async fn test_save_requires_code_and_name() {
    let (repo, service, user) = setup().await;

    let error = service
        .save(&user, SaveFundInput::new("  ", ""))
        .await
        .unwrap_err();
    assert_eq!(error.kind(), ErrorKind::Validation);
    match error {
        DomainError::ValidationErr(validation) => {
            let fields: Vec<String> =
                validation.violations().into_iter().map(|v| v.field).collect();
            assert_eq!(fields, vec!["schemeCode", "schemeName"]);
        }
        other => panic!("expected validation error, got {:?}", other),
    }

    let error = service
        .save(&user, SaveFundInput::new("1", " "))
        .await
        .unwrap_err();
    assert_eq!(error.kind(), ErrorKind::Validation);
    assert_eq!(repo.write_count(), 1);
}

#[tokio::test]
async fn test_save_rejects_oversized_fields() {
    let (repo, service, user) = setup().await;

    let error = service
        .save(&user, SaveFundInput::new("9".repeat(65), "Alpha Fund"))
        .await
        .unwrap_err();
    assert_eq!(error.kind(), ErrorKind::Validation);
    assert!(matches!(
        error,
        DomainError::ValidationErr(ValidationError::TooLong { max: 64, actual: 65, .. })
    ));

    let error = service
        .save(&user, SaveFundInput::new("100123", "n".repeat(513)))
        .await
        .unwrap_err();
    match error {
        DomainError::ValidationErr(validation) => {
            let violations = validation.violations();
            assert_eq!(violations[0].field, "schemeName");
            assert_eq!(violations[0].message, "schemeName must be at most 512 characters");
        }
        other => panic!("expected validation error, got {:?}", other),
    }

    let mut input = SaveFundInput::new("100123", "Alpha Fund");
    input.fund_house = Some("h".repeat(256));
    let error = service.save(&user, input).await.unwrap_err();
    assert_eq!(error.kind(), ErrorKind::Validation);

    assert_eq!(repo.write_count(), 1);

    let saved = service
        .save(&user, SaveFundInput::new("9".repeat(64), "n".repeat(512)))
        .await
        .unwrap();
    assert_eq!(saved.scheme_code.len(), 64);
}

#[tokio::test]
async fn test_save_trims_and_keeps_optional_details() {
    let (_, service, user) = setup().await;

    let input = SaveFundInput {
        scheme_code: " 120503 ".to_string(),
        scheme_name: " Growth Fund ".to_string(),
        fund_house: Some("Example AMC".to_string()),
        scheme_category: Some("   ".to_string()),
    };
    let saved = service.save(&user, input).await.unwrap();

    assert_eq!(saved.scheme_code, "120503");
    assert_eq!(saved.scheme_name, "Growth Fund");
    assert_eq!(saved.fund_house.as_deref(), Some("Example AMC"));
    assert!(saved.scheme_category.is_none());
    assert!(service.check_saved(&user, "120503").await.unwrap().is_saved);
}

#[tokio::test]
async fn test_users_do_not_share_collections() {
    let (repo, service, asha) = setup().await;
    let ravi = repo
        .create(User::new(
            "Ravi".to_string(),
            "ravi@example.com",
            "hash".to_string(),
        ))
        .await
        .unwrap();

    service
        .save(&asha, SaveFundInput::new("7", "Seven"))
        .await
        .unwrap();
    service
        .save(&ravi, SaveFundInput::new("7", "Seven"))
        .await
        .unwrap();

    service.remove(&asha, "7").await.unwrap();

    assert!(!service.check_saved(&asha, "7").await.unwrap().is_saved);
    assert!(service.check_saved(&ravi, "7").await.unwrap().is_saved);
}

#[tokio::test]
async fn test_concurrent_duplicate_saves_store_one_entry() {
    let (_, service, user) = setup().await;
    let service = Arc::new(service);

    let mut handles = Vec::new();
    for _ in 0..8 {
        let service = service.clone();
        let user = user.clone();
        handles.push(tokio::spawn(async move {
            service
                .save(&user, SaveFundInput::new("555", "Race Fund"))
                .await
                .is_ok()
        }));
    }

    let mut successes = 0;
    for handle in handles {
        if handle.await.unwrap() {
            successes += 1;
        }
    }

    assert_eq!(successes, 1);
    assert_eq!(service.list(&user).await.unwrap().count, 1);
}
