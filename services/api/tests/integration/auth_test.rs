use modshelf_api::error::ApiError;
use modshelf_api::usecase::auth::{
    GetProfileUseCase, LoginInput, LoginUseCase, RegisterInput, RegisterUseCase, hash_password,
};
use modshelf_auth_types::token::validate_token;

use crate::helpers::{MockUserRepo, TEST_JWT_SECRET, new_store, test_user};

fn register_input(username: &str) -> RegisterInput {
    RegisterInput {
        username: username.to_owned(),
        email: format!("{username}@example.com"),
        password: "hunter2hunter2".to_owned(),
    }
}

// ── Register ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_register_and_issue_validating_token() {
    let store = new_store();
    let usecase = RegisterUseCase {
        users: MockUserRepo {
            store: store.clone(),
        },
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    };

    let output = usecase.execute(register_input("alice")).await.unwrap();

    assert_eq!(output.user.username, "alice");
    assert_eq!(output.user.email, "alice@example.com");
    // The stored credential is a PHC string, never the raw password.
    assert_ne!(output.user.password_hash, "hunter2hunter2");

    let info = validate_token(&output.token, TEST_JWT_SECRET).unwrap();
    assert_eq!(info.user_id, output.user.id);
    assert_eq!(info.exp, output.token_exp);

    assert_eq!(store.lock().unwrap().users.len(), 1);
}

#[tokio::test]
async fn should_reject_duplicate_email_on_register() {
    let store = new_store();
    store.lock().unwrap().users.push(test_user("alice"));

    let usecase = RegisterUseCase {
        users: MockUserRepo {
            store: store.clone(),
        },
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    };

    let mut input = register_input("other");
    input.email = "alice@example.com".to_owned();
    let result = usecase.execute(input).await;

    assert!(
        matches!(result, Err(ApiError::UserAlreadyExists)),
        "expected UserAlreadyExists, got {result:?}"
    );
    assert_eq!(store.lock().unwrap().users.len(), 1);
}

#[tokio::test]
async fn should_reject_duplicate_username_on_register() {
    let store = new_store();
    store.lock().unwrap().users.push(test_user("alice"));

    let usecase = RegisterUseCase {
        users: MockUserRepo {
            store: store.clone(),
        },
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    };

    let result = usecase.execute(register_input("alice")).await;

    assert!(
        matches!(result, Err(ApiError::UserAlreadyExists)),
        "expected UserAlreadyExists, got {result:?}"
    );
}

#[tokio::test]
async fn should_reject_blank_register_fields() {
    let store = new_store();
    let usecase = RegisterUseCase {
        users: MockUserRepo { store },
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    };

    let mut input = register_input("alice");
    input.username = "   ".to_owned();
    let result = usecase.execute(input).await;

    assert!(
        matches!(result, Err(ApiError::MissingData)),
        "expected MissingData, got {result:?}"
    );
}

// ── Login ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_login_with_correct_password() {
    let store = new_store();
    let mut user = test_user("alice");
    user.password_hash = hash_password("hunter2hunter2").unwrap();
    let user_id = user.id;
    store.lock().unwrap().users.push(user);

    let usecase = LoginUseCase {
        users: MockUserRepo { store },
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    };

    let output = usecase
        .execute(LoginInput {
            email: "alice@example.com".to_owned(),
            password: "hunter2hunter2".to_owned(),
        })
        .await
        .unwrap();

    assert_eq!(output.user.id, user_id);
    let info = validate_token(&output.token, TEST_JWT_SECRET).unwrap();
    assert_eq!(info.user_id, user_id);
}

#[tokio::test]
async fn should_reject_wrong_password_and_unknown_email_identically() {
    let store = new_store();
    let mut user = test_user("alice");
    user.password_hash = hash_password("hunter2hunter2").unwrap();
    store.lock().unwrap().users.push(user);

    let usecase = LoginUseCase {
        users: MockUserRepo { store },
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    };

    let wrong_password = usecase
        .execute(LoginInput {
            email: "alice@example.com".to_owned(),
            password: "wrong".to_owned(),
        })
        .await;
    let unknown_email = usecase
        .execute(LoginInput {
            email: "nobody@example.com".to_owned(),
            password: "hunter2hunter2".to_owned(),
        })
        .await;

    assert!(matches!(wrong_password, Err(ApiError::InvalidCredentials)));
    assert!(matches!(unknown_email, Err(ApiError::InvalidCredentials)));
}

// ── Profile ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_fetch_profile_for_known_user() {
    let store = new_store();
    let user = test_user("alice");
    let user_id = user.id;
    store.lock().unwrap().users.push(user);

    let usecase = GetProfileUseCase {
        users: MockUserRepo { store },
    };

    let profile = usecase.execute(user_id).await.unwrap();
    assert_eq!(profile.username, "alice");
}

#[tokio::test]
async fn should_return_not_found_for_unknown_profile() {
    let store = new_store();
    let usecase = GetProfileUseCase {
        users: MockUserRepo { store },
    };

    let result = usecase.execute(uuid::Uuid::now_v7()).await;
    assert!(
        matches!(result, Err(ApiError::UserNotFound)),
        "expected UserNotFound, got {result:?}"
    );
}
