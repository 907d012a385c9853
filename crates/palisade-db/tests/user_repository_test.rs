//! Integration tests for the User repository using in-memory
//! SurrealDB.

use palisade_core::error::PalisadeError;
use palisade_core::models::tenant::CreateTenant;
use palisade_core::models::user::{CreateUser, Role, UpdateUser};
use palisade_core::repository::{Pagination, TenantRepository, UserRepository};
use palisade_db::repository::{SurrealTenantRepository, SurrealUserRepository};
use surrealdb::Surreal;
use surrealdb::engine::local::Mem;
use uuid::Uuid;

/// Helper: spin up in-memory DB, run migrations, create one tenant.
async fn setup() -> (Surreal<surrealdb::engine::local::Db>, Uuid) {
    let db = Surreal::new::<Mem>(()).await.unwrap();
    db.use_ns("test").use_db("test").await.unwrap();
    palisade_db::run_migrations(&db).await.unwrap();

    let tenant_repo = SurrealTenantRepository::new(db.clone());
    let tenant = tenant_repo
        .create(CreateTenant {
            name: "tenant-a".into(),
        })
        .await
        .unwrap();

    (db, tenant.id)
}

fn new_user(tenant_id: Uuid, name: &str, email: &str) -> CreateUser {
    CreateUser {
        tenant_id,
        name: Some(name.into()),
        email: email.into(),
        password: "correct-horse-battery".into(),
    }
}

#[tokio::test]
async fn create_and_get_user() {
    let (db, tenant_id) = setup().await;
    let repo = SurrealUserRepository::new(db);

    let user = repo
        .create(new_user(tenant_id, "alice", "alice@example.com"))
        .await
        .unwrap();

    assert_eq!(user.tenant_id, tenant_id);
    assert_eq!(user.name.as_deref(), Some("alice"));
    assert_eq!(user.email, "alice@example.com");
    assert!(user.is_active);

    // Password must be stored hashed, never in plaintext.
    assert_ne!(user.password_hash, "correct-horse-battery");
    assert!(user.password_hash.starts_with("$argon2id$"));

    let fetched = repo.get_by_id(tenant_id, user.id).await.unwrap();
    assert_eq!(fetched.id, user.id);
    assert_eq!(fetched.email, "alice@example.com");
}

#[tokio::test]
async fn first_user_is_admin_superuser_later_users_are_not() {
    let (db, tenant_id) = setup().await;
    let repo = SurrealUserRepository::new(db);

    let first = repo
        .create(new_user(tenant_id, "alice", "alice@example.com"))
        .await
        .unwrap();
    assert_eq!(first.role, Role::Admin);
    assert!(first.is_superuser);

    let second = repo
        .create(new_user(tenant_id, "bob", "bob@example.com"))
        .await
        .unwrap();
    assert_eq!(second.role, Role::User);
    assert!(!second.is_superuser);
}

#[tokio::test]
async fn duplicate_email_is_conflict_even_across_tenants() {
    let (db, tenant_a) = setup().await;
    let tenant_repo = SurrealTenantRepository::new(db.clone());
    let tenant_b = tenant_repo
        .create(CreateTenant {
            name: "tenant-b".into(),
        })
        .await
        .unwrap();

    let repo = SurrealUserRepository::new(db);
    repo.create(new_user(tenant_a, "alice", "alice@example.com"))
        .await
        .unwrap();

    // Same tenant.
    let same = repo
        .create(new_user(tenant_a, "alice2", "alice@example.com"))
        .await;
    assert!(matches!(same, Err(PalisadeError::Conflict { .. })));

    // Email uniqueness is global, not per tenant.
    let other = repo
        .create(new_user(tenant_b.id, "alice3", "alice@example.com"))
        .await;
    assert!(matches!(other, Err(PalisadeError::Conflict { .. })));
}

#[tokio::test]
async fn tenant_isolation_on_get_list_update_delete() {
    let (db, tenant_a) = setup().await;
    let tenant_repo = SurrealTenantRepository::new(db.clone());
    let tenant_b = tenant_repo
        .create(CreateTenant {
            name: "tenant-b".into(),
        })
        .await
        .unwrap();

    let repo = SurrealUserRepository::new(db);
    repo.create(new_user(tenant_a, "alice", "alice@a.test"))
        .await
        .unwrap();
    let bob = repo
        .create(new_user(tenant_b.id, "bob", "bob@b.test"))
        .await
        .unwrap();

    // Direct fetch of a row in another tenant is NotFound, not
    // Forbidden: existence must not leak.
    let cross_get = repo.get_by_id(tenant_a, bob.id).await;
    assert!(matches!(cross_get, Err(PalisadeError::NotFound { .. })));

    // Lists only ever contain the scope tenant's rows.
    let page_a = repo.list(tenant_a, Pagination::default()).await.unwrap();
    assert_eq!(page_a.total, 1);
    assert_eq!(page_a.items[0].email, "alice@a.test");

    let page_b = repo
        .list(tenant_b.id, Pagination::default())
        .await
        .unwrap();
    assert_eq!(page_b.total, 1);
    assert_eq!(page_b.items[0].email, "bob@b.test");

    // Cross-tenant update and delete are NotFound too.
    let cross_update = repo
        .update(
            tenant_a,
            bob.id,
            UpdateUser {
                name: Some("mallory".into()),
                ..Default::default()
            },
        )
        .await;
    assert!(matches!(cross_update, Err(PalisadeError::NotFound { .. })));

    let cross_delete = repo.delete(tenant_a, bob.id).await;
    assert!(matches!(cross_delete, Err(PalisadeError::NotFound { .. })));

    // Bob is untouched.
    let bob_after = repo.get_by_id(tenant_b.id, bob.id).await.unwrap();
    assert_eq!(bob_after.name.as_deref(), Some("bob"));
}

#[tokio::test]
async fn get_by_email_is_global() {
    let (db, tenant_id) = setup().await;
    let repo = SurrealUserRepository::new(db);

    let created = repo
        .create(new_user(tenant_id, "alice", "alice@example.com"))
        .await
        .unwrap();

    let found = repo.get_by_email("alice@example.com").await.unwrap();
    assert_eq!(found.id, created.id);

    let missing = repo.get_by_email("nobody@example.com").await;
    assert!(matches!(missing, Err(PalisadeError::NotFound { .. })));
}

#[tokio::test]
async fn update_is_merge_patch_and_rehashes_passwords() {
    let (db, tenant_id) = setup().await;
    let repo = SurrealUserRepository::new(db);

    let user = repo
        .create(new_user(tenant_id, "alice", "alice@example.com"))
        .await
        .unwrap();
    let original_hash = user.password_hash.clone();

    // Patch only the email; every other field stays put.
    let updated = repo
        .update(
            tenant_id,
            user.id,
            UpdateUser {
                email: Some("alice@renamed.test".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.email, "alice@renamed.test");
    assert_eq!(updated.name.as_deref(), Some("alice"));
    assert_eq!(updated.password_hash, original_hash);
    assert!(updated.is_active);

    // Patching the password stores a fresh hash that verifies.
    let repassworded = repo
        .update(
            tenant_id,
            user.id,
            UpdateUser {
                password: Some("a-brand-new-password".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_ne!(repassworded.password_hash, original_hash);
    assert!(repassworded.password_hash.starts_with("$argon2id$"));
    assert!(palisade_auth::password::verify_password(
        "a-brand-new-password",
        &repassworded.password_hash
    ));
    assert!(!palisade_auth::password::verify_password(
        "correct-horse-battery",
        &repassworded.password_hash
    ));

    // Deactivation via the allow-listed flag.
    let deactivated = repo
        .update(
            tenant_id,
            user.id,
            UpdateUser {
                is_active: Some(false),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert!(!deactivated.is_active);
    assert_eq!(deactivated.email, "alice@renamed.test");
}

#[tokio::test]
async fn delete_is_hard() {
    let (db, tenant_id) = setup().await;
    let repo = SurrealUserRepository::new(db);

    let user = repo
        .create(new_user(tenant_id, "alice", "alice@example.com"))
        .await
        .unwrap();

    repo.delete(tenant_id, user.id).await.unwrap();

    let gone = repo.get_by_id(tenant_id, user.id).await;
    assert!(matches!(gone, Err(PalisadeError::NotFound { .. })));

    // Deleting again is NotFound, same as never-existed.
    let again = repo.delete(tenant_id, user.id).await;
    assert!(matches!(again, Err(PalisadeError::NotFound { .. })));
}

#[tokio::test]
async fn list_paginates_in_creation_order() {
    let (db, tenant_id) = setup().await;
    let repo = SurrealUserRepository::new(db);

    for i in 0..5 {
        repo.create(new_user(
            tenant_id,
            &format!("user{i}"),
            &format!("user{i}@example.com"),
        ))
        .await
        .unwrap();
    }

    let page = repo
        .list(
            tenant_id,
            Pagination {
                offset: 2,
                limit: 2,
            },
        )
        .await
        .unwrap();

    assert_eq!(page.total, 5);
    assert_eq!(page.items.len(), 2);
    assert_eq!(page.items[0].email, "user2@example.com");
    assert_eq!(page.items[1].email, "user3@example.com");
}
