//! Postgres store tests. These need a reachable `DATABASE_URL`; run them
//! with `cargo test -p serenity-db -- --ignored`.

use serenity_db::{NewPrincipal, PgUserStore, Role, StoreError, UserStore};
use sqlx::PgPool;

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_create_and_find(pool: PgPool) {
    let store = PgUserStore::new(pool);

    let created = store
        .create(NewPrincipal::new("u1", "member@serenity.io").with_name("Member"))
        .await
        .unwrap();
    assert_eq!(created.role, Role::User);

    let found = store.find_by_id("u1").await.unwrap().unwrap();
    assert_eq!(found.email, "member@serenity.io");
    assert_eq!(found.name.as_deref(), Some("Member"));

    assert!(store.find_by_id("missing").await.unwrap().is_none());
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_duplicate_id_is_conflict(pool: PgPool) {
    let store = PgUserStore::new(pool);
    store
        .create(NewPrincipal::new("u1", "first@serenity.io"))
        .await
        .unwrap();

    let result = store
        .create(NewPrincipal::new("u1", "second@serenity.io"))
        .await;
    assert!(matches!(result, Err(StoreError::Conflict(_))));
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_set_role_and_capabilities(pool: PgPool) {
    let store = PgUserStore::new(pool);
    store
        .create(NewPrincipal::new("u1", "member@serenity.io"))
        .await
        .unwrap();

    assert!(!store.is_admin("u1").await.unwrap());

    let updated = store
        .set_role("u1", Role::SuperAdmin)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.role, Role::SuperAdmin);
    assert!(store.is_super_admin("u1").await.unwrap());

    assert!(store.set_role("missing", Role::Admin).await.unwrap().is_none());
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_role_check_constraint(pool: PgPool) {
    let result = sqlx::query("INSERT INTO users (id, email, role) VALUES ('x', 'x@serenity.io', 'owner')")
        .execute(&pool)
        .await;
    assert!(result.is_err());
}
