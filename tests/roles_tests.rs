use std::sync::Arc;

use anyhow::Result;
use serde_json::json;
use teloxide::types::UserId;

use orderbot::catalog::Catalog;
use orderbot::roles::{resolve_role, UserRole};
use orderbot::storage::{DocumentStore, MemoryStore, ADMINS};

#[tokio::test]
async fn admin_iff_listed() -> Result<()> {
    let catalog = Catalog::new(Arc::new(MemoryStore::new()));
    catalog.seed(Some("42")).await?;

    assert_eq!(resolve_role(&catalog, UserId(42))?, UserRole::Admin);
    assert_eq!(resolve_role(&catalog, UserId(7))?, UserRole::Customer);

    Ok(())
}

#[tokio::test]
async fn allow_list_changes_apply_on_the_next_call() -> Result<()> {
    let store = Arc::new(MemoryStore::new());
    let catalog = Catalog::new(store.clone());
    catalog.seed(None).await?;

    assert_eq!(resolve_role(&catalog, UserId(7))?, UserRole::Customer);

    // Privilege changes must be visible without any restart or cache flush.
    store.write(ADMINS, &json!(["7"]))?;
    assert_eq!(resolve_role(&catalog, UserId(7))?, UserRole::Admin);

    store.write(ADMINS, &json!([]))?;
    assert_eq!(resolve_role(&catalog, UserId(7))?, UserRole::Customer);

    Ok(())
}

#[tokio::test]
async fn matching_is_exact_on_the_string_form() -> Result<()> {
    let store = Arc::new(MemoryStore::new());
    let catalog = Catalog::new(store.clone());

    store.write(ADMINS, &json!([" 42", "042", "42x"]))?;
    assert_eq!(resolve_role(&catalog, UserId(42))?, UserRole::Customer);

    Ok(())
}
