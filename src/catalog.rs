//! Typed access to the bot's three durable collections.
//!
//! Mutations are read-modify-write cycles over whole collections; the
//! internal mutex serializes them so concurrent admin edits cannot lose
//! writes. Plain reads go straight to the store.

use std::sync::Arc;

use anyhow::{Context, Result};
use serde_json::json;
use tokio::sync::Mutex;
use tracing::info;

use crate::storage::{DocumentStore, ADDRESSES, ADMINS, PRODUCTS};

/// Upper bound on stored complexes. A selection keyboard longer than this is
/// unusable in a chat anyway.
pub const MAX_ADDRESSES: usize = 100;

/// Listing text served until an admin publishes a real one.
pub const DEFAULT_PRODUCTS: &str =
    "The product list is empty. An administrator has to publish one.";

/// Result of an address insert attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    Duplicate,
    CapReached,
}

/// Result of an address removal attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    Removed,
    NotFound,
}

/// Shared handle to the durable collections.
#[derive(Clone)]
pub struct Catalog {
    store: Arc<dyn DocumentStore>,
    write_lock: Arc<Mutex<()>>,
}

impl Catalog {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            store,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Writes first-run defaults and makes sure the configured default admin
    /// is present. Safe to call on every startup.
    pub async fn seed(&self, default_admin: Option<&str>) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        if self.store.read(ADDRESSES)?.is_none() {
            self.store.write(ADDRESSES, &json!([]))?;
        }
        if self.store.read(PRODUCTS)?.is_none() {
            self.store.write(PRODUCTS, &json!(DEFAULT_PRODUCTS))?;
        }
        match default_admin {
            Some(admin) => {
                let mut admins = self.admins()?;
                if !admins.iter().any(|a| a == admin) {
                    admins.push(admin.to_string());
                    self.store.write(ADMINS, &serde_json::to_value(&admins)?)?;
                    info!(admin, "seeded default administrator");
                }
            }
            None => {
                if self.store.read(ADMINS)?.is_none() {
                    self.store.write(ADMINS, &json!([]))?;
                }
            }
        }
        Ok(())
    }

    /// Current complex list, in insertion order.
    pub fn addresses(&self) -> Result<Vec<String>> {
        read_list(self.store.as_ref(), ADDRESSES)
    }

    /// Appends a complex unless it already exists or the cap is hit.
    pub async fn add_address(&self, name: &str) -> Result<AddOutcome> {
        let _guard = self.write_lock.lock().await;
        let mut addresses = self.addresses()?;
        if addresses.len() >= MAX_ADDRESSES {
            return Ok(AddOutcome::CapReached);
        }
        if addresses.iter().any(|a| a == name) {
            return Ok(AddOutcome::Duplicate);
        }
        addresses.push(name.to_string());
        self.store
            .write(ADDRESSES, &serde_json::to_value(&addresses)?)?;
        info!(complex = name, total = addresses.len(), "complex added");
        Ok(AddOutcome::Added)
    }

    /// Removes a complex, reporting whether it was present.
    pub async fn remove_address(&self, name: &str) -> Result<RemoveOutcome> {
        let _guard = self.write_lock.lock().await;
        let mut addresses = self.addresses()?;
        let before = addresses.len();
        addresses.retain(|a| a != name);
        if addresses.len() == before {
            return Ok(RemoveOutcome::NotFound);
        }
        self.store
            .write(ADDRESSES, &serde_json::to_value(&addresses)?)?;
        info!(complex = name, total = addresses.len(), "complex removed");
        Ok(RemoveOutcome::Removed)
    }

    /// The shared product listing, or the placeholder when none is stored.
    pub fn products(&self) -> Result<String> {
        match self.store.read(PRODUCTS)? {
            Some(value) => {
                serde_json::from_value(value).context("products collection is not a string")
            }
            None => Ok(DEFAULT_PRODUCTS.to_string()),
        }
    }

    /// Replaces the product listing wholesale.
    pub async fn set_products(&self, listing: &str) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        self.store.write(PRODUCTS, &json!(listing))?;
        info!(chars = listing.len(), "product listing replaced");
        Ok(())
    }

    /// String user ids allowed into the admin panel.
    pub fn admins(&self) -> Result<Vec<String>> {
        read_list(self.store.as_ref(), ADMINS)
    }
}

fn read_list(store: &dyn DocumentStore, collection: &str) -> Result<Vec<String>> {
    match store.read(collection)? {
        Some(value) => serde_json::from_value(value)
            .with_context(|| format!("collection '{collection}' is not a list of strings")),
        None => Ok(Vec::new()),
    }
}
