//! In-process store implementation.
//!
//! [`MemoryStore`] implements both [`CredentialStore`] and [`DocumentStore`]
//! on top of [`parking_lot::RwLock`]-guarded maps. It is used by the test
//! suites and when the service runs with `DATABASE_URL=memory`. Data is lost
//! when the process exits.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;
use serde_json::Value;
use uuid::Uuid;

use super::models::{Account, Collection, Document, NewAccount};
use super::queries::{CredentialStore, DocumentStore};
use crate::errors::StoreError;

#[derive(Default)]
struct Accounts {
    by_id: HashMap<String, Account>,
    /// email -> id; the unique index.
    by_email: HashMap<String, String>,
}

#[derive(Default)]
pub struct MemoryStore {
    accounts: RwLock<Accounts>,
    documents: RwLock<HashMap<Collection, Vec<Document>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn account_count(&self) -> usize {
        self.accounts.read().by_id.len()
    }
}

#[async_trait]
impl CredentialStore for MemoryStore {
    async fn find_account_by_email(&self, email: &str) -> Result<Option<Account>, StoreError> {
        let accounts = self.accounts.read();
        Ok(accounts
            .by_email
            .get(email)
            .and_then(|id| accounts.by_id.get(id))
            .cloned())
    }

    async fn find_account_by_id(&self, id: &str) -> Result<Option<Account>, StoreError> {
        Ok(self.accounts.read().by_id.get(id).cloned())
    }

    async fn insert_account(&self, account: NewAccount) -> Result<Account, StoreError> {
        let mut accounts = self.accounts.write();
        if accounts.by_email.contains_key(&account.email) {
            return Err(StoreError::DuplicateKey("email".to_string()));
        }

        let account = Account {
            id: Uuid::new_v4().to_string(),
            username: account.username,
            email: account.email,
            password_hash: account.password_hash,
        };
        accounts
            .by_email
            .insert(account.email.clone(), account.id.clone());
        accounts.by_id.insert(account.id.clone(), account.clone());
        Ok(account)
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn insert_document(
        &self,
        collection: Collection,
        body: Value,
    ) -> Result<String, StoreError> {
        let id = Uuid::new_v4().to_string();
        self.documents
            .write()
            .entry(collection)
            .or_default()
            .push(Document {
                id: id.clone(),
                body,
            });
        Ok(id)
    }

    async fn find_documents(&self, collection: Collection) -> Result<Vec<Document>, StoreError> {
        Ok(self
            .documents
            .read()
            .get(&collection)
            .cloned()
            .unwrap_or_default())
    }
}
