//! Store traits and their SQLite queries (Data Access Objects).
//!
//! This module centralizes all direct database operations behind two traits,
//! [`CredentialStore`] for accounts and [`DocumentStore`] for the travel record
//! collections, so services and handlers never see SQL and tests can swap in
//! [`MemoryStore`](super::MemoryStore).

use async_trait::async_trait;
use chrono::Utc;
use serde_json::Value;
use uuid::Uuid;

use super::models::{Account, Collection, Document, NewAccount};
use super::Database;
use crate::errors::StoreError;

/// Persistence for accounts, keyed by unique email.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    async fn find_account_by_email(&self, email: &str) -> Result<Option<Account>, StoreError>;

    async fn find_account_by_id(&self, id: &str) -> Result<Option<Account>, StoreError>;

    /// Inserts an account, assigning its id. An existing email yields
    /// [`StoreError::DuplicateKey`].
    async fn insert_account(&self, account: NewAccount) -> Result<Account, StoreError>;
}

/// Collection-scoped document persistence.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Stores `body` and returns the assigned id.
    async fn insert_document(&self, collection: Collection, body: Value)
        -> Result<String, StoreError>;

    /// Returns every document in `collection`, oldest first.
    async fn find_documents(&self, collection: Collection) -> Result<Vec<Document>, StoreError>;
}

fn map_unique_violation(err: sqlx::Error, key: &str) -> StoreError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_unique_violation() {
            return StoreError::DuplicateKey(key.to_string());
        }
    }
    StoreError::Database(err)
}

#[async_trait]
impl CredentialStore for Database {
    async fn find_account_by_email(&self, email: &str) -> Result<Option<Account>, StoreError> {
        self.bounded(async {
            let account = sqlx::query_as::<_, Account>(
                "SELECT id, username, email, password_hash FROM accounts WHERE email = ?",
            )
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;
            Ok(account)
        })
        .await
    }

    async fn find_account_by_id(&self, id: &str) -> Result<Option<Account>, StoreError> {
        self.bounded(async {
            let account = sqlx::query_as::<_, Account>(
                "SELECT id, username, email, password_hash FROM accounts WHERE id = ?",
            )
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
            Ok(account)
        })
        .await
    }

    async fn insert_account(&self, account: NewAccount) -> Result<Account, StoreError> {
        let id = Uuid::new_v4().to_string();

        self.bounded(async {
            sqlx::query(
                r#"
                INSERT INTO accounts (id, username, email, password_hash, created_at)
                VALUES (?, ?, ?, ?, ?)
                "#,
            )
            .bind(&id)
            .bind(&account.username)
            .bind(&account.email)
            .bind(&account.password_hash)
            .bind(Utc::now().to_rfc3339())
            .execute(&self.pool)
            .await
            .map_err(|err| map_unique_violation(err, "email"))?;
            Ok(())
        })
        .await?;

        Ok(Account {
            id,
            username: account.username,
            email: account.email,
            password_hash: account.password_hash,
        })
    }
}

#[async_trait]
impl DocumentStore for Database {
    async fn insert_document(
        &self,
        collection: Collection,
        body: Value,
    ) -> Result<String, StoreError> {
        let id = Uuid::new_v4().to_string();
        let encoded = serde_json::to_string(&body)?;

        self.bounded(async {
            sqlx::query(
                "INSERT INTO documents (id, collection, body, created_at) VALUES (?, ?, ?, ?)",
            )
            .bind(&id)
            .bind(collection.as_str())
            .bind(&encoded)
            .bind(Utc::now().to_rfc3339())
            .execute(&self.pool)
            .await?;
            Ok(())
        })
        .await?;

        Ok(id)
    }

    async fn find_documents(&self, collection: Collection) -> Result<Vec<Document>, StoreError> {
        let rows: Vec<(String, String)> = self
            .bounded(async {
                let rows = sqlx::query_as::<_, (String, String)>(
                    "SELECT id, body FROM documents WHERE collection = ? ORDER BY rowid",
                )
                .bind(collection.as_str())
                .fetch_all(&self.pool)
                .await?;
                Ok(rows)
            })
            .await?;

        rows.into_iter()
            .map(|(id, body)| {
                Ok(Document {
                    id,
                    body: serde_json::from_str(&body)?,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::time::Duration;

    async fn test_db() -> Database {
        Database::connect("sqlite::memory:", Duration::from_secs(5))
            .await
            .unwrap()
    }

    fn new_account(email: &str) -> NewAccount {
        NewAccount {
            username: "traveller".into(),
            email: email.into(),
            password_hash: "$2b$04$notarealhash".into(),
        }
    }

    #[tokio::test]
    async fn insert_then_find_by_email_and_id() {
        let db = test_db().await;
        let created = db.insert_account(new_account("a@x.com")).await.unwrap();
        assert!(!created.id.is_empty());

        let by_email = db.find_account_by_email("a@x.com").await.unwrap().unwrap();
        assert_eq!(by_email, created);

        let by_id = db.find_account_by_id(&created.id).await.unwrap().unwrap();
        assert_eq!(by_id.email, "a@x.com");
    }

    #[tokio::test]
    async fn unknown_email_is_none() {
        let db = test_db().await;
        assert!(db.find_account_by_email("nobody@x.com").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn duplicate_email_maps_to_duplicate_key() {
        let db = test_db().await;
        db.insert_account(new_account("a@x.com")).await.unwrap();
        let err = db.insert_account(new_account("a@x.com")).await.unwrap_err();
        assert!(matches!(err, StoreError::DuplicateKey(key) if key == "email"));
    }

    #[tokio::test]
    async fn documents_are_scoped_and_ordered() {
        let db = test_db().await;
        let first = db
            .insert_document(Collection::Plans, json!({ "source": "A", "destination": "B", "date": "2025-01-01" }))
            .await
            .unwrap();
        let second = db
            .insert_document(Collection::Plans, json!({ "source": "B", "destination": "C", "date": "2025-01-02" }))
            .await
            .unwrap();
        db.insert_document(Collection::Feedbacks, json!({ "place": "X", "feedback": "nice" }))
            .await
            .unwrap();

        let plans = db.find_documents(Collection::Plans).await.unwrap();
        let ids: Vec<_> = plans.iter().map(|d| d.id.clone()).collect();
        assert_eq!(ids, vec![first, second]);
        assert_eq!(plans[0].body["source"], "A");
        assert!(db.find_documents(Collection::Budgets).await.unwrap().is_empty());
    }
}
