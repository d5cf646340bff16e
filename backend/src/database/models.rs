//! Rust structs that represent stored records.
//!
//! These models define the structure of data as it is stored in and retrieved
//! from the store. Note that they may differ from the API-specific models:
//! [`Account`] carries the password hash and is never serialized to clients.

use serde::Serialize;
use serde_json::Value;

/// A registered account as held by the credential store.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Account {
    pub id: String,
    pub username: String,
    pub email: String,
    pub password_hash: String,
}

/// Account fields supplied on insert; the store assigns the id.
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub username: String,
    pub email: String,
    pub password_hash: String,
}

/// Named document collections, one per travel record type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Checklists,
    Budgets,
    Feedbacks,
    Plans,
}

impl Collection {
    pub fn as_str(self) -> &'static str {
        match self {
            Collection::Checklists => "checklists",
            Collection::Budgets => "budgets",
            Collection::Feedbacks => "feedbacks",
            Collection::Plans => "plans",
        }
    }
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stored document: the store-assigned id plus the JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: String,
    pub body: Value,
}

impl Document {
    /// Flattens the document into its wire form, with the id under `_id`.
    pub fn into_json(self) -> Value {
        match self.body {
            Value::Object(mut fields) => {
                fields.insert("_id".to_string(), Value::String(self.id));
                Value::Object(fields)
            }
            other => serde_json::json!({ "_id": self.id, "value": other }),
        }
    }
}

/// Public view of an account.
#[derive(Debug, Clone, Serialize)]
pub struct AccountProfile {
    #[serde(rename = "_id")]
    pub id: String,
    pub username: String,
    pub email: String,
}

impl From<Account> for AccountProfile {
    fn from(account: Account) -> Self {
        Self {
            id: account.id,
            username: account.username,
            email: account.email,
        }
    }
}
