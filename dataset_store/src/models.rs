//! Data shapes persisted in the backing JSON file.
//!
//! These structs are the boundary contract for the store: anything that does
//! not deserialize into [`Dataset`] is treated as corrupt, distinct from
//! business-logic errors further up the pipeline.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A marketplace account as stored in the dataset.
///
/// Created and mutated by out-of-scope account-management flows; the
/// resolution pipeline only reads these records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique key across `Dataset::users`.
    pub user_id: i64,
    /// Display name used when building prompt context.
    pub name: String,
    /// Ids of tickets currently held by the user.
    #[serde(default)]
    pub tickets: Vec<i64>,
    /// Account balance in the marketplace currency.
    #[serde(default)]
    pub balance: f64,
}

/// The static policy document consulted for every question.
///
/// Singleton within the dataset; read-only here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Policy {
    pub ticket_rules: Vec<String>,
    pub refund_policy: Vec<String>,
    pub escrow_rules: Vec<String>,
    pub account_help: Vec<String>,
    /// Named UI form descriptors; shape is owned by the frontend.
    #[serde(default)]
    pub visual_forms: serde_json::Map<String, Value>,
}

impl fmt::Display for Policy {
    /// Compact JSON rendering, used as the textual form in prompt context.
    ///
    /// Field order follows the struct declaration, so the output is stable
    /// for identical documents.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}

/// Root container of the backing file: all users plus the policy document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dataset {
    pub users: Vec<User>,
    pub policies: Policy,
}

impl Dataset {
    /// Find a user by id with a linear scan, first match wins.
    ///
    /// The dataset is small by assumption; no index is kept.
    pub fn find_user(&self, user_id: i64) -> Option<&User> {
        self.users.iter().find(|u| u.user_id == user_id)
    }
}
