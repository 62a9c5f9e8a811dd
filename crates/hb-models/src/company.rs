//! Company rows.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A company row as stored in the `companies` table.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Company {
    /// Store-assigned row id
    pub id: i64,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Company display name
    pub name: String,

    /// Public URL of the uploaded logo object
    pub logo_url: String,
}

/// Company columns embedded in job projections (`companies(name,logo_url)`).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CompanyRef {
    pub name: String,
    pub logo_url: String,
}

/// Row payload for inserting a company. The `logo_url` points at an object
/// that must already be stored.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CompanyInsert {
    pub name: String,
    pub logo_url: String,
}
