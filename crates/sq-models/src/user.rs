//! User model
//!
//! An identity-service user account.

use serde::{Deserialize, Serialize};

/// A user account
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    /// User id (pagination marker for user listings)
    pub id: String,

    /// Login/display name
    pub name: String,

    /// Contact address, absent for service accounts
    pub email: Option<String>,

    /// Owning identity domain
    pub domain_id: String,

    /// Whether the account can authenticate
    pub enabled: bool,

    pub description: Option<String>,
}
