use serde::{Deserialize, Serialize};

/// Customer record as returned by `GET /users`.
///
/// Treated as an opaque row: the dashboard displays a handful of fields and
/// mutates customers only through the backend, so no validation or
/// transformation happens on this side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    #[serde(rename = "_id")]
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub is_admin: bool,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}
