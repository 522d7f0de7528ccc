use serde::{Deserialize, Serialize};

/// Owner sub-record embedded in a shop row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShopOwner {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// Shop record as returned by the shop endpoints.
///
/// The shop-admins view is the same record restricted server-side to
/// `approved == true`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shop {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub approved: bool,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub owner: Option<ShopOwner>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Payload of `POST /shop` (create a shop together with its owner account).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewShop {
    pub name: String,
    pub description: String,
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
}
