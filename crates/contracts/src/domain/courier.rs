use serde::{Deserialize, Serialize};

/// Delivery person record as returned by `GET /users/deliverymans`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Courier {
    #[serde(rename = "_id")]
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    /// "active" / "inactive"; anything else renders as active.
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    /// Server-side path of the uploaded delivery license file, if any.
    /// The file itself is fetched through `GET /users/delivery-license/{name}`.
    #[serde(default, rename = "DeliveryLicense")]
    pub delivery_license: Option<String>,
    /// Shop the courier is assigned to, if any.
    #[serde(default)]
    pub shop_name: Option<String>,
}

impl Courier {
    pub fn is_inactive(&self) -> bool {
        self.status.as_deref() == Some("inactive")
    }

    /// File name portion of the license path, used in the download URL.
    /// Owned so row handlers can capture it without borrowing the record.
    pub fn license_file_name(&self) -> Option<String> {
        self.delivery_license
            .as_deref()
            .and_then(|path| path.rsplit('/').next())
            .filter(|name| !name.is_empty())
            .map(str::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn courier(license: Option<&str>) -> Courier {
        Courier {
            id: "c1".into(),
            first_name: "Jo".into(),
            last_name: "Doe".into(),
            email: "jo@example.com".into(),
            phone_number: None,
            avatar: None,
            status: None,
            created_at: None,
            delivery_license: license.map(str::to_string),
            shop_name: None,
        }
    }

    #[test]
    fn license_file_name_takes_last_path_segment() {
        let c = courier(Some("uploads/licenses/abc123.pdf"));
        assert_eq!(c.license_file_name(), Some("abc123.pdf".to_string()));
    }

    #[test]
    fn license_file_name_is_owned_and_static() {
        let name = courier(Some("x.png")).license_file_name();
        // The record is gone here; the name must stand on its own.
        let held: Option<String> = name;
        assert_eq!(held.as_deref(), Some("x.png"));
    }

    #[test]
    fn missing_or_empty_license_yields_none() {
        assert_eq!(courier(None).license_file_name(), None);
        assert_eq!(courier(Some("uploads/")).license_file_name(), None);
    }
}
