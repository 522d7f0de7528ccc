use crate::system::auth::session::Session;

/// Public storefront that shop admins sign into.
pub const STOREFRONT_URL: &str = "https://shop.bellybasketstore.com";

/// Build the storefront handoff URL. With a token the admin lands already
/// signed in, without one they get the plain storefront login screen.
pub fn storefront_login_url(token: Option<&str>) -> String {
    match token {
        Some(token) if !token.is_empty() => {
            format!("{}?token={}", STOREFRONT_URL, urlencoding::encode(token))
        }
        _ => STOREFRONT_URL.to_string(),
    }
}

/// Open the storefront in a new tab, carrying the current session token.
pub fn open_storefront(session: &Session) {
    let url = storefront_login_url(session.token());
    if let Some(window) = web_sys::window() {
        let _ = window.open_with_url_and_target_and_features(&url, "_blank", "noopener,noreferrer");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_url_carries_encoded_token() {
        let url = storefront_login_url(Some("abc+def/123"));
        assert_eq!(
            url,
            "https://shop.bellybasketstore.com?token=abc%2Bdef%2F123"
        );
    }

    #[test]
    fn login_url_without_token_is_plain() {
        assert_eq!(
            storefront_login_url(None),
            "https://shop.bellybasketstore.com"
        );
        assert_eq!(
            storefront_login_url(Some("")),
            "https://shop.bellybasketstore.com"
        );
    }
}
