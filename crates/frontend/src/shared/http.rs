//! HTTP plumbing shared by every backend client module.
//!
//! All list fetchers funnel through [`get_page`], which normalizes failures
//! to the uniform [`PageResult`] shape so pages never have to catch anything.

use contracts::shared::page::Page;
use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use std::fmt;

use crate::system::auth::session::Session;

/// Error taxonomy for backend calls.
///
/// `Unauthenticated` is raised before any network activity. `Fetch` covers
/// failed reads, `Mutation` failed writes/deletes/approvals. All three are
/// handled at the component boundary (inline message or toast) and are never
/// fatal to a page. No retries anywhere; the user retries through the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    Unauthenticated,
    Fetch(String),
    Mutation(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Unauthenticated => write!(f, "Not authenticated"),
            ApiError::Fetch(msg) => write!(f, "{}", msg),
            ApiError::Mutation(msg) => write!(f, "{}", msg),
        }
    }
}

/// Get the base URL for API requests
///
/// Constructs the base URL from the current window location, using port 4000
/// for the backend server. Returns an empty string if window is not available.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:4000", protocol, hostname)
}

/// Build a full API URL from a path (path starts with "/", e.g. "/users").
pub fn api_url(path: &str) -> String {
    format!("{}/api/v1{}", api_base(), path)
}

/// Query string of a paged list request.
///
/// Zero-based page index, explicit page size, free-text search (may be
/// empty). The parameters are passed straight through to the server; the
/// client never re-paginates locally.
pub fn paged_query(page: usize, limit: usize, search: &str) -> String {
    format!(
        "page={}&limit={}&search={}",
        page,
        limit,
        urlencoding::encode(search)
    )
}

/// Uniform result of every list fetcher: either one page of rows plus the
/// server-reported total, or `data: None` with a human-readable message.
#[derive(Debug, Clone)]
pub struct PageResult<T> {
    pub data: Option<Vec<T>>,
    pub total: usize,
    pub error: Option<String>,
}

impl<T> PageResult<T> {
    pub fn ok(page: Page<T>) -> Self {
        Self {
            data: Some(page.data),
            total: page.total,
            error: None,
        }
    }

    /// Normalize a failure to an empty result plus message. `what` names the
    /// entity kind for the user-facing text ("customers", "shops", ...).
    pub fn failed(error: &ApiError, what: &str) -> Self {
        let message = match error {
            ApiError::Unauthenticated => "Not authenticated".to_string(),
            _ => format!("Failed to fetch {}", what),
        };
        Self {
            data: None,
            total: 0,
            error: Some(message),
        }
    }
}

/// Authenticated GET returning deserialized JSON.
pub async fn get_json<T>(session: &Session, url: &str) -> Result<T, ApiError>
where
    T: DeserializeOwned,
{
    let auth_header = session.bearer_header()?;

    let response = Request::get(url)
        .header("Authorization", &auth_header)
        .send()
        .await
        .map_err(|e| ApiError::Fetch(format!("Failed to send request: {}", e)))?;

    if !response.ok() {
        return Err(ApiError::Fetch(format!(
            "Request failed: {}",
            response.status()
        )));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Fetch(format!("Failed to parse response: {}", e)))
}

/// Authenticated GET of one page of a server-paginated list.
pub async fn get_page<T>(
    session: &Session,
    path: &str,
    page: usize,
    limit: usize,
    search: &str,
) -> Result<Page<T>, ApiError>
where
    T: DeserializeOwned,
{
    let url = format!("{}?{}", api_url(path), paged_query(page, limit, search));
    get_json(session, &url).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paged_query_encodes_search() {
        assert_eq!(paged_query(0, 5, ""), "page=0&limit=5&search=");
        assert_eq!(paged_query(2, 25, "john"), "page=2&limit=25&search=john");
        assert_eq!(
            paged_query(1, 10, "fresh fruit & veg"),
            "page=1&limit=10&search=fresh%20fruit%20%26%20veg"
        );
    }

    #[test]
    fn failed_result_is_empty_with_message() {
        let result: PageResult<String> =
            PageResult::failed(&ApiError::Fetch("boom".into()), "customers");
        assert!(result.data.is_none());
        assert_eq!(result.total, 0);
        assert_eq!(result.error.as_deref(), Some("Failed to fetch customers"));
    }

    #[test]
    fn unauthenticated_result_names_the_cause() {
        let result: PageResult<String> =
            PageResult::failed(&ApiError::Unauthenticated, "shops");
        assert!(result.data.is_none());
        assert_eq!(result.error.as_deref(), Some("Not authenticated"));
    }

    #[test]
    fn api_error_display() {
        assert_eq!(ApiError::Unauthenticated.to_string(), "Not authenticated");
        assert_eq!(ApiError::Mutation("nope".into()).to_string(), "nope");
    }
}
