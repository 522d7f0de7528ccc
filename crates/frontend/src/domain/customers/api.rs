use contracts::domain::customer::Customer;
use gloo_net::http::Request;

use crate::shared::http::{api_url, get_page, ApiError, PageResult};
use crate::system::auth::session::Session;

/// Fetch one page of customers (`GET /users?page&limit&search`).
///
/// Always returns the uniform [`PageResult`] shape: a missing credential or
/// a failed request becomes an empty result plus message, never a panic or
/// propagated error.
pub async fn fetch_customers(
    session: &Session,
    page: usize,
    limit: usize,
    search: &str,
) -> PageResult<Customer> {
    match get_page::<Customer>(session, "/users", page, limit, search).await {
        Ok(page) => PageResult::ok(page),
        Err(err) => {
            log::warn!("customer list fetch failed: {}", err);
            PageResult::failed(&err, "customers")
        }
    }
}

/// Delete one customer account (`DELETE /users/{id}`).
pub async fn delete_customer(session: &Session, id: &str) -> Result<(), ApiError> {
    let auth_header = session.bearer_header()?;

    let response = Request::delete(&api_url(&format!("/users/{}", id)))
        .header("Authorization", &auth_header)
        .send()
        .await
        .map_err(|e| ApiError::Mutation(format!("Failed to send request: {}", e)))?;

    if !response.ok() {
        return Err(ApiError::Mutation(format!(
            "Failed to delete user: {}",
            response.status()
        )));
    }

    Ok(())
}

/// Grant dashboard admin rights (`PUT /users/{id}/make-admin`).
pub async fn grant_admin(session: &Session, id: &str) -> Result<(), ApiError> {
    let auth_header = session.bearer_header()?;

    let response = Request::put(&api_url(&format!("/users/{}/make-admin", id)))
        .header("Authorization", &auth_header)
        .json(&serde_json::json!({ "userId": id }))
        .map_err(|e| ApiError::Mutation(format!("Failed to serialize request: {}", e)))?
        .send()
        .await
        .map_err(|e| ApiError::Mutation(format!("Failed to send request: {}", e)))?;

    if !response.ok() {
        return Err(ApiError::Mutation(format!(
            "Failed to grant admin access: {}",
            response.status()
        )));
    }

    Ok(())
}
