use contracts::domain::shop::{NewShop, Shop};
use contracts::shared::page::Page;
use gloo_net::http::Request;

use crate::shared::http::{api_url, get_json, paged_query, ApiError, PageResult};
use crate::system::auth::session::Session;

/// Fetch one page of shops (`GET /shop?page&limit&search`).
pub async fn fetch_shops(
    session: &Session,
    page: usize,
    limit: usize,
    search: &str,
) -> PageResult<Shop> {
    let url = format!("{}?{}", api_url("/shop"), paged_query(page, limit, search));
    match get_json::<Page<Shop>>(session, &url).await {
        Ok(page) => PageResult::ok(page),
        Err(err) => {
            log::warn!("shop list fetch failed: {}", err);
            PageResult::failed(&err, "shops")
        }
    }
}

/// Fetch one page of approved shops only.
///
/// The `approved=true` predicate is part of the backend query, so the
/// server-reported total matches what the table displays and pagination
/// stays consistent.
pub async fn fetch_approved_shops(
    session: &Session,
    page: usize,
    limit: usize,
    search: &str,
) -> PageResult<Shop> {
    let url = format!(
        "{}?{}&approved=true",
        api_url("/shop"),
        paged_query(page, limit, search)
    );
    match get_json::<Page<Shop>>(session, &url).await {
        Ok(page) => PageResult::ok(page),
        Err(err) => {
            log::warn!("approved shop list fetch failed: {}", err);
            PageResult::failed(&err, "shop admins")
        }
    }
}

/// Create a shop together with its owner account (`POST /shop`).
pub async fn add_shop(session: &Session, shop: &NewShop) -> Result<(), ApiError> {
    let auth_header = session.bearer_header()?;

    let response = Request::post(&api_url("/shop"))
        .header("Authorization", &auth_header)
        .json(shop)
        .map_err(|e| ApiError::Mutation(format!("Failed to serialize request: {}", e)))?
        .send()
        .await
        .map_err(|e| ApiError::Mutation(format!("Failed to send request: {}", e)))?;

    if !response.ok() {
        return Err(ApiError::Mutation(format!(
            "Failed to add shop: {}",
            response.status()
        )));
    }

    Ok(())
}

/// Delete one shop (`DELETE /shop/{id}`).
pub async fn delete_shop(session: &Session, id: &str) -> Result<(), ApiError> {
    let auth_header = session.bearer_header()?;

    let response = Request::delete(&api_url(&format!("/shop/{}", id)))
        .header("Authorization", &auth_header)
        .send()
        .await
        .map_err(|e| ApiError::Mutation(format!("Failed to send request: {}", e)))?;

    if !response.ok() {
        return Err(ApiError::Mutation(format!(
            "Failed to delete shop: {}",
            response.status()
        )));
    }

    Ok(())
}

/// Approve one shop (`PUT /shop/{id}/approve`).
pub async fn approve_shop(session: &Session, id: &str) -> Result<(), ApiError> {
    let auth_header = session.bearer_header()?;

    let response = Request::put(&api_url(&format!("/shop/{}/approve", id)))
        .header("Authorization", &auth_header)
        .send()
        .await
        .map_err(|e| ApiError::Mutation(format!("Failed to send request: {}", e)))?;

    if !response.ok() {
        return Err(ApiError::Mutation(format!(
            "Failed to approve shop: {}",
            response.status()
        )));
    }

    Ok(())
}
