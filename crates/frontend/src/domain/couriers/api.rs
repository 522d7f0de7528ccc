use contracts::domain::courier::Courier;
use gloo_net::http::Request;

use crate::shared::http::{api_url, get_page, ApiError, PageResult};
use crate::system::auth::session::Session;

/// Fetch one page of delivery personnel (`GET /users/deliverymans`).
pub async fn fetch_couriers(
    session: &Session,
    page: usize,
    limit: usize,
    search: &str,
) -> PageResult<Courier> {
    match get_page::<Courier>(session, "/users/deliverymans", page, limit, search).await {
        Ok(page) => PageResult::ok(page),
        Err(err) => {
            log::warn!("courier list fetch failed: {}", err);
            PageResult::failed(&err, "delivery personnel")
        }
    }
}

/// Delete one courier account. Couriers live in the users collection, so
/// this is the same endpoint as customer deletion (`DELETE /users/{id}`).
pub async fn delete_courier(session: &Session, id: &str) -> Result<(), ApiError> {
    let auth_header = session.bearer_header()?;

    let response = Request::delete(&api_url(&format!("/users/{}", id)))
        .header("Authorization", &auth_header)
        .send()
        .await
        .map_err(|e| ApiError::Mutation(format!("Failed to send request: {}", e)))?;

    if !response.ok() {
        return Err(ApiError::Mutation(format!(
            "Failed to delete courier: {}",
            response.status()
        )));
    }

    Ok(())
}

/// Assign a courier to a shop (`PUT /users/{id}/assign-shop`).
pub async fn assign_shop(session: &Session, id: &str, shop_id: &str) -> Result<(), ApiError> {
    let auth_header = session.bearer_header()?;

    let response = Request::put(&api_url(&format!("/users/{}/assign-shop", id)))
        .header("Authorization", &auth_header)
        .json(&serde_json::json!({ "shopId": shop_id }))
        .map_err(|e| ApiError::Mutation(format!("Failed to serialize request: {}", e)))?
        .send()
        .await
        .map_err(|e| ApiError::Mutation(format!("Failed to send request: {}", e)))?;

    if !response.ok() {
        return Err(ApiError::Mutation(format!(
            "Failed to assign shop: {}",
            response.status()
        )));
    }

    Ok(())
}

/// Kind of license document, decided by the response content type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LicenseKind {
    Pdf,
    Image,
}

/// A fetched license file turned into an object URL for inline display.
/// The caller must revoke the URL when the dialog closes.
#[derive(Debug, Clone)]
pub struct LicenseFile {
    pub object_url: String,
    pub kind: LicenseKind,
}

/// Fetch a courier's delivery license
/// (`GET /users/delivery-license/{fileName}`, returns PDF or image bytes).
pub async fn fetch_license(session: &Session, file_name: &str) -> Result<LicenseFile, ApiError> {
    let auth_header = session.bearer_header()?;

    let response = Request::get(&api_url(&format!("/users/delivery-license/{}", file_name)))
        .header("Authorization", &auth_header)
        .send()
        .await
        .map_err(|e| ApiError::Fetch(format!("Failed to send request: {}", e)))?;

    if !response.ok() {
        return Err(ApiError::Fetch(format!(
            "Failed to fetch license file: {}",
            response.status()
        )));
    }

    let content_type = response
        .headers()
        .get("content-type")
        .unwrap_or_else(|| "application/octet-stream".to_string());
    let kind = if content_type.contains("pdf") {
        LicenseKind::Pdf
    } else {
        LicenseKind::Image
    };

    let bytes = response
        .binary()
        .await
        .map_err(|e| ApiError::Fetch(format!("Failed to read response body: {}", e)))?;

    let object_url = bytes_to_object_url(&bytes, &content_type)
        .map_err(|e| ApiError::Fetch(format!("Failed to build object URL: {:?}", e)))?;

    Ok(LicenseFile { object_url, kind })
}

/// Release an object URL created by [`fetch_license`].
pub fn revoke_license_url(object_url: &str) {
    let _ = web_sys::Url::revoke_object_url(object_url);
}

fn bytes_to_object_url(
    bytes: &[u8],
    content_type: &str,
) -> Result<String, wasm_bindgen::JsValue> {
    let array = js_sys::Array::new();
    array.push(&js_sys::Uint8Array::from(bytes).buffer());

    let options = web_sys::BlobPropertyBag::new();
    options.set_type(content_type);

    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&array, &options)?;
    web_sys::Url::create_object_url_with_blob(&blob)
}
