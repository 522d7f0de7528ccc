use contracts::system::auth::{LoginRequest, LoginResponse};
use gloo_net::http::Request;

use crate::shared::http::{api_url, ApiError};

/// Sign in with email and password
pub async fn login(email: String, password: String) -> Result<LoginResponse, ApiError> {
    let request = LoginRequest { email, password };

    let response = Request::post(&api_url("/auth/login"))
        .json(&request)
        .map_err(|e| ApiError::Fetch(format!("Failed to serialize request: {}", e)))?
        .send()
        .await
        .map_err(|e| ApiError::Fetch(format!("Failed to send request: {}", e)))?;

    if !response.ok() {
        return Err(ApiError::Fetch(format!(
            "Login failed: {}",
            response.status()
        )));
    }

    response
        .json::<LoginResponse>()
        .await
        .map_err(|e| ApiError::Fetch(format!("Failed to parse response: {}", e)))
}
