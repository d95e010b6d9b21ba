//! REST client shared by every page.
//!
//! Attaches the stored bearer token, turns non-2xx bodies into
//! [`ApiError::Backend`] carrying the backend `detail`, normalizes 2xx bodies
//! into [`ApiResponse`] and ends the session on a 401 outside the login call.

use std::fmt;

use contracts::shared::api_response::ApiResponse;
use contracts::shared::error::ApiError;
use contracts::system::auth::should_force_logout;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::shared::api_utils::api_url;
use crate::system::auth::storage;

#[derive(Debug, Clone, Copy)]
enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        };
        f.write_str(name)
    }
}

fn builder(method: Method, path: &str) -> RequestBuilder {
    let url = api_url(path);
    let builder = match method {
        Method::Get => Request::get(&url),
        Method::Post => Request::post(&url),
        Method::Put => Request::put(&url),
        Method::Delete => Request::delete(&url),
    };
    match storage::bearer() {
        Some(bearer) => builder.header("Authorization", &bearer),
        None => builder,
    }
}

/// Send a built request; transport failures and forced logouts end here.
async fn send(
    method: Method,
    path: &str,
    request: Result<Request, gloo_net::Error>,
) -> Result<Response, ApiError> {
    let request = request.map_err(|e| {
        log::error!("{} {}: failed to build request: {}", method, path, e);
        ApiError::Network(e.to_string())
    })?;

    let response = request.send().await.map_err(|e| {
        log::error!("{} {}: {}", method, path, e);
        ApiError::Network(e.to_string())
    })?;

    if should_force_logout(path, response.status()) {
        log::warn!("{} {}: session rejected, logging out", method, path);
        force_logout();
        return Err(ApiError::Unauthorized);
    }
    Ok(response)
}

/// Clear the stored session and go back to the start page.
pub fn force_logout() {
    storage::clear_session();
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href("/");
    }
}

async fn read_envelope<T: DeserializeOwned>(
    method: Method,
    path: &str,
    response: Response,
) -> Result<ApiResponse<T>, ApiError> {
    let status = response.status();
    let text = response.text().await.map_err(|e| {
        log::error!("{} {}: failed to read body: {}", method, path, e);
        ApiError::Decode(e.to_string())
    })?;

    if !response.ok() {
        // An empty fallback lets each caller pick its own message.
        let error = ApiError::from_error_body(status, &text, "");
        log::error!("{} {}: HTTP {} {}", method, path, status, error);
        return Err(error);
    }

    let body = if text.trim().is_empty() {
        Value::Null
    } else {
        serde_json::from_str::<Value>(&text).map_err(|e| {
            log::error!("{} {}: invalid JSON: {}", method, path, e);
            ApiError::Decode(e.to_string())
        })?
    };

    let envelope = ApiResponse::<T>::from_body(body).map_err(|e| {
        log::error!("{} {}: {}", method, path, e);
        e
    })?;
    log::debug!("{} {}: HTTP {} success={}", method, path, status, envelope.success);
    Ok(envelope)
}

pub async fn get<T: DeserializeOwned>(path: &str) -> Result<ApiResponse<T>, ApiError> {
    let response = send(Method::Get, path, builder(Method::Get, path).build()).await?;
    read_envelope(Method::Get, path, response).await
}

/// GET with a query string built from `query`; unset fields are skipped by its serializer.
pub async fn get_with_query<Q: Serialize, T: DeserializeOwned>(
    path: &str,
    query: &Q,
) -> Result<ApiResponse<T>, ApiError> {
    let query = serde_qs::to_string(query).map_err(|e| ApiError::Decode(e.to_string()))?;
    let full_path = if query.is_empty() {
        path.to_string()
    } else {
        format!("{}?{}", path, query)
    };
    get(&full_path).await
}

pub async fn post<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<ApiResponse<T>, ApiError> {
    let request = builder(Method::Post, path).json(body);
    let response = send(Method::Post, path, request).await?;
    read_envelope(Method::Post, path, response).await
}

pub async fn put<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<ApiResponse<T>, ApiError> {
    let request = builder(Method::Put, path).json(body);
    let response = send(Method::Put, path, request).await?;
    read_envelope(Method::Put, path, response).await
}

pub async fn delete(path: &str) -> Result<ApiResponse<Value>, ApiError> {
    let response = send(Method::Delete, path, builder(Method::Delete, path).build()).await?;
    read_envelope(Method::Delete, path, response).await
}

/// Multipart POST with the file under the `file` field.
pub async fn post_file<T: DeserializeOwned>(
    path: &str,
    file: &web_sys::File,
) -> Result<ApiResponse<T>, ApiError> {
    let form = web_sys::FormData::new()
        .map_err(|e| ApiError::Network(format!("{:?}", e)))?;
    form.append_with_blob_and_filename("file", file, &file.name())
        .map_err(|e| ApiError::Network(format!("{:?}", e)))?;

    // The browser sets the multipart boundary itself.
    let request = builder(Method::Post, path).body(form);
    let response = send(Method::Post, path, request).await?;
    read_envelope(Method::Post, path, response).await
}

/// Raw bytes of a file download.
pub async fn get_bytes(path: &str) -> Result<Vec<u8>, ApiError> {
    let response = send(Method::Get, path, builder(Method::Get, path).build()).await?;
    let status = response.status();
    if !response.ok() {
        let text = response.text().await.unwrap_or_default();
        let error = ApiError::from_error_body(status, &text, "");
        log::error!("GET {}: HTTP {} {}", path, status, error);
        return Err(error);
    }
    let bytes = response.binary().await.map_err(|e| {
        log::error!("GET {}: failed to read body: {}", path, e);
        ApiError::Decode(e.to_string())
    })?;
    log::debug!("GET {}: {} bytes", path, bytes.len());
    Ok(bytes)
}
