//! REST API helpers for the catalog backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `ApiError::Network` since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every helper returns `Result<_, ApiError>` so pages can map failures to
//! toasts or inline text without panicking; 404 stays distinguishable for
//! the detail views.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::types::{LoginResponse, Message, Product, User};
#[cfg(feature = "hydrate")]
use super::types::{
    MessageResponse, MessagesResponse, ProductResponse, ProductsResponse, UpdateResponse,
    UserResponse, UsersResponse,
};
#[cfg(feature = "hydrate")]
use crate::state::product_form::ProductForm;

/// Base URL of the REST collaborator. Overridable at compile time so
/// deployments can point the bundle at a different host.
pub fn base_api() -> &'static str {
    option_env!("FURNIMALL_API_BASE").unwrap_or("/dev-api")
}

/// Multipart field names per image slot: `(file, replace flag, old path)`.
/// The update endpoint only replaces a slot when its flag is present.
#[cfg(any(test, feature = "hydrate"))]
const IMAGE_FIELDS: [(&str, &str, &str); 4] = [
    ("MainImage", "replaceMainImage", "oldMainImage"),
    ("image2", "replaceImage2", "oldImage2"),
    ("image3", "replaceImage3", "oldImage3"),
    ("image4", "replaceImage4", "oldImage4"),
];

#[cfg(any(test, feature = "hydrate"))]
fn products_endpoint() -> String {
    format!("{}/products/getProducts", base_api())
}

#[cfg(any(test, feature = "hydrate"))]
fn product_endpoint(id: &str) -> String {
    format!("{}/products/getProduct/{id}", base_api())
}

#[cfg(any(test, feature = "hydrate"))]
fn product_add_endpoint() -> String {
    format!("{}/products/add", base_api())
}

#[cfg(any(test, feature = "hydrate"))]
fn product_update_endpoint(id: &str) -> String {
    format!("{}/products/update/{id}", base_api())
}

#[cfg(any(test, feature = "hydrate"))]
fn product_delete_endpoint(id: &str) -> String {
    format!("{}/products/delete/{id}", base_api())
}

#[cfg(any(test, feature = "hydrate"))]
fn login_endpoint() -> String {
    format!("{}/auth/login", base_api())
}

#[cfg(any(test, feature = "hydrate"))]
fn users_endpoint() -> String {
    format!("{}/auth/users", base_api())
}

#[cfg(any(test, feature = "hydrate"))]
fn user_endpoint(id: &str) -> String {
    format!("{}/auth/getUser/{id}", base_api())
}

#[cfg(any(test, feature = "hydrate"))]
fn user_delete_endpoint(id: &str) -> String {
    format!("{}/auth/deleteUser/{id}", base_api())
}

#[cfg(any(test, feature = "hydrate"))]
fn messages_endpoint() -> String {
    format!("{}/messages/allMessages", base_api())
}

#[cfg(any(test, feature = "hydrate"))]
fn message_endpoint(id: &str) -> String {
    format!("{}/messages/getMessage/{id}", base_api())
}

#[cfg(any(test, feature = "hydrate"))]
fn message_delete_endpoint(id: &str) -> String {
    format!("{}/messages/deleteMessage/{id}", base_api())
}

#[cfg(feature = "hydrate")]
async fn get_json<T: serde::de::DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let resp = gloo_net::http::Request::get(url).send().await.map_err(|e| {
        log::warn!("GET {url} failed: {e}");
        ApiError::Network(e.to_string())
    })?;
    if !resp.ok() {
        log::warn!("GET {url} returned {}", resp.status());
        return Err(ApiError::from_status(resp.status()));
    }
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(feature = "hydrate")]
async fn delete(url: &str) -> Result<(), ApiError> {
    let resp = gloo_net::http::Request::delete(url).send().await.map_err(|e| {
        log::warn!("DELETE {url} failed: {e}");
        ApiError::Network(e.to_string())
    })?;
    if !resp.ok() {
        log::warn!("DELETE {url} returned {}", resp.status());
        return Err(ApiError::from_status(resp.status()));
    }
    Ok(())
}

#[cfg(not(feature = "hydrate"))]
fn server_stub<T>() -> Result<T, ApiError> {
    Err(ApiError::Network("not available on server".to_owned()))
}

/// Authenticate with email and password via `POST /auth/login`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails, the credentials are
/// rejected, or the response does not decode.
pub async fn login(email: &str, password: &str) -> Result<LoginResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email, "password": password });
        let resp = gloo_net::http::Request::post(&login_endpoint())
            .json(&payload)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::from_status(resp.status()));
        }
        resp.json::<LoginResponse>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        server_stub()
    }
}

/// Fetch the full product collection.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport or decode failure.
pub async fn fetch_products() -> Result<Vec<Product>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json::<ProductsResponse>(&products_endpoint())
            .await
            .map(|envelope| envelope.products)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        server_stub()
    }
}

/// Fetch a single product by identifier. 404 maps to [`ApiError::NotFound`].
///
/// # Errors
///
/// Returns an [`ApiError`] on transport, status, or decode failure.
pub async fn fetch_product(id: &str) -> Result<Product, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json::<ProductResponse>(&product_endpoint(id))
            .await
            .map(|envelope| envelope.product)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        server_stub()
    }
}

/// Delete a product by identifier.
///
/// # Errors
///
/// Returns an [`ApiError`] if the delete is not acknowledged.
pub async fn delete_product(id: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        delete(&product_delete_endpoint(id)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        server_stub()
    }
}

/// Create a product via multipart `POST /products/add`: all text fields plus
/// whichever image slots were picked.
///
/// # Errors
///
/// Returns an [`ApiError`] if the form cannot be assembled or the request
/// fails.
#[cfg(feature = "hydrate")]
pub async fn add_product(
    form: &ProductForm,
    images: &[Option<web_sys::File>],
) -> Result<(), ApiError> {
    let data = multipart_fields(form)?;
    for ((field, _, _), file) in IMAGE_FIELDS.iter().zip(images) {
        if let Some(file) = file {
            data.append_with_blob(field, file)
                .map_err(|_| ApiError::Network("failed to attach image".to_owned()))?;
        }
    }
    let resp = gloo_net::http::Request::post(&product_add_endpoint())
        .body(data)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if !resp.ok() {
        log::warn!("product add returned {}", resp.status());
        return Err(ApiError::from_status(resp.status()));
    }
    Ok(())
}

/// Update a product via multipart `PUT /products/update/:id`.
///
/// Only changed image slots are appended, each with its `replace*` flag and
/// the previously stored path so the backend can drop the old file.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the server does not
/// acknowledge the update.
#[cfg(feature = "hydrate")]
pub async fn update_product(
    id: &str,
    form: &ProductForm,
    images: &[Option<web_sys::File>],
    current: &Product,
) -> Result<(), ApiError> {
    let data = multipart_fields(form)?;
    let stored = current.images();
    for (slot, ((field, replace, old), file)) in IMAGE_FIELDS.iter().zip(images).enumerate() {
        let Some(file) = file else {
            continue;
        };
        data.append_with_blob(field, file)
            .map_err(|_| ApiError::Network("failed to attach image".to_owned()))?;
        append_str(&data, replace, "true")?;
        if !stored[slot].is_empty() {
            append_str(&data, old, stored[slot])?;
        }
    }
    let resp = gloo_net::http::Request::put(&product_update_endpoint(id))
        .body(data)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if !resp.ok() {
        log::warn!("product update returned {}", resp.status());
        return Err(ApiError::from_status(resp.status()));
    }
    let ack: UpdateResponse = resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))?;
    if !ack.success {
        return Err(ApiError::Decode("update not acknowledged".to_owned()));
    }
    Ok(())
}

#[cfg(feature = "hydrate")]
fn multipart_fields(form: &ProductForm) -> Result<web_sys::FormData, ApiError> {
    let data = web_sys::FormData::new()
        .map_err(|_| ApiError::Network("failed to build form data".to_owned()))?;
    for (name, value) in form.field_pairs() {
        append_str(&data, name, &value)?;
    }
    Ok(data)
}

#[cfg(feature = "hydrate")]
fn append_str(data: &web_sys::FormData, name: &str, value: &str) -> Result<(), ApiError> {
    data.append_with_str(name, value)
        .map_err(|_| ApiError::Network("failed to build form data".to_owned()))
}

/// Fetch all registered users.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport or decode failure.
pub async fn fetch_users() -> Result<Vec<User>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json::<UsersResponse>(&users_endpoint())
            .await
            .map(|envelope| envelope.users)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        server_stub()
    }
}

/// Fetch a single user by identifier. 404 maps to [`ApiError::NotFound`].
///
/// # Errors
///
/// Returns an [`ApiError`] on transport, status, or decode failure.
pub async fn fetch_user(id: &str) -> Result<User, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json::<UserResponse>(&user_endpoint(id))
            .await
            .map(|envelope| envelope.user)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        server_stub()
    }
}

/// Delete a user account by identifier.
///
/// # Errors
///
/// Returns an [`ApiError`] if the delete is not acknowledged.
pub async fn delete_user(id: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        delete(&user_delete_endpoint(id)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        server_stub()
    }
}

/// Fetch all inbound messages.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport or decode failure.
pub async fn fetch_messages() -> Result<Vec<Message>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json::<MessagesResponse>(&messages_endpoint())
            .await
            .map(|envelope| envelope.messages)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        server_stub()
    }
}

/// Fetch a single message by identifier. 404 maps to [`ApiError::NotFound`].
///
/// # Errors
///
/// Returns an [`ApiError`] on transport, status, or decode failure.
pub async fn fetch_message(id: &str) -> Result<Message, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json::<MessageResponse>(&message_endpoint(id))
            .await
            .map(|envelope| envelope.message)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        server_stub()
    }
}

/// Delete a message by identifier.
///
/// # Errors
///
/// Returns an [`ApiError`] if the delete is not acknowledged.
pub async fn delete_message(id: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        delete(&message_delete_endpoint(id)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        server_stub()
    }
}
