//! Wire schema mirrored from API responses.
//!
//! Field names follow the API's JSON casing via serde renames; fields the
//! backend may omit default to empty strings so older records still decode.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A catalog product with up to four stored image paths.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub price: f64,
    #[serde(default)]
    pub discount: f64,
    #[serde(default)]
    pub quantity: f64,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(rename = "MainImage", default)]
    pub main_image: String,
    #[serde(default)]
    pub image2: String,
    #[serde(default)]
    pub image3: String,
    #[serde(default)]
    pub image4: String,
    #[serde(rename = "createdAt", default)]
    pub created_at: String,
}

impl Product {
    /// Stored image paths in slot order (main first). Empty slots are
    /// empty strings.
    pub fn images(&self) -> [&str; 4] {
        [&self.main_image, &self.image2, &self.image3, &self.image4]
    }
}

/// A registered customer account.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "firstName", default)]
    pub first_name: String,
    #[serde(rename = "lastName", default)]
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub number: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub role: String,
    #[serde(rename = "createdAt", default)]
    pub created_at: String,
}

/// An inbound customer contact message.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Message {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub subject: String,
    #[serde(rename = "message", default)]
    pub body: String,
    #[serde(rename = "createdAt", default)]
    pub created_at: String,
    #[serde(rename = "updatedAt", default)]
    pub updated_at: String,
}

// Response envelopes. The API wraps every payload in a single-key object.

#[derive(Debug, Deserialize)]
pub struct ProductsResponse {
    pub products: Vec<Product>,
}

#[derive(Debug, Deserialize)]
pub struct ProductResponse {
    pub product: Product,
}

#[derive(Debug, Deserialize)]
pub struct UsersResponse {
    pub users: Vec<User>,
}

#[derive(Debug, Deserialize)]
pub struct UserResponse {
    pub user: User,
}

#[derive(Debug, Deserialize)]
pub struct MessagesResponse {
    pub messages: Vec<Message>,
}

#[derive(Debug, Deserialize)]
pub struct MessageResponse {
    pub message: Message,
}

/// Successful login: opaque token plus the authenticated account.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
}

/// Acknowledgement envelope for product updates.
#[derive(Debug, Deserialize)]
pub struct UpdateResponse {
    #[serde(default)]
    pub success: bool,
}
