//! Typed REST clients, one per backend resource.
//!
//! Each client borrows the shared [`HttpClient`], so every call inherits
//! credential attachment and global 401 handling.
//!
//! ERROR HANDLING
//! ==============
//! Nothing here catches errors. The button handler or data-load effect that
//! made the call owns translating failures into notifications.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Deserialize;

use super::error::ApiError;
use super::http::{HttpClient, decode};
use super::transport::{Method, RequestBody};
use super::types::{
    AuthResponse, ClothingDraft, ClothingItem, Identity, LoginRequest, Occasion, OccasionDraft, PartnerAnalytics,
    PaymentReceipt, PaymentRequest, PendingUser, ProfileUpdate, RegisterRequest,
};

impl HttpClient {
    pub fn auth(&self) -> AuthApi<'_> {
        AuthApi { client: self }
    }

    pub fn admin(&self) -> AdminApi<'_> {
        AdminApi { client: self }
    }

    pub fn clothes(&self, catalog: Catalog) -> ClothesApi<'_> {
        ClothesApi { client: self, catalog }
    }

    pub fn occasions(&self) -> OccasionApi<'_> {
        OccasionApi { client: self }
    }

    pub fn payments(&self) -> PaymentApi<'_> {
        PaymentApi { client: self }
    }

    pub fn partners(&self) -> PartnerApi<'_> {
        PartnerApi { client: self }
    }

    pub fn users(&self) -> UserApi<'_> {
        UserApi { client: self }
    }
}

// =============================================================================
// AUTH
// =============================================================================

pub struct AuthApi<'a> {
    client: &'a HttpClient,
}

impl AuthApi<'_> {
    /// `POST /auth/login`.
    ///
    /// # Errors
    ///
    /// Returns the pipeline error; wrong credentials arrive as
    /// [`ApiError::Unauthorized`] or a status error, depending on the backend.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
        let body = LoginRequest { email: email.to_owned(), password: password.to_owned() };
        self.client.post_json("/auth/login", &body).await
    }

    /// `POST /auth/register`.
    ///
    /// # Errors
    ///
    /// Returns the pipeline error.
    pub async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        self.client.post_json("/auth/register", request).await
    }

    /// `GET /auth/profile`: identity for the stored credential.
    ///
    /// # Errors
    ///
    /// Returns the pipeline error.
    pub async fn profile(&self) -> Result<Identity, ApiError> {
        self.client.get_json("/auth/profile").await
    }
}

// =============================================================================
// ADMIN
// =============================================================================

pub struct AdminApi<'a> {
    client: &'a HttpClient,
}

fn approve_user_endpoint(id: &str) -> String {
    format!("/admin/approve-user/{id}")
}

fn reject_user_endpoint(id: &str) -> String {
    format!("/admin/reject-user/{id}")
}

impl AdminApi<'_> {
    /// `GET /admin/pending-users`.
    ///
    /// # Errors
    ///
    /// Returns the pipeline error.
    pub async fn pending_users(&self) -> Result<Vec<PendingUser>, ApiError> {
        self.client.get_json("/admin/pending-users").await
    }

    /// `PUT /admin/approve-user/:id`.
    ///
    /// # Errors
    ///
    /// Returns the pipeline error.
    pub async fn approve_user(&self, id: &str) -> Result<(), ApiError> {
        self.client.send_empty(Method::Put, &approve_user_endpoint(id)).await
    }

    /// `PUT /admin/reject-user/:id`.
    ///
    /// # Errors
    ///
    /// Returns the pipeline error.
    pub async fn reject_user(&self, id: &str) -> Result<(), ApiError> {
        self.client.send_empty(Method::Put, &reject_user_endpoint(id)).await
    }

    /// `GET /admin/users`.
    ///
    /// # Errors
    ///
    /// Returns the pipeline error.
    pub async fn users(&self) -> Result<Vec<Identity>, ApiError> {
        self.client.get_json("/admin/users").await
    }
}

// =============================================================================
// CLOTHES
// =============================================================================

/// Which garment collection a request targets. Both share one shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Catalog {
    /// The signed-in styler's wardrobe.
    Styler,
    /// The signed-in partner's sale catalog.
    Partner,
}

impl Catalog {
    pub fn base_path(self) -> &'static str {
        match self {
            Self::Styler => "/stylerclothes",
            Self::Partner => "/partnerclothes",
        }
    }

    fn item_path(self, id: &str) -> String {
        format!("{}/{id}", self.base_path())
    }
}

pub struct ClothesApi<'a> {
    client: &'a HttpClient,
    catalog: Catalog,
}

impl ClothesApi<'_> {
    /// # Errors
    ///
    /// Returns the pipeline error.
    pub async fn list(&self) -> Result<Vec<ClothingItem>, ApiError> {
        self.client.get_json(self.catalog.base_path()).await
    }

    /// # Errors
    ///
    /// Returns the pipeline error.
    pub async fn get(&self, id: &str) -> Result<ClothingItem, ApiError> {
        self.client.get_json(&self.catalog.item_path(id)).await
    }

    /// # Errors
    ///
    /// Returns the pipeline error.
    pub async fn create(&self, draft: &ClothingDraft) -> Result<ClothingItem, ApiError> {
        self.client.post_json(self.catalog.base_path(), draft).await
    }

    /// # Errors
    ///
    /// Returns the pipeline error.
    pub async fn update(&self, id: &str, draft: &ClothingDraft) -> Result<ClothingItem, ApiError> {
        self.client.put_json(&self.catalog.item_path(id), draft).await
    }

    /// # Errors
    ///
    /// Returns the pipeline error.
    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.client.send_empty(Method::Delete, &self.catalog.item_path(id)).await
    }
}

// =============================================================================
// OCCASIONS
// =============================================================================

pub struct OccasionApi<'a> {
    client: &'a HttpClient,
}

fn occasion_endpoint(id: &str) -> String {
    format!("/occasion/{id}")
}

fn occasion_suggestions_endpoint(id: &str) -> String {
    format!("/occasion/{id}/suggestions")
}

impl OccasionApi<'_> {
    /// # Errors
    ///
    /// Returns the pipeline error.
    pub async fn list(&self) -> Result<Vec<Occasion>, ApiError> {
        self.client.get_json("/occasion").await
    }

    /// # Errors
    ///
    /// Returns the pipeline error.
    pub async fn get(&self, id: &str) -> Result<Occasion, ApiError> {
        self.client.get_json(&occasion_endpoint(id)).await
    }

    /// # Errors
    ///
    /// Returns the pipeline error.
    pub async fn create(&self, draft: &OccasionDraft) -> Result<Occasion, ApiError> {
        self.client.post_json("/occasion", draft).await
    }

    /// # Errors
    ///
    /// Returns the pipeline error.
    pub async fn update(&self, id: &str, draft: &OccasionDraft) -> Result<Occasion, ApiError> {
        self.client.put_json(&occasion_endpoint(id), draft).await
    }

    /// # Errors
    ///
    /// Returns the pipeline error.
    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.client.send_empty(Method::Delete, &occasion_endpoint(id)).await
    }

    /// Outfit suggestions computed by the backend for an occasion.
    ///
    /// # Errors
    ///
    /// Returns the pipeline error.
    pub async fn suggestions(&self, id: &str) -> Result<Vec<ClothingItem>, ApiError> {
        self.client.get_json(&occasion_suggestions_endpoint(id)).await
    }
}

// =============================================================================
// PAYMENT / PARTNERS / USERS
// =============================================================================

pub struct PaymentApi<'a> {
    client: &'a HttpClient,
}

impl PaymentApi<'_> {
    /// `POST /payment`.
    ///
    /// # Errors
    ///
    /// Returns the pipeline error.
    pub async fn pay(&self, request: &PaymentRequest) -> Result<PaymentReceipt, ApiError> {
        self.client.post_json("/payment", request).await
    }
}

pub struct PartnerApi<'a> {
    client: &'a HttpClient,
}

impl PartnerApi<'_> {
    /// `GET /partners/analytics`.
    ///
    /// # Errors
    ///
    /// Returns the pipeline error.
    pub async fn analytics(&self) -> Result<PartnerAnalytics, ApiError> {
        self.client.get_json("/partners/analytics").await
    }
}

pub struct UserApi<'a> {
    client: &'a HttpClient,
}

fn favorite_endpoint(id: &str) -> String {
    format!("/users/favorites/{id}")
}

#[derive(Debug, Deserialize)]
struct FavoritesResponse {
    favorites: Vec<String>,
}

impl UserApi<'_> {
    /// `PUT /users/profile`; returns the updated identity.
    ///
    /// # Errors
    ///
    /// Returns the pipeline error.
    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<Identity, ApiError> {
        self.client.put_json("/users/profile", update).await
    }

    /// `POST /users/favorites/:id`; returns the new favorites list.
    ///
    /// # Errors
    ///
    /// Returns the pipeline error.
    pub async fn add_favorite(&self, clothing_id: &str) -> Result<Vec<String>, ApiError> {
        let endpoint = favorite_endpoint(clothing_id);
        let resp: FavoritesResponse = self.client.post_json(&endpoint, &serde_json::json!({})).await?;
        Ok(resp.favorites)
    }

    /// `DELETE /users/favorites/:id`; returns the new favorites list.
    ///
    /// # Errors
    ///
    /// Returns the pipeline error.
    pub async fn remove_favorite(&self, clothing_id: &str) -> Result<Vec<String>, ApiError> {
        let response = self
            .client
            .send(Method::Delete, &favorite_endpoint(clothing_id), RequestBody::Empty)
            .await?;
        let resp: FavoritesResponse = decode(&response)?;
        Ok(resp.favorites)
    }
}
