//! Wire DTOs for the FitFlow backend.
//!
//! DESIGN
//! ======
//! The backend speaks camelCase JSON and names primary keys `_id`. Every id
//! field accepts `_id`, `id`, or both (Mongoose virtuals emit both); `_id`
//! wins when both are present. Ids are always written back as `_id`.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use crate::paths;

/// Account role.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Styler,
    Partner,
}

impl Role {
    /// Every role; used by views open to any signed-in account.
    pub const ALL: &'static [Role] = &[Role::Admin, Role::Styler, Role::Partner];

    /// Wire name of the role.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Styler => "styler",
            Self::Partner => "partner",
        }
    }

    /// Parse a wire role name.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "admin" => Some(Self::Admin),
            "styler" => Some(Self::Styler),
            "partner" => Some(Self::Partner),
            _ => None,
        }
    }

    /// View a user of this role lands on after signing in.
    ///
    /// Admins go to the admin area; everyone else starts in the styler area.
    pub fn landing_path(self) -> &'static str {
        match self {
            Self::Admin => paths::ADMIN_HOME,
            Self::Styler | Self::Partner => paths::STYLER_HOME,
        }
    }
}

/// The signed-in account as returned by `/auth/profile` and `/auth/login`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    #[serde(flatten, with = "record_id")]
    pub id: String,
    pub email: String,
    pub role: Role,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub is_approved: bool,
    /// Favorited clothing ids.
    #[serde(default)]
    pub favorites: Vec<String>,
}

impl Identity {
    /// Name to show in chrome, falling back to the email address.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or(&self.email)
    }
}

/// Body returned by login and registration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: Identity,
}

/// Credentials posted to `/auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Payload posted to `/auth/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// An account waiting for admin approval.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingUser {
    #[serde(flatten, with = "record_id")]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    pub email: String,
    pub role: Role,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// A garment in a styler wardrobe or a partner catalog.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClothingItem {
    #[serde(flatten, with = "record_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub occasion: Option<String>,
    #[serde(default)]
    pub owner: Option<String>,
}

/// Fields sent when creating or updating a garment.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClothingDraft {
    pub name: String,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    pub price: f64,
    pub image_url: String,
}

/// A planned event the styler dresses for.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Occasion {
    #[serde(flatten, with = "record_id")]
    pub id: String,
    #[serde(alias = "name")]
    pub title: String,
    pub date: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    /// Clothing ids picked for the occasion.
    #[serde(default)]
    pub items: Vec<String>,
}

/// Fields sent when creating or updating an occasion.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OccasionDraft {
    pub title: String,
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Checkout request posted to `/payment`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    pub amount: f64,
    pub currency: String,
    pub item_ids: Vec<String>,
}

/// Backend acknowledgement of a payment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentReceipt {
    #[serde(flatten, with = "record_id")]
    pub id: String,
    pub status: String,
}

/// Sales summary for the signed-in partner.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PartnerAnalytics {
    pub total_items: u64,
    pub total_sales: u64,
    pub revenue: f64,
    pub views: u64,
    pub top_items: Vec<TopItem>,
}

/// A best-selling catalog entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopItem {
    #[serde(flatten, with = "record_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub sales: u64,
}

/// Editable profile fields sent to `/users/profile`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

/// Primary key that decodes from `_id` and/or `id`.
mod record_id {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    #[derive(Deserialize)]
    struct Keys {
        #[serde(rename = "_id", default)]
        object_id: Option<String>,
        #[serde(default)]
        id: Option<String>,
    }

    #[derive(Serialize)]
    struct Key<'a> {
        #[serde(rename = "_id")]
        object_id: &'a str,
    }

    pub fn serialize<S: Serializer>(id: &str, serializer: S) -> Result<S::Ok, S::Error> {
        Key { object_id: id }.serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
        let keys = Keys::deserialize(deserializer)?;
        keys.object_id.or(keys.id).ok_or_else(|| D::Error::missing_field("_id"))
    }
}
