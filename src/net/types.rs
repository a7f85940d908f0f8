//! Wire DTOs for the budget backend.
//!
//! DESIGN
//! ======
//! Field names follow the Django serializers. Responses keep unknown fields
//! where the caller hands the payload back to a page unchanged.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Locally persisted proof of login.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub username: String,
    #[serde(default)]
    pub email: String,
}

/// Body of a successful login or register call.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    /// Identifier of the authenticated account as sent: usually the
    /// username, sometimes a numeric id or a nested user object.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl AuthResponse {
    /// The session record this response establishes, if any.
    pub fn session_user(&self) -> Option<SessionUser> {
        let user = self.user.as_ref()?;
        let username = user_identifier(user)?;
        let nested_email = user.get("email").and_then(Value::as_str).map(str::to_owned);
        let email = self.email.clone().or(nested_email).unwrap_or_default();
        Some(SessionUser { username, email })
    }

    /// The user identifier as text, `None` when the response names nobody.
    pub fn user_id(&self) -> Option<String> {
        self.user.as_ref().and_then(user_identifier)
    }
}

/// `null`, `false`, `0`, `""` and empty objects name nobody. Numbers are
/// stringified; objects yield their `username`, else their `id`.
fn user_identifier(user: &Value) -> Option<String> {
    match user {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) if n.as_i64() != Some(0) => Some(n.to_string()),
        Value::Object(map) => ["username", "id"].iter().find_map(|key| map.get(*key).and_then(user_identifier)),
        _ => None,
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RegisterRequest<'a> {
    pub username: &'a str,
    pub email: &'a str,
    pub password1: &'a str,
    pub password2: &'a str,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// Account details from `api/user/`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub id: Option<i64>,
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub is_active: Option<bool>,
    #[serde(default)]
    pub date_joined: Option<String>,
}

impl From<SessionUser> for UserProfile {
    fn from(user: SessionUser) -> Self {
        Self { id: None, username: user.username, email: user.email, role: None, is_active: None, date_joined: None }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

/// A transaction's category as serialized: nested object or bare key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CategoryRef {
    Nested(Category),
    Id(i64),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    /// Decimal amount kept as text to avoid float rounding.
    #[serde(deserialize_with = "deserialize_decimal_text")]
    pub amount: String,
    #[serde(default)]
    pub description: String,
    /// ISO date, `YYYY-MM-DD`.
    pub date: String,
    #[serde(default)]
    pub category: Option<CategoryRef>,
}

impl Transaction {
    /// Display label for the category, resolving bare ids against `categories`.
    pub fn category_label(&self, categories: &[Category]) -> Option<String> {
        match self.category.as_ref()? {
            CategoryRef::Nested(c) => Some(c.name.clone()),
            CategoryRef::Id(id) => categories.iter().find(|c| c.id == *id).map(|c| c.name.clone()),
        }
    }
}

/// Create payload for `api/transactions/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewTransaction {
    pub amount: String,
    pub description: String,
    pub date: String,
    pub category_id: i64,
}

/// A list endpoint body: DRF paginated `{ "results": [...] }` or a bare array.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Listing<T> {
    Page { results: Vec<T> },
    Bare(Vec<T>),
}

impl<T> Listing<T> {
    pub fn into_items(self) -> Vec<T> {
        match self {
            Self::Page { results } | Self::Bare(results) => results,
        }
    }
}

fn deserialize_decimal_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error as _;

    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(D::Error::custom(format!("expected decimal amount, got {other}"))),
    }
}
