use serde::Deserialize;
use serde_json::Value;

/// Query of `GET /users/favorites`. The id is kept raw so a value that is
/// not an integer resolves to no user rather than a malformed request.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct FavoritesQuery {
    pub user_id: Option<String>,
}

impl FavoritesQuery {
    pub fn user_id(&self) -> Option<i64> {
        self.user_id.as_deref().and_then(|v| v.trim().parse().ok())
    }
}

/// Body of add/remove favorite requests.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct FavoriteRequest {
    pub user_id: Option<Value>,
}

impl FavoriteRequest {
    /// Accepts a JSON integer or an integer encoded as a string.
    pub fn user_id(&self) -> Option<i64> {
        match self.user_id.as_ref()? {
            Value::Number(n) => n.as_i64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}
