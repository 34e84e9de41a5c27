use serde::Deserialize;
use serde_json::Value;

use crate::patch::Patch;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CreatePlanetRequest {
    pub name: Option<Value>,
    pub climate: Option<Value>,
    pub terrain: Option<Value>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct UpdatePlanetRequest {
    pub name: Patch<Value>,
    pub climate: Patch<Value>,
    pub terrain: Patch<Value>,
}

/// Validated column values for an update; `None` keeps the stored value.
#[derive(Debug, Default)]
pub struct PlanetChanges {
    pub name: Option<String>,
    pub climate: Option<String>,
    pub terrain: Option<String>,
}
