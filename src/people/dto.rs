use serde::Deserialize;
use serde_json::Value;

use crate::patch::Patch;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CreatePersonRequest {
    pub name: Option<Value>,
    pub gender: Option<Value>,
    pub birth_year: Option<Value>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct UpdatePersonRequest {
    pub name: Patch<Value>,
    pub gender: Patch<Value>,
    pub birth_year: Patch<Value>,
}

#[derive(Debug, Default)]
pub struct PersonChanges {
    pub name: Option<String>,
    pub gender: Option<String>,
    pub birth_year: Option<String>,
}
