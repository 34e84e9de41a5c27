use serde::Serialize;

/// Plain `{"msg": ...}` body used for confirmations and errors alike.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    pub msg: String,
}

impl Message {
    pub fn new(msg: impl Into<String>) -> Self {
        Self { msg: msg.into() }
    }
}
