use serde::Serialize;

/// Success envelope: `{status: "success", message, data}`
#[derive(Debug, Serialize)]
pub struct Envelope<T: Serialize> {
    pub status: &'static str,
    pub message: String,
    pub data: T,
}

impl<T: Serialize> Envelope<T> {
    pub fn success<S: Into<String>>(message: S, data: T) -> Self {
        Self {
            status: "success",
            message: message.into(),
            data,
        }
    }
}
