use crate::{CoreError, CoreResult, MessageStatus};

use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const MAX_NAME_LENGTH: usize = 100;
pub const MAX_EMAIL_LENGTH: usize = 254;
pub const MAX_BODY_LENGTH: usize = 5000;

/// Message submitted through the public contact form
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Message {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub body: String,
    pub status: MessageStatus,
    pub created_at: DateTime<Utc>,
}

impl Message {
    #[track_caller]
    pub fn new(name: &str, email: &str, body: &str) -> CoreResult<Self> {
        let name = name.trim();
        let email = email.trim();
        let body = body.trim();

        require_length("name", name, MAX_NAME_LENGTH)?;
        require_length("email", email, MAX_EMAIL_LENGTH)?;
        require_length("message", body, MAX_BODY_LENGTH)?;

        if !email.contains('@') {
            return Err(CoreError::Validation {
                message: "email must be a valid address".to_string(),
                field: Some("email".to_string()),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            email: email.to_string(),
            body: body.to_string(),
            status: MessageStatus::default(),
            created_at: Utc::now(),
        })
    }
}

/// Reject empty values and values longer than `max` characters.
#[track_caller]
pub(crate) fn require_length(field: &str, value: &str, max: usize) -> CoreResult<()> {
    if value.is_empty() {
        return Err(CoreError::Validation {
            message: format!("{} cannot be empty", field),
            field: Some(field.to_string()),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    if value.chars().count() > max {
        return Err(CoreError::Validation {
            message: format!("{} exceeds maximum length of {}", field, max),
            field: Some(field.to_string()),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    Ok(())
}
