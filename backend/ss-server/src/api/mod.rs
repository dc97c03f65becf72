pub mod admin;
pub mod auth;
pub mod contact;
pub mod envelope;
pub mod error;
pub mod extractors;
