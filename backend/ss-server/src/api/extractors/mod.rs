pub mod admin_principal;
pub mod bearer_credential;
pub mod json_body;
