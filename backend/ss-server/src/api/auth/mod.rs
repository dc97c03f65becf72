pub mod id_token_request;
pub mod identity_dto;
pub mod responses;
pub mod sessions;
