mod error;
mod principal;
