mod api;
mod session;
