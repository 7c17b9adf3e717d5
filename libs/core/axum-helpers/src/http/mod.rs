//! HTTP-level middleware: security headers and request correlation.

pub mod request_id;
pub mod security;

pub use request_id::{REQUEST_ID_HEADER, with_request_tracing};
pub use security::security_headers;
