//! # muebles-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **JSON REST API** under `/api/v1/muebles`, reading request
//!   bodies as JSON or form-encoded
//! - Map HTTP requests into application service calls (driving adapter)
//! - Wrap results in the `{message, payload}` envelope and map failures to
//!   status codes with fixed client-facing messages
//! - Answer unknown routes with an HTML 404 page
//!
//! ## Dependency rule
//! Depends on `muebles-app` (for port traits and services) and `muebles-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod envelope;
pub mod error;
pub mod extract;
pub mod router;
pub mod state;
