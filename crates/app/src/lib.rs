//! # muebles-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `FurnitureRepository`: filtered listing, lookup, code sequencing and
//!     CRUD for furniture items
//! - Define **driving/inbound ports** as use-case structs:
//!   - `FurnitureService`: list, get, create, partial update, delete
//! - Orchestrate domain objects without knowing *how* persistence or IO works
//!
//! ## Dependency rule
//! Depends on `muebles-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
