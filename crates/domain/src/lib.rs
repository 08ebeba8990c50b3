//! # muebles-domain
//!
//! Pure domain model for the muebles furniture catalogue.
//!
//! ## Responsibilities
//! - Foundational types: the sequential [`FurnitureCode`](code::FurnitureCode)
//!   and the error conventions shared by every layer
//! - Define **Furniture** items and the partial payload used to create or
//!   update them
//! - Define the **list filters** accepted by the catalogue listing
//! - Contain all invariant enforcement (presence checks, code sequencing)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod code;
pub mod error;
pub mod filter;
pub mod furniture;
