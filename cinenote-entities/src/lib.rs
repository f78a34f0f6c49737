#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(test, deny(warnings))]

//! # cinenote-entities
//!
//! Domain entities for Cinenote.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod comment;
pub mod id;
pub mod movie;
pub mod rating;
pub mod time;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
