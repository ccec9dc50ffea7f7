//! # Quill Core
//!
//! The domain layer of the Quill blogging backend.
//! This crate contains pure business logic with zero infrastructure dependencies:
//! entities, the error taxonomy, the ports infrastructure must implement, and
//! the content / social-graph / assistant services built on top of them.

pub mod domain;
pub mod error;
pub mod ports;
pub mod services;

pub use error::DomainError;
