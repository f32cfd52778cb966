//! Shopsmith Core - Shared types library.
//!
//! This crate provides common types used across all Shopsmith components:
//! - `api` - The store admin HTTP API
//! - `cli` - Command-line tools for migrations and management
//!
//! # Architecture
//!
//! The core crate contains only types and traits - no I/O, no database access,
//! no HTTP clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe entity and identity ids

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
