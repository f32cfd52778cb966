//! Shopsmith API - Multi-tenant store admin backend.
//!
//! Store owners manage billboards, categories, sizes, colors, and products
//! through a JSON HTTP API. Every mutation is authorized against the store's
//! owning identity; reads are public and serve the storefront consumers.
//!
//! # Architecture
//!
//! - Axum web framework, one route module per resource
//! - `PostgreSQL` via sqlx, one repository per entity
//! - Stateless bearer-token identity from an external provider
//!
//! Control flow is linear per request: the route handler validates input,
//! checks ownership, and calls one repository method. No request state
//! outlives the request.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod state;
