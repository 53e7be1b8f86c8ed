//! Underwriter API Library
//!
//! Serves a fixed collection of synthetic loan-underwriting cases over a few
//! read-only HTTP endpoints, for frontend prototyping.
//!
//! # Modules
//!
//! - `api`: API definitions.
//! - `core`: Core case logic.
//! - `config`: Configuration management.
//! - `errors`: Error handling types.
//! - `generator`: Synthetic case generation.
//! - `handlers`: HTTP request handlers.
//! - `models`: Case data models.
//! - `openapi`: OpenAPI document and Swagger UI.
//! - `routes`: Router assembly.
//! - `store`: Read-only case queries.

pub mod api;
pub mod core;

pub mod config;
pub mod errors;
pub mod generator;
pub mod handlers;
pub mod models;
pub mod openapi;
pub mod routes;
pub mod store;
