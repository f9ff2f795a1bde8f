//! Contact Manager Server - a multi-tenant contact-management API.
//!
//! Users register, authenticate with stateless bearer tokens, and manage a
//! private collection of contacts, each owning a set of email addresses and
//! phone numbers. Every data-access operation enforces strict per-owner
//! isolation over the contact aggregate.
//!
//! # Architecture
//!
//! - **domain**: validated value objects (emails, ids)
//! - **models**: users, contact aggregates, request/response payloads
//! - **error**: error taxonomy per layer
//! - **config**: configuration from environment variables
//! - **auth**: token issuance/validation and per-request identity resolution
//! - **repositories**: storage traits and the in-memory implementations
//! - **services**: business logic and all authorization decisions
//! - **server**: axum router, handlers, status-code mapping

pub mod auth;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repositories;
pub mod server;
pub mod services;

pub use auth::{RequestIdentity, TokenService};
pub use config::Config;
pub use error::{ApiError, ApiResult, ConfigError, StoreError, StoreResult};
pub use models::{Contact, ContactInput, LoginResponse, User};
pub use server::{router, run_server, AppState};
