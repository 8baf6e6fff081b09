//! Typed async client for the BMLT root server REST API.
//!
//! Covers the admin surface consumed by declarative tooling: service
//! bodies, meetings, formats and users (full CRUD) plus the read-only
//! server settings singleton. Authentication is either a pre-supplied
//! bearer token or a resource-owner password grant against the server's
//! `/api/v1/auth/token` endpoint.

pub mod auth;
pub mod client;
pub mod error;
pub mod models;

pub use auth::{ApiAuth, Credentials};
pub use client::{ApiClient, MeetingsQuery};
pub use error::{ApiError, ApiResult};
