//! Declarative resources and data sources over the BMLT root server API.
//!
//! This crate is the integration layer between a declarative
//! infrastructure orchestrator and a meeting-directory root server:
//! configuration models go in, REST calls come out, and server responses
//! are copied back into configuration state field by field.
//!
//! [`config::ProviderConfig::configure`] runs once, validates connection
//! settings (with environment fallback), authenticates, and yields the
//! shared [`bmlt_client::ApiClient`] every resource and data source is
//! constructed with. Entity resources implement the
//! [`resource::ManagedResource`] create/read/update/delete/import
//! contract; data sources expose read-only list and lookup projections.

pub mod config;
pub mod datasource;
pub mod error;
pub mod resource;
pub mod value;

pub use config::ProviderConfig;
pub use error::{ConfigError, ProviderError, ProviderResult};
