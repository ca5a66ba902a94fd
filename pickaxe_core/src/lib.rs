//! Core building blocks for the Pickaxe MCP server.
//!
//! This crate knows nothing about MCP. It provides the studio credential
//! store ([`StudioConfig`]), the closed set of backend operations
//! ([`Operation`]), the pure request builder ([`BackendRequest`]) and the
//! HTTP client ([`PickaxeClient`]) that talks to the Pickaxe studio API.

pub mod client;
pub mod operation;
pub mod request;
pub mod studio;

pub use client::{ApiError, PickaxeClient, DEFAULT_BASE_URL};
pub use operation::{HistoryFormat, Operation};
pub use request::BackendRequest;
pub use studio::{ConfigError, Studio, StudioConfig, StudioError};
