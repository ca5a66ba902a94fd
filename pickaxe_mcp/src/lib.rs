//! MCP server for the Pickaxe studio API.
//!
//! This crate provides an MCP (Model Context Protocol) server that exposes
//! Pickaxe studio management operations (documents, users, products,
//! memories, chat history) to AI assistants, with multi-studio credential
//! resolution.

mod server;
pub mod tools;

pub use server::{PickaxeMcpServer, ServerError};
