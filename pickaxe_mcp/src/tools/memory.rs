//! Memory tool parameters.

use rmcp::schemars;

/// Parameters for the memory_list tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MemoryListParams {
    /// Studio name to use. See studios_list for configured studios.
    pub studio: Option<String>,

    /// Number of memories to skip. Default: 0.
    pub skip: Option<u64>,

    /// Number of memories to return. Default: 10.
    pub take: Option<u64>,
}

/// Parameters for the memory_get_user tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MemoryGetUserParams {
    /// Studio name to use. See studios_list for configured studios.
    pub studio: Option<String>,

    /// The user's email address.
    pub email: String,

    /// Optional: specific memory schema ID to filter by.
    pub memory_id: Option<String>,

    /// Number of memories to skip. Default: 0.
    pub skip: Option<u64>,

    /// Number of memories to return. Default: 10.
    pub take: Option<u64>,
}
