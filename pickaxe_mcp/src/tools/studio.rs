//! Studio management tool parameters.

use rmcp::schemars;

/// Parameters for the studios_list tool.
/// This tool takes no parameters - it reports the configured studios.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct StudiosListParams {}
