//! Chat history tool parameters.

use pickaxe_core::HistoryFormat;
use rmcp::schemars;

/// Wire-level history format choice, mapped onto the core enum.
#[derive(Debug, Clone, Copy, serde::Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum FormatChoice {
    Messages,
    Raw,
}

impl From<FormatChoice> for HistoryFormat {
    fn from(choice: FormatChoice) -> Self {
        match choice {
            FormatChoice::Messages => HistoryFormat::Messages,
            FormatChoice::Raw => HistoryFormat::Raw,
        }
    }
}

/// Parameters for the chat_history tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChatHistoryParams {
    /// Studio name to use. See studios_list for configured studios.
    pub studio: Option<String>,

    /// The Pickaxe agent ID (from the agent URL or config).
    pub pickaxe_id: String,

    /// Number of conversations to skip (for pagination). Default: 0.
    pub skip: Option<u64>,

    /// Maximum conversations to return. Default: 10, Max: 100.
    pub limit: Option<u64>,

    /// Output format. 'messages' is human-readable, 'raw' includes metadata.
    /// Default: messages.
    pub format: Option<FormatChoice>,
}
