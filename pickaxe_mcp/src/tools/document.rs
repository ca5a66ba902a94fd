//! Document tool parameters.

use rmcp::schemars;

/// Parameters for the doc_create tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DocCreateParams {
    /// Studio name to use. See studios_list for configured studios.
    pub studio: Option<String>,

    /// Name/title of the document.
    pub name: String,

    /// Raw text content for the document. Use this OR website, not both.
    pub raw_content: Option<String>,

    /// URL to scrape as document content. Use this OR rawContent, not both.
    pub website: Option<String>,
}

/// Parameters for the doc_connect tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DocConnectParams {
    /// Studio name to use. See studios_list for configured studios.
    pub studio: Option<String>,

    /// The document ID to connect.
    pub document_id: String,

    /// The Pickaxe agent ID to connect the document to.
    pub pickaxe_id: String,
}

/// Parameters for the doc_disconnect tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DocDisconnectParams {
    /// Studio name to use. See studios_list for configured studios.
    pub studio: Option<String>,

    /// The document ID to disconnect.
    pub document_id: String,

    /// The Pickaxe agent ID to disconnect the document from.
    pub pickaxe_id: String,
}

/// Parameters for the doc_list tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DocListParams {
    /// Studio name to use. See studios_list for configured studios.
    pub studio: Option<String>,

    /// Number of documents to skip. Default: 0.
    pub skip: Option<u64>,

    /// Number of documents to return. Default: 10.
    pub take: Option<u64>,
}

/// Parameters for the doc_get tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DocGetParams {
    /// Studio name to use. See studios_list for configured studios.
    pub studio: Option<String>,

    /// The document ID to retrieve.
    pub document_id: String,
}

/// Parameters for the doc_delete tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DocDeleteParams {
    /// Studio name to use. See studios_list for configured studios.
    pub studio: Option<String>,

    /// The document ID to delete.
    pub document_id: String,
}
