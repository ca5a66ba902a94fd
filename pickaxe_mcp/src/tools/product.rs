//! Product tool parameters.

use rmcp::schemars;

/// Parameters for the products_list tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductsListParams {
    /// Studio name to use. See studios_list for configured studios.
    pub studio: Option<String>,
}
