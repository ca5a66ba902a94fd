//! User tool parameters.

use rmcp::schemars;

/// Parameters for the user_list tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserListParams {
    /// Studio name to use. See studios_list for configured studios.
    pub studio: Option<String>,

    /// Number of users to skip. Default: 0.
    pub skip: Option<u64>,

    /// Number of users to return. Default: 10.
    pub take: Option<u64>,
}

/// Parameters for the user_get tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserGetParams {
    /// Studio name to use. See studios_list for configured studios.
    pub studio: Option<String>,

    /// The user's email address.
    pub email: String,
}

/// Parameters for the user_create tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserCreateParams {
    /// Studio name to use. See studios_list for configured studios.
    pub studio: Option<String>,

    /// User's email address (required).
    pub email: String,

    /// User's display name.
    pub name: Option<String>,

    /// User's password (optional - they can reset).
    pub password: Option<String>,

    /// Array of product IDs to grant access to.
    pub products: Option<Vec<String>>,

    /// Mark email as verified. Default: false.
    pub is_email_verified: Option<bool>,
}

/// Parameters for the user_update tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdateParams {
    /// Studio name to use. See studios_list for configured studios.
    pub studio: Option<String>,

    /// The user's email address.
    pub email: String,

    /// Updated display name.
    pub name: Option<String>,

    /// Updated array of product IDs.
    pub products: Option<Vec<String>>,

    /// Set current usage count.
    pub current_uses: Option<u64>,

    /// Add extra usage allowance.
    pub extra_uses: Option<u64>,

    /// Update email verification status.
    pub is_email_verified: Option<bool>,
}

/// Parameters for the user_delete tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserDeleteParams {
    /// Studio name to use. See studios_list for configured studios.
    pub studio: Option<String>,

    /// The user's email address to delete.
    pub email: String,
}

/// Parameters for the user_invite tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserInviteParams {
    /// Studio name to use. See studios_list for configured studios.
    pub studio: Option<String>,

    /// Array of email addresses to invite.
    pub emails: Vec<String>,

    /// Array of product IDs to grant access to.
    pub product_ids: Option<Vec<String>>,
}
