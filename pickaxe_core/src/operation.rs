//! The closed set of backend operations.
//!
//! Each variant carries the typed arguments of exactly one Pickaxe API call.
//! The studio selector never appears here: it is consumed for credential
//! resolution before an [`Operation`] is built, so it cannot leak into a
//! request path or body.

/// Output format for chat history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryFormat {
    /// Human-readable message transcript.
    Messages,
    /// Raw conversation records including metadata.
    Raw,
}

impl Default for HistoryFormat {
    fn default() -> Self {
        HistoryFormat::Messages
    }
}

/// One backend API call with its typed arguments.
///
/// The set is closed: adding an operation means adding a variant, and the
/// exhaustive match in [`Operation::to_request`](crate::request) will not
/// compile until the new case is handled.
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    /// Fetch conversation history for an agent.
    ChatHistory {
        pickaxe_id: String,
        skip: Option<u64>,
        limit: Option<u64>,
        format: Option<HistoryFormat>,
    },
    /// Create a knowledge base document from raw content or a website URL.
    DocCreate {
        name: String,
        raw_content: Option<String>,
        website: Option<String>,
    },
    /// Link a document to an agent.
    DocConnect {
        document_id: String,
        pickaxe_id: String,
    },
    /// Unlink a document from an agent.
    DocDisconnect {
        document_id: String,
        pickaxe_id: String,
    },
    /// List documents with pagination.
    DocList {
        skip: Option<u64>,
        take: Option<u64>,
    },
    /// Retrieve one document by ID.
    DocGet { document_id: String },
    /// Delete a document.
    DocDelete { document_id: String },
    /// List users with pagination.
    UserList {
        skip: Option<u64>,
        take: Option<u64>,
    },
    /// Get one user by email.
    UserGet { email: String },
    /// Create a user with optional product access.
    UserCreate {
        email: String,
        name: Option<String>,
        password: Option<String>,
        products: Option<Vec<String>>,
        is_email_verified: Option<bool>,
    },
    /// Partially update a user; only supplied fields are sent.
    UserUpdate {
        email: String,
        name: Option<String>,
        products: Option<Vec<String>>,
        current_uses: Option<u64>,
        extra_uses: Option<u64>,
        is_email_verified: Option<bool>,
    },
    /// Delete a user by email.
    UserDelete { email: String },
    /// Invite users by email with optional product access.
    UserInvite {
        emails: Vec<String>,
        product_ids: Option<Vec<String>>,
    },
    /// List all products/bundles.
    ProductsList,
    /// List memory schemas with pagination.
    MemoryList {
        skip: Option<u64>,
        take: Option<u64>,
    },
    /// Get collected memories for a user, optionally filtered by schema.
    MemoryGetUser {
        email: String,
        memory_id: Option<String>,
        skip: Option<u64>,
        take: Option<u64>,
    },
}
