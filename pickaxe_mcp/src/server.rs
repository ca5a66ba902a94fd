//! Core MCP server implementation for Pickaxe.

use std::sync::Arc;

use log::debug;
use rmcp::{
    ErrorData as McpError, ServerHandler, ServiceExt,
    handler::server::wrapper::Parameters, model::*, tool, tool_handler, tool_router,
    transport::stdio,
};
use serde_json::json;

use pickaxe_core::{Operation, PickaxeClient, StudioConfig};

use crate::tools::{
    ChatHistoryParams, DocConnectParams, DocCreateParams, DocDeleteParams, DocDisconnectParams,
    DocGetParams, DocListParams, MemoryGetUserParams, MemoryListParams, ProductsListParams,
    StudiosListParams, UserCreateParams, UserDeleteParams, UserGetParams, UserInviteParams,
    UserListParams, UserUpdateParams,
};

/// Error type for MCP server operations.
#[derive(Debug)]
pub enum ServerError {
    /// MCP protocol error
    Mcp(String),
}

impl std::fmt::Display for ServerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ServerError::Mcp(msg) => write!(f, "MCP error: {}", msg),
        }
    }
}

impl std::error::Error for ServerError {}

/// MCP server exposing the Pickaxe studio API as tools.
///
/// Holds the read-only studio configuration and the API client. There is no
/// mutable state: concurrent invocations share both without locking, and
/// each invocation is an independent, stateless passthrough to the backend.
#[derive(Clone)]
pub struct PickaxeMcpServer {
    config: Arc<StudioConfig>,
    client: PickaxeClient,
    tool_router: rmcp::handler::server::router::tool::ToolRouter<PickaxeMcpServer>,
}

#[tool_router]
impl PickaxeMcpServer {
    /// Create a new MCP server for a studio configuration.
    ///
    /// The configuration is built once at startup; the server never re-reads
    /// the environment.
    pub fn new(config: StudioConfig) -> Self {
        debug!(
            "Creating MCP server with studios: {}",
            config.studio_names().join(", ")
        );
        Self::with_client(config, PickaxeClient::new())
    }

    /// Create a server with an explicit API client (used by tests).
    pub fn with_client(config: StudioConfig, client: PickaxeClient) -> Self {
        Self {
            config: Arc::new(config),
            client,
            tool_router: Self::tool_router(),
        }
    }

    #[tool(description = "List all configured Pickaxe studios and the current default.")]
    pub async fn studios_list(
        &self,
        #[allow(unused_variables)] Parameters(params): Parameters<StudiosListParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!("Tool: studios_list");
        let names = self.config.studio_names();
        let result = json!({
            "studios": names,
            "default": self.config.default_studio(),
            "count": names.len(),
        });
        Ok(CallToolResult::success(vec![Content::text(pretty(
            &result,
        ))]))
    }

    #[tool(
        description = "Fetch conversation history for a Pickaxe agent. Use to analyze user \
        questions, identify KB gaps, and review agent performance."
    )]
    pub async fn chat_history(
        &self,
        Parameters(params): Parameters<ChatHistoryParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!("Tool: chat_history, pickaxe_id={}", params.pickaxe_id);
        let operation = Operation::ChatHistory {
            pickaxe_id: params.pickaxe_id,
            skip: params.skip,
            limit: params.limit,
            format: params.format.map(Into::into),
        };
        self.call_backend(params.studio.as_deref(), &operation)
            .await
    }

    #[tool(
        description = "Create a new document in Pickaxe knowledge base. Can create from raw \
        content or scrape a website URL."
    )]
    pub async fn doc_create(
        &self,
        Parameters(params): Parameters<DocCreateParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!("Tool: doc_create, name={}", params.name);
        let operation = Operation::DocCreate {
            name: params.name,
            raw_content: params.raw_content,
            website: params.website,
        };
        self.call_backend(params.studio.as_deref(), &operation)
            .await
    }

    #[tool(
        description = "Connect/link a document to a Pickaxe agent, adding it to the agent's \
        knowledge base."
    )]
    pub async fn doc_connect(
        &self,
        Parameters(params): Parameters<DocConnectParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!(
            "Tool: doc_connect, document_id={}, pickaxe_id={}",
            params.document_id, params.pickaxe_id
        );
        let operation = Operation::DocConnect {
            document_id: params.document_id,
            pickaxe_id: params.pickaxe_id,
        };
        self.call_backend(params.studio.as_deref(), &operation)
            .await
    }

    #[tool(
        description = "Disconnect/unlink a document from a Pickaxe agent, removing it from the \
        agent's knowledge base."
    )]
    pub async fn doc_disconnect(
        &self,
        Parameters(params): Parameters<DocDisconnectParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!(
            "Tool: doc_disconnect, document_id={}, pickaxe_id={}",
            params.document_id, params.pickaxe_id
        );
        let operation = Operation::DocDisconnect {
            document_id: params.document_id,
            pickaxe_id: params.pickaxe_id,
        };
        self.call_backend(params.studio.as_deref(), &operation)
            .await
    }

    #[tool(description = "List all documents in the Pickaxe studio with pagination.")]
    pub async fn doc_list(
        &self,
        Parameters(params): Parameters<DocListParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!("Tool: doc_list");
        let operation = Operation::DocList {
            skip: params.skip,
            take: params.take,
        };
        self.call_backend(params.studio.as_deref(), &operation)
            .await
    }

    #[tool(description = "Retrieve a specific document by ID.")]
    pub async fn doc_get(
        &self,
        Parameters(params): Parameters<DocGetParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!("Tool: doc_get, document_id={}", params.document_id);
        let operation = Operation::DocGet {
            document_id: params.document_id,
        };
        self.call_backend(params.studio.as_deref(), &operation)
            .await
    }

    #[tool(
        description = "Delete a document from Pickaxe. This removes it from all connected agents."
    )]
    pub async fn doc_delete(
        &self,
        Parameters(params): Parameters<DocDeleteParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!("Tool: doc_delete, document_id={}", params.document_id);
        let operation = Operation::DocDelete {
            document_id: params.document_id,
        };
        self.call_backend(params.studio.as_deref(), &operation)
            .await
    }

    #[tool(
        description = "List all users in the Pickaxe studio with their product access and usage \
        stats."
    )]
    pub async fn user_list(
        &self,
        Parameters(params): Parameters<UserListParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!("Tool: user_list");
        let operation = Operation::UserList {
            skip: params.skip,
            take: params.take,
        };
        self.call_backend(params.studio.as_deref(), &operation)
            .await
    }

    #[tool(description = "Get details for a specific user by email.")]
    pub async fn user_get(
        &self,
        Parameters(params): Parameters<UserGetParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!("Tool: user_get, email={}", params.email);
        let operation = Operation::UserGet {
            email: params.email,
        };
        self.call_backend(params.studio.as_deref(), &operation)
            .await
    }

    #[tool(description = "Create a new user with optional product access.")]
    pub async fn user_create(
        &self,
        Parameters(params): Parameters<UserCreateParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!("Tool: user_create, email={}", params.email);
        let operation = Operation::UserCreate {
            email: params.email,
            name: params.name,
            password: params.password,
            products: params.products,
            is_email_verified: params.is_email_verified,
        };
        self.call_backend(params.studio.as_deref(), &operation)
            .await
    }

    #[tool(description = "Update an existing user's details, products, or usage.")]
    pub async fn user_update(
        &self,
        Parameters(params): Parameters<UserUpdateParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!("Tool: user_update, email={}", params.email);
        let operation = Operation::UserUpdate {
            email: params.email,
            name: params.name,
            products: params.products,
            current_uses: params.current_uses,
            extra_uses: params.extra_uses,
            is_email_verified: params.is_email_verified,
        };
        self.call_backend(params.studio.as_deref(), &operation)
            .await
    }

    #[tool(description = "Delete a user by email.")]
    pub async fn user_delete(
        &self,
        Parameters(params): Parameters<UserDeleteParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!("Tool: user_delete, email={}", params.email);
        let operation = Operation::UserDelete {
            email: params.email,
        };
        self.call_backend(params.studio.as_deref(), &operation)
            .await
    }

    #[tool(
        description = "Send email invitations to new users with optional product access."
    )]
    pub async fn user_invite(
        &self,
        Parameters(params): Parameters<UserInviteParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!("Tool: user_invite, emails={}", params.emails.len());
        let operation = Operation::UserInvite {
            emails: params.emails,
            product_ids: params.product_ids,
        };
        self.call_backend(params.studio.as_deref(), &operation)
            .await
    }

    #[tool(description = "List all available products/bundles in the Pickaxe studio.")]
    pub async fn products_list(
        &self,
        Parameters(params): Parameters<ProductsListParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!("Tool: products_list");
        self.call_backend(params.studio.as_deref(), &Operation::ProductsList)
            .await
    }

    #[tool(description = "List all memory schemas defined in the studio.")]
    pub async fn memory_list(
        &self,
        Parameters(params): Parameters<MemoryListParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!("Tool: memory_list");
        let operation = Operation::MemoryList {
            skip: params.skip,
            take: params.take,
        };
        self.call_backend(params.studio.as_deref(), &operation)
            .await
    }

    #[tool(description = "Get all collected memories for a specific user.")]
    pub async fn memory_get_user(
        &self,
        Parameters(params): Parameters<MemoryGetUserParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!("Tool: memory_get_user, email={}", params.email);
        let operation = Operation::MemoryGetUser {
            email: params.email,
            memory_id: params.memory_id,
            skip: params.skip,
            take: params.take,
        };
        self.call_backend(params.studio.as_deref(), &operation)
            .await
    }

    /// Serve MCP over stdio (stdin/stdout).
    ///
    /// This method blocks until the connection is closed.
    pub async fn serve_stdio(self) -> Result<(), ServerError> {
        debug!("Starting MCP server on stdio");
        let service = self
            .serve(stdio())
            .await
            .map_err(|e| ServerError::Mcp(format!("Failed to start server: {}", e)))?;
        service
            .waiting()
            .await
            .map_err(|e| ServerError::Mcp(format!("Server error: {}", e)))?;
        Ok(())
    }

    /// Resolve the credential, build the request, call the backend and
    /// translate the outcome into a tool result.
    ///
    /// Every failure along the way becomes an error-flagged result carrying
    /// the failure's display text; nothing escapes the handler.
    async fn call_backend(
        &self,
        studio: Option<&str>,
        operation: &Operation,
    ) -> Result<CallToolResult, McpError> {
        let api_key = match self.config.resolve(studio) {
            Ok(key) => key,
            Err(e) => {
                return Ok(CallToolResult::error(vec![Content::text(e.to_string())]));
            }
        };

        let request = operation.to_request();
        match self.client.send(&request, api_key).await {
            Ok(value) => Ok(CallToolResult::success(vec![Content::text(pretty(&value))])),
            Err(e) => Ok(CallToolResult::error(vec![Content::text(e.to_string())])),
        }
    }
}

/// Pretty-print a JSON value for tool output.
fn pretty(value: &serde_json::Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

#[tool_handler]
impl ServerHandler for PickaxeMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            instructions: Some(
                "Pickaxe MCP server. Use tools to manage documents, users, products and \
                 memories in a Pickaxe studio. Pass 'studio' to select an account when \
                 several are configured; studios_list shows what is available."
                    .into(),
            ),
        }
    }
}
