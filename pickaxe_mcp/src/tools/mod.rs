//! Tool parameter schemas for the Pickaxe MCP server.
//!
//! One module per backend resource. Every struct doubles as the advertised
//! argument schema (via `schemars`) and the deserialization target for
//! incoming invocations. The `studio` field present on backend-facing tools
//! selects the credential and is never forwarded to the API.

mod document;
mod history;
mod memory;
mod product;
mod studio;
mod user;

pub use document::{
    DocConnectParams, DocCreateParams, DocDeleteParams, DocDisconnectParams, DocGetParams,
    DocListParams,
};
pub use history::ChatHistoryParams;
pub use memory::{MemoryGetUserParams, MemoryListParams};
pub use product::ProductsListParams;
pub use studio::StudiosListParams;
pub use user::{
    UserCreateParams, UserDeleteParams, UserGetParams, UserInviteParams, UserListParams,
    UserUpdateParams,
};
