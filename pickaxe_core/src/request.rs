//! Pure construction of backend HTTP requests from operations.

use reqwest::Method;
use serde_json::{Map, Value, json};
use urlencoding::encode;

use crate::operation::Operation;

/// Default number of pagination entries to skip.
pub const DEFAULT_SKIP: u64 = 0;

/// Default number of pagination entries to return.
pub const DEFAULT_TAKE: u64 = 10;

/// One backend HTTP request: method, path and optional JSON body.
///
/// Paths are relative to the API base URL unless they already start with
/// `http`. The credential header is attached by the client, not here.
#[derive(Debug, Clone, PartialEq)]
pub struct BackendRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
}

impl BackendRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::GET,
            path: path.into(),
            body: None,
        }
    }

    pub fn post(path: impl Into<String>, body: Value) -> Self {
        Self {
            method: Method::POST,
            path: path.into(),
            body: Some(body),
        }
    }

    pub fn patch(path: impl Into<String>, body: Value) -> Self {
        Self {
            method: Method::PATCH,
            path: path.into(),
            body: Some(body),
        }
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self {
            method: Method::DELETE,
            path: path.into(),
            body: None,
        }
    }
}

impl Operation {
    /// Build the backend request for this operation.
    ///
    /// Pure and deterministic: the same operation always yields the same
    /// request. Pagination defaults are applied here rather than left to the
    /// backend, path parameters are percent-encoded, and optional body
    /// fields are omitted entirely when the caller did not supply them (a
    /// supplied empty string or zero is still sent).
    pub fn to_request(&self) -> BackendRequest {
        match self {
            Operation::ChatHistory {
                pickaxe_id,
                skip,
                limit,
                format,
            } => BackendRequest::post(
                "/studio/pickaxe/history",
                json!({
                    "pickaxeId": pickaxe_id,
                    "skip": skip.unwrap_or(DEFAULT_SKIP),
                    "limit": limit.unwrap_or(DEFAULT_TAKE),
                    "format": format.unwrap_or_default(),
                }),
            ),

            Operation::DocCreate {
                name,
                raw_content,
                website,
            } => {
                let mut body = Map::new();
                body.insert("name".into(), json!(name));
                if let Some(raw_content) = raw_content {
                    body.insert("rawContent".into(), json!(raw_content));
                }
                if let Some(website) = website {
                    body.insert("website".into(), json!(website));
                }
                BackendRequest::post("/studio/document/create", Value::Object(body))
            }

            Operation::DocConnect {
                document_id,
                pickaxe_id,
            } => BackendRequest::post(
                "/studio/document/connect",
                json!({ "documentId": document_id, "pickaxeId": pickaxe_id }),
            ),

            Operation::DocDisconnect {
                document_id,
                pickaxe_id,
            } => BackendRequest::post(
                "/studio/document/disconnect",
                json!({ "documentId": document_id, "pickaxeId": pickaxe_id }),
            ),

            Operation::DocList { skip, take } => {
                BackendRequest::get(paginated("/studio/document/list", *skip, *take))
            }

            Operation::DocGet { document_id } => {
                BackendRequest::get(format!("/studio/document/{}", encode(document_id)))
            }

            Operation::DocDelete { document_id } => {
                BackendRequest::delete(format!("/studio/document/{}", encode(document_id)))
            }

            Operation::UserList { skip, take } => {
                BackendRequest::get(paginated("/studio/user/list", *skip, *take))
            }

            Operation::UserGet { email } => {
                BackendRequest::get(format!("/studio/user/{}", encode(email)))
            }

            Operation::UserCreate {
                email,
                name,
                password,
                products,
                is_email_verified,
            } => {
                let mut body = Map::new();
                body.insert("email".into(), json!(email));
                if let Some(name) = name {
                    body.insert("name".into(), json!(name));
                }
                if let Some(password) = password {
                    body.insert("password".into(), json!(password));
                }
                if let Some(products) = products {
                    body.insert("products".into(), json!(products));
                }
                // The backend expects this flag on every create.
                body.insert(
                    "isEmailVerified".into(),
                    json!(is_email_verified.unwrap_or(false)),
                );
                BackendRequest::post("/studio/user/create", Value::Object(body))
            }

            Operation::UserUpdate {
                email,
                name,
                products,
                current_uses,
                extra_uses,
                is_email_verified,
            } => {
                // Partial update: only fields the caller supplied go into the
                // 'data' envelope.
                let mut data = Map::new();
                if let Some(name) = name {
                    data.insert("name".into(), json!(name));
                }
                if let Some(products) = products {
                    data.insert("products".into(), json!(products));
                }
                if let Some(current_uses) = current_uses {
                    data.insert("currentUses".into(), json!(current_uses));
                }
                if let Some(extra_uses) = extra_uses {
                    data.insert("extraUses".into(), json!(extra_uses));
                }
                if let Some(is_email_verified) = is_email_verified {
                    data.insert("isEmailVerified".into(), json!(is_email_verified));
                }
                BackendRequest::patch(
                    format!("/studio/user/{}", encode(email)),
                    json!({ "data": data }),
                )
            }

            Operation::UserDelete { email } => {
                BackendRequest::delete(format!("/studio/user/{}", encode(email)))
            }

            Operation::UserInvite { emails, product_ids } => {
                let mut body = Map::new();
                body.insert("emails".into(), json!(emails));
                if let Some(product_ids) = product_ids {
                    body.insert("productIds".into(), json!(product_ids));
                }
                BackendRequest::post("/studio/user/invite", Value::Object(body))
            }

            Operation::ProductsList => BackendRequest::get("/studio/product/list"),

            Operation::MemoryList { skip, take } => {
                BackendRequest::get(paginated("/studio/memory/list", *skip, *take))
            }

            Operation::MemoryGetUser {
                email,
                memory_id,
                skip,
                take,
            } => {
                let mut path = format!("/studio/memory/user/{}?", encode(email));
                if let Some(memory_id) = memory_id {
                    path.push_str(&format!("memoryId={}&", encode(memory_id)));
                }
                path.push_str(&format!(
                    "skip={}&take={}",
                    skip.unwrap_or(DEFAULT_SKIP),
                    take.unwrap_or(DEFAULT_TAKE)
                ));
                BackendRequest::get(path)
            }
        }
    }
}

/// Append `skip`/`take` query parameters with their defaults.
fn paginated(path: &str, skip: Option<u64>, take: Option<u64>) -> String {
    format!(
        "{}?skip={}&take={}",
        path,
        skip.unwrap_or(DEFAULT_SKIP),
        take.unwrap_or(DEFAULT_TAKE)
    )
}
