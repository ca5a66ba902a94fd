//! Shared test helpers for pickaxe_mcp tests.

#![allow(dead_code)]

use pickaxe_core::{PickaxeClient, StudioConfig};
use pickaxe_mcp::PickaxeMcpServer;
use rmcp::model::{CallToolResult, RawContent};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Extract the text content from a CallToolResult.
pub fn get_text(result: &CallToolResult) -> String {
    assert_eq!(result.content.len(), 1, "Expected exactly one content item");
    match &result.content[0].raw {
        RawContent::Text(text_content) => text_content.text.clone(),
        _ => panic!("Expected text content"),
    }
}

/// Check if the result is a success.
pub fn is_success(result: &CallToolResult) -> bool {
    result.is_error == Some(false)
}

/// Check if the result is an error.
pub fn is_error(result: &CallToolResult) -> bool {
    result.is_error == Some(true)
}

/// Build a studio config from (name, api key) pairs.
pub fn config(studios: &[(&str, &str)], default: Option<&str>) -> StudioConfig {
    StudioConfig::from_vars(
        studios
            .iter()
            .map(|(name, key)| (format!("PICKAXE_STUDIO_{}", name), key.to_string())),
        default.map(|s| s.to_string()),
    )
    .expect("Failed to build studio config")
}

/// Build a server whose client points at the given base URL.
pub fn server_at(config: StudioConfig, base_url: &str) -> PickaxeMcpServer {
    PickaxeMcpServer::with_client(config, PickaxeClient::with_base_url(base_url))
}

/// Build a server pointing at a port nothing listens on.
///
/// Useful for asserting that a code path never reaches the backend, or that
/// transport failures surface as error results.
pub async fn unreachable_server(config: StudioConfig) -> PickaxeMcpServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    server_at(config, &format!("http://{}", addr))
}

/// Serve exactly one connection with a fixed HTTP response.
///
/// Returns the base URL to call and a handle resolving to the complete raw
/// request (head and body) the client sent.
pub async fn serve_once(response: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.unwrap();
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        loop {
            let n = stream.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
            if let Some(head_end) = request.windows(4).position(|w| w == b"\r\n\r\n") {
                let head = String::from_utf8_lossy(&request[..head_end]).to_lowercase();
                let body_len = head
                    .lines()
                    .find_map(|line| line.strip_prefix("content-length:"))
                    .and_then(|v| v.trim().parse::<usize>().ok())
                    .unwrap_or(0);
                if request.len() >= head_end + 4 + body_len {
                    break;
                }
            }
        }
        stream.write_all(response.as_bytes()).await.unwrap();
        stream.flush().await.unwrap();
        String::from_utf8_lossy(&request).to_string()
    });

    (format!("http://{}", addr), handle)
}
