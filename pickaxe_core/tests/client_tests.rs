//! Backend client tests against a local canned-response listener.

use pickaxe_core::{ApiError, BackendRequest, Operation, PickaxeClient};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Serve exactly one connection with a fixed HTTP response.
///
/// Returns the base URL to call and a handle resolving to the raw request
/// head the client sent.
async fn serve_once(response: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.unwrap();
        let mut head = Vec::new();
        let mut buf = [0u8; 1024];
        loop {
            let n = stream.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            head.extend_from_slice(&buf[..n]);
            if head.windows(4).any(|w| w == b"\r\n\r\n") {
                break;
            }
        }
        stream.write_all(response.as_bytes()).await.unwrap();
        stream.flush().await.unwrap();
        String::from_utf8_lossy(&head).to_string()
    });

    (format!("http://{}", addr), handle)
}

#[tokio::test]
async fn test_success_decodes_json() {
    let (base, _handle) = serve_once(
        "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: 11\r\nConnection: close\r\n\r\n{\"ok\":true}",
    )
    .await;

    let client = PickaxeClient::with_base_url(base);
    let request = BackendRequest::get("/studio/product/list");
    let value = client.send(&request, "test-key").await.unwrap();
    assert_eq!(value, serde_json::json!({ "ok": true }));
}

#[tokio::test]
async fn test_non_2xx_is_classified_with_status_and_raw_body() {
    let (base, _handle) = serve_once(
        "HTTP/1.1 404 Not Found\r\nContent-Length: 18\r\nConnection: close\r\n\r\ndocument not found",
    )
    .await;

    let client = PickaxeClient::with_base_url(base);
    let request = Operation::DocGet {
        document_id: "42".to_string(),
    }
    .to_request();
    let err = client.send(&request, "test-key").await.unwrap_err();
    assert_eq!(
        err,
        ApiError::Http {
            status: 404,
            body: "document not found".to_string(),
        }
    );
}

#[tokio::test]
async fn test_5xx_is_classified_as_http_error() {
    let (base, _handle) = serve_once(
        "HTTP/1.1 500 Internal Server Error\r\nContent-Length: 5\r\nConnection: close\r\n\r\nbroke",
    )
    .await;

    let client = PickaxeClient::with_base_url(base);
    let request = BackendRequest::get("/studio/user/list?skip=0&take=10");
    match client.send(&request, "test-key").await.unwrap_err() {
        ApiError::Http { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(body, "broke");
        }
        other => panic!("Expected Http error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_connection_failure_is_a_transport_error() {
    // Bind then drop to get a port nothing is listening on.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = PickaxeClient::with_base_url(format!("http://{}", addr));
    let request = BackendRequest::get("/studio/product/list");
    match client.send(&request, "test-key").await.unwrap_err() {
        ApiError::Transport(cause) => assert!(!cause.is_empty()),
        other => panic!("Expected Transport error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_request_carries_bearer_and_content_type() {
    let (base, handle) = serve_once(
        "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: 2\r\nConnection: close\r\n\r\n{}",
    )
    .await;

    let client = PickaxeClient::with_base_url(base);
    let request = Operation::DocList {
        skip: None,
        take: None,
    }
    .to_request();
    client.send(&request, "secret-key").await.unwrap();

    let head = handle.await.unwrap().to_lowercase();
    assert!(head.starts_with("get /studio/document/list?skip=0&take=10 "));
    assert!(head.contains("authorization: bearer secret-key"));
    assert!(head.contains("content-type: application/json"));
}
