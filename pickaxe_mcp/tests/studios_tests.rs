mod helpers;

use helpers::{config, get_text, is_success, unreachable_server};
use pickaxe_mcp::tools::StudiosListParams;
use rmcp::handler::server::wrapper::Parameters;

#[tokio::test]
async fn test_single_studio_is_reported_as_default() {
    let server = unreachable_server(config(&[("ACME", "key-a")], None)).await;

    let result = server
        .studios_list(Parameters(StudiosListParams {}))
        .await
        .unwrap();

    assert!(is_success(&result));
    let value: serde_json::Value = serde_json::from_str(&get_text(&result)).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "studios": ["ACME"],
            "default": "ACME",
            "count": 1,
        })
    );
}

#[tokio::test]
async fn test_multiple_studios_without_default() {
    let server =
        unreachable_server(config(&[("ACME", "key-a"), ("GLOBEX", "key-g")], None)).await;

    let result = server
        .studios_list(Parameters(StudiosListParams {}))
        .await
        .unwrap();

    assert!(is_success(&result));
    let value: serde_json::Value = serde_json::from_str(&get_text(&result)).unwrap();
    assert_eq!(value["studios"], serde_json::json!(["ACME", "GLOBEX"]));
    assert_eq!(value["default"], serde_json::Value::Null);
    assert_eq!(value["count"], 2);
}

#[tokio::test]
async fn test_configured_default_is_reported() {
    let server = unreachable_server(config(
        &[("ACME", "key-a"), ("GLOBEX", "key-g")],
        Some("GLOBEX"),
    ))
    .await;

    let result = server
        .studios_list(Parameters(StudiosListParams {}))
        .await
        .unwrap();

    assert!(is_success(&result));
    let value: serde_json::Value = serde_json::from_str(&get_text(&result)).unwrap();
    assert_eq!(value["default"], "GLOBEX");
}
