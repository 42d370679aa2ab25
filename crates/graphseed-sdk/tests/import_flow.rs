//! End-to-end import flow against a stub server
//!
//! Checks the wire contract of bulk import: generated records travel in the
//! `params` map of the request body, while the query text carries only the
//! `$rows` placeholder.

use graphseed::{DatasetProfile, Generator};
use graphseed_sdk::{ConnectionConfig, DuplicatePolicy, ImportClient, RemoteClient};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::mpsc;

async fn spawn_capturing_stub(body_tx: mpsc::UnboundedSender<String>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        loop {
            let Ok((mut socket, _)) = listener.accept().await else {
                break;
            };
            let mut data = Vec::new();
            let mut buf = [0u8; 8192];
            loop {
                let Ok(n) = socket.read(&mut buf).await else {
                    break;
                };
                if n == 0 {
                    break;
                }
                data.extend_from_slice(&buf[..n]);
                let text = String::from_utf8_lossy(&data);
                if let Some(header_end) = text.find("\r\n\r\n") {
                    let content_length = text
                        .lines()
                        .find_map(|l| {
                            l.to_ascii_lowercase()
                                .strip_prefix("content-length:")
                                .map(str::trim)
                                .and_then(|v| v.parse::<usize>().ok())
                        })
                        .unwrap_or(0);
                    if data.len() >= header_end + 4 + content_length {
                        break;
                    }
                }
            }
            let request = String::from_utf8_lossy(&data).into_owned();
            let body = if request.starts_with("GET /api/status") {
                r#"{"status":"healthy","version":"0.1.0"}"#
            } else {
                if let Some(pos) = request.find("\r\n\r\n") {
                    let _ = body_tx.send(request[pos + 4..].to_string());
                }
                r#"{"columns":[],"records":[]}"#
            };
            let response = format!(
                "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                body.len(),
                body
            );
            let _ = socket.write_all(response.as_bytes()).await;
            let _ = socket.shutdown().await;
        }
    });
    format!("http://{}", addr)
}

#[tokio::test]
async fn import_sends_records_as_parameters() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let base = spawn_capturing_stub(tx).await;

    let mut generator = Generator::new(DatasetProfile::cricket(), 11).unwrap();
    let dataset = generator.generate(4, 0);

    let config = ConnectionConfig::new(&base, "admin", "secret");
    let client = RemoteClient::connect(&config).await.unwrap();
    let imported = client
        .import_subjects("Player", &dataset.subjects, DuplicatePolicy::Create)
        .await
        .unwrap();
    assert_eq!(imported, 4);
    client.close();

    let body: serde_json::Value = serde_json::from_str(&rx.recv().await.unwrap()).unwrap();
    let query = body["query"].as_str().unwrap();
    assert!(query.contains("UNWIND $rows"));
    // Record values live in params, never in the query text.
    assert!(!query.contains("Player 1"));
    let rows = body["params"]["rows"].as_array().unwrap();
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[0]["name"], "Player 1");
    assert!(rows[0].get("category").is_some());
}

#[tokio::test]
async fn merge_import_round_trips_occurrences() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let base = spawn_capturing_stub(tx).await;

    let mut generator = Generator::new(DatasetProfile::adverse_events(), 23).unwrap();
    let dataset = generator.generate(0, 6);

    let config = ConnectionConfig::new(&base, "admin", "secret");
    let client = RemoteClient::connect(&config).await.unwrap();
    client
        .import_occurrences("Report", &dataset.occurrences, DuplicatePolicy::Merge)
        .await
        .unwrap();
    client.close();

    let body: serde_json::Value = serde_json::from_str(&rx.recv().await.unwrap()).unwrap();
    assert!(body["query"].as_str().unwrap().contains("MERGE (o:Report {id: row.id})"));
    let rows = body["params"]["rows"].as_array().unwrap();
    assert_eq!(rows.len(), 6);
    assert_eq!(rows[0]["id"], 1);
}
