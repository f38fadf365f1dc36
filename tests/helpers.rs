//! Shared helpers for integration tests.
//!
//! Included by each test file via `mod helpers;`.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// IANA-style listing used as the happy-path response body.
pub const SAMPLE_LISTING: &str = "# Version 2024061000, Last Updated Mon Jun 10 07:07:01 2024 UTC\nAAA\nCOM\nORG\n";

/// A canned HTTP response.
#[derive(Debug, Clone)]
pub struct StubResponse {
    pub status: u16,
    pub body: String,
}

impl StubResponse {
    pub fn ok(body: &str) -> Self {
        Self {
            status: 200,
            body: body.to_string(),
        }
    }

    pub fn status(status: u16) -> Self {
        Self {
            status,
            body: String::new(),
        }
    }
}

/// Local HTTP server answering each request with the next scripted response.
///
/// Once the script is exhausted the last response is repeated.
pub struct StubServer {
    pub url: String,
    hits: Arc<AtomicUsize>,
}

impl StubServer {
    pub async fn start(responses: Vec<StubResponse>) -> Self {
        assert!(!responses.is_empty(), "stub needs at least one response");
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind");
        let addr = listener.local_addr().expect("Failed to get address");
        let hits = Arc::new(AtomicUsize::new(0));

        let counter = Arc::clone(&hits);
        tokio::spawn(async move {
            loop {
                let Ok((mut socket, _)) = listener.accept().await else {
                    break;
                };
                let index = counter.fetch_add(1, Ordering::SeqCst);
                let response = responses[index.min(responses.len() - 1)].clone();

                let mut request = Vec::new();
                let mut buf = [0u8; 1024];
                while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                    match socket.read(&mut buf).await {
                        Ok(0) | Err(_) => break,
                        Ok(n) => request.extend_from_slice(&buf[..n]),
                    }
                }

                let payload = format!(
                    "HTTP/1.1 {} Stub\r\nContent-Type: text/plain\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    response.status,
                    response.body.len(),
                    response.body
                );
                let _ = socket.write_all(payload.as_bytes()).await;
                let _ = socket.shutdown().await;
            }
        });

        Self {
            url: format!("http://{}/tlds-alpha-by-domain.txt", addr),
            hits,
        }
    }

    /// Number of requests served so far.
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}
