// Shared helpers for integration tests: an in-process fake of the
// Thai-ASR backend and WAV fixture generation.
#![allow(dead_code)]

use anyhow::Result;
use axum::{
    extract::{Multipart, State},
    http::{header, HeaderName, StatusCode},
    routing::post,
    Router,
};
use std::io::Cursor;
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::sync::Mutex;

/// One multipart field as the fake backend received it
#[derive(Debug, Clone)]
pub struct ReceivedField {
    pub name: String,
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

#[derive(Clone)]
struct BackendState {
    status: StatusCode,
    body: String,
    received: Arc<Mutex<Vec<ReceivedField>>>,
}

/// Fake transcription service answering every upload with a fixed status and body
pub struct FakeBackend {
    pub base_url: String,
    received: Arc<Mutex<Vec<ReceivedField>>>,
}

impl FakeBackend {
    pub async fn start(status: u16, body: &str) -> Result<Self> {
        let received = Arc::new(Mutex::new(Vec::new()));
        let state = BackendState {
            status: StatusCode::from_u16(status)?,
            body: body.to_string(),
            received: Arc::clone(&received),
        };

        let app = Router::new()
            .route("/api/file-asr/upload", post(upload))
            .with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Ok(Self {
            base_url: format!("http://{}", addr),
            received,
        })
    }

    pub async fn received(&self) -> Vec<ReceivedField> {
        self.received.lock().await.clone()
    }
}

async fn upload(
    State(state): State<BackendState>,
    mut multipart: Multipart,
) -> (StatusCode, [(HeaderName, &'static str); 1], String) {
    while let Ok(Some(field)) = multipart.next_field().await {
        let name = field.name().unwrap_or_default().to_string();
        let file_name = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        let bytes = field.bytes().await.map(|b| b.to_vec()).unwrap_or_default();

        state.received.lock().await.push(ReceivedField {
            name,
            file_name,
            content_type,
            bytes,
        });
    }

    (
        state.status,
        [(header::CONTENT_TYPE, "application/json")],
        state.body.clone(),
    )
}

/// Backend that reads one request, sends the status line and headers
/// promising more body than it delivers, then closes the connection.
pub async fn start_truncated_backend(status_line: &'static str) -> Result<String> {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        let Ok((mut socket, _)) = listener.accept().await else {
            return;
        };

        let mut request = Vec::new();
        let mut buf = [0u8; 4096];
        while !request_complete(&request) {
            match socket.read(&mut buf).await {
                Ok(0) | Err(_) => return,
                Ok(n) => request.extend_from_slice(&buf[..n]),
            }
        }

        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: 100\r\n\r\n{{\"detail\"",
            status_line
        );
        let _ = socket.write_all(response.as_bytes()).await;
        let _ = socket.shutdown().await;
    });

    Ok(format!("http://{}", addr))
}

/// Whether `request` holds a full HTTP/1.1 request (sized or chunked body).
fn request_complete(request: &[u8]) -> bool {
    let Some(head_end) = request.windows(4).position(|w| w == b"\r\n\r\n") else {
        return false;
    };
    let head = String::from_utf8_lossy(&request[..head_end]).to_ascii_lowercase();
    let body = &request[head_end + 4..];

    let content_length = head
        .lines()
        .find_map(|line| line.strip_prefix("content-length:"))
        .and_then(|value| value.trim().parse::<usize>().ok());

    match content_length {
        Some(len) => body.len() >= len,
        None => body.ends_with(b"0\r\n\r\n"),
    }
}

/// Base URL on which nothing is listening
pub fn unreachable_base_url() -> Result<String> {
    let listener = std::net::TcpListener::bind("127.0.0.1:0")?;
    let addr = listener.local_addr()?;
    drop(listener);
    Ok(format!("http://{}", addr))
}

/// Silent 16kHz mono 16-bit WAV of the given length
pub fn wav_bytes(seconds: u32) -> Result<Vec<u8>> {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: 16000,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };

    let mut cursor = Cursor::new(Vec::new());
    {
        let mut writer = hound::WavWriter::new(&mut cursor, spec)?;
        for _ in 0..(16000 * seconds) {
            writer.write_sample(0i16)?;
        }
        writer.finalize()?;
    }

    Ok(cursor.into_inner())
}
