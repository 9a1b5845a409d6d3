//! Tool dispatch server
//!
//! A small HTTP front for the tool runner:
//!
//! - `GET /tools` lists the registered tool definitions
//! - `POST /tools/<name>` invokes a tool with a JSON-object body of arguments
//!
//! Tools are stateless, so each connection is handled on its own task with
//! no shared mutable state beyond the read-only runner.

use std::sync::Arc;

use serde_json::{json, Value};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use url::Url;

use crate::config::Config;
use crate::error::Error;
use crate::tools::ToolRunner;
use crate::Result;

/// Largest request we accept, headers and body together.
const MAX_REQUEST_BYTES: usize = 64 * 1024;

/// A parsed incoming request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub method: String,
    pub path: String,
    pub body: String,
}

/// Bind the configured address and serve tool calls until the process exits.
pub async fn run(config: &Config) -> Result<()> {
    let runner = Arc::new(ToolRunner::new_with_defaults(config)?);

    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr).await
        .map_err(|e| Error::Server(format!("Failed to bind {}: {}", addr, e)))?;

    tracing::info!("Tool server listening on http://{}", addr);

    loop {
        let (socket, peer) = listener.accept().await
            .map_err(|e| Error::Server(format!("Failed to accept connection: {}", e)))?;

        let runner = runner.clone();
        tokio::spawn(async move {
            if let Err(e) = handle_connection(socket, runner).await {
                tracing::debug!("Connection from {} failed: {}", peer, e);
            }
        });
    }
}

async fn handle_connection(mut socket: TcpStream, runner: Arc<ToolRunner>) -> Result<()> {
    let raw = read_request(&mut socket).await?;

    let (status, body) = match parse_request(&raw) {
        Ok(request) => dispatch(&runner, &request).await,
        Err(e) => (
            "400 Bad Request",
            json!({"error": "bad_request", "message": e.to_string()}),
        ),
    };

    let payload = body.to_string();
    let response = format!(
        "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        payload.len(),
        payload
    );

    socket.write_all(response.as_bytes()).await?;
    socket.shutdown().await?;

    Ok(())
}

/// Read a full request: headers, then as many body bytes as Content-Length says.
async fn read_request(socket: &mut TcpStream) -> Result<String> {
    let mut data = Vec::new();
    let mut chunk = [0u8; 4096];

    loop {
        let n = socket.read(&mut chunk).await?;
        if n == 0 {
            break;
        }
        data.extend_from_slice(&chunk[..n]);

        if data.len() > MAX_REQUEST_BYTES {
            return Err(Error::Server("Request too large".to_string()));
        }

        if let Some(header_end) = find_header_end(&data) {
            let headers = String::from_utf8_lossy(&data[..header_end]);
            let content_length = parse_content_length(&headers).unwrap_or(0);
            if data.len() >= header_end + 4 + content_length {
                break;
            }
        }
    }

    Ok(String::from_utf8_lossy(&data).into_owned())
}

fn find_header_end(data: &[u8]) -> Option<usize> {
    data.windows(4).position(|w| w == b"\r\n\r\n")
}

fn parse_content_length(headers: &str) -> Option<usize> {
    headers.lines().find_map(|line| {
        let (name, value) = line.split_once(':')?;
        if name.eq_ignore_ascii_case("content-length") {
            value.trim().parse().ok()
        } else {
            None
        }
    })
}

/// Parse the request line and split off the body.
pub fn parse_request(raw: &str) -> Result<Request> {
    let first_line = raw.lines().next()
        .ok_or_else(|| Error::Server("Empty request".to_string()))?;

    // Parse: POST /tools/calculate_discount_tool HTTP/1.1
    let parts: Vec<&str> = first_line.split_whitespace().collect();
    if parts.len() < 2 {
        return Err(Error::Server("Invalid request line".to_string()));
    }

    let method = parts[0].to_uppercase();

    // Normalize the path through a URL parse so query strings don't leak in.
    let full_url = format!("http://localhost{}", parts[1]);
    let url = Url::parse(&full_url)
        .map_err(|e| Error::Server(format!("Failed to parse request path: {}", e)))?;

    let body = raw.split_once("\r\n\r\n")
        .map(|(_, b)| b.to_string())
        .unwrap_or_default();

    Ok(Request {
        method,
        path: url.path().to_string(),
        body,
    })
}

/// Route a parsed request to the tool runner.
pub async fn dispatch(runner: &ToolRunner, request: &Request) -> (&'static str, Value) {
    match (request.method.as_str(), request.path.as_str()) {
        ("GET", "/tools") => ("200 OK", json!(runner.definitions())),
        ("POST", path) if path.starts_with("/tools/") => {
            let name = &path["/tools/".len()..];
            call_tool(runner, name, &request.body).await
        }
        _ => (
            "404 Not Found",
            json!({"error": "not_found", "path": request.path}),
        ),
    }
}

async fn call_tool(runner: &ToolRunner, name: &str, body: &str) -> (&'static str, Value) {
    if !runner.has(name) {
        return (
            "404 Not Found",
            json!({"error": "unknown_tool", "name": name}),
        );
    }

    let params: Value = if body.trim().is_empty() {
        json!({})
    } else {
        match serde_json::from_str(body) {
            Ok(value) => value,
            Err(e) => {
                return (
                    "400 Bad Request",
                    json!({"error": "invalid_json", "message": e.to_string()}),
                );
            }
        }
    };

    match runner.execute(name, params).await {
        Ok(result) => ("200 OK", result),
        Err(e) => {
            tracing::warn!("Tool {} failed: {}", name, e);
            (
                "400 Bad Request",
                json!({"error": "tool_error", "message": e.to_string()}),
            )
        }
    }
}
