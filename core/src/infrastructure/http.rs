use std::time::Duration;

use reqwest::Client;

use crate::domain::common::entities::app_errors::CoreError;

/// HTTP client shared by one adapter; every request inherits `timeout`.
pub fn build_http_client(timeout: Duration) -> Result<Client, CoreError> {
    Client::builder().timeout(timeout).build().map_err(|e| {
        tracing::error!("Failed to build HTTP client: {}", e);
        CoreError::InternalServerError
    })
}

/// Maps a transport failure, timeouts included, to a retryable error.
pub fn map_request_error(service: &str, error: reqwest::Error) -> CoreError {
    if error.is_timeout() {
        tracing::error!("{} request timed out: {}", service, error);
        CoreError::ExternalServiceUnavailable(format!("{} request timed out", service))
    } else {
        tracing::error!("{} request failed: {}", service, error);
        CoreError::ExternalServiceUnavailable(format!("{} request failed", service))
    }
}

/// Local HTTP endpoints for adapter tests.
#[cfg(test)]
pub(crate) mod test_server {
    use tokio::{
        io::{AsyncReadExt, AsyncWriteExt},
        net::{TcpListener, TcpStream},
    };

    async fn read_request(socket: &mut TcpStream) {
        let mut request = Vec::new();
        let mut chunk = [0u8; 8192];

        loop {
            let Ok(read) = socket.read(&mut chunk).await else {
                return;
            };
            if read == 0 {
                return;
            }
            request.extend_from_slice(&chunk[..read]);

            let Some(header_end) = request.windows(4).position(|w| w == b"\r\n\r\n") else {
                continue;
            };
            let headers = String::from_utf8_lossy(&request[..header_end]).to_ascii_lowercase();
            let content_length = headers
                .lines()
                .find_map(|line| line.strip_prefix("content-length:"))
                .and_then(|value| value.trim().parse::<usize>().ok())
                .unwrap_or(0);

            if request.len() >= header_end + 4 + content_length {
                return;
            }
        }
    }

    /// Answers every request with `status` (e.g. `"404 Not Found"`) and an empty body.
    pub(crate) async fn respond_with(status: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            while let Ok((mut socket, _)) = listener.accept().await {
                read_request(&mut socket).await;
                let response = format!(
                    "HTTP/1.1 {status}\r\ncontent-length: 0\r\nconnection: close\r\n\r\n"
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            }
        });

        format!("http://{addr}")
    }

    /// Accepts connections and never answers.
    pub(crate) async fn never_respond() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let mut open = Vec::new();
            while let Ok((socket, _)) = listener.accept().await {
                open.push(socket);
            }
        });

        format!("http://{addr}")
    }
}
