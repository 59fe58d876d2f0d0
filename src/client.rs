//! 推論サービスへの送信
//!
//! Screen が組み立てた Submission を HTTP で送り、成功時のボディ、
//! または種別付きのエラーを返す。パースは Screen 側で行う。

use ai_tools_common::{Payload, Screen, Settle, Submission, Tool, ToolError};
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::{AiToolsError, Result};

/// エラー詳細に含めるレスポンス本文の最大文字数
const ERROR_BODY_PREVIEW: usize = 200;

#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, submission: &Submission) -> std::result::Result<Vec<u8>, ToolError>;
}

pub struct HttpTransport {
    http: Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(config: &Config, server_override: Option<&str>) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(seconds) = config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(seconds));
        }
        let http = builder
            .build()
            .map_err(|e| AiToolsError::Http(e.to_string()))?;
        Ok(Self::with_client(
            config.resolve_server_url(server_override),
            http,
        ))
    }

    pub fn with_client(base_url: impl Into<String>, http: Client) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url_for(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, submission: &Submission) -> std::result::Result<Vec<u8>, ToolError> {
        let url = self.url_for(submission.endpoint);
        debug!(%url, generation = submission.ticket.generation(), "POST");

        let request = match &submission.payload {
            Payload::Json(body) => self.http.post(&url).json(body),
            Payload::Multipart { field, blob } => {
                let part = Part::bytes(blob.bytes.clone())
                    .file_name(blob.file_name.clone())
                    .mime_str(&blob.mime_type)
                    .map_err(|e| ToolError::request(format!("invalid MIME type: {}", e)))?;
                self.http.post(&url).multipart(Form::new().part(*field, part))
            }
        };

        let response = request.send().await.map_err(|e| {
            warn!(%url, error = %e, "no response from server");
            ToolError::transport(e.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(%url, %status, "server returned failure status");
            return Err(ToolError::server(format!(
                "HTTP {}: {}",
                status,
                body.chars().take(ERROR_BODY_PREVIEW).collect::<String>()
            )));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ToolError::server(format!("failed to read response body: {}", e)))?;
        debug!(%url, %status, len = bytes.len(), "response received");
        Ok(bytes.to_vec())
    }
}

/// 送信開始から結果反映までを1回で行う
///
/// - `Err`: 入力検証エラー（送信していない）
/// - `Ok(None)`: 送信するものがなかった
/// - `Ok(Some(settle))`: 応答を反映した、または古い応答として破棄した
pub async fn submit<T: Tool>(
    screen: &mut Screen<T>,
    transport: &dyn Transport,
) -> std::result::Result<Option<Settle>, ToolError> {
    let Some(submission) = screen.begin_submit()? else {
        return Ok(None);
    };
    let outcome = transport.send(&submission).await;
    Ok(Some(screen.complete(submission.ticket, outcome)))
}
