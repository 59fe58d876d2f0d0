//! エラー型定義
//!
//! 画面コントローラの境界で捕捉されるエラーは全て `ToolError` に集約し、
//! `RequestState::Failed` に格納する。

use serde::Serialize;
use thiserror::Error;

/// エラー種別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorKind {
    /// 入力検証エラー（送信前に検出、通信は発生しない）
    Validation,
    /// サーバーから応答が得られなかった（接続失敗、タイムアウトなど）
    Transport,
    /// リクエストを組み立てられなかった（送信していない）
    Request,
    /// 応答はあったが失敗ステータス
    Server,
    /// 応答ボディを解釈できない
    Parse,
}

/// 画面単位のエラー
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{}", render(.kind, .detail))]
pub struct ToolError {
    pub kind: ErrorKind,
    pub detail: Option<String>,
}

fn render(kind: &ErrorKind, detail: &Option<String>) -> String {
    match (kind, detail.as_deref()) {
        (ErrorKind::Validation, Some(detail)) => detail.to_string(),
        (ErrorKind::Validation, None) => "Please enter valid text.".to_string(),
        (ErrorKind::Transport, _) => {
            "No response from server. Please check your connection.".to_string()
        }
        (ErrorKind::Server, _) => "Failed to fetch data from server. Please try again.".to_string(),
        (ErrorKind::Request | ErrorKind::Parse, Some(detail)) => {
            format!("An error occurred: {}", detail)
        }
        (ErrorKind::Request, None) => "An error occurred while preparing the request.".to_string(),
        (ErrorKind::Parse, None) => "An error occurred while reading the server response.".to_string(),
    }
}

impl ToolError {
    pub fn new(kind: ErrorKind, detail: Option<String>) -> Self {
        Self { kind, detail }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, Some(message.into()))
    }

    pub fn transport(detail: impl Into<String>) -> Self {
        Self::new(ErrorKind::Transport, Some(detail.into()))
    }

    pub fn request(detail: impl Into<String>) -> Self {
        Self::new(ErrorKind::Request, Some(detail.into()))
    }

    pub fn server(detail: impl Into<String>) -> Self {
        Self::new(ErrorKind::Server, Some(detail.into()))
    }

    pub fn parse(detail: impl Into<String>) -> Self {
        Self::new(ErrorKind::Parse, Some(detail.into()))
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }
}

impl From<serde_json::Error> for ToolError {
    fn from(err: serde_json::Error) -> Self {
        ToolError::parse(err.to_string())
    }
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, ToolError>;
