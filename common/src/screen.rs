//! 画面コントローラ
//!
//! 入力・リクエスト状態・表示結果を1画面分まとめて所有する。
//! 通信そのものは行わず、送信内容（Submission）を呼び出し側に渡し、
//! 応答（生のボディ）を `complete` で受け取る。

use tracing::{debug, info, warn};

use crate::error::ToolError;
use crate::lifecycle::{RequestState, Settle, SubmitLifecycle, Ticket};
use crate::tool::{ArticleTool, ImageTool, Payload, SentimentTool, Tool};

/// 送信1回分
#[derive(Debug, Clone)]
pub struct Submission {
    pub ticket: Ticket,
    pub endpoint: &'static str,
    pub payload: Payload,
}

pub struct Screen<T: Tool> {
    input: T::Input,
    lifecycle: SubmitLifecycle<T::Output>,
    result: Option<T::Output>,
}

pub type ArticleScreen = Screen<ArticleTool>;
pub type SentimentScreen = Screen<SentimentTool>;
pub type ImageScreen = Screen<ImageTool>;

impl<T: Tool> Screen<T> {
    pub fn new() -> Self {
        Self {
            input: T::initial_input(),
            lifecycle: SubmitLifecycle::new(),
            result: None,
        }
    }

    pub fn input(&self) -> &T::Input {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut T::Input {
        &mut self.input
    }

    pub fn state(&self) -> &RequestState<T::Output> {
        self.lifecycle.state()
    }

    pub fn is_loading(&self) -> bool {
        self.lifecycle.state().is_pending()
    }

    pub fn error(&self) -> Option<&ToolError> {
        self.lifecycle.state().error()
    }

    /// 最後に成功した結果（失敗や再送信中も保持し、リセットで消える）
    pub fn result(&self) -> Option<&T::Output> {
        self.result.as_ref()
    }

    pub fn generation(&self) -> u64 {
        self.lifecycle.generation()
    }

    /// 送信開始
    ///
    /// 入力検証に失敗した場合は Failed に遷移し、送信内容は返さない。
    /// 送信するものがない場合は状態を変えずに `Ok(None)`。
    /// 成功時は戻る前に Pending へ遷移済み。
    pub fn begin_submit(&mut self) -> Result<Option<Submission>, ToolError> {
        let payload = match T::build_payload(&self.input) {
            Ok(Some(payload)) => payload,
            Ok(None) => {
                debug!(screen = T::NAME, "nothing to submit");
                return Ok(None);
            }
            Err(err) => {
                warn!(screen = T::NAME, error = %err, "submission rejected");
                self.lifecycle.reject(err.clone());
                return Err(err);
            }
        };

        let ticket = self.lifecycle.begin(T::item_count(&self.input));
        info!(
            screen = T::NAME,
            endpoint = T::ENDPOINT,
            generation = ticket.generation(),
            "submission started"
        );
        Ok(Some(Submission {
            ticket,
            endpoint: T::ENDPOINT,
            payload,
        }))
    }

    /// 応答を反映
    ///
    /// `outcome` は成功時のレスポンスボディ、または通信層のエラー。
    pub fn complete(&mut self, ticket: Ticket, outcome: Result<Vec<u8>, ToolError>) -> Settle {
        if !self.lifecycle.is_current(ticket) {
            debug!(
                screen = T::NAME,
                generation = ticket.generation(),
                current = self.lifecycle.generation(),
                "discarding stale response"
            );
            return Settle::Stale;
        }

        let projected = outcome.and_then(|body| {
            let response: T::Response = serde_json::from_slice(&body)?;
            Ok(T::project(response, ticket.item_count()))
        });

        match &projected {
            Ok(output) => {
                info!(screen = T::NAME, generation = ticket.generation(), "submission succeeded");
                self.result = Some(output.clone());
            }
            Err(err) => {
                warn!(
                    screen = T::NAME,
                    kind = ?err.kind(),
                    detail = err.detail().unwrap_or_default(),
                    "submission failed"
                );
            }
        }
        self.lifecycle.settle(ticket, projected)
    }

    /// 入力・結果・状態を初期化し、実行中の送信を無効化する
    pub fn reset(&mut self) {
        debug!(screen = T::NAME, phase = self.lifecycle.state().phase(), "reset");
        self.input = T::initial_input();
        self.result = None;
        self.lifecycle.reset();
    }
}

impl<T: Tool> Default for Screen<T> {
    fn default() -> Self {
        Self::new()
    }
}
