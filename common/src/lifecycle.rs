//! 送信ライフサイクル
//!
//! Idle → Pending → Succeeded / Failed の状態遷移を管理する。
//! 送信ごとに世代番号を発行し、最新世代以外の結果は破棄する。
//! reset も世代を進めるため、リセット前に発行した送信の遅延応答は反映されない。

use crate::error::ToolError;

/// 画面ごとのリクエスト状態
#[derive(Debug, Clone, PartialEq)]
pub enum RequestState<T> {
    Idle,
    Pending,
    Succeeded(T),
    Failed(ToolError),
}

impl<T> RequestState<T> {
    pub fn is_pending(&self) -> bool {
        matches!(self, RequestState::Pending)
    }

    pub fn error(&self) -> Option<&ToolError> {
        match self {
            RequestState::Failed(err) => Some(err),
            _ => None,
        }
    }

    pub fn success(&self) -> Option<&T> {
        match self {
            RequestState::Succeeded(value) => Some(value),
            _ => None,
        }
    }

    /// ログ出力用の状態名
    pub fn phase(&self) -> &'static str {
        match self {
            RequestState::Idle => "idle",
            RequestState::Pending => "pending",
            RequestState::Succeeded(_) => "succeeded",
            RequestState::Failed(_) => "failed",
        }
    }
}

/// 送信1回分の引換券
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket {
    generation: u64,
    item_count: usize,
}

impl Ticket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// 送信時の入力件数
    pub fn item_count(&self) -> usize {
        self.item_count
    }
}

/// 結果適用の可否
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settle {
    Applied,
    Stale,
}

#[derive(Debug, Clone)]
pub struct SubmitLifecycle<T> {
    state: RequestState<T>,
    generation: u64,
}

impl<T> SubmitLifecycle<T> {
    pub fn new() -> Self {
        Self {
            state: RequestState::Idle,
            generation: 0,
        }
    }

    pub fn state(&self) -> &RequestState<T> {
        &self.state
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Pending へ遷移し新しい世代の引換券を発行
    pub fn begin(&mut self, item_count: usize) -> Ticket {
        self.generation += 1;
        self.state = RequestState::Pending;
        Ticket {
            generation: self.generation,
            item_count,
        }
    }

    /// 送信前に失敗させる（入力検証エラーなど）
    ///
    /// 世代を進めるので、先行する送信の応答はこの失敗を上書きしない。
    pub fn reject(&mut self, error: ToolError) {
        self.generation += 1;
        self.state = RequestState::Failed(error);
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.generation == self.generation && self.state.is_pending()
    }

    /// 応答を反映する（最新世代の Pending 中のみ）
    pub fn settle(&mut self, ticket: Ticket, outcome: Result<T, ToolError>) -> Settle {
        if !self.is_current(ticket) {
            return Settle::Stale;
        }
        self.state = match outcome {
            Ok(value) => RequestState::Succeeded(value),
            Err(err) => RequestState::Failed(err),
        };
        Settle::Applied
    }

    pub fn reset(&mut self) {
        self.generation += 1;
        self.state = RequestState::Idle;
    }
}

impl<T> Default for SubmitLifecycle<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_begin_is_pending_immediately() {
        let mut lifecycle: SubmitLifecycle<u32> = SubmitLifecycle::new();
        assert_eq!(lifecycle.state(), &RequestState::Idle);
        let ticket = lifecycle.begin(1);
        assert!(lifecycle.state().is_pending());
        assert_eq!(ticket.generation(), 1);
    }

    #[test]
    fn test_settle_success_and_failure() {
        let mut lifecycle = SubmitLifecycle::new();
        let ticket = lifecycle.begin(1);
        assert_eq!(lifecycle.settle(ticket, Ok(7)), Settle::Applied);
        assert_eq!(lifecycle.state().success(), Some(&7));

        let ticket = lifecycle.begin(1);
        let outcome = lifecycle.settle(ticket, Err(ToolError::transport("refused")));
        assert_eq!(outcome, Settle::Applied);
        assert_eq!(
            lifecycle.state().error().map(ToolError::kind),
            Some(ErrorKind::Transport)
        );
    }

    #[test]
    fn test_newer_submit_discards_older_response() {
        let mut lifecycle = SubmitLifecycle::new();
        let first = lifecycle.begin(1);
        let second = lifecycle.begin(1);

        assert_eq!(lifecycle.settle(second, Ok("second")), Settle::Applied);
        assert_eq!(lifecycle.settle(first, Ok("first")), Settle::Stale);
        assert_eq!(lifecycle.state().success(), Some(&"second"));
    }

    #[test]
    fn test_reset_discards_in_flight_response() {
        let mut lifecycle = SubmitLifecycle::new();
        let ticket = lifecycle.begin(1);
        lifecycle.reset();
        assert_eq!(lifecycle.settle(ticket, Ok(1)), Settle::Stale);
        assert_eq!(lifecycle.state(), &RequestState::Idle);
    }

    #[test]
    fn test_settle_twice_is_stale() {
        let mut lifecycle = SubmitLifecycle::new();
        let ticket = lifecycle.begin(1);
        assert_eq!(lifecycle.settle(ticket, Ok(1)), Settle::Applied);
        assert_eq!(lifecycle.settle(ticket, Ok(2)), Settle::Stale);
        assert_eq!(lifecycle.state().success(), Some(&1));
    }

    #[test]
    fn test_reject_supersedes_pending() {
        let mut lifecycle = SubmitLifecycle::new();
        let ticket = lifecycle.begin(1);
        lifecycle.reject(ToolError::validation("bad input"));
        assert_eq!(lifecycle.settle(ticket, Ok(1)), Settle::Stale);
        assert_eq!(lifecycle.state().phase(), "failed");
    }

    #[test]
    fn test_generation_is_monotonic() {
        let mut lifecycle: SubmitLifecycle<()> = SubmitLifecycle::new();
        let a = lifecycle.begin(1).generation();
        lifecycle.reset();
        let b = lifecycle.begin(1).generation();
        assert!(b > a + 1);
    }
}
