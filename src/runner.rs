use ai_tools_common::{RequestState, Screen, Tool};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use crate::client::{self, Transport};
use crate::error::Result;

/// 1回送信して結果を返す（送信中はスピナー表示）
///
/// 送信するものがなければ `Ok(None)`、失敗時は画面に記録されたエラーを返す。
pub async fn run<T: Tool>(
    screen: &mut Screen<T>,
    transport: &dyn Transport,
    message: &'static str,
) -> Result<Option<T::Output>> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg}").unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(message);
    spinner.enable_steady_tick(Duration::from_millis(100));

    let settled = client::submit(screen, transport).await;
    spinner.finish_and_clear();

    if settled?.is_none() {
        return Ok(None);
    }

    match screen.state() {
        RequestState::Succeeded(output) => Ok(Some(output.clone())),
        RequestState::Failed(err) => Err(err.clone().into()),
        RequestState::Idle | RequestState::Pending => Ok(None),
    }
}
