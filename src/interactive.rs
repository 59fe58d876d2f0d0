//! 対話式の記事入力
//!
//! 記事欄の追加・削除・編集・送信・リセットを繰り返す。

use ai_tools_common::{ArticleScreen, TextInputs};
use dialoguer::{Input, Select};

use crate::client::Transport;
use crate::error::{AiToolsError, Result};
use crate::report;
use crate::runner;

/// 対話アクション
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArticleAction {
    /// 記事を編集
    Edit,
    /// 記事欄を追加
    Add,
    /// 記事欄を削除
    Remove,
    /// 送信
    Submit,
    /// 入力と結果をリセット
    Reset,
    /// 終了
    Quit,
}

impl ArticleAction {
    pub const ALL: [ArticleAction; 6] = [
        ArticleAction::Edit,
        ArticleAction::Add,
        ArticleAction::Remove,
        ArticleAction::Submit,
        ArticleAction::Reset,
        ArticleAction::Quit,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ArticleAction::Edit => "Edit article",
            ArticleAction::Add => "Add article field",
            ArticleAction::Remove => "Remove article field",
            ArticleAction::Submit => "Submit",
            ArticleAction::Reset => "Reset",
            ArticleAction::Quit => "Quit",
        }
    }
}

pub async fn run_interactive_articles(transport: &dyn Transport, json: bool) -> Result<()> {
    let mut screen = ArticleScreen::new();

    loop {
        println!();
        print!("{}", describe_inputs(screen.input()));

        let labels: Vec<&str> = ArticleAction::ALL.iter().map(ArticleAction::label).collect();
        let selected = Select::new()
            .with_prompt("操作")
            .items(&labels)
            .default(0)
            .interact()
            .map_err(|e| AiToolsError::CliExecution(e.to_string()))?;

        match ArticleAction::ALL[selected] {
            ArticleAction::Edit => {
                let index = prompt_index(screen.input(), "編集する記事")?;
                let current = screen.input().get(index).unwrap_or_default().to_string();
                let text: String = Input::new()
                    .with_prompt(format!("Article {}", index + 1))
                    .with_initial_text(current)
                    .allow_empty(true)
                    .interact_text()
                    .map_err(|e| AiToolsError::CliExecution(e.to_string()))?;
                screen.input_mut().update(index, text);
            }
            ArticleAction::Add => screen.input_mut().append(),
            ArticleAction::Remove => {
                let index = prompt_index(screen.input(), "削除する記事")?;
                if !screen.input_mut().remove(index) {
                    println!("  → 記事欄は最低1つ必要です");
                }
            }
            ArticleAction::Submit => {
                match runner::run(&mut screen, transport, "Classifying...").await {
                    Ok(Some(predictions)) => report::print_output(&predictions, json)?,
                    Ok(None) => {}
                    Err(err) => println!("✖ {}", err),
                }
            }
            ArticleAction::Reset => {
                screen.reset();
                println!("  → リセットしました");
            }
            ArticleAction::Quit => break,
        }
    }

    Ok(())
}

/// 入力一覧の表示用テキスト
pub fn describe_inputs(inputs: &TextInputs) -> String {
    let invalid = inputs.invalid_indices();
    let mut out = String::new();
    for (i, text) in inputs.items().iter().enumerate() {
        let marker = if invalid.contains(&i) { "✖" } else { "✔" };
        let preview: String = text.chars().take(60).collect();
        let preview = if preview.is_empty() { "(empty)".to_string() } else { preview };
        out.push_str(&format!("{} Article {}: {}\n", marker, i + 1, preview));
    }
    out
}

fn prompt_index(inputs: &TextInputs, prompt: &str) -> Result<usize> {
    if inputs.len() == 1 {
        return Ok(0);
    }
    let labels: Vec<String> = (1..=inputs.len()).map(|n| format!("Article {}", n)).collect();
    Select::new()
        .with_prompt(prompt)
        .items(&labels)
        .default(0)
        .interact()
        .map_err(|e| AiToolsError::CliExecution(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_inputs_marks_invalid() {
        let mut inputs = TextInputs::new(1);
        inputs.update(0, "Stocks rally today");
        inputs.append();
        let text = describe_inputs(&inputs);
        assert_eq!(
            text,
            "✔ Article 1: Stocks rally today\n✖ Article 2: (empty)\n"
        );
    }

    #[test]
    fn test_action_labels_are_unique() {
        let mut labels: Vec<&str> = ArticleAction::ALL.iter().map(ArticleAction::label).collect();
        labels.sort();
        labels.dedup();
        assert_eq!(labels.len(), ArticleAction::ALL.len());
    }
}
