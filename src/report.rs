//! 結果の標準出力表示

use ai_tools_common::{ArticlePrediction, ImagePredictionView, SentimentView};
use serde::Serialize;

use crate::error::{AiToolsError, Result};

/// 棒グラフの片側の最大幅（文字数）
const BAR_WIDTH: usize = 20;

pub trait Render {
    fn render_text(&self) -> String;
}

impl Render for Vec<ArticlePrediction> {
    fn render_text(&self) -> String {
        if self.is_empty() {
            return "No results yet".to_string();
        }
        let mut out = String::from("Predicted Categories\n");
        for prediction in self {
            out.push_str(&format!("  {}\n", prediction));
        }
        out
    }
}

impl Render for SentimentView {
    fn render_text(&self) -> String {
        format!(
            "Sentiment: {}\nPolarity: {}\n{}\n  {} {}\n",
            self.sentiment,
            self.polarity_text,
            self.chart.title,
            self.chart.labels.first().map(String::as_str).unwrap_or("Polarity"),
            polarity_bar(self.chart.data.first().copied().unwrap_or_default()),
        )
    }
}

impl Render for Vec<ImagePredictionView> {
    fn render_text(&self) -> String {
        if self.is_empty() {
            return "No predictions".to_string();
        }
        let mut out = String::from("Predictions:\n");
        for view in self {
            out.push_str(&format!("  {}\n", view));
        }
        out
    }
}

/// -1〜1 の値を中央基準の棒で表す
pub fn polarity_bar(value: f64) -> String {
    let clamped = value.clamp(-1.0, 1.0);
    let len = (clamped.abs() * BAR_WIDTH as f64).round() as usize;
    let (left, right) = if clamped < 0.0 {
        (
            format!("{}{}", " ".repeat(BAR_WIDTH - len), "█".repeat(len)),
            " ".repeat(BAR_WIDTH),
        )
    } else {
        (
            " ".repeat(BAR_WIDTH),
            format!("{}{}", "█".repeat(len), " ".repeat(BAR_WIDTH - len)),
        )
    };
    format!("[{}|{}]", left, right)
}

pub fn print_output<T: Render + Serialize>(output: &T, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(output)?);
    } else {
        print!("{}", output.render_text());
    }
    Ok(())
}

/// 失敗時に stderr へ出す1行
///
/// 画面のエラーは `ToolError` の表示文言をそのまま使う。
pub fn error_line(err: &AiToolsError) -> String {
    format!("✖ {}", err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ai_tools_common::presenter::{present_articles, present_sentiment};
    use ai_tools_common::types::SentimentResponse;

    #[test]
    fn test_error_line_uses_screen_message() {
        let err = AiToolsError::from(ai_tools_common::ToolError::transport(
            "error sending request for url (http://127.0.0.1:1/analyze)",
        ));
        assert_eq!(
            error_line(&err),
            "✖ No response from server. Please check your connection."
        );

        let err = AiToolsError::FileNotFound("cat.png".into());
        assert_eq!(error_line(&err), "✖ ファイルが見つかりません: cat.png");
    }

    #[test]
    fn test_article_text() {
        let preds = present_articles(vec!["Business".into()], 1);
        assert_eq!(
            preds.render_text(),
            "Predicted Categories\n  Article 1: Business\n"
        );
        let empty: Vec<ArticlePrediction> = Vec::new();
        assert_eq!(empty.render_text(), "No results yet");
    }

    #[test]
    fn test_sentiment_text() {
        let view = present_sentiment(SentimentResponse {
            sentiment: "Positive".into(),
            polarity: 0.82,
        });
        let text = view.render_text();
        assert!(text.starts_with("Sentiment: Positive\nPolarity: 0.82\n"));
        assert!(text.contains("Sentiment Polarity Chart"));
    }

    #[test]
    fn test_polarity_bar() {
        let half = BAR_WIDTH / 2;
        let bar = polarity_bar(0.5);
        assert_eq!(bar.matches('█').count(), half);
        assert!(bar.starts_with(&format!("[{}|", " ".repeat(BAR_WIDTH))));

        let bar = polarity_bar(-1.0);
        assert_eq!(bar, format!("[{}|{}]", "█".repeat(BAR_WIDTH), " ".repeat(BAR_WIDTH)));

        assert_eq!(polarity_bar(3.0).matches('█').count(), BAR_WIDTH);
    }
}
