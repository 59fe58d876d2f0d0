//! 推論結果の表示用変換
//!
//! レスポンスの形の検証は行わない。件数の不一致は警告ログのみ。

use serde::Serialize;
use std::fmt;
use tracing::warn;

use crate::types::{ImagePrediction, SentimentResponse};

/// 記事1件分の分類結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArticlePrediction {
    /// 1始まりの記事番号
    pub number: usize,
    pub category: String,
}

impl fmt::Display for ArticlePrediction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Article {}: {}", self.number, self.category)
    }
}

pub fn present_articles(categories: Vec<String>, submitted: usize) -> Vec<ArticlePrediction> {
    if categories.len() != submitted {
        warn!(
            submitted,
            received = categories.len(),
            "predicted category count does not match submitted articles"
        );
    }
    categories
        .into_iter()
        .enumerate()
        .map(|(i, category)| ArticlePrediction {
            number: i + 1,
            category,
        })
        .collect()
}

/// 棒グラフ用データ（系列1本）
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub title: String,
    pub labels: Vec<String>,
    pub dataset_label: String,
    pub data: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentimentView {
    pub sentiment: String,
    pub polarity: f64,
    /// 小数点以下2桁に丸めた表示文字列
    pub polarity_text: String,
    pub chart: ChartData,
}

pub fn present_sentiment(response: SentimentResponse) -> SentimentView {
    SentimentView {
        polarity_text: format_polarity(response.polarity),
        chart: ChartData {
            title: "Sentiment Polarity Chart".to_string(),
            labels: vec!["Polarity".to_string()],
            dataset_label: "Sentiment Polarity".to_string(),
            data: vec![response.polarity],
        },
        sentiment: response.sentiment,
        polarity: response.polarity,
    }
}

pub fn format_polarity(polarity: f64) -> String {
    format!("{:.2}", polarity)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImagePredictionView {
    pub label: String,
    pub description: String,
    pub probability: f64,
    /// 百分率（小数点以下2桁）
    pub percent_text: String,
}

impl fmt::Display for ImagePredictionView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} - {}%",
            self.label, self.description, self.percent_text
        )
    }
}

pub fn present_images(predictions: Vec<ImagePrediction>) -> Vec<ImagePredictionView> {
    predictions
        .into_iter()
        .map(|p| ImagePredictionView {
            percent_text: format_percent(p.probability),
            label: p.label,
            description: p.description,
            probability: p.probability,
        })
        .collect()
}

/// 0〜1の確率を百分率表記に変換
pub fn format_percent(probability: f64) -> String {
    format!("{:.2}", probability * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_article_lines() {
        let preds = present_articles(vec!["Business".into(), "Sports".into()], 2);
        let lines: Vec<String> = preds.iter().map(ToString::to_string).collect();
        assert_eq!(lines, vec!["Article 1: Business", "Article 2: Sports"]);
    }

    #[test]
    fn test_article_length_mismatch_is_passed_through() {
        let preds = present_articles(vec!["Business".into()], 3);
        assert_eq!(preds.len(), 1);
        assert_eq!(preds[0].number, 1);
    }

    #[test]
    fn test_sentiment_view() {
        let view = present_sentiment(SentimentResponse {
            sentiment: "positive".into(),
            polarity: 0.82,
        });
        assert_eq!(view.polarity_text, "0.82");
        assert_eq!(view.chart.data, vec![0.82]);
        assert_eq!(view.chart.labels, vec!["Polarity"]);
        assert_eq!(view.chart.dataset_label, "Sentiment Polarity");
    }

    #[test]
    fn test_format_polarity_rounds() {
        assert_eq!(format_polarity(0.8249), "0.82");
        assert_eq!(format_polarity(-0.5), "-0.50");
        assert_eq!(format_polarity(1.0), "1.00");
    }

    #[test]
    fn test_format_percent_has_no_float_noise() {
        // 0.1234 * 100 は浮動小数点で 12.340000000000002 になる
        assert_eq!(format_percent(0.1234), "12.34");
        assert_eq!(format_percent(1.0), "100.00");
        assert_eq!(format_percent(0.0), "0.00");
    }

    #[test]
    fn test_image_view_display() {
        let views = present_images(vec![ImagePrediction {
            label: "n02123045".into(),
            description: "tabby".into(),
            probability: 0.5,
        }]);
        assert_eq!(views[0].to_string(), "n02123045: tabby - 50.00%");
    }
}
