//! 推論サービスとのやり取りに使う型
//!
//! | 画面 | パス | リクエスト | レスポンス |
//! |---|---|---|---|
//! | 記事分類 | POST /predict | `{"texts": [..]}` | `{"predicted_categories": [..]}` |
//! | 感情分析 | POST /analyze | `{"text": ".."}` | `{"sentiment": "..", "polarity": 0.0}` |
//! | 画像分類 | POST /classify_image | multipart `image` | `[{"label", "description", "probability"}]` |

use serde::{Deserialize, Serialize};

pub const PREDICT_PATH: &str = "/predict";
pub const ANALYZE_PATH: &str = "/analyze";
pub const CLASSIFY_IMAGE_PATH: &str = "/classify_image";

/// multipartのフィールド名
pub const IMAGE_FIELD: &str = "image";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictRequest {
    pub texts: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictResponse {
    pub predicted_categories: Vec<String>,

    /// サーバーがリクエストの texts をそのまま返す場合がある
    #[serde(default)]
    pub texts: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentResponse {
    pub sentiment: String,
    pub polarity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImagePrediction {
    pub label: String,
    #[serde(default)]
    pub description: String,
    pub probability: f64,
}
