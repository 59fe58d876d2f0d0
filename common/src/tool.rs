//! 画面ごとの差分定義
//!
//! 3画面のライフサイクルは共通で、違いは以下のみ:
//! - 初期入力の形
//! - 送信可否の判定とリクエスト本体の組み立て
//! - レスポンスから表示用データへの変換

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Debug;

use crate::error::ToolError;
use crate::input::{ImageBlob, ImageInput, TextInputs};
use crate::presenter::{
    present_articles, present_images, present_sentiment, ArticlePrediction,
    ImagePredictionView, SentimentView,
};
use crate::types::{
    AnalyzeRequest, ImagePrediction, PredictRequest, PredictResponse, SentimentResponse,
    ANALYZE_PATH, CLASSIFY_IMAGE_PATH, IMAGE_FIELD, PREDICT_PATH,
};
use crate::validator;

/// リクエスト本体
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Json(serde_json::Value),
    Multipart {
        field: &'static str,
        blob: ImageBlob,
    },
}

impl Payload {
    pub fn json<T: Serialize>(body: &T) -> Result<Self, ToolError> {
        serde_json::to_value(body)
            .map(Payload::Json)
            .map_err(|e| ToolError::request(format!("failed to encode request: {}", e)))
    }
}

pub trait Tool {
    type Input: Debug;
    type Response: DeserializeOwned;
    type Output: Clone + Debug + Serialize;

    /// ログ用の画面名
    const NAME: &'static str;
    const ENDPOINT: &'static str;

    fn initial_input() -> Self::Input;

    /// 送信内容を組み立てる
    ///
    /// - `Ok(None)`: 送信するものがない（何もしない）
    /// - `Err`: 入力検証エラー
    fn build_payload(input: &Self::Input) -> Result<Option<Payload>, ToolError>;

    fn item_count(input: &Self::Input) -> usize;

    fn project(response: Self::Response, item_count: usize) -> Self::Output;
}

/// 記事分類
#[derive(Debug, Clone, Copy)]
pub struct ArticleTool;

pub const INVALID_ARTICLES_MESSAGE: &str =
    "Please enter valid text for all articles. Some articles are invalid.";

impl Tool for ArticleTool {
    type Input = TextInputs;
    type Response = PredictResponse;
    type Output = Vec<ArticlePrediction>;

    const NAME: &'static str = "article";
    const ENDPOINT: &'static str = PREDICT_PATH;

    fn initial_input() -> TextInputs {
        TextInputs::new(1)
    }

    fn build_payload(input: &TextInputs) -> Result<Option<Payload>, ToolError> {
        if !input.all_valid() {
            return Err(ToolError::validation(INVALID_ARTICLES_MESSAGE));
        }
        Payload::json(&PredictRequest {
            texts: input.items().to_vec(),
        })
        .map(Some)
    }

    fn item_count(input: &TextInputs) -> usize {
        input.len()
    }

    fn project(response: PredictResponse, item_count: usize) -> Vec<ArticlePrediction> {
        present_articles(response.predicted_categories, item_count)
    }
}

/// 感情分析
#[derive(Debug, Clone, Copy)]
pub struct SentimentTool;

pub const INVALID_SENTIMENT_MESSAGE: &str = "Please enter valid text to analyze.";

impl Tool for SentimentTool {
    type Input = String;
    type Response = SentimentResponse;
    type Output = SentimentView;

    const NAME: &'static str = "sentiment";
    const ENDPOINT: &'static str = ANALYZE_PATH;

    fn initial_input() -> String {
        String::new()
    }

    fn build_payload(input: &String) -> Result<Option<Payload>, ToolError> {
        if !validator::is_valid(input) {
            return Err(ToolError::validation(INVALID_SENTIMENT_MESSAGE));
        }
        Payload::json(&AnalyzeRequest {
            text: input.clone(),
        })
        .map(Some)
    }

    fn item_count(_input: &String) -> usize {
        1
    }

    fn project(response: SentimentResponse, _item_count: usize) -> SentimentView {
        present_sentiment(response)
    }
}

/// 画像分類
#[derive(Debug, Clone, Copy)]
pub struct ImageTool;

impl Tool for ImageTool {
    type Input = ImageInput;
    type Response = Vec<ImagePrediction>;
    type Output = Vec<ImagePredictionView>;

    const NAME: &'static str = "image";
    const ENDPOINT: &'static str = CLASSIFY_IMAGE_PATH;

    fn initial_input() -> ImageInput {
        ImageInput::default()
    }

    fn build_payload(input: &ImageInput) -> Result<Option<Payload>, ToolError> {
        // 画像未選択なら送信しない
        Ok(input.blob().map(|blob| Payload::Multipart {
            field: IMAGE_FIELD,
            blob: blob.clone(),
        }))
    }

    fn item_count(input: &ImageInput) -> usize {
        usize::from(input.is_held())
    }

    fn project(response: Vec<ImagePrediction>, _item_count: usize) -> Vec<ImagePredictionView> {
        present_images(response)
    }
}
