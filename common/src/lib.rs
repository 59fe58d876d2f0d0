//! AI Tools Common Library
//!
//! CLIとデスクトップで共有される画面状態・入力検証・結果表示の型

pub mod error;
pub mod input;
pub mod lifecycle;
pub mod presenter;
pub mod screen;
pub mod tool;
pub mod types;
pub mod validator;

pub use error::{ErrorKind, Result, ToolError};
pub use input::{ImageBlob, ImageInput, TextInputs};
pub use lifecycle::{RequestState, Settle, SubmitLifecycle, Ticket};
pub use presenter::{ArticlePrediction, ChartData, ImagePredictionView, SentimentView};
pub use screen::{ArticleScreen, ImageScreen, Screen, SentimentScreen, Submission};
pub use tool::{ArticleTool, ImageTool, Payload, SentimentTool, Tool};
