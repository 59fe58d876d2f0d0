use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ai-tools")]
#[command(about = "記事分類・感情分析・画像分類クライアント", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// 推論サーバーのURL（設定ファイル・環境変数より優先）
    #[arg(long, global = true)]
    pub server: Option<String>,

    /// 結果をJSONで出力
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 記事のカテゴリを分類
    Article {
        /// 記事本文（複数指定可）
        #[arg(required_unless_present = "interactive")]
        texts: Vec<String>,

        /// 対話モードで記事を入力
        #[arg(short, long)]
        interactive: bool,
    },

    /// テキストの感情を分析
    Sentiment {
        /// 分析するテキスト
        #[arg(required = true)]
        text: String,
    },

    /// 画像を分類
    Image {
        /// 画像ファイルのパス
        #[arg(required = true)]
        path: PathBuf,
    },

    /// 設定を表示/編集
    Config {
        /// 推論サーバーのURLを設定
        #[arg(long)]
        set_server_url: Option<String>,

        /// タイムアウト秒数を設定（0で無効）
        #[arg(long)]
        set_timeout: Option<u64>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
