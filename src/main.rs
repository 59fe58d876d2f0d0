use ai_tools::{cli, client, config, error, image_source, interactive, logging, report, runner};
use ai_tools_common::{ArticleScreen, ImageScreen, SentimentScreen};
use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use error::Result;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", report::error_line(&err));
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = Config::load()?;

    match cli.command {
        Commands::Article { texts, interactive } => {
            let transport = client::HttpTransport::new(&config, cli.server.as_deref())?;

            if interactive {
                println!("📰 ai-tools - 記事分類（対話モード）");
                println!("接続先: {}", transport.base_url());
                interactive::run_interactive_articles(&transport, cli.json).await?;
                return Ok(());
            }

            let mut screen = ArticleScreen::new();
            for (index, text) in texts.into_iter().enumerate() {
                if index > 0 {
                    screen.input_mut().append();
                }
                screen.input_mut().update(index, text);
            }

            if let Some(predictions) = runner::run(&mut screen, &transport, "Classifying articles...").await? {
                report::print_output(&predictions, cli.json)?;
            }
        }

        Commands::Sentiment { text } => {
            let transport = client::HttpTransport::new(&config, cli.server.as_deref())?;
            let mut screen = SentimentScreen::new();
            *screen.input_mut() = text;

            if let Some(view) = runner::run(&mut screen, &transport, "Analyzing...").await? {
                report::print_output(&view, cli.json)?;
            }
        }

        Commands::Image { path } => {
            let transport = client::HttpTransport::new(&config, cli.server.as_deref())?;
            let blob = image_source::load_image_blob(&path)?;
            let mut screen = ImageScreen::new();
            screen.input_mut().hold(blob);

            if let Some(views) = runner::run(&mut screen, &transport, "Classifying...").await? {
                report::print_output(&views, cli.json)?;
            }
        }

        Commands::Config { set_server_url, set_timeout, show } => {
            let mut config = config;
            let changed = set_server_url.is_some() || set_timeout.is_some();

            if let Some(url) = set_server_url {
                config.set_server_url(url)?;
            }
            if let Some(seconds) = set_timeout {
                config.set_timeout(seconds);
            }
            if changed {
                config.save()?;
                println!("✔ 設定を保存しました");
            }

            if show || !changed {
                println!("設定:");
                println!("  サーバーURL: {}", config.server_url);
                println!("  接続先（実効値）: {}", config.resolve_server_url(cli.server.as_deref()));
                match config.timeout_seconds {
                    Some(seconds) => println!("  タイムアウト: {}秒", seconds),
                    None => println!("  タイムアウト: なし"),
                }
            }
        }
    }

    Ok(())
}
