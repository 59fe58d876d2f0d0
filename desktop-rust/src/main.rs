mod app;
mod io;
mod model;

use ai_tools::config::Config;
use app::DesktopApp;

fn main() -> anyhow::Result<()> {
    ai_tools::logging::init_tracing(false);
    let config = Config::load()?;
    let app = DesktopApp::new(&config)?;

    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "AI Tools",
        options,
        Box::new(move |_cc| Box::new(app)),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))
}
