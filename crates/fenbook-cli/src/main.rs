mod cli;
mod handlers;
mod output;

use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};
use fenbook_core::AppConfig;
use fenbook_tui::App;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Ok(log_path) = std::env::var("FENBOOK_DEBUG_LOG") {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        tracing_subscriber::fmt()
            .with_writer(log_file)
            .with_max_level(tracing::Level::DEBUG)
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .init();
    }

    let cli = Cli::parse();
    let mut config = AppConfig::load();
    if let Some(site) = cli.site {
        config.site_url = Some(site);
    }

    match cli.command {
        None => {
            let mut app = App::new(&config)?;
            app.run().await?;
        }
        Some(Commands::Validate(args)) => handlers::validate::handle(args)?,
        Some(Commands::Generate(args)) => handlers::generate::handle(&config, args).await?,
        Some(Commands::Completions { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
        }
    }

    Ok(())
}
