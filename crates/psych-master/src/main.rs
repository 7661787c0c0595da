use std::io::{self, IsTerminal};

use clap::Parser;
use eyre::Result;

use psych_master::app::App;
use psych_master::cli::Cli;
use psych_settings::store::{open_store, settings_path};

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    init_tracing(cli.log_json);

    let store = open_store(settings_path(cli.settings.as_deref()));

    let color = !cli.no_color
        && std::env::var_os("NO_COLOR").is_none_or(|v| v.is_empty())
        && io::stdout().is_terminal();

    let mut app = App::new(store, color);
    let stdin = io::stdin();
    let stdout = io::stdout();
    app.run(cli.command, &mut stdin.lock(), &mut stdout.lock())
}

fn init_tracing(json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}
