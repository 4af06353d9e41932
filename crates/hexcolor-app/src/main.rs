mod cli;
mod output;

use std::io::IsTerminal;
use std::process::ExitCode;

use hexcolor_config::HexColorConfig;
use tracing_subscriber::EnvFilter;

fn load_config(args: &cli::Args) -> hexcolor_common::Result<HexColorConfig> {
    match args.config {
        Some(ref path) => {
            tracing::info!("Using config override: {}", path.display());
            Ok(hexcolor_config::load_from_path(path)?)
        }
        None => Ok(hexcolor_config::load_config().unwrap_or_else(|e| {
            tracing::warn!("Config load failed, using defaults: {e}");
            HexColorConfig::default()
        })),
    }
}

fn main() -> ExitCode {
    let args = cli::parse();

    // Logs go to stderr so stdout stays machine-readable
    let log_directive = args.log_level.as_deref().unwrap_or("hexcolor=warn");
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                log_directive
                    .parse()
                    .unwrap_or_else(|_| "hexcolor=warn".parse().unwrap()),
            ),
        )
        .init();

    tracing::debug!("hexcolor v{} starting", env!("CARGO_PKG_VERSION"));

    let config = match load_config(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("hexcolor: {e}");
            return ExitCode::from(2);
        }
    };
    let settings = args.merge_with_config(&config);
    tracing::debug!("effective settings: {settings:?}");

    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    match output::report_all(&args.colors, &settings, &mut stdout.lock(), &mut stderr.lock()) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            tracing::error!("Output error: {e}");
            ExitCode::from(2)
        }
    }
}
