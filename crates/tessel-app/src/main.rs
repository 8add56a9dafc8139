//! Main application entry point.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tessel_app::{AppConfig, AppError, CONFIG_ENV, Command};

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Starting Tessel");

    match try_main() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn try_main() -> Result<(), AppError> {
    let mut args = std::env::args().skip(1);
    let mut config_path = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
    let mut command = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => config_path = Some(args.next().ok_or(AppError::Usage)?.into()),
            _ if command.is_none() => {
                command = Some(arg.parse::<Command>().map_err(AppError::Command)?);
            }
            _ => return Err(AppError::Usage),
        }
    }
    let command = command.ok_or(AppError::Usage)?;

    let config = match config_path {
        Some(path) => AppConfig::load(&path)?,
        None => AppConfig::default(),
    };
    let format = config.number_format()?;
    log::debug!("Using separators {:?}", format.separators());

    let stdin = io::stdin();
    let summary = tessel_app::run(command, &config, &format, stdin.lock(), io::stdout().lock())?;
    log::info!(
        "Processed {} lines, rejected {}",
        summary.lines,
        summary.rejected
    );
    Ok(())
}
