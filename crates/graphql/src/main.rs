mod cli;
mod command;
mod command_result;
mod commands;
mod output_utils;

use clap::Parser;
pub(crate) use cli::Cli;
pub(crate) use command::RunnableCommand;
pub(crate) use command_result::CommandResult;

const DEFAULT_LOG_LEVEL: tracing::Level = tracing::Level::INFO;

#[tokio::main(flavor = "multi_thread", worker_threads = 10)]
async fn main() -> std::process::ExitCode {
    let mut cli = Cli::parse();
    init_logging(&cli);

    let Some(command) = cli.cmd.take() else {
        return match cli.run_default().await {
            Ok(()) => std::process::ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("{e:#}");
                std::process::ExitCode::FAILURE
            },
        };
    };

    let result = command.run(cli).await;
    if let Some(stdout) = result.stdout {
        println!("{stdout}");
    }
    if let Some(stderr) = result.stderr {
        eprintln!("{stderr}")
    }
    result.exit_code
}

/// Maps a `LOG_LEVEL` value to a tracing level. `verbose` is an alias for
/// `debug`.
fn log_level_from_env_value(value: &str) -> Option<tracing::Level> {
    match value.trim().to_ascii_lowercase().as_str() {
        "trace" => Some(tracing::Level::TRACE),
        "debug" | "verbose" => Some(tracing::Level::DEBUG),
        "info" => Some(tracing::Level::INFO),
        "warn" => Some(tracing::Level::WARN),
        _ => None,
    }
}

fn init_logging(cli: &Cli) {
    let mut invalid_env_value = None;
    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        match std::env::var("LOG_LEVEL") {
            Ok(value) => log_level_from_env_value(&value).unwrap_or_else(|| {
                invalid_env_value = Some(value);
                DEFAULT_LOG_LEVEL
            }),
            Err(_) => DEFAULT_LOG_LEVEL,
        }
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();
    log::trace!("logging at `{log_level}`");

    if let Some(value) = invalid_env_value {
        log::warn!("ignoring invalid `LOG_LEVEL` value `{value}`");
    }
}

#[cfg(test)]
mod tests {
    use super::log_level_from_env_value;

    #[test]
    fn log_levels_from_env() {
        assert_eq!(log_level_from_env_value("TRACE"), Some(tracing::Level::TRACE));
        assert_eq!(log_level_from_env_value(" verbose\n"), Some(tracing::Level::DEBUG));
        assert_eq!(log_level_from_env_value("info"), Some(tracing::Level::INFO));
        assert_eq!(log_level_from_env_value("loud"), None);
    }
}
