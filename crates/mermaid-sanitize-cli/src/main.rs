use anyhow::{Context, Result};
use mermaid_sanitize_config::Config;
use mermaid_sanitize_engine::{SanitizeOptions, Sanitizer, WriteMode};
use std::{
    env,
    io::{self, Write},
    path::Path,
};

mod messages;

use messages::Messages;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config_path = Config::config_path();
    let config = match Config::load().context("Failed to load config file")? {
        Some(config) => {
            log::debug!("Using config file {}", config_path.display());
            config
        }
        None => {
            log::debug!("No config file at {}, using defaults", config_path.display());
            Config::default()
        }
    };

    let args: Vec<String> = env::args().collect();
    let stdout = io::stdout();
    run(&args, &config, &mut stdout.lock())
}

fn sanitize_options(config: &Config) -> SanitizeOptions {
    SanitizeOptions {
        strip_emoji: config.strip_emoji,
        quote_square: config.quote_square,
        quote_curly: config.quote_curly,
        write_mode: if config.atomic_write {
            WriteMode::Atomic
        } else {
            WriteMode::InPlace
        },
    }
}

/// Sanitize the file named by the first argument, reporting to `out`.
/// Further arguments are ignored.
///
/// A missing file or a failed write is reported and counts as a normal
/// run. Anything else, such as a file that is not UTF-8, is returned.
fn run(args: &[String], config: &Config, out: &mut impl Write) -> Result<()> {
    let messages = Messages::new(config.locale);

    let Some(file) = args.get(1) else {
        let program = args.first().map(String::as_str).unwrap_or("sanitize");
        writeln!(out, "{}", messages.usage(program))?;
        return Ok(());
    };

    let path = Path::new(file);
    let sanitizer = Sanitizer::new(sanitize_options(config));

    match sanitizer.sanitize_file(path) {
        Ok(report) => {
            log::debug!("{report:?}");
            writeln!(out, "{}", messages.done(path))?;
        }
        Err(err) if err.kind().is_handled() => {
            log::warn!("{err}");
            writeln!(out, "{}", messages.failure(&err))?;
        }
        Err(err) => return Err(err.into()),
    }

    Ok(())
}
