//! Function Wrapper CLI Application
//!
//! Runs the wrapped-greeter demonstration from the fn-wrapper library on
//! standard output. Logs go to standard error so stdout carries only the
//! demonstration lines.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

mod config;

/// Function Wrapper - print a greeting framed by before/after messages
#[derive(Parser, Debug)]
#[command(name = "fn-wrapper")]
#[command(about = "Run a greeting through a function wrapper", long_about = None)]
#[command(version)]
struct Args {
    /// Path to configuration file (TOML) overriding messages and greeting
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Number of times to invoke the wrapped greeter
    #[arg(short = 'n', long, value_name = "COUNT", default_value_t = 1,
          value_parser = clap::value_parser!(u32).range(1..))]
    repeat: u32,

    /// Verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all log output except errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(args.verbose, args.quiet);

    log::info!("Function Wrapper CLI v{}", env!("CARGO_PKG_VERSION"));
    log::info!("Using wrapper library v{}", fn_wrapper::VERSION);

    let app_config = match &args.config {
        Some(path) => {
            log::info!("Loading configuration from: {:?}", path);
            let loaded = config::load_config(path)?;
            log::debug!("Configuration loaded successfully");
            loaded
        }
        None => config::AppConfig::default(),
    };

    fn_wrapper::demo::run(
        fn_wrapper::Stdout,
        &app_config.messages,
        &app_config.demo.greeting,
        args.repeat as usize,
    )
    .context("Wrapped greeter failed")?;

    Ok(())
}

/// Initialize logging based on verbosity level
fn init_logging(verbose: u8, quiet: bool) {
    use env_logger::Builder;
    use log::LevelFilter;
    use std::io::Write;

    let level = if quiet {
        LevelFilter::Error
    } else {
        match verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };

    Builder::new()
        .filter_level(level)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}] {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_args() {
        let args = Args::try_parse_from(["fn-wrapper"]).unwrap();
        assert_eq!(args.repeat, 1);
        assert!(args.config.is_none());
        assert_eq!(args.verbose, 0);
        assert!(!args.quiet);
    }

    #[test]
    fn test_rejects_zero_repeat() {
        assert!(Args::try_parse_from(["fn-wrapper", "--repeat", "0"]).is_err());
    }

    #[test]
    fn test_verbosity_flags() {
        let args = Args::try_parse_from(["fn-wrapper", "-vv", "-n", "3"]).unwrap();
        assert_eq!(args.verbose, 2);
        assert_eq!(args.repeat, 3);
    }
}
