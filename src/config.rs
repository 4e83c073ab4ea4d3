//! Command-line options for the `lakeside` binary.

use std::path::PathBuf;
use thiserror::Error;

/// Runtime options for a play session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// Overrides the default save location.
    pub save_path: Option<PathBuf>,
    /// Seeds the game RNG for reproducible sessions.
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    Play(AppConfig),
    Help,
    Version,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CliError {
    #[error("{0} needs a value")]
    MissingValue(&'static str),
    #[error("invalid seed '{0}', expected an unsigned integer")]
    InvalidSeed(String),
    #[error("unknown argument: {0}")]
    UnknownArgument(String),
}

/// Parses `std::env::args()`-style input (program name first).
pub fn parse_args(args: &[String]) -> Result<CliCommand, CliError> {
    let mut config = AppConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => return Ok(CliCommand::Help),
            "--version" | "-v" => return Ok(CliCommand::Version),
            "--save" => {
                let value = args.get(i + 1).ok_or(CliError::MissingValue("--save"))?;
                config.save_path = Some(PathBuf::from(value));
                i += 1;
            }
            "--seed" => {
                let value = args.get(i + 1).ok_or(CliError::MissingValue("--seed"))?;
                let seed = value
                    .parse()
                    .map_err(|_| CliError::InvalidSeed(value.clone()))?;
                config.seed = Some(seed);
                i += 1;
            }
            other => return Err(CliError::UnknownArgument(other.to_string())),
        }
        i += 1;
    }

    Ok(CliCommand::Play(config))
}

pub fn help_text() -> String {
    [
        "Lakeside - a small fishing game for the terminal",
        "",
        "Usage: lakeside [options]",
        "",
        "Options:",
        "  --save <path>  Save file to use (default: ~/.lakeside/save.json,",
        "                 or $LAKESIDE_SAVE)",
        "  --seed <n>     Seed the random number generator",
        "  --version      Show version information",
        "  --help         Show this help message",
        "",
        "Controls:",
        "  arrows / WASD  Walk",
        "  space          Cast near the water, hold to steady the line;",
        "                 opens the shop next to the board",
        "  e              Open the shop",
        "  esc            Reel in early / close the shop",
        "  q              Save and quit",
        "",
        "Set RUST_LOG=lakeside=debug to log to stderr.",
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("lakeside")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_no_args_plays_with_defaults() {
        assert_eq!(
            parse_args(&args(&[])),
            Ok(CliCommand::Play(AppConfig::default()))
        );
    }

    #[test]
    fn test_save_and_seed() {
        let cmd = parse_args(&args(&["--seed", "42", "--save", "/tmp/lake.json"])).unwrap();
        assert_eq!(
            cmd,
            CliCommand::Play(AppConfig {
                save_path: Some(PathBuf::from("/tmp/lake.json")),
                seed: Some(42),
            })
        );
    }

    #[test]
    fn test_help_and_version_short_circuit() {
        assert_eq!(parse_args(&args(&["--help", "--bogus"])), Ok(CliCommand::Help));
        assert_eq!(parse_args(&args(&["-v"])), Ok(CliCommand::Version));
    }

    #[test]
    fn test_errors() {
        assert_eq!(
            parse_args(&args(&["--seed"])),
            Err(CliError::MissingValue("--seed"))
        );
        assert_eq!(
            parse_args(&args(&["--seed", "-1"])),
            Err(CliError::InvalidSeed("-1".to_string()))
        );
        assert_eq!(
            parse_args(&args(&["update"])),
            Err(CliError::UnknownArgument("update".to_string()))
        );
    }
}
