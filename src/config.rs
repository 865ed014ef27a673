//! Command-line configuration for the `fracsort` binary.

use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

pub const DEFAULT_SIZE: usize = 10_000;
pub const DEFAULT_STRING_LEN: usize = 10;

/// Settings for one run of the demo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    /// Number of elements in each generated list
    pub size: usize,
    /// Seed for the workload generator; derived from the clock when absent
    pub seed: Option<u64>,
    /// Length of each generated string
    pub string_len: usize,
    /// Log at DEBUG instead of WARN
    pub verbose: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            seed: None,
            string_len: DEFAULT_STRING_LEN,
            verbose: false,
        }
    }
}

impl DemoConfig {
    /// The configured seed, or one taken from the current time.
    pub fn seed_or_clock(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or_default()
        })
    }
}

/// What the command line asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Run(DemoConfig),
    Help,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigErrorKind {
    UnknownFlag,
    MissingValue,
    InvalidNumber,
    ZeroStringLength,
}

/// A rejected command line.
#[derive(Debug, Clone)]
pub struct ConfigError {
    pub kind: ConfigErrorKind,
    pub message: String,
}

impl ConfigError {
    fn new(kind: ConfigErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ConfigError {}

fn parse_number<T: std::str::FromStr>(flag: &str, value: Option<String>) -> Result<T, ConfigError> {
    let value = value.ok_or_else(|| {
        ConfigError::new(
            ConfigErrorKind::MissingValue,
            format!("{flag} expects a value"),
        )
    })?;

    value.parse().map_err(|_| {
        ConfigError::new(
            ConfigErrorKind::InvalidNumber,
            format!("{flag} expects a non-negative integer, got '{value}'"),
        )
    })
}

/// Parse arguments, excluding the program name.
pub fn parse_args<I>(args: I) -> Result<Command, ConfigError>
where
    I: IntoIterator<Item = String>,
{
    let mut config = DemoConfig::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--help" | "-h" => return Ok(Command::Help),
            "--verbose" | "-v" => config.verbose = true,
            "--size" | "-n" => config.size = parse_number(&arg, args.next())?,
            "--seed" => config.seed = Some(parse_number(&arg, args.next())?),
            "--string-len" => {
                config.string_len = parse_number(&arg, args.next())?;
                if config.string_len == 0 {
                    return Err(ConfigError::new(
                        ConfigErrorKind::ZeroStringLength,
                        "--string-len must be at least 1",
                    ));
                }
            }
            other => {
                return Err(ConfigError::new(
                    ConfigErrorKind::UnknownFlag,
                    format!("Unknown argument: {other}"),
                ));
            }
        }
    }

    Ok(Command::Run(config))
}
