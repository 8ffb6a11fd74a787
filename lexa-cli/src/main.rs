//! Lexa CLI - Command line interface
//!
//! Scans one input with one shape. Defaults come from `lexa.json`; flags win.

use clap::Parser;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

mod config;
mod logging;
mod platform;

use crate::logging::LogFormat;
use lexa_api::{init_config, run, LexaConfig, LexaError, LogLevel, OutputFormat, RunConfig, Shape};
use lexa_log::Logger;

/// 退出码：输入被拒绝
const EXIT_REJECTED: u8 = 1;
/// 退出码：用法或配置错误
const EXIT_USAGE: u8 = 2;

#[derive(Parser)]
#[command(
    name = "lexa",
    about = "Lexa - single-shape character scanners",
    version
)]
struct Cli {
    /// Project config file (default: ./lexa.json if present)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_name = "FORMAT", value_parser = parse_format)]
    format: Option<OutputFormat>,

    /// Log level: silent, error, warn, info, debug, trace
    #[arg(short, long, value_name = "LEVEL", value_parser = parse_level)]
    log_level: Option<LogLevel>,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    log_format: LogFormat,

    /// Also append scan logs to this file
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,

    /// Print shape, value, canonical form and read count
    #[arg(long)]
    steps: bool,

    /// List shape names and exit
    #[arg(long)]
    list: bool,

    /// Shape name; may be omitted when the config file sets one
    shape: Option<String>,

    /// Text to scan (default: read stdin)
    input: Option<String>,
}

/// CLI 错误（退出码 2）
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("cannot read config '{}': {source}", path.display())]
    ReadConfig { path: PathBuf, source: io::Error },

    #[error("cannot parse config '{}': {source}", path.display())]
    ParseConfig {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("cannot open log file '{}': {source}", path.display())]
    LogFile {
        path: PathBuf,
        source: lexa_log::Error,
    },

    #[error("no shape given and the config file sets none (see --list)")]
    MissingShape,

    #[error("cannot read stdin: {0}")]
    Stdin(#[source] io::Error),

    #[error(transparent)]
    Api(#[from] LexaError),
}

fn parse_format(s: &str) -> Result<OutputFormat, String> {
    match s.to_lowercase().as_str() {
        "text" => Ok(OutputFormat::Text),
        "json" => Ok(OutputFormat::Json),
        _ => Err(format!("unknown format '{s}' (expected text or json)")),
    }
}

fn parse_level(s: &str) -> Result<LogLevel, String> {
    LogLevel::parse(s).ok_or_else(|| format!("unknown log level '{s}'"))
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.list {
        return match platform::print_shape_list(&mut io::stdout().lock()) {
            Ok(()) => ExitCode::SUCCESS,
            Err(_) => ExitCode::from(EXIT_USAGE),
        };
    }

    match execute(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(EXIT_USAGE)
        }
    }
}

fn execute(cli: Cli) -> Result<ExitCode, CliError> {
    let (project, config_path) = config::load(cli.config.as_deref())?;

    // Flags take precedence over the config file
    let log_level = cli.log_level.or(project.log_level);
    let log_config = config::LogConfig::from_level(log_level);
    if let Err(e) = logging::init(&log_config, cli.log_format) {
        eprintln!("Warning: logging disabled: {e}");
    }
    let logger = logging::core_logger(log_level.map(config::to_core_level), cli.log_file.as_deref())
        .map_err(|source| CliError::LogFile {
            path: cli.log_file.clone().unwrap_or_default(),
            source,
        })?;
    if let Some(path) = &config_path {
        tracing::debug!(target: "lexa::cli", path = %path.display(), "loaded config");
    }

    let (shape, input) = resolve_target(cli.shape, cli.input, &project)?;
    let input = match input {
        Some(input) => input,
        None => read_stdin()?,
    };

    let run_config = build_run_config(&project, cli.format, cli.steps, logger);
    // Initialize API config (global singleton for convenience)
    init_config(run_config.clone());

    tracing::info!(
        target: "lexa::cli",
        scanner = %shape.target(),
        chars = input.chars().count(),
        "scanning"
    );

    let stdout = io::stdout();
    match run(shape, &input, &run_config) {
        Ok(output) => {
            tracing::info!(target: "lexa::cli", reads = output.reads, "accepted");
            // stdout 写失败（例如管道已关闭）时无处可报
            let _ = platform::print_output(&mut stdout.lock(), &output, run_config.format);
            Ok(ExitCode::SUCCESS)
        }
        Err(e @ LexaError::Scan(_)) => {
            tracing::info!(target: "lexa::cli", phase = e.phase(), "rejected");
            let _ = platform::print_error(
                &mut stdout.lock(),
                &mut io::stderr().lock(),
                &e,
                run_config.format,
            );
            Ok(ExitCode::from(EXIT_REJECTED))
        }
        Err(e) => Err(e.into()),
    }
}

/// 确定形状和输入
///
/// 只有一个位置参数且配置文件指定了形状时，该参数是输入。
fn resolve_target(
    shape: Option<String>,
    input: Option<String>,
    project: &LexaConfig,
) -> Result<(Shape, Option<String>), CliError> {
    match (shape, input, project.shape) {
        (Some(name), Some(input), _) => Ok((parse_shape(&name)?, Some(input))),
        (Some(input), None, Some(shape)) => Ok((shape, Some(input))),
        (Some(name), None, None) => Ok((parse_shape(&name)?, None)),
        (None, _, Some(shape)) => Ok((shape, None)),
        (None, _, None) => Err(CliError::MissingShape),
    }
}

fn parse_shape(name: &str) -> Result<Shape, CliError> {
    Ok(name.parse::<Shape>().map_err(LexaError::from)?)
}

/// 读取 stdin，去掉末尾一个换行
fn read_stdin() -> Result<String, CliError> {
    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf).map_err(CliError::Stdin)?;
    if buf.ends_with('\n') {
        buf.pop();
        if buf.ends_with('\r') {
            buf.pop();
        }
    }
    Ok(buf)
}

/// Build run configuration from config file and flags
fn build_run_config(
    project: &LexaConfig,
    format: Option<OutputFormat>,
    steps: bool,
    logger: Arc<Logger>,
) -> RunConfig {
    let mut run_config = RunConfig::from_config(project, logger);
    if let Some(format) = format {
        run_config.format = format;
    }
    run_config.show_steps |= steps;
    run_config
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_flags() {
        let cli = Cli::parse_from(["lexa", "-f", "json", "-l", "silent", "--steps", "decimal", "1.5"]);
        assert_eq!(cli.format, Some(OutputFormat::Json));
        assert_eq!(cli.log_level, Some(LogLevel::Error));
        assert!(cli.steps);
        assert_eq!(cli.shape.as_deref(), Some("decimal"));
        assert_eq!(cli.input.as_deref(), Some("1.5"));
        assert_eq!(cli.log_format, LogFormat::Compact);
    }

    #[test]
    fn test_rejects_bad_format() {
        assert!(Cli::try_parse_from(["lexa", "-f", "xml", "integer", "1"]).is_err());
    }

    #[test]
    fn test_resolve_target_explicit() {
        let project = LexaConfig::default();
        let (shape, input) =
            resolve_target(Some("integer".into()), Some("12".into()), &project).unwrap();
        assert_eq!(shape, Shape::Integer);
        assert_eq!(input.as_deref(), Some("12"));
    }

    #[test]
    fn test_resolve_target_from_config() {
        let project = LexaConfig {
            shape: Some(Shape::Decimal),
            ..LexaConfig::default()
        };
        let (shape, input) = resolve_target(Some("1.5".into()), None, &project).unwrap();
        assert_eq!(shape, Shape::Decimal);
        assert_eq!(input.as_deref(), Some("1.5"));

        let (shape, input) = resolve_target(None, None, &project).unwrap();
        assert_eq!(shape, Shape::Decimal);
        assert_eq!(input, None);
    }

    #[test]
    fn test_resolve_target_errors() {
        let project = LexaConfig::default();
        assert!(matches!(
            resolve_target(None, None, &project),
            Err(CliError::MissingShape)
        ));
        assert!(matches!(
            resolve_target(Some("float".into()), Some("1".into()), &project),
            Err(CliError::Api(LexaError::UnknownShape(_)))
        ));
    }

    #[test]
    fn test_build_run_config_flags_win() {
        let project = LexaConfig {
            format: OutputFormat::Text,
            show_steps: false,
            ..LexaConfig::default()
        };
        let cfg = build_run_config(&project, Some(OutputFormat::Json), true, Logger::noop());
        assert_eq!(cfg.format, OutputFormat::Json);
        assert!(cfg.show_steps);
    }
}
