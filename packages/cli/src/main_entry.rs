// Main Entry Point
//
// Drives one invocation: resolve arguments, extract, serialize, write.

use anyhow::Result;
use ts_class_meta::logging::{ConsoleLogger, Logger};
use ts_class_meta::serializer::to_json;
use ts_class_meta::{extract_file, ClassRole};

use crate::args::{parse_args, Invocation};
use crate::config::{log_level_from_env, ExtractConfig, LOG_LEVEL_ENV};
use crate::error::CliError;
use crate::output::OutputSink;

/// Main entry point for the extractor.
///
/// # Arguments
/// * `args` - Command line arguments, program name first
/// * `console_error` - Error output function
///
/// # Returns
/// Exit code (0 for success, non-zero for failure)
pub fn main_fn<F>(args: &[String], console_error: F) -> i32
where
    F: Fn(&str),
{
    let env_level = std::env::var(LOG_LEVEL_ENV).ok();
    let (logger, level_error) = match log_level_from_env(env_level.as_deref()) {
        Ok(level) => (ConsoleLogger::new(level), None),
        Err(err) => (ConsoleLogger::new(Default::default()), Some(err)),
    };
    if let Some(err) = level_error {
        logger.warn(&format!("{LOG_LEVEL_ENV}: {err}"));
    }

    match run(args, &logger) {
        Ok(()) => 0,
        Err(err) => report_error_and_exit(&err, &console_error),
    }
}

fn run(args: &[String], logger: &ConsoleLogger) -> Result<()> {
    let resolved = parse_args(args, logger.level())?;
    for token in &resolved.ignored {
        logger.warn(&format!("ignoring unrecognized argument `{token}`"));
    }

    let config = match resolved.invocation {
        Invocation::Extract(config) => config,
        Invocation::Display(text) => {
            print!("{text}");
            return Ok(());
        }
    };

    extract(&config, logger)
}

/// Extract the configured input and deliver the JSON document.
pub fn extract(config: &ExtractConfig, logger: &dyn Logger) -> Result<()> {
    logger.debug(&format!(
        "input: {}, output: {}",
        config.input_path.display(),
        config
            .output_path()
            .map_or_else(|| "<stdout>".to_string(), |p| p.display().to_string())
    ));

    let records = extract_file(&config.input_path, logger).map_err(CliError::from)?;
    for record in &records {
        let role = ClassRole::detect(record);
        logger.info(&format!(
            "Detected {}: {}",
            role,
            record.name.as_deref().unwrap_or("<anonymous>")
        ));
    }

    let json = to_json(&records).map_err(CliError::from)?;
    OutputSink::from_config(config).write(&json)?;
    Ok(())
}

/// Report `err` and return its exit code.
pub fn report_error_and_exit<F>(err: &anyhow::Error, console_error: &F) -> i32
where
    F: Fn(&str),
{
    match err.downcast_ref::<CliError>() {
        Some(CliError::Usage(usage)) => {
            console_error(usage.trim_end());
            1
        }
        Some(cli_error) => {
            console_error(&format!("Error: {cli_error}"));
            cli_error.exit_code()
        }
        None => {
            console_error(&format!("Error: {err}"));
            1
        }
    }
}
