// Argument Resolver
//
// Turns the process argument list into an `ExtractConfig`. Only `--input`,
// `--output`, help and version are recognized; every other token is set
// aside and reported back to the caller.

use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::{value_parser, Arg, ArgAction, ColorChoice, Command};
use ts_class_meta::logging::LogLevel;

use crate::config::ExtractConfig;
use crate::error::CliError;

pub const USAGE: &str = "ts-class-meta --input <path> [--output <path>]";

const VALUE_FLAGS: [&str; 2] = ["--input", "--output"];
const SWITCHES: [&str; 4] = ["-h", "--help", "-V", "--version"];

/// What the invocation asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    Extract(ExtractConfig),
    /// `--help` or `--version`: print the text and succeed.
    Display(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedArgs {
    pub invocation: Invocation,
    /// Tokens that were not recognized, in the order they appeared.
    pub ignored: Vec<String>,
}

pub fn command() -> Command {
    Command::new("ts-class-meta")
        .version(ts_class_meta::version())
        .about("Extract class metadata from a TypeScript source file as JSON")
        .override_usage(USAGE)
        .color(ColorChoice::Never)
        .args_override_self(true)
        .arg(
            Arg::new("input")
                .long("input")
                .value_name("PATH")
                .value_parser(value_parser!(PathBuf))
                .action(ArgAction::Set)
                .required(true)
                .help("TypeScript file to extract class metadata from"),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .value_name("PATH")
                .value_parser(value_parser!(PathBuf))
                .action(ArgAction::Set)
                .help("Write the JSON document to PATH instead of stdout"),
        )
}

/// Resolve `args` (program name first) into an invocation.
pub fn parse_args(args: &[String], log_level: LogLevel) -> Result<ResolvedArgs, CliError> {
    let (known, ignored) = retain_known_args(args.iter().skip(1).map(String::as_str));
    let program = args.first().map_or("ts-class-meta", String::as_str);

    let argv = std::iter::once(program.to_string()).chain(known);
    let matches = match command().try_get_matches_from(argv) {
        Ok(matches) => matches,
        Err(err) => {
            return match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => Ok(ResolvedArgs {
                    invocation: Invocation::Display(err.to_string()),
                    ignored,
                }),
                _ => Err(CliError::Usage(err.to_string())),
            };
        }
    };

    let input_path = matches
        .get_one::<PathBuf>("input")
        .cloned()
        .ok_or_else(|| CliError::Usage(format!("missing --input\n\nUsage: {USAGE}")))?;

    let mut config = ExtractConfig::new(input_path).with_log_level(log_level);
    if let Some(output) = matches.get_one::<PathBuf>("output") {
        config = config.with_output(output.clone());
    }

    Ok(ResolvedArgs {
        invocation: Invocation::Extract(config),
        ignored,
    })
}

/// Split tokens into the ones the command understands and the rest. A value
/// flag takes the following token as its value, whatever it starts with,
/// unless that token is itself a recognized flag. Values are passed on in
/// `--flag=value` form.
pub fn retain_known_args<'t>(
    tokens: impl IntoIterator<Item = &'t str>,
) -> (Vec<String>, Vec<String>) {
    let mut known = Vec::new();
    let mut ignored = Vec::new();
    let mut tokens = tokens.into_iter().peekable();

    while let Some(token) = tokens.next() {
        if VALUE_FLAGS.contains(&token) {
            match tokens.next_if(|next| !is_recognized_flag(next)) {
                Some(value) => known.push(format!("{token}={value}")),
                None => known.push(token.to_string()),
            }
        } else if is_recognized_flag(token) {
            known.push(token.to_string());
        } else {
            ignored.push(token.to_string());
        }
    }

    (known, ignored)
}

fn is_recognized_flag(token: &str) -> bool {
    VALUE_FLAGS.contains(&token)
        || SWITCHES.contains(&token)
        || VALUE_FLAGS
            .iter()
            .any(|flag| token.strip_prefix(flag).is_some_and(|rest| rest.starts_with('=')))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn args(tokens: &[&str]) -> Vec<String> {
        std::iter::once("ts-class-meta")
            .chain(tokens.iter().copied())
            .map(str::to_string)
            .collect()
    }

    fn extract_config(tokens: &[&str]) -> ExtractConfig {
        match parse_args(&args(tokens), LogLevel::Warn).expect("arguments rejected").invocation {
            Invocation::Extract(config) => config,
            other => panic!("expected extraction, got {other:?}"),
        }
    }

    mod parse_tests {
        use super::*;

        #[test]
        fn should_parse_input_only() {
            let config = extract_config(&["--input", "src/user.ts"]);
            assert_eq!(config.input_path, PathBuf::from("src/user.ts"));
            assert_eq!(config.output_path(), None);
        }

        #[test]
        fn should_parse_input_and_output_in_any_order() {
            let config = extract_config(&["--output", "meta.json", "--input", "a.ts"]);
            assert_eq!(config.input_path, PathBuf::from("a.ts"));
            assert_eq!(config.output_path(), Some(Path::new("meta.json")));
        }

        #[test]
        fn should_accept_equals_form() {
            let config = extract_config(&["--input=a.ts", "--output=b.json"]);
            assert_eq!(config.input_path, PathBuf::from("a.ts"));
            assert_eq!(config.output_path(), Some(Path::new("b.json")));
        }

        #[test]
        fn should_carry_log_level() {
            let resolved = parse_args(&args(&["--input", "a.ts"]), LogLevel::Debug).unwrap();
            match resolved.invocation {
                Invocation::Extract(config) => assert_eq!(config.log_level, LogLevel::Debug),
                other => panic!("expected extraction, got {other:?}"),
            }
        }

        #[test]
        fn should_take_hyphenated_values() {
            let config = extract_config(&["--input", "-odd.ts", "--output", "-"]);
            assert_eq!(config.input_path, PathBuf::from("-odd.ts"));
            assert_eq!(config.output_path(), Some(Path::new("-")));
        }

        #[test]
        fn should_let_last_repeated_flag_win() {
            let config = extract_config(&["--input", "a.ts", "--input", "b.ts"]);
            assert_eq!(config.input_path, PathBuf::from("b.ts"));
        }

        #[test]
        fn should_reject_missing_input() {
            let err = parse_args(&args(&["--output", "b.json"]), LogLevel::Warn).unwrap_err();
            assert_eq!(err.exit_code(), 1);
            let message = err.to_string();
            assert!(message.contains("--input"));
            assert!(message.contains("--output"));
        }

        #[test]
        fn should_reject_input_without_value() {
            let err = parse_args(&args(&["--input"]), LogLevel::Warn).unwrap_err();
            assert!(matches!(err, CliError::Usage(_)));
        }

        #[test]
        fn should_reject_empty_argument_list() {
            let err = parse_args(&args(&[]), LogLevel::Warn).unwrap_err();
            assert!(matches!(err, CliError::Usage(_)));
        }

        #[test]
        fn should_display_help_and_version() {
            let help = parse_args(&args(&["--help"]), LogLevel::Warn).unwrap();
            match help.invocation {
                Invocation::Display(text) => assert!(text.contains(USAGE)),
                other => panic!("expected help text, got {other:?}"),
            }

            let version = parse_args(&args(&["--version"]), LogLevel::Warn).unwrap();
            match version.invocation {
                Invocation::Display(text) => assert!(text.contains(ts_class_meta::version())),
                other => panic!("expected version text, got {other:?}"),
            }
        }
    }

    mod unknown_args_tests {
        use super::*;

        #[test]
        fn should_ignore_unknown_flags() {
            let resolved =
                parse_args(&args(&["--verbose", "--input", "a.ts", "extra", "-x"]), LogLevel::Warn)
                    .unwrap();
            assert_eq!(resolved.ignored, vec!["--verbose", "extra", "-x"]);
            assert!(matches!(resolved.invocation, Invocation::Extract(_)));
        }

        #[test]
        fn should_not_take_flag_as_value() {
            let (known, ignored) = retain_known_args(["--output", "--input", "a.ts"]);
            assert_eq!(known, vec!["--output", "--input=a.ts"]);
            assert!(ignored.is_empty());
        }

        #[test]
        fn should_not_confuse_prefixed_flags() {
            let (known, ignored) = retain_known_args(["--inputs=a.ts", "--input=b.ts"]);
            assert_eq!(known, vec!["--input=b.ts"]);
            assert_eq!(ignored, vec!["--inputs=a.ts"]);
        }
    }
}
