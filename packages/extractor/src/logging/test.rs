// Logging Tests
//
// Tests for the logging module.

#[cfg(test)]
mod tests {
    use crate::logging::*;

    mod log_level_tests {
        use super::*;

        #[test]
        fn should_have_correct_ordering() {
            assert!((LogLevel::Debug as u8) < (LogLevel::Info as u8));
            assert!((LogLevel::Info as u8) < (LogLevel::Warn as u8));
            assert!((LogLevel::Warn as u8) < (LogLevel::Error as u8));
        }

        #[test]
        fn should_default_to_warn() {
            assert_eq!(LogLevel::default(), LogLevel::Warn);
        }

        #[test]
        fn should_parse_level_names_case_insensitively() {
            assert_eq!("debug".parse::<LogLevel>(), Ok(LogLevel::Debug));
            assert_eq!("INFO".parse::<LogLevel>(), Ok(LogLevel::Info));
            assert_eq!(" Warning ".parse::<LogLevel>(), Ok(LogLevel::Warn));
            assert_eq!("error".parse::<LogLevel>(), Ok(LogLevel::Error));
        }

        #[test]
        fn should_reject_unknown_level_names() {
            let err = "verbose".parse::<LogLevel>().unwrap_err();
            assert_eq!(err, UnknownLogLevel("verbose".to_string()));
            assert!(err.to_string().contains("verbose"));
        }
    }

    mod console_logger_tests {
        use super::*;

        #[test]
        fn should_create_with_level() {
            let logger = ConsoleLogger::new(LogLevel::Warn);
            assert_eq!(logger.level(), LogLevel::Warn);
        }

        #[test]
        fn should_check_level_enabled() {
            let logger = ConsoleLogger::new(LogLevel::Warn);

            assert!(!logger.is_enabled(LogLevel::Debug));
            assert!(!logger.is_enabled(LogLevel::Info));
            assert!(logger.is_enabled(LogLevel::Warn));
            assert!(logger.is_enabled(LogLevel::Error));
        }
    }

    mod null_logger_tests {
        use super::*;

        #[test]
        fn should_not_log_anything() {
            let logger = NullLogger::new();

            // These should not panic
            logger.debug("debug message");
            logger.info("info message");
            logger.warn("warn message");
            logger.error("error message");
        }
    }
}
