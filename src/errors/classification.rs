use super::types::CheckerError;

/// Process exit code for a malformed invocation.
pub const EXIT_USAGE: i32 = 1;
/// Process exit code for a failed read or write.
pub const EXIT_IO: i32 = 2;
/// Process exit code for every other failure.
pub const EXIT_FAILURE: i32 = 3;

#[derive(Debug, Clone)]
pub struct ErrorClassification {
    pub error_type: &'static str,
    pub exit_code: i32,
}

impl CheckerError {
    /// Classify this error to determine its type and the exit code it maps to.
    pub fn classify(&self) -> ErrorClassification {
        match self {
            CheckerError::InvalidArguments(_) => ErrorClassification {
                error_type: "InvalidArgumentsError",
                exit_code: EXIT_USAGE,
            },

            // File access
            CheckerError::File(_) => ErrorClassification {
                error_type: "FileError",
                exit_code: EXIT_IO,
            },
            CheckerError::Io(_) => ErrorClassification {
                error_type: "IoError",
                exit_code: EXIT_IO,
            },

            CheckerError::Config(_) => ErrorClassification {
                error_type: "ConfigError",
                exit_code: EXIT_FAILURE,
            },
            CheckerError::Yaml(_) => ErrorClassification {
                error_type: "YamlError",
                exit_code: EXIT_FAILURE,
            },
            CheckerError::Json(_) => ErrorClassification {
                error_type: "JsonError",
                exit_code: EXIT_FAILURE,
            },
            CheckerError::ResourceLimit(_) => ErrorClassification {
                error_type: "ResourceLimitError",
                exit_code: EXIT_FAILURE,
            },
        }
    }

    pub fn exit_code(&self) -> i32 {
        self.classify().exit_code
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_arguments_is_usage() {
        let err = CheckerError::InvalidArguments("relative path".into());
        let class = err.classify();
        assert_eq!(class.exit_code, EXIT_USAGE);
        assert_eq!(class.error_type, "InvalidArgumentsError");
    }

    #[test]
    fn test_io_errors_share_exit_code() {
        let io = CheckerError::Io(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert_eq!(io.exit_code(), EXIT_IO);
        assert_eq!(CheckerError::File("unreadable".into()).exit_code(), EXIT_IO);
    }

    #[test]
    fn test_config_error_is_failure() {
        let err = CheckerError::Config("bad limit".into());
        assert_eq!(err.exit_code(), EXIT_FAILURE);
    }

    #[test]
    fn test_resource_limit_is_failure() {
        let err = CheckerError::ResourceLimit("too long".into());
        let class = err.classify();
        assert_eq!(class.exit_code, EXIT_FAILURE);
        assert_eq!(class.error_type, "ResourceLimitError");
    }

    #[test]
    fn test_yaml_error_is_failure() {
        let yaml = serde_yaml::from_str::<serde_yaml::Value>("a: [").unwrap_err();
        assert_eq!(CheckerError::from(yaml).exit_code(), EXIT_FAILURE);
    }
}
