use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ComptonResult<T> = Result<T, ComptonError>;
pub type ComputeResult<T> = ComptonResult<T>;
pub type VerificationResult<T> = ComptonResult<T>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComptonErrorCategory {
    Success,
    InputValidationError,
    IoSystemError,
    ComputationError,
    InternalError,
}

impl ComptonErrorCategory {
    pub const fn exit_status(self) -> ExitStatus {
        match self {
            Self::Success => ExitStatus {
                exit_code: 0,
                category_name: "Success",
                severity_class: "SUCCESS",
            },
            Self::InputValidationError => ExitStatus {
                exit_code: 2,
                category_name: "InputValidationError",
                severity_class: "INPUT_FATAL",
            },
            Self::IoSystemError => ExitStatus {
                exit_code: 3,
                category_name: "IoSystemError",
                severity_class: "IO_FATAL",
            },
            Self::ComputationError => ExitStatus {
                exit_code: 4,
                category_name: "ComputationError",
                severity_class: "RUN_FATAL",
            },
            Self::InternalError => ExitStatus {
                exit_code: 5,
                category_name: "InternalError",
                severity_class: "SYS_FATAL",
            },
        }
    }

    pub const fn exit_code(self) -> i32 {
        self.exit_status().exit_code
    }

    pub const fn category_name(self) -> &'static str {
        self.exit_status().category_name
    }

    pub const fn severity_class(self) -> &'static str {
        self.exit_status().severity_class
    }

    pub const fn is_fatal(self) -> bool {
        !matches!(self, Self::Success)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitStatus {
    pub exit_code: i32,
    pub category_name: &'static str,
    pub severity_class: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComptonError {
    category: ComptonErrorCategory,
    placeholder: &'static str,
    message: String,
}

impl ComptonError {
    pub fn new(
        category: ComptonErrorCategory,
        placeholder: &'static str,
        message: impl Into<String>,
    ) -> Self {
        Self {
            category,
            placeholder,
            message: message.into(),
        }
    }

    pub fn input_validation(placeholder: &'static str, message: impl Into<String>) -> Self {
        Self::new(
            ComptonErrorCategory::InputValidationError,
            placeholder,
            message,
        )
    }

    pub fn io_system(placeholder: &'static str, message: impl Into<String>) -> Self {
        Self::new(ComptonErrorCategory::IoSystemError, placeholder, message)
    }

    pub fn computation(placeholder: &'static str, message: impl Into<String>) -> Self {
        Self::new(ComptonErrorCategory::ComputationError, placeholder, message)
    }

    pub fn internal(placeholder: &'static str, message: impl Into<String>) -> Self {
        Self::new(ComptonErrorCategory::InternalError, placeholder, message)
    }

    pub const fn category(&self) -> ComptonErrorCategory {
        self.category
    }

    pub const fn placeholder(&self) -> &'static str {
        self.placeholder
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn exit_code(&self) -> i32 {
        self.category.exit_code()
    }

    pub fn diagnostic_line(&self) -> String {
        let severity = if self.category.is_fatal() {
            "ERROR"
        } else {
            "INFO"
        };
        format!("{}: [{}] {}", severity, self.placeholder, self.message)
    }

    pub fn fatal_exit_line(&self) -> Option<String> {
        self.category
            .is_fatal()
            .then(|| format!("FATAL EXIT CODE: {}", self.exit_code()))
    }
}

impl Display for ComptonError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} [{}] {}",
            self.category.category_name(),
            self.placeholder,
            self.message
        )
    }
}

impl Error for ComptonError {}

#[cfg(test)]
mod tests {
    use super::{ComptonError, ComptonErrorCategory};

    #[test]
    fn exit_mapping_is_stable() {
        let cases = [
            (ComptonErrorCategory::Success, 0, "Success", "SUCCESS"),
            (
                ComptonErrorCategory::InputValidationError,
                2,
                "InputValidationError",
                "INPUT_FATAL",
            ),
            (
                ComptonErrorCategory::IoSystemError,
                3,
                "IoSystemError",
                "IO_FATAL",
            ),
            (
                ComptonErrorCategory::ComputationError,
                4,
                "ComputationError",
                "RUN_FATAL",
            ),
            (
                ComptonErrorCategory::InternalError,
                5,
                "InternalError",
                "SYS_FATAL",
            ),
        ];

        for (category, exit_code, category_name, severity_class) in cases {
            let status = category.exit_status();
            assert_eq!(status.exit_code, exit_code);
            assert_eq!(status.category_name, category_name);
            assert_eq!(status.severity_class, severity_class);
        }
    }

    #[test]
    fn fatal_error_renders_diagnostic_lines() {
        let error = ComptonError::input_validation(
            "INPUT.ATOMIC_NUMBER",
            "atomic number 101 is outside 1..=100",
        );

        assert_eq!(error.exit_code(), 2);
        assert_eq!(
            error.diagnostic_line(),
            "ERROR: [INPUT.ATOMIC_NUMBER] atomic number 101 is outside 1..=100"
        );
        assert_eq!(
            error.fatal_exit_line().as_deref(),
            Some("FATAL EXIT CODE: 2")
        );
        assert_eq!(
            error.to_string(),
            "InputValidationError [INPUT.ATOMIC_NUMBER] atomic number 101 is outside 1..=100"
        );
    }
}
