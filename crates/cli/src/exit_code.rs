//! Exit code definitions for the s3drop CLI
//!
//! Scripts rely on these values; changing them is a breaking change.

/// Exit codes for the s3drop CLI application.
///
/// Every failure (configuration, local file, download, backend) exits with
/// the same code so batch scripts only need to test for non-zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Operation completed successfully
    Success = 0,

    /// Any failure
    Failure = 1,
}

impl ExitCode {
    /// Convert exit code to i32 for use with std::process::exit
    #[inline]
    pub const fn as_i32(self) -> i32 {
        self as i32
    }

    /// Create exit code from i32 value
    ///
    /// Returns None if the value doesn't correspond to a known exit code.
    pub const fn from_i32(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::Success),
            1 => Some(Self::Failure),
            _ => None,
        }
    }

    /// Exit code for a library error
    pub fn from_error(err: &s3drop_core::Error) -> Self {
        Self::from_i32(err.exit_code()).unwrap_or(Self::Failure)
    }

    /// Exit code for an operation outcome
    pub const fn from_success(success: bool) -> Self {
        if success { Self::Success } else { Self::Failure }
    }

    /// Get a human-readable description of the exit code
    pub const fn description(self) -> &'static str {
        match self {
            Self::Success => "Operation completed successfully",
            Self::Failure => "Operation failed",
        }
    }
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code.as_i32()
    }
}

impl std::fmt::Display for ExitCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.description(), self.as_i32())
    }
}
