//! Error adapter for converting BranchlineError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use branchline::BranchlineError;

/// Adapter that gives a [`BranchlineError`] a diagnostic code and a hint.
pub struct ErrorAdapter<'a>(pub &'a BranchlineError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(self.0)
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match self.0 {
            BranchlineError::Io(_) => "branchline::io",
            BranchlineError::Json(_) => "branchline::json",
            BranchlineError::Config(_) => "branchline::config",
            BranchlineError::Sheet(_) => "branchline::sheet",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match self.0 {
            BranchlineError::Json(err) if err.is_data() => format!(
                "line {} column {}: every node needs an `id` and a `date` (RFC 3339 or YYYY-MM-DD)",
                err.line(),
                err.column()
            ),
            BranchlineError::Json(err) => {
                format!("line {} column {}", err.line(), err.column())
            }
            BranchlineError::Sheet(_) => "pass --sheet with one of the listed names".to_string(),
            BranchlineError::Io(_) | BranchlineError::Config(_) => return None,
        };
        Some(Box::new(help))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        None
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code_of(err: &BranchlineError) -> String {
        ErrorAdapter(err)
            .code()
            .map(|code| code.to_string())
            .unwrap_or_default()
    }

    #[test]
    fn test_codes() {
        let io = BranchlineError::Io(std::io::Error::other("disk"));
        assert_eq!(code_of(&io), "branchline::io");

        let config = BranchlineError::Config("bad color".to_string());
        assert_eq!(code_of(&config), "branchline::config");

        let sheet = BranchlineError::Sheet("no sheet".to_string());
        assert_eq!(code_of(&sheet), "branchline::sheet");
    }

    #[test]
    fn test_json_error_points_at_location() {
        let json_err = serde_json::from_str::<serde_json::Value>("{\n  \"a\": ]").unwrap_err();
        let err = BranchlineError::from(json_err);
        let adapter = ErrorAdapter(&err);

        assert_eq!(code_of(&err), "branchline::json");
        let help = adapter.help().map(|help| help.to_string()).unwrap_or_default();
        assert!(help.starts_with("line 2"), "unexpected help: {help}");
    }

    #[test]
    fn test_display_passes_through() {
        let err = BranchlineError::Config("bad color".to_string());
        assert_eq!(ErrorAdapter(&err).to_string(), "Configuration error: bad color");
        assert!(ErrorAdapter(&err).help().is_none());
    }
}
