//! Error message formatting with actionable suggestions.

use pandalink_core::error::LinkError;
use std::error::Error;

use super::Style;

/// Renders a `LinkError` as `error:` / `help:` / `caused by:` lines
pub struct ErrorFormatter {
    style: Style,
}

impl ErrorFormatter {
    pub fn with_style(style: Style) -> Self {
        Self { style }
    }

    /// Format an error with its suggestion and source chain
    pub fn format_error(&self, error: &LinkError) -> String {
        let mut output = format!("{}: {}", self.style.red("error"), error);

        if let Some(suggestion) = error.suggestion() {
            output.push('\n');
            output.push_str(&self.style.dim("help"));
            output.push_str(": ");
            output.push_str(suggestion);
        }

        let mut source = error.source();
        while let Some(err) = source {
            output.push('\n');
            output.push_str(&self.style.dim("caused by"));
            output.push_str(": ");
            output.push_str(&err.to_string());
            source = err.source();
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::path::PathBuf;

    const PLAIN: Style = Style { enabled: false };

    #[test]
    fn test_format_not_found() {
        let formatter = ErrorFormatter::with_style(PLAIN);
        let err = LinkError::RuntimeNotFound { package: "pandac".to_string() };

        let text = formatter.format_error(&err);
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("error: Panda3D not found on system (could not import pandac)"));
        assert!(lines.next().unwrap().starts_with("help: "));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_format_source_chain() {
        let formatter = ErrorFormatter::with_style(PLAIN);
        let err = LinkError::io(
            "Failed to resolve the program's location".to_string(),
            io::Error::new(io::ErrorKind::NotFound, "no such file"),
        );

        let text = formatter.format_error(&err);
        assert!(text.starts_with("error: IO error: Failed to resolve"));
        assert!(text.ends_with("caused by: no such file"));
        assert!(!text.contains("help:"));
    }

    #[test]
    fn test_format_link_failure() {
        let formatter = ErrorFormatter::with_style(PLAIN);
        let err = LinkError::LinkCreationFailed {
            target: PathBuf::from("/game/src/built_panda"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };

        let text = formatter.format_error(&err);
        assert!(text.contains("could not create a link at /game/src/built_panda"));
        assert!(text.contains("help: "));
        assert!(text.ends_with("caused by: denied"));
    }
}
