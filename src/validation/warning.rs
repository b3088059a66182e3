//! Warnings collected while reading an order.

/// A non-fatal problem in an order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    /// Machine-readable code, one of the `anonymat::order::*` constants.
    pub code: &'static str,
    /// Human-readable message.
    pub message: String,
    /// How to silence the warning.
    pub help: Option<String>,
}

impl Warning {
    pub fn new(code: &'static str, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            help: None,
        }
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

/// Warnings of one order, in document order.
///
/// Filled by the parser even when it stops on a fatal error, so callers can
/// print what was found before the failure.
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    warnings: Vec<Warning>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, warning: Warning) {
        self.warnings.push(warning);
    }

    pub fn warning_count(&self) -> usize {
        self.warnings.len()
    }

    /// No warnings at all.
    pub fn is_ok(&self) -> bool {
        self.warnings.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Warning> {
        self.warnings.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{UNKNOWN_KEY, UNKNOWN_SHAPE};

    #[test]
    fn test_empty_result() {
        let result = ValidationResult::new();
        assert!(result.is_ok());
        assert_eq!(result.warning_count(), 0);
    }

    #[test]
    fn test_keeps_push_order() {
        let mut result = ValidationResult::new();
        result.push(Warning::new(UNKNOWN_KEY, "Unknown key 'note'"));
        result.push(Warning::new(UNKNOWN_SHAPE, "Unknown shape 'star' (shape #1)"));

        assert!(!result.is_ok());
        assert_eq!(result.warning_count(), 2);
        let codes: Vec<&str> = result.iter().map(|w| w.code).collect();
        assert_eq!(codes, vec![UNKNOWN_KEY, UNKNOWN_SHAPE]);
    }

    #[test]
    fn test_warning_with_help() {
        let w = Warning::new(UNKNOWN_KEY, "Unknown key 'note'")
            .with_help("Only 'in', 'out' and 'shapes' are read");
        assert_eq!(w.help.as_deref(), Some("Only 'in', 'out' and 'shapes' are read"));
    }
}
