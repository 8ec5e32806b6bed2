//! Error types for the icon label widget.

use thiserror::Error;

/// Top-level error type for the icon label widget.
#[derive(Debug, Error)]
pub enum LabelError {
    #[error(transparent)]
    Layout(#[from] LayoutError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors during layout computation.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum LayoutError {
    /// The icon, padding and margin leave no horizontal room for text.
    #[error("Layout impossible: text width budget is {budget}, nothing fits beside the icon")]
    LayoutImpossible { budget: f64 },

    /// Drawing was requested before the widget resolved its size.
    #[error("Widget has not been measured since its last change")]
    NotMeasured,
}

/// Errors while reading widget attributes.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid max lines: {value} (must be at least 1)")]
    InvalidMaxLines { value: u32 },

    #[error("Invalid line spacing: {value} (must be a finite multiplier >= 1)")]
    InvalidLineSpacing { value: f64 },

    #[error("Invalid {name}: {value} (must be finite and non-negative)")]
    InvalidDimension { name: &'static str, value: f64 },

    #[error("Invalid color format: {value}")]
    InvalidColor { value: String },

    #[error("Malformed attribute document: {0}")]
    Malformed(String),
}

impl ConfigError {
    /// Check that a dimension attribute is finite and non-negative.
    pub fn check_dimension(name: &'static str, value: f64) -> Result<f64, ConfigError> {
        if value.is_finite() && value >= 0.0 {
            Ok(value)
        } else {
            Err(ConfigError::InvalidDimension { name, value })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_error_converts_into_label_error() {
        let err: LabelError = LayoutError::NotMeasured.into();
        assert!(matches!(err, LabelError::Layout(LayoutError::NotMeasured)));
    }

    #[test]
    fn test_layout_impossible_message() {
        let err = LayoutError::LayoutImpossible { budget: -4.0 };
        assert!(err.to_string().contains("-4"));
    }

    #[test]
    fn test_check_dimension() {
        assert_eq!(ConfigError::check_dimension("padding", 3.0).unwrap(), 3.0);
        assert!(ConfigError::check_dimension("padding", -1.0).is_err());
        assert!(ConfigError::check_dimension("padding", f64::NAN).is_err());
    }
}
