//! One-line confirmations for operations without a richer result.

use std::fmt;

/// Outcome message of an operation such as planning or clearing a day.
pub struct OperationStatus {
    pub message: String,
    pub success: bool,
}

impl OperationStatus {
    /// A completed operation.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: true,
        }
    }

    /// An operation that did not happen, e.g. clearing an empty day.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: false,
        }
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = if self.success { "✓" } else { "✗" };
        writeln!(f, "{prefix} {}", self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_status_display() {
        let success = OperationStatus::success("Planned Chili for 06.05.");
        assert_eq!(success.to_string(), "✓ Planned Chili for 06.05.\n");

        let failure = OperationStatus::failure("Nothing planned for 07.05.");
        assert!(failure.to_string().starts_with("✗"));
    }
}
