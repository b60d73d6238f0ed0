//! Error types for ssecompat operations.
//!
//! The raw intrinsic surface keeps its origin contracts (null pointers,
//! asserts on slice lengths); these errors back the safe allocation helpers
//! that Rust callers are expected to prefer.

use std::fmt;

/// Errors that can occur in the safe helper APIs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompatError {
    /// Memory allocation failed.
    AllocationError {
        /// The size that was requested to be allocated.
        requested_size: usize,
        /// The alignment that was requested.
        requested_alignment: usize,
    },
    /// Invalid layout parameters were provided.
    LayoutError {
        /// The size parameter that caused the error.
        size: usize,
        /// The alignment parameter that caused the error.
        alignment: usize,
        /// Human-readable error message.
        message: String,
    },
}

impl fmt::Display for CompatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompatError::AllocationError {
                requested_size,
                requested_alignment,
            } => write!(
                f,
                "Memory allocation failed (requested {} bytes with {} byte alignment)",
                requested_size, requested_alignment
            ),
            CompatError::LayoutError {
                size,
                alignment,
                message,
            } => write!(
                f,
                "Invalid memory layout: {} (size: {}, alignment: {})",
                message, size, alignment
            ),
        }
    }
}

impl std::error::Error for CompatError {}

/// Result type alias for ssecompat helper operations.
pub type Result<T> = std::result::Result<T, CompatError>;

/// Creates an allocation error.
pub fn allocation_error(size: usize, alignment: usize) -> CompatError {
    CompatError::AllocationError {
        requested_size: size,
        requested_alignment: alignment,
    }
}

/// Creates a layout error.
pub fn layout_error(size: usize, alignment: usize, message: impl Into<String>) -> CompatError {
    CompatError::LayoutError {
        size,
        alignment,
        message: message.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocation_error_display() {
        let error = allocation_error(1024, 16);
        let display = format!("{}", error);
        assert!(display.contains("Memory allocation failed"));
        assert!(display.contains("1024 bytes"));
        assert!(display.contains("16 byte alignment"));
    }

    #[test]
    fn test_layout_error_display() {
        let error = layout_error(1000, 31, "alignment must be a power of two");
        let display = format!("{}", error);
        assert!(display.contains("Invalid memory layout"));
        assert!(display.contains("size: 1000"));
        assert!(display.contains("alignment: 31"));
        assert!(display.contains("power of two"));
    }

    #[test]
    fn test_error_equality() {
        let error1 = allocation_error(1024, 16);
        let error2 = allocation_error(1024, 16);
        let error3 = allocation_error(2048, 16);

        assert_eq!(error1, error2);
        assert_ne!(error1, error3);
    }

    #[test]
    fn test_error_trait_implementation() {
        let error = allocation_error(1024, 16);

        let _: &dyn std::error::Error = &error;
        assert!(std::error::Error::source(&error).is_none());
    }
}
