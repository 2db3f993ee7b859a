//! Cross-module tests for the vCard reader and writer.
