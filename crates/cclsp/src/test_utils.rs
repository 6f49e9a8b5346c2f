//! Test utilities for capturing published diagnostics.
