//! Edge case tests for laki-par
