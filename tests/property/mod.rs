//! Property-based tests for the engine
