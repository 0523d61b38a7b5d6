//! Unit tests for the radio module.
