//! Unit tests for the network module.
