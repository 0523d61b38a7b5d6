//! Unit tests for the display module.
