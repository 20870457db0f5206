//! Shared test utilities for mess-store unit tests.
