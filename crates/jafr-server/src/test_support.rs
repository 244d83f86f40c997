//! Shared test utilities for jafr-server unit tests.
