//! End-to-End Integration Tests
//!
//! These tests start the login theme server on a random port and drive it
//! over HTTP.

mod common;
mod health;
mod page_rendering;
mod preview;
