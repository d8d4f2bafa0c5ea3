//! End-to-end tests for the login theme server live under `tests/`.
