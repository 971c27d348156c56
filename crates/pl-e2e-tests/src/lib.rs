//! Test-only crate. All integration tests live under `tests/`.
