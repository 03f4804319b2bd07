//! Integration tests for the skymap workspace live in `tests/`.
