//! Test utilities shared by unit and integration tests.

pub mod fixtures;
pub mod http;
