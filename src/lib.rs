#![forbid(unsafe_code)]

pub mod config;
pub mod datamodel;
pub mod http;
pub mod importers;
pub mod registry;
pub mod view;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
