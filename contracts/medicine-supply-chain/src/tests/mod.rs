#![cfg(test)]

/// Test utilities and fixtures
pub mod utils;




/// Read-side projection and counter tests
mod queries;
