//! CLI command implementations.

pub mod inspect;
pub mod routes;
pub mod serve;
