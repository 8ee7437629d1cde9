//! Application services: reload orchestration and lookup queries.

pub mod command_handlers;
pub mod query_handlers;
