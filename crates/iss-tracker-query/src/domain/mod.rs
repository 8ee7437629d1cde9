//! Domain types for the dataset context.

pub mod commands;
