//! Shared command handlers

pub mod list;
