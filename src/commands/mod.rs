//! CLI command modules

pub mod copy;
pub mod view;
