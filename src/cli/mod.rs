//! Command line interface for training and serving sentiment models.

pub mod args;
pub mod commands;
pub mod output;
