//! Input adapters: command-line arguments and explore scripts.

pub mod cli;
