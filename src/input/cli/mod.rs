pub mod args;
pub mod script;
