//! Unit test modules.

mod config_parsing;
mod config_validation;
