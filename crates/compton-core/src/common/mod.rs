pub mod config;
pub mod constants;
pub mod elements;
pub mod subshell;
