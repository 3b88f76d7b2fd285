//! Library crate root re-exporting resolver and dispatch modules.

#[path = "lib/mod.rs"]
pub mod lib_mod;
pub use lib_mod as lib;
pub mod cli;
pub mod config;
pub mod engine;
pub mod uat;
