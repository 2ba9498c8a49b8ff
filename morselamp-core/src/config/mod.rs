//! Configuration types
//!
//! Board-agnostic configuration structures. The host binary loads them
//! from TOML; `no_std` users build them in code.

pub mod types;

pub use types::*;
