//! Client-side utilities for creating an SPL token mint and funding its first holder.
//!
//! Includes the token context, transaction submission, environment loading, and the
//! mint-and-fund pipeline itself.

pub mod context;
pub mod load_env;
pub mod logs;
pub mod mint_and_fund;
pub mod mollusk_helpers;
pub mod pretty;
pub mod program_ids;
pub mod transactions;

pub use logs::LogColor;
