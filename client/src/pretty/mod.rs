//! Helpers for printing failed mint-and-fund transactions in a readable, colorized format.

pub mod instruction_error;
