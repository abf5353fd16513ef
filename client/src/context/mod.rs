//! Contexts that hold on-chain addresses and build the instructions that act on them.

pub mod token;
