//! Shared test harness for the hash crates. Dev-dependency only.

pub mod hash;
