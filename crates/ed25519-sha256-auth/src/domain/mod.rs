//! # Domain Layer
//!
//! Pure logic with no I/O: sizes, address encoding, hashing and the error
//! taxonomy.

pub mod address;
pub mod config;
pub mod digest;
pub mod entities;
pub mod errors;
pub mod signature;
