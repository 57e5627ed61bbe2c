//! Core library components.
//!
//! Passphrase gate, object storage access, gallery listing, and page
//! assembly. Nothing here prints; the CLI owns all output.

pub mod config;
pub mod constants;
pub mod gate;
pub mod media;
pub mod page;
pub mod storage;
pub mod types;
