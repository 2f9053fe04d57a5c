//! Text writer for Siemens diffusion vector files.
//!
//! Lines are written in input order, each followed by the configured
//! terminator. The file is created or truncated on open.

pub mod dvs_writer;
pub use dvs_writer::{write, DvsWriter};
