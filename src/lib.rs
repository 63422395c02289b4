//! CHTCFG - CloudHealth Terraform Config Reconstructor
//!
//! A library for rebuilding `cloudhealth_perspective` configuration blocks
//! from an applied Terraform state file (legacy flattened format).

pub mod perspective;
pub mod terraform;

mod cli;
mod error;
mod input;
mod output;

pub use cli::Cli;
pub use error::ChtcfgError;
pub use input::read_source;
pub use output::{reconstruct_config, write_perspective};
pub use perspective::{Condition, Group, Perspective, Rule};
pub use terraform::{FlatMap, FlatmapError, StateError, StateFile};
