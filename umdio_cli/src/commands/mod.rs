//! CLI subcommand implementations.

use clap::Args;

pub mod courses;
pub mod professors;

/// Arguments of the single-resource lookups.
#[derive(Args)]
pub struct IdArgs {
    /// Resource id
    pub id: String,
}
