//! CLI command definitions.
//!
//! This module defines the structure of all CLI subcommands.

use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::config::OutputFormat;
use crate::form::{RegistrationForm, UpdateForm};

/// Register command arguments.
///
/// Values are taken as typed; they are checked before the registry is
/// touched.
#[derive(Debug, Args)]
pub struct RegisterCommand {
    /// Donor's full name
    #[arg(short, long)]
    pub name: String,

    /// Age in years (18-60)
    #[arg(short, long)]
    pub age: String,

    /// Gender label
    #[arg(short, long, default_value = "Male")]
    pub gender: String,

    /// Contact number (digits only, must be unique)
    #[arg(short = 'p', long, visible_alias = "phone")]
    pub contact: String,

    /// Blood type (A+, A-, B+, B-, AB+, AB-, O+, O-)
    #[arg(short, long)]
    pub blood_type: String,

    /// Location or address
    #[arg(short, long)]
    pub location: String,
}

/// Search command arguments.
#[derive(Debug, Args)]
pub struct SearchCommand {
    /// Blood type to look for (substring, case-insensitive)
    #[arg(short, long, default_value = "")]
    pub blood_type: String,

    /// Location to look for (substring, case-insensitive)
    #[arg(short, long, default_value = "")]
    pub location: String,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}

/// List command arguments.
#[derive(Debug, Args)]
pub struct ListCommand {
    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}

/// Update command arguments.
///
/// Only the fields given are changed.
#[derive(Debug, Args)]
pub struct UpdateCommand {
    /// Contact number of the donor to update
    #[arg(short = 'p', long, visible_alias = "phone")]
    pub contact: String,

    /// New name
    #[arg(short, long)]
    pub name: Option<String>,

    /// New age
    #[arg(short, long)]
    pub age: Option<String>,

    /// New gender label
    #[arg(short, long)]
    pub gender: Option<String>,

    /// New blood type
    #[arg(short, long)]
    pub blood_type: Option<String>,

    /// New location
    #[arg(short, long)]
    pub location: Option<String>,
}

/// Delete command arguments.
#[derive(Debug, Args)]
pub struct DeleteCommand {
    /// Contact number of the donor to remove
    pub contact: String,
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the configuration file path
    Path,

    /// Validate configuration
    Validate {
        /// Path to configuration file to validate
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

impl From<RegisterCommand> for RegistrationForm {
    fn from(cmd: RegisterCommand) -> Self {
        Self {
            name: cmd.name,
            age: cmd.age,
            gender: cmd.gender,
            contact: cmd.contact,
            blood_type: cmd.blood_type,
            location: cmd.location,
        }
    }
}

impl From<UpdateCommand> for UpdateForm {
    fn from(cmd: UpdateCommand) -> Self {
        Self {
            contact: cmd.contact,
            name: cmd.name.unwrap_or_default(),
            age: cmd.age.unwrap_or_default(),
            gender: cmd.gender.unwrap_or_default(),
            blood_type: cmd.blood_type.unwrap_or_default(),
            location: cmd.location.unwrap_or_default(),
        }
    }
}
