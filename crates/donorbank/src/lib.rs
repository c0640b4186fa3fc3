//! `donorbank` - A single-user blood donor registry
//!
//! This library provides the donor registry (register, search, list, update,
//! delete), the acceptability checks applied to raw form input, and flat-file
//! JSON persistence of the donor list.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod cli;
pub mod config;
pub mod donor;
pub mod error;
pub mod form;
pub mod logging;
pub mod registry;
pub mod storage;

pub use config::Config;
pub use donor::{Age, BloodType, Donor};
pub use error::{Error, Result};
pub use logging::init_logging;
pub use registry::{DonorUpdate, LoadOutcome, NewDonor, Registry};
pub use storage::Storage;
