//! The donor registry.
//!
//! The registry owns the donor list in insertion order and exposes the
//! register/search/list/update/delete operations plus load/save against a
//! [`Storage`]. It is a plain value: callers construct it, load it, operate
//! on it and save it explicitly. Nothing in here is shared or global.

use tracing::{debug, info, warn};

use crate::donor::{Age, Donor};
use crate::error::{Error, Result};
use crate::storage::Storage;

/// Input for [`Registry::register`].
///
/// Produced by the form layer once the raw field strings have passed the
/// acceptability checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDonor {
    /// Name as entered; title-cased on registration.
    pub name: String,
    /// Age in years.
    pub age: u32,
    /// Gender label.
    pub gender: String,
    /// Digits-only contact number.
    pub contact: String,
    /// Blood type code in any case.
    pub blood_type: String,
    /// Location in any case.
    pub location: String,
}

/// Partial replacement for [`Registry::update`].
///
/// `None` and empty strings leave the existing value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DonorUpdate {
    /// Replacement name, stored as given.
    pub name: Option<String>,
    /// Replacement age. Not range-checked.
    pub age: Option<u32>,
    /// Replacement gender.
    pub gender: Option<String>,
    /// Replacement blood type, upper-cased on store. Not checked against
    /// the eight codes.
    pub blood_type: Option<String>,
    /// Replacement location, upper-cased on store.
    pub location: Option<String>,
}

impl DonorUpdate {
    /// Check whether this update would change nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        let blank = |value: &Option<String>| value.as_deref().map_or(true, str::is_empty);
        blank(&self.name)
            && self.age.is_none()
            && blank(&self.gender)
            && blank(&self.blood_type)
            && blank(&self.location)
    }
}

/// What [`Registry::load`] found on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// No donor file exists yet.
    Missing,
    /// The donor file exists but holds no donors.
    Empty,
    /// This many donors were loaded.
    Loaded(usize),
    /// The donor file could not be used and the registry was reset.
    Reset {
        /// Why the file was rejected.
        reason: String,
    },
}

impl LoadOutcome {
    /// Check whether the registry was reset because of a bad file.
    #[must_use]
    pub fn is_reset(&self) -> bool {
        matches!(self, Self::Reset { .. })
    }
}

/// In-memory donor registry.
///
/// At most one donor per contact number ever exists in the registry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    donors: Vec<Donor>,
}

impl Registry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new donor.
    ///
    /// Blood type and location are upper-cased and the name is title-cased.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateContact`] if a donor with the same contact
    /// number exists; the registry is left unchanged.
    pub fn register(&mut self, new: NewDonor) -> Result<&Donor> {
        if self.get(&new.contact).is_some() {
            debug!("Rejecting duplicate contact {}", new.contact);
            return Err(Error::duplicate_contact(new.contact));
        }

        let contact = new.contact.clone();
        let donor = Donor::new(
            &new.name,
            new.age,
            new.gender,
            new.contact,
            new.blood_type.to_uppercase(),
            new.location.to_uppercase(),
        );
        info!("Registered donor {} ({})", donor.name, donor.contact);
        self.donors.push(donor);

        self.donors
            .last()
            .ok_or_else(|| Error::donor_not_found(contact))
    }

    /// Find donors by blood type and location.
    ///
    /// Both queries are trimmed and matched as case-insensitive substrings;
    /// an empty query matches every donor. Results keep registry order.
    #[must_use]
    pub fn search(&self, blood_type: &str, location: &str) -> Vec<&Donor> {
        let blood_type = blood_type.trim().to_uppercase();
        let location = location.trim().to_lowercase();

        let matches: Vec<&Donor> = self
            .donors
            .iter()
            .filter(|donor| {
                donor.blood_type.to_uppercase().contains(&blood_type)
                    && donor.location.to_lowercase().contains(&location)
            })
            .collect();
        debug!(
            "Search blood_type={:?} location={:?} matched {}",
            blood_type,
            location,
            matches.len()
        );
        matches
    }

    /// Get every donor in registry order.
    #[must_use]
    pub fn list(&self) -> &[Donor] {
        &self.donors
    }

    /// Get the donor registered under `contact`.
    #[must_use]
    pub fn get(&self, contact: &str) -> Option<&Donor> {
        self.donors.iter().find(|donor| donor.contact == contact)
    }

    /// Replace the supplied fields of the donor registered under `contact`.
    ///
    /// The contact number itself never changes. An update that supplies
    /// nothing still succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DonorNotFound`] if no donor has this contact number.
    pub fn update(&mut self, contact: &str, update: DonorUpdate) -> Result<&Donor> {
        let donor = self
            .donors
            .iter_mut()
            .find(|donor| donor.contact == contact)
            .ok_or_else(|| Error::donor_not_found(contact))?;

        if let Some(name) = supplied(update.name) {
            donor.name = name;
        }
        if let Some(age) = update.age {
            donor.age = Age::from(age);
        }
        if let Some(gender) = supplied(update.gender) {
            donor.gender = gender;
        }
        if let Some(blood_type) = supplied(update.blood_type) {
            donor.blood_type = blood_type.to_uppercase();
        }
        if let Some(location) = supplied(update.location) {
            donor.location = location.to_uppercase();
        }

        info!("Updated donor {}", contact);
        Ok(&*donor)
    }

    /// Remove the donor registered under `contact` and return it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DonorNotFound`] if no donor has this contact number.
    pub fn delete(&mut self, contact: &str) -> Result<Donor> {
        let index = self
            .donors
            .iter()
            .position(|donor| donor.contact == contact)
            .ok_or_else(|| Error::donor_not_found(contact))?;

        let donor = self.donors.remove(index);
        info!("Deleted donor {} ({})", donor.name, donor.contact);
        Ok(donor)
    }

    /// Number of registered donors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.donors.len()
    }

    /// Check if the registry holds no donors.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.donors.is_empty()
    }

    /// Replace the registry contents with the donors in `storage`.
    ///
    /// Never fails: a missing, blank, unreadable or corrupt file leaves the
    /// registry empty, and the returned outcome says which case applied.
    pub fn load(&mut self, storage: &Storage) -> LoadOutcome {
        self.donors.clear();

        match storage.read() {
            Ok(None) => LoadOutcome::Missing,
            Ok(Some(donors)) if donors.is_empty() => LoadOutcome::Empty,
            Ok(Some(donors)) => {
                let count = donors.len();
                self.donors = donors;
                info!("Loaded {} donors from {}", count, storage.path().display());
                LoadOutcome::Loaded(count)
            }
            Err(e) => {
                warn!("Starting with an empty registry: {}", e);
                LoadOutcome::Reset {
                    reason: e.to_string(),
                }
            }
        }
    }

    /// Write every donor to `storage`, replacing its previous content.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save(&self, storage: &Storage) -> Result<()> {
        storage.write(&self.donors)
    }
}

impl From<Vec<Donor>> for Registry {
    fn from(donors: Vec<Donor>) -> Self {
        Self { donors }
    }
}

/// Treat an empty string the same as an absent value.
fn supplied(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
