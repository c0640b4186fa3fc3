//! Acceptability checks for raw form input.
//!
//! The presentation layer collects six raw strings per action. Before the
//! registry sees them they must pass the checks here: required fields,
//! digits-only age and contact, the age range and the blood type set.
//! Updates are checked more loosely; see [`UpdateForm::validate`].

use crate::donor::{BloodType, MAX_AGE, MIN_AGE};
use crate::error::{Error, Result};
use crate::registry::{DonorUpdate, NewDonor};

/// Raw registration input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    /// Donor name.
    pub name: String,
    /// Age as typed.
    pub age: String,
    /// Gender label.
    pub gender: String,
    /// Contact number as typed.
    pub contact: String,
    /// Blood type as typed.
    pub blood_type: String,
    /// Location.
    pub location: String,
}

impl RegistrationForm {
    /// Check the form and convert it into registry input.
    ///
    /// Every field is trimmed first. The blood type is checked before
    /// anything else.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidField`] for an unknown blood type, a
    /// non-numeric or out-of-range age, or a non-numeric contact, and
    /// [`Error::MissingField`] for any empty field.
    pub fn validate(&self) -> Result<NewDonor> {
        let name = self.name.trim();
        let age = self.age.trim();
        let gender = self.gender.trim();
        let contact = self.contact.trim();
        let location = self.location.trim();

        let blood_type: BloodType = self.blood_type.parse()?;

        for (field, value) in [
            ("name", name),
            ("age", age),
            ("gender", gender),
            ("contact", contact),
            ("location", location),
        ] {
            require(field, value)?;
        }

        let age = parse_age(age)?;
        if !(MIN_AGE..=MAX_AGE).contains(&age) {
            return Err(Error::invalid_field(
                "age",
                format!("must be between {MIN_AGE} and {MAX_AGE}"),
            ));
        }

        if !is_digits(contact) {
            return Err(Error::invalid_field("contact", "must contain digits only"));
        }

        Ok(NewDonor {
            name: name.to_string(),
            age,
            gender: gender.to_string(),
            contact: contact.to_string(),
            blood_type: blood_type.code().to_string(),
            location: location.to_string(),
        })
    }
}

/// Raw update input. Every field except `contact` may be left empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateForm {
    /// Contact number of the donor to update.
    pub contact: String,
    /// Replacement name.
    pub name: String,
    /// Replacement age as typed.
    pub age: String,
    /// Replacement gender.
    pub gender: String,
    /// Replacement blood type.
    pub blood_type: String,
    /// Replacement location.
    pub location: String,
}

impl UpdateForm {
    /// Check the form and convert it into the target contact and the
    /// partial update.
    ///
    /// Empty fields become "not supplied". A supplied age only has to be a
    /// number; its range and the blood type code are not checked on update.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingField`] if the contact is empty and
    /// [`Error::InvalidField`] if a supplied age is not a number.
    pub fn validate(&self) -> Result<(String, DonorUpdate)> {
        let contact = self.contact.trim();
        require("contact", contact)?;

        let age = match self.age.trim() {
            "" => None,
            age => Some(parse_age(age)?),
        };

        let update = DonorUpdate {
            name: optional(&self.name),
            age,
            gender: optional(&self.gender),
            blood_type: optional(&self.blood_type),
            location: optional(&self.location),
        };
        Ok((contact.to_string(), update))
    }
}

/// Check the contact number given for a deletion.
///
/// # Errors
///
/// Returns [`Error::MissingField`] if the contact is empty.
pub fn delete_contact(contact: &str) -> Result<&str> {
    let contact = contact.trim();
    require("contact", contact)?;
    Ok(contact)
}

fn require(field: &'static str, value: &str) -> Result<()> {
    if value.is_empty() {
        Err(Error::MissingField { field })
    } else {
        Ok(())
    }
}

fn parse_age(age: &str) -> Result<u32> {
    if !is_digits(age) {
        return Err(Error::invalid_field("age", "must contain digits only"));
    }
    age.parse()
        .map_err(|_| Error::invalid_field("age", format!("'{age}' is too large")))
}

fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

fn is_digits(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| c.is_ascii_digit())
}
