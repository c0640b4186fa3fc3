//! Core donor types for donorbank.
//!
//! This module defines the donor record held by the registry and the fixed
//! set of blood type codes accepted at registration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Error;

/// Youngest age accepted at registration.
pub const MIN_AGE: u32 = 18;

/// Oldest age accepted at registration.
pub const MAX_AGE: u32 = 60;

/// An ABO/Rh blood type code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BloodType {
    /// A positive.
    APos,
    /// A negative.
    ANeg,
    /// B positive.
    BPos,
    /// B negative.
    BNeg,
    /// AB positive.
    AbPos,
    /// AB negative.
    AbNeg,
    /// O positive.
    OPos,
    /// O negative.
    ONeg,
}

impl BloodType {
    /// Every blood type, in the order forms present them.
    pub const ALL: [Self; 8] = [
        Self::APos,
        Self::ANeg,
        Self::BPos,
        Self::BNeg,
        Self::AbPos,
        Self::AbNeg,
        Self::OPos,
        Self::ONeg,
    ];

    /// The canonical upper-case code, e.g. `AB-`.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::APos => "A+",
            Self::ANeg => "A-",
            Self::BPos => "B+",
            Self::BNeg => "B-",
            Self::AbPos => "AB+",
            Self::AbNeg => "AB-",
            Self::OPos => "O+",
            Self::ONeg => "O-",
        }
    }
}

impl fmt::Display for BloodType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for BloodType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_uppercase();
        Self::ALL
            .into_iter()
            .find(|blood_type| blood_type.code() == code)
            .ok_or_else(|| {
                Error::invalid_field("blood_type", format!("'{s}' is not a valid blood group"))
            })
    }
}

/// A donor's age exactly as it is stored.
///
/// Registration always stores a whole number of years, but donor files may
/// hold the age as typed into a form (`"25"`) or anything else an edit left
/// behind. Whatever was read is written back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Age(Value);

impl Age {
    /// The age in whole years, if the stored value is a non-negative
    /// integer or a string of digits.
    #[must_use]
    pub fn years(&self) -> Option<u32> {
        match &self.0 {
            Value::Number(n) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
            Value::String(text) => text.trim().parse().ok(),
            _ => None,
        }
    }
}

impl From<u32> for Age {
    fn from(years: u32) -> Self {
        Self(Value::from(years))
    }
}

impl From<&str> for Age {
    fn from(text: &str) -> Self {
        Self(Value::from(text))
    }
}

impl PartialEq<u32> for Age {
    fn eq(&self, other: &u32) -> bool {
        self.0.as_u64() == Some(u64::from(*other))
    }
}

impl fmt::Display for Age {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Value::String(text) => f.write_str(text),
            other => write!(f, "{other}"),
        }
    }
}

/// A registered blood donor.
///
/// The serialized form is the on-disk record: exactly the six fields below,
/// nothing else. Records with extra keys are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Donor {
    /// Full name, title-cased at registration.
    pub name: String,

    /// Age, kept as stored.
    pub age: Age,

    /// Free-form gender label.
    pub gender: String,

    /// Digits-only contact number; unique within a registry.
    pub contact: String,

    /// Blood type code, upper-cased.
    pub blood_type: String,

    /// Location, upper-cased.
    pub location: String,
}

impl Donor {
    /// Create a donor record, title-casing the name.
    ///
    /// All other fields are stored exactly as given; the age is stored as a
    /// number.
    #[must_use]
    pub fn new(
        name: &str,
        age: u32,
        gender: impl Into<String>,
        contact: impl Into<String>,
        blood_type: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            name: title_case(name),
            age: Age::from(age),
            gender: gender.into(),
            contact: contact.into(),
            blood_type: blood_type.into(),
            location: location.into(),
        }
    }
}

impl fmt::Display for Donor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} | {} | {} | {} | {}",
            self.name, self.age, self.gender, self.contact, self.blood_type, self.location
        )
    }
}

/// Capitalize the first letter of every word and lower-case the rest.
///
/// A word starts at any letter that does not follow another letter, so
/// `o'neil-smith` becomes `O'Neil-Smith`.
#[must_use]
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_word = false;
    for c in text.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("john doe"), "John Doe");
        assert_eq!(title_case("JANE  SMITH"), "Jane  Smith");
        assert_eq!(title_case("o'neil-smith"), "O'Neil-Smith");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_donor_new_title_cases_name_only() {
        let donor = Donor::new("john doe", 25, "Male", "9998887777", "a+", "delhi");
        assert_eq!(donor.name, "John Doe");
        assert_eq!(donor.age, 25);
        assert_eq!(donor.gender, "Male");
        assert_eq!(donor.contact, "9998887777");
        assert_eq!(donor.blood_type, "a+");
        assert_eq!(donor.location, "delhi");
    }

    #[test]
    fn test_donor_display() {
        let donor = Donor::new("ann lee", 30, "Female", "555", "O-", "PUNE");
        assert_eq!(donor.to_string(), "Ann Lee | 30 | Female | 555 | O- | PUNE");
    }

    #[test]
    fn test_blood_type_parse() {
        assert_eq!("ab-".parse::<BloodType>().unwrap(), BloodType::AbNeg);
        assert_eq!(" O+ ".parse::<BloodType>().unwrap(), BloodType::OPos);
        assert!("C+".parse::<BloodType>().is_err());
        assert!("".parse::<BloodType>().is_err());
    }

    #[test]
    fn test_blood_type_codes_round_trip() {
        for blood_type in BloodType::ALL {
            assert_eq!(blood_type.to_string().parse::<BloodType>().unwrap(), blood_type);
        }
    }

    #[test]
    fn test_donor_serialization_fields() {
        let donor = Donor::new("ann lee", 30, "Female", "555", "O-", "PUNE");
        let value = serde_json::to_value(&donor).unwrap();
        let object = value.as_object().unwrap();

        let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            ["age", "blood_type", "contact", "gender", "location", "name"]
        );
        assert_eq!(object["age"], 30);
    }

    #[test]
    fn test_donor_deserialize_string_age() {
        let json = r#"{"name":"John Doe","age":"25","gender":"Male",
            "contact":"9998887777","blood_type":"A+","location":"DELHI"}"#;
        let donor: Donor = serde_json::from_str(json).unwrap();
        assert_eq!(donor.age, Age::from("25"));
        assert_eq!(donor.age.years(), Some(25));
        assert_ne!(donor.age, 25);

        let value = serde_json::to_value(&donor).unwrap();
        assert_eq!(value["age"], "25");
    }

    #[test]
    fn test_donor_keeps_odd_ages() {
        for age in [r#""abc""#, r#""""#, "-1", "25.5"] {
            let json = format!(
                r#"{{"name":"x","age":{age},"gender":"Male","contact":"1","blood_type":"A+","location":"X"}}"#
            );
            let donor: Donor = serde_json::from_str(&json).unwrap();
            assert_eq!(donor.age.years(), None, "age {age}");
            assert_eq!(serde_json::to_value(&donor).unwrap()["age"].to_string(), age);
        }
    }

    #[test]
    fn test_donor_rejects_unknown_fields() {
        let json = r#"{"name":"x","age":30,"gender":"Male","contact":"1",
            "blood_type":"A+","location":"X","version":2}"#;
        let err = serde_json::from_str::<Donor>(json).unwrap_err();
        assert!(err.to_string().contains("version"));
    }

    #[test]
    fn test_age_display() {
        assert_eq!(Age::from(42).to_string(), "42");
        assert_eq!(Age::from("42").to_string(), "42");
        assert_eq!(Age::from("n/a").years(), None);
    }
}
