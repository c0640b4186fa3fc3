//! Storage layer for donorbank.
//!
//! This module persists the donor list as a flat JSON file: a top-level
//! array of donor objects with no version field or other metadata.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::donor::Donor;
use crate::error::{Error, Result};

/// Default donor file name, resolved against the working directory.
pub const DEFAULT_DATA_FILE: &str = "donors.json";

/// Flat-file store for the donor list.
///
/// The file is assumed to be owned exclusively by the running process;
/// there is no locking or conflict detection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Storage {
    /// Path to the donor file.
    path: PathBuf,
}

impl Storage {
    /// Create a store backed by the file at `path`.
    ///
    /// Nothing is touched on disk until [`Storage::read`] or
    /// [`Storage::write`] is called.
    #[must_use]
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Get the path to the donor file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every donor stored in the file.
    ///
    /// Returns `None` if the file does not exist. A file holding only
    /// whitespace reads as an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CorruptStore`] if the content is not a valid donor
    /// list, or [`Error::Io`] if the file cannot be read.
    pub fn read(&self) -> Result<Option<Vec<Donor>>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No donor file at {}", self.path.display());
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        if content.trim().is_empty() {
            debug!("Donor file {} is empty", self.path.display());
            return Ok(Some(Vec::new()));
        }

        let donors = parse_donors(&content).map_err(|e| Error::CorruptStore {
            path: self.path.clone(),
            reason: e.to_string(),
        })?;
        debug!("Read {} donors from {}", donors.len(), self.path.display());
        Ok(Some(donors))
    }

    /// Write the donor list, replacing any existing content.
    ///
    /// Creates the parent directories if they don't exist.
    ///
    /// # Errors
    ///
    /// Returns an error if a directory cannot be created or the file cannot
    /// be written.
    pub fn write(&self, donors: &[Donor]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|source| Error::DirectoryCreate {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }

        let json = serde_json::to_string_pretty(donors)?;
        fs::write(&self.path, json)?;

        info!("Saved {} donors to {}", donors.len(), self.path.display());
        Ok(())
    }
}

impl Default for Storage {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_FILE)
    }
}

/// Parse the JSON text of a donor file.
///
/// Stored values are taken verbatim: nothing is re-validated or
/// re-normalized.
///
/// # Errors
///
/// Returns the parser error if `content` is not an array of donor objects.
pub fn parse_donors(content: &str) -> serde_json::Result<Vec<Donor>> {
    serde_json::from_str(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_donors() -> Vec<Donor> {
        vec![
            Donor::new("john doe", 25, "Male", "9998887777", "A+", "DELHI"),
            Donor::new("ann lee", 41, "Female", "5551234", "AB-", "PUNE"),
        ]
    }

    #[test]
    fn test_default_path() {
        assert_eq!(Storage::default().path(), Path::new("donors.json"));
    }

    #[test]
    fn test_parse_donors() {
        let json = r#"[{"name":"John Doe","age":25,"gender":"Male",
            "contact":"9998887777","blood_type":"A+","location":"DELHI"}]"#;
        let donors = parse_donors(json).unwrap();
        assert_eq!(donors.len(), 1);
        assert_eq!(donors[0].name, "John Doe");
        assert_eq!(donors[0].location, "DELHI");
    }

    #[test]
    fn test_parse_keeps_values_verbatim() {
        let json = r#"[{"name":"lower case","age":99,"gender":"x",
            "contact":"abc","blood_type":"zz","location":"mixed Case"}]"#;
        let donors = parse_donors(json).unwrap();
        assert_eq!(donors[0].name, "lower case");
        assert_eq!(donors[0].age, 99);
        assert_eq!(donors[0].blood_type, "zz");
        assert_eq!(donors[0].location, "mixed Case");
    }

    #[test]
    fn test_parse_donors_rejects_garbage() {
        assert!(parse_donors("not json").is_err());
        assert!(parse_donors(r#"{"name":"not a list"}"#).is_err());
        assert!(parse_donors(r#"[{"name":"missing fields"}]"#).is_err());
    }

    #[test]
    fn test_parse_empty_array() {
        assert!(parse_donors("[]").unwrap().is_empty());
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let storage = Storage::new(dir.path().join("absent.json"));
        assert!(storage.read().unwrap().is_none());
    }

    #[test]
    fn test_read_blank_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("donors.json");
        fs::write(&path, "  \n").unwrap();

        assert_eq!(Storage::new(&path).read().unwrap(), Some(Vec::new()));
    }

    #[test]
    fn test_read_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("donors.json");
        fs::write(&path, "not json").unwrap();

        let err = Storage::new(&path).read().unwrap_err();
        assert!(matches!(err, Error::CorruptStore { .. }));
        assert!(err.to_string().contains("donors.json"));
    }

    #[test]
    fn test_write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let storage = Storage::new(dir.path().join("donors.json"));
        let donors = sample_donors();

        storage.write(&donors).unwrap();
        assert!(storage.path().exists());
        assert_eq!(storage.read().unwrap(), Some(donors));
    }

    #[test]
    fn test_write_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let storage = Storage::new(dir.path().join("donors.json"));

        storage.write(&sample_donors()).unwrap();
        storage.write(&[]).unwrap();
        assert_eq!(storage.read().unwrap(), Some(Vec::new()));
    }

    #[test]
    fn test_write_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let storage = Storage::new(dir.path().join("nested/deeper/donors.json"));

        storage.write(&sample_donors()).unwrap();
        assert_eq!(storage.read().unwrap().map(|donors| donors.len()), Some(2));
    }
}
