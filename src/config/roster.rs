use crate::core::store::StudentStore;
use crate::domain::model::Student;
use crate::utils::error::{RegistryError, Result};
use crate::utils::validation::{validate_non_empty_string, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Seed file describing the students to load at startup.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RosterConfig {
    #[serde(default)]
    pub registry: RegistrySection,
    #[serde(default)]
    pub students: Vec<Student>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegistrySection {
    pub title: Option<String>,
}

impl RosterConfig {
    /// 從 TOML 檔案載入名冊
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(RegistryError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| RegistryError::RosterParseError {
            message: e.to_string(),
        })
    }

    pub fn title(&self) -> Option<&str> {
        self.registry.title.as_deref()
    }

    /// Adds every entry through the store's validated `add`, stopping at the
    /// first rejection. Returns how many students were loaded; a rejection
    /// names the 1-based entry and its id.
    pub fn seed(&self, store: &mut StudentStore) -> Result<usize> {
        for (index, student) in self.students.iter().enumerate() {
            if let Err(e) = store.add(student.clone()) {
                let err = RegistryError::RosterEntryRejected {
                    entry: index + 1,
                    id: student.id,
                    source: Box::new(e),
                };
                tracing::error!("{}", err);
                return Err(err);
            }
        }
        tracing::info!("Loaded {} students from roster", self.students.len());
        Ok(self.students.len())
    }
}

impl Validate for RosterConfig {
    fn validate(&self) -> Result<()> {
        if let Some(title) = &self.registry.title {
            validate_non_empty_string("registry.title", title)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::ErrorKind;

    const ROSTER: &str = r#"
[registry]
title = "Fall term"

[[students]]
id = 1
name = "Ana"
age = 20
program = "Systems"
average = 8.5

[[students]]
id = 2
name = "Luis"
age = 22
program = "Accounting"
average = 7.8
active = false
"#;

    #[test]
    fn test_parse_roster() {
        let roster = RosterConfig::from_toml_str(ROSTER).unwrap();
        assert_eq!(roster.title(), Some("Fall term"));
        assert_eq!(roster.students.len(), 2);
        assert!(roster.students[0].active);
        assert!(!roster.students[1].active);
        assert!(roster.validate().is_ok());
    }

    #[test]
    fn test_seed_keeps_order_and_flags() {
        let roster = RosterConfig::from_toml_str(ROSTER).unwrap();
        let mut store = StudentStore::new();
        assert_eq!(roster.seed(&mut store).unwrap(), 2);

        let ids: Vec<i64> = store.list().iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(store.list_active().len(), 1);
    }

    #[test]
    fn test_seed_stops_at_first_invalid_entry() {
        let content = r#"
[[students]]
id = 1
name = "Ana"
age = 20
program = "Systems"
average = 8.5

[[students]]
id = 2
name = "Kid"
age = 12
program = "None"
average = 5.0

[[students]]
id = 3
name = "María"
age = 19
program = "Law"
average = 9.2
"#;
        let roster = RosterConfig::from_toml_str(content).unwrap();
        let mut store = StudentStore::new();
        let err = roster.seed(&mut store).unwrap_err();
        match &err {
            RegistryError::RosterEntryRejected { entry, id, source } => {
                assert_eq!(*entry, 2);
                assert_eq!(*id, 2);
                assert_eq!(source.kind(), Some(ErrorKind::InvalidAge));
            }
            other => panic!("unexpected error: {:?}", other),
        }
        assert_eq!(
            err.to_string(),
            "Roster entry #2 (id 2) rejected: Age 12 is out of range (15-80)"
        );
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_empty_roster_is_valid() {
        let roster = RosterConfig::from_toml_str("").unwrap();
        assert!(roster.students.is_empty());
        assert_eq!(roster.title(), None);
    }

    #[test]
    fn test_blank_title_fails_validation() {
        let roster = RosterConfig::from_toml_str("[registry]\ntitle = \"  \"\n").unwrap();
        assert!(roster.validate().is_err());
    }

    #[test]
    fn test_missing_field_is_parse_error() {
        let err = RosterConfig::from_toml_str("[[students]]\nid = 1\n").unwrap_err();
        assert!(matches!(err, RegistryError::RosterParseError { .. }));
    }
}
