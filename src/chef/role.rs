use std::io;
use std::path::Path;

use serde::Deserialize;

use crate::error::EggbeaterError;

/// A Chef role: a named, ordered run list of role and recipe references.
///
/// Role names live inside the file and do not have to match the file name,
/// which is why the graph walker indexes roles by this `name` field.
#[derive(Debug, Clone, Deserialize)]
pub struct Role {
    pub name: String,
    #[serde(default)]
    pub run_list: Vec<String>,
}

impl Role {
    /// Opens and decodes a role file. Unknown fields are ignored.
    pub fn from_file(path: &Path) -> Result<Self, EggbeaterError> {
        let data = std::fs::read_to_string(path).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                EggbeaterError::RoleNotFound {
                    role: path.display().to_string(),
                }
            } else {
                EggbeaterError::Io(source)
            }
        })?;

        serde_json::from_str(&data).map_err(|source| EggbeaterError::RoleMalformed {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_load_role() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("web.json");
        fs::write(
            &path,
            r#"{"name": "web-frontend", "run_list": ["role[base]", "recipe[nginx]"]}"#,
        )
        .unwrap();

        let role = Role::from_file(&path).unwrap();
        assert_eq!(role.name, "web-frontend");
        assert_eq!(role.run_list, vec!["role[base]", "recipe[nginx]"]);
    }

    #[test]
    fn test_extra_fields_are_ignored() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("db.json");
        fs::write(
            &path,
            r#"{"name": "db", "run_list": [], "description": "databases", "env_run_lists": {}}"#,
        )
        .unwrap();

        let role = Role::from_file(&path).unwrap();
        assert_eq!(role.name, "db");
        assert!(role.run_list.is_empty());
    }

    #[test]
    fn test_missing_run_list_defaults_to_empty() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("bare.json");
        fs::write(&path, r#"{"name": "bare"}"#).unwrap();

        let role = Role::from_file(&path).unwrap();
        assert!(role.run_list.is_empty());
    }

    #[test]
    fn test_missing_file_is_role_not_found() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("ghost.json");

        let error = Role::from_file(&path).unwrap_err();
        match error {
            EggbeaterError::RoleNotFound { role } => assert!(role.contains("ghost.json")),
            other => panic!("expected RoleNotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_json_is_role_malformed() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("broken.json");
        fs::write(&path, "{not json").unwrap();

        let error = Role::from_file(&path).unwrap_err();
        match error {
            EggbeaterError::RoleMalformed { path: p, .. } => assert_eq!(p, path),
            other => panic!("expected RoleMalformed, got {other:?}"),
        }
    }
}
