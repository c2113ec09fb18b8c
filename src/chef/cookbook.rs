use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::constants::metadata;
use crate::error::EggbeaterError;

/// Shape of a cookbook's `metadata.json`. Only the dependency names matter;
/// the values are version constraints and are ignored, as are all other
/// metadata directives.
#[derive(Debug, Deserialize)]
struct JsonMetadata {
    #[serde(default)]
    dependencies: BTreeMap<String, String>,
}

/// Loads the set of cookbooks `name` depends on, sweeping the search paths
/// in order for a `metadata.rb` first and falling back to a second sweep for
/// `metadata.json`. The first file found wins.
pub fn load_dependencies(
    name: &str,
    search_paths: &[PathBuf],
) -> Result<BTreeSet<String>, EggbeaterError> {
    if name.is_empty() {
        return Err(EggbeaterError::InvalidArgument {
            message: "cookbook name can't be empty".to_string(),
        });
    }

    let mut searched = Vec::new();

    for file in [metadata::RUBY_FILE, metadata::JSON_FILE] {
        for search_path in search_paths {
            let candidate = search_path.join(name).join(file);
            match std::fs::read_to_string(&candidate) {
                Ok(content) if file == metadata::RUBY_FILE => {
                    return parse_ruby_metadata(&candidate, &content);
                }
                Ok(content) => return parse_json_metadata(&candidate, &content),
                Err(_) => searched.push(candidate.display().to_string()),
            }
        }
    }

    Err(EggbeaterError::MetadataNotFound {
        cookbook: name.to_string(),
        searched: searched.join(", "),
    })
}

/// Parses the line-oriented `depends` subset of a `metadata.rb`. Each
/// dependency is the second whitespace-delimited token of a `depends` line,
/// stripped of quotes and trailing commas; version expressions after the
/// name are ignored. Comment lines are skipped.
fn parse_ruby_metadata(path: &Path, content: &str) -> Result<BTreeSet<String>, EggbeaterError> {
    let mut dependencies = BTreeSet::new();

    for line in content.lines() {
        if line.trim_start().starts_with('#') {
            continue;
        }

        let mut tokens = line.split_whitespace();
        if tokens.next() != Some("depends") {
            continue;
        }

        let Some(raw) = tokens.next() else {
            return Err(EggbeaterError::MetadataMalformed {
                path: path.to_path_buf(),
                message: "`depends` directive without a cookbook name".to_string(),
            });
        };

        let dependency = raw.trim_matches(|c| matches!(c, '"' | '\'' | ','));
        if dependency.is_empty() {
            return Err(EggbeaterError::MetadataMalformed {
                path: path.to_path_buf(),
                message: format!("`depends` directive with an empty cookbook name: {line:?}"),
            });
        }

        dependencies.insert(dependency.to_string());
    }

    Ok(dependencies)
}

fn parse_json_metadata(path: &Path, content: &str) -> Result<BTreeSet<String>, EggbeaterError> {
    let decoded: JsonMetadata =
        serde_json::from_str(content).map_err(|e| EggbeaterError::MetadataMalformed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    Ok(decoded.dependencies.into_keys().collect())
}
