use std::fmt;
use std::path::PathBuf;

/// The day identifier taken verbatim from the command line.
///
/// No numeric validation is applied: `12b` is as valid as `12`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifier(String);

impl Identifier {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Where generated artifacts land, relative to the storage root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldLayout {
    pub inputs_prefix: String,
    pub day_prefix: String,
    pub source_prefix: String,
    pub source_extension: String,
}

impl Default for ScaffoldLayout {
    fn default() -> Self {
        Self {
            inputs_prefix: "inputs/".to_string(),
            day_prefix: "day".to_string(),
            source_prefix: "src/bin/".to_string(),
            source_extension: "rs".to_string(),
        }
    }
}

impl ScaffoldLayout {
    /// `inputs/day<id>`
    pub fn input_dir(&self, identifier: &Identifier) -> PathBuf {
        PathBuf::from(format!(
            "{}{}{}",
            self.inputs_prefix, self.day_prefix, identifier
        ))
    }

    /// `src/bin/day<id>.rs`
    pub fn source_file(&self, identifier: &Identifier) -> PathBuf {
        PathBuf::from(format!(
            "{}{}{}.{}",
            self.source_prefix, self.day_prefix, identifier, self.source_extension
        ))
    }
}

/// The artifacts produced by one successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scaffold {
    pub identifier: Identifier,
    pub input_dir: PathBuf,
    pub source_file: PathBuf,
    pub contents: String,
}
