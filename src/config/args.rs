use crate::config::BIN_NAME;
use crate::domain::model::Identifier;
use crate::utils::error::{Result, ScaffoldError};
use crate::utils::validation::{single_identifier, validate_argument_count, Validate};
use clap::Parser;
use std::ffi::OsString;

#[derive(Debug, Clone, Parser)]
#[command(name = BIN_NAME)]
#[command(about = "Scaffold an Advent of Code day: input directory plus solution stub")]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct CliConfig {
    /// Day identifier, used verbatim in paths and in the generated file
    #[arg(value_name = "DAY_NUMBER", num_args = 0..)]
    pub args: Vec<OsString>,
}

impl CliConfig {
    /// Parses without letting clap print or exit.
    ///
    /// Every token after the program name is positional, `--` included: an
    /// escape is inserted in front of them before clap sees the list.
    pub fn from_args<I, T>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let mut raw = args.into_iter().map(Into::<OsString>::into);
        let bin = raw.next().unwrap_or_else(|| OsString::from(BIN_NAME));
        let positional: Vec<OsString> = raw.collect();
        let count = positional.len();

        let escaped = std::iter::once(bin)
            .chain(std::iter::once(OsString::from("--")))
            .chain(positional);

        Self::try_parse_from(escaped).map_err(|e| {
            tracing::debug!("Argument parsing failed: {}", e);
            ScaffoldError::Usage { count }
        })
    }

    pub fn identifier(&self) -> Result<Identifier> {
        single_identifier(&self.args)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_argument_count(&self.args)
    }
}
