use crate::domain::model::Identifier;
use crate::utils::error::{Result, ScaffoldError};
use std::ffi::OsString;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Exactly one positional argument is accepted. Its content is not checked.
pub fn validate_argument_count(args: &[OsString]) -> Result<()> {
    if args.len() != 1 {
        return Err(ScaffoldError::Usage { count: args.len() });
    }
    Ok(())
}

/// Generated sources must be valid Rust, so the identifier has to be UTF-8.
pub fn single_identifier(args: &[OsString]) -> Result<Identifier> {
    validate_argument_count(args)?;
    let value = args[0]
        .to_str()
        .ok_or_else(|| ScaffoldError::NonUtf8Identifier {
            lossy: args[0].to_string_lossy().into_owned(),
        })?;
    Ok(Identifier::new(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<OsString> {
        values.iter().map(|v| OsString::from(*v)).collect()
    }

    #[test]
    fn test_validate_argument_count() {
        assert!(validate_argument_count(&args(&["7"])).is_ok());
        assert!(validate_argument_count(&args(&[])).is_err());
        assert!(validate_argument_count(&args(&["7", "8"])).is_err());
    }

    #[test]
    fn test_single_identifier_accepts_any_string() {
        let id = single_identifier(&args(&["12b"])).unwrap();
        assert_eq!(id.as_str(), "12b");

        let id = single_identifier(&args(&["--help"])).unwrap();
        assert_eq!(id.as_str(), "--help");
    }

    #[test]
    fn test_usage_error_reports_count() {
        match single_identifier(&args(&["1", "2", "3"])) {
            Err(ScaffoldError::Usage { count }) => assert_eq!(count, 3),
            other => panic!("expected usage error, got {:?}", other),
        }
    }
}
