pub mod cli;

#[cfg(feature = "cli")]
pub mod args;

pub use cli::LocalStorage;

#[cfg(feature = "cli")]
pub use args::CliConfig;

pub const BIN_NAME: &str = "scaffold-day";

pub fn usage() -> String {
    format!("Usage: {} <DAY_NUMBER>", BIN_NAME)
}
