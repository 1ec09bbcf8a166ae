pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{usage, LocalStorage};

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use core::{scaffolder::Scaffolder, template::render};
pub use domain::model::{Identifier, Scaffold, ScaffoldLayout};
pub use utils::error::{Result, ScaffoldError};
