use crate::core::template::render;
use crate::domain::model::{Identifier, Scaffold, ScaffoldLayout};
use crate::domain::ports::Storage;
use crate::utils::error::Result;
use std::io::Write;

pub const CREATING_INPUT_DIR: &str = "Creating input directory...";
pub const CREATING_SOURCE_FILE: &str = "Creating scaffold Rust file...";
pub const DONE: &str = "Done! Happy Advent!";

pub struct Scaffolder<S: Storage> {
    storage: S,
    layout: ScaffoldLayout,
}

impl<S: Storage> Scaffolder<S> {
    pub fn new(storage: S) -> Self {
        Self::with_layout(storage, ScaffoldLayout::default())
    }

    pub fn with_layout(storage: S, layout: ScaffoldLayout) -> Self {
        Self { storage, layout }
    }

    /// Creates the input directory, then writes the rendered stub.
    ///
    /// A failed write leaves the directory in place.
    pub fn run<W: Write>(&self, identifier: &Identifier, out: &mut W) -> Result<Scaffold> {
        let input_dir = self.layout.input_dir(identifier);
        let source_file = self.layout.source_file(identifier);

        writeln!(out, "{}", CREATING_INPUT_DIR)?;
        tracing::info!("Creating {}", input_dir.display());
        self.storage.create_dir_all(&input_dir)?;

        writeln!(out, "{}", CREATING_SOURCE_FILE)?;
        let contents = render(identifier);
        tracing::debug!("Rendered {} bytes for day {}", contents.len(), identifier);
        tracing::info!("Writing {}", source_file.display());
        self.storage.write_file(&source_file, contents.as_bytes())?;

        writeln!(out, "{}", DONE)?;

        Ok(Scaffold {
            identifier: identifier.clone(),
            input_dir,
            source_file,
            contents,
        })
    }
}
