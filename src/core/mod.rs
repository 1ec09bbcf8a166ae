pub mod scaffolder;
pub mod template;
