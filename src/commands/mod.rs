//! Command implementations for the epubstrap CLI

pub mod bootstrap;
pub mod build;
pub mod completions;
pub mod version;
