//! # sln-shredder
//!
//! Lists and removes stale `bin/` and `obj/` folders of the projects declared
//! in Visual Studio solution files.
//!
//! The library is the scanning and deletion engine: it finds `*.sln` files in a
//! workspace, parses their project declarations, locates build folders next to
//! each project and deletes them on request. All filesystem access goes through
//! the [`filesystem::FileSystem`] trait, and nothing is cached between calls.

pub mod cleaner;
pub mod config;
pub mod error;
pub mod filesystem;
pub mod host;
pub mod locator;
pub mod output;
pub mod project;
pub mod scanner;
pub mod shredder;
pub mod solution;
pub mod tree;
