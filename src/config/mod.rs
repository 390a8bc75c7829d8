//! Configuration types and options for the application.
//!
//! This module contains the configuration structures used by the binary,
//! including scanning and execution options and the persistent config file.

pub mod execution;
pub mod file;
pub mod scan;

pub use execution::ExecutionOptions;
pub use file::FileConfig;
pub use scan::ScanOptions;
