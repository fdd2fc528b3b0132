//! Interfaces to the external collaborators the engine drives.
//!
//! The engine never downloads, extracts or runs anything itself. A
//! [`Fetcher`] turns a [`PackageRef`](crate::model::PackageRef) into a
//! local directory and a [`Scanner`] turns a list of files into findings.

mod fetcher;
mod scanner;

pub use fetcher::{Fetcher, LocalFetcher};
pub use scanner::{ReportScanner, Scanner};
