//! Storage for component specifications.
//!
//! - [`JsonFileStore`] implements the expansion driver's
//!   [`Persistence`](vforge_expand::Persistence) contract over one JSON file.
//! - [`import_spec`] and [`export_spec`] are the import/export boundary;
//!   imports go through the validator before they are accepted.
//! - Saves are atomic: temp file, sync, rename.

mod document;
mod error;
mod io;
mod store;

pub use document::{export_spec, import_spec};
pub use error::{PersistenceError, Result};
pub use io::{load_spec, load_spec_async, save_spec, save_spec_async};
pub use store::JsonFileStore;
