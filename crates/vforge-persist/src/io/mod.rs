//! File I/O operations.

mod load;
mod save;

pub use load::{load_spec, load_spec_async};
pub use save::{save_spec, save_spec_async};
