pub mod loader;
pub mod resolve;
pub mod schema;

pub use loader::{DataLoadError, load_all, load_file};
