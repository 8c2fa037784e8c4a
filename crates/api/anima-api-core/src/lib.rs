//! anima-api-core: path/locator codec and runtime values (engine-agnostic)

pub mod locator;
pub mod path;
pub mod value;

pub use locator::{Locator, LocatorError};
pub use path::{join_path, join_path_with, split_path, split_path_with, DEFAULT_SEPARATOR, ESCAPE};
pub use value::{Value, ValueKind};
