pub mod paths;

pub use paths::{relative_to_base, resolve_in_base};
