mod loader;

pub use loader::{LoadError, builtin_questions, parse_questions};
