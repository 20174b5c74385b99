/// File-level information command.
pub mod info;
/// JSON tree output command.
pub mod json;
/// Indented text tree output command.
pub mod print;
/// Shared argument types and helpers.
pub mod util;
