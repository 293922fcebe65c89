/// Publishing domain - configuration, request body and endpoint rules
///
/// Pure logic with no file system or network access.
pub mod domain;
