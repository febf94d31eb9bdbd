//! Configuration sources: the caller-named override file and the per-user default location.

pub mod global_file;
pub mod override_file;
