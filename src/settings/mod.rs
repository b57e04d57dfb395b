//! Configuration loading.
//!
//! `load` layers default files, explicit `--config` files, environment
//! variables and CLI overrides into a validated [`ListboxConfig`].

mod loader;

pub(crate) use loader::{load, print_summary};
