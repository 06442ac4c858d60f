//! Pure value types of the run configuration.
//!
//! Nothing in this module touches the file system or reads global state:
//! the clock is reached only through the [`clock::Clock`] trait, so every
//! type here can be built and tested in isolation.

pub mod clock;
pub mod constants;
pub mod netcdf;
pub mod selectors;
pub mod years;
