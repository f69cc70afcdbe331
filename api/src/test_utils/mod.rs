//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//!
//! The in-memory repositories are plain maps behind `RwLock`s. The film
//! repository borrows the director and category maps so eager fetches
//! resolve against the same data the services write through.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
