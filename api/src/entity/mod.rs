//! SeaORM entity definitions
//!
//! One module per table. Shapes mirror the migration crate.

pub mod categories;
pub mod directors;
pub mod films;
