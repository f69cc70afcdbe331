//! Domain entities
//!
//! Pure domain models representing the catalog.
//! These are separate from the SeaORM entities in the `entity` module.

pub mod category;
pub mod director;
pub mod film;

pub use category::{Category, CategoryId, CategoryUpdate, NewCategory};
pub use director::{Director, DirectorId, DirectorUpdate, NewDirector};
pub use film::{Film, FilmDetails, FilmId, FilmUpdate, NewFilm};
