//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities, validators and ports.

pub mod category_service;
pub mod director_service;
pub mod dto;
pub mod film_service;
pub mod mapper;

pub use category_service::CategoryService;
pub use director_service::DirectorService;
pub use film_service::FilmService;
