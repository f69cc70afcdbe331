//! Entity <-> DTO mapping
//!
//! Pure functions. They never query storage: any referenced entity has to be
//! resolved by the caller first. The `*_opt` variants map absence to absence.

use crate::app::dto::{
    CategoryDto, CreateCategoryRequest, CreateDirectorRequest, CreateFilmRequest, DirectorDto,
    FilmDto, UpdateCategoryRequest, UpdateDirectorRequest, UpdateFilmRequest,
};
use crate::domain::entities::{
    Category, CategoryId, CategoryUpdate, Director, DirectorId, DirectorUpdate, FilmDetails,
    FilmUpdate, NewCategory, NewDirector, NewFilm,
};

pub fn category_to_dto(category: &Category) -> CategoryDto {
    CategoryDto {
        id: category.id.0,
        name: category.name.clone(),
        description: category.description.clone(),
    }
}

pub fn category_to_dto_opt(category: Option<&Category>) -> Option<CategoryDto> {
    category.map(category_to_dto)
}

pub fn director_to_dto(director: &Director) -> DirectorDto {
    DirectorDto {
        id: director.id.0,
        first_name: director.first_name.clone(),
        last_name: director.last_name.clone(),
        nationality: director.nationality.clone(),
        birth_date: director.birth_date,
        biography: director.biography.clone(),
        full_name: director.full_name(),
    }
}

pub fn director_to_dto_opt(director: Option<&Director>) -> Option<DirectorDto> {
    director.map(director_to_dto)
}

pub fn film_to_dto(details: &FilmDetails) -> FilmDto {
    let film = &details.film;
    FilmDto {
        id: film.id.0,
        title: film.title.clone(),
        release_year: film.release_year,
        duration: film.duration,
        synopsis: film.synopsis.clone(),
        rating: film.rating,
        director: director_to_dto(&details.director),
        category: category_to_dto(&details.category),
    }
}

pub fn film_to_dto_opt(details: Option<&FilmDetails>) -> Option<FilmDto> {
    details.map(film_to_dto)
}

pub fn new_category_from_request(request: &CreateCategoryRequest) -> NewCategory {
    NewCategory {
        name: request.name.clone(),
        description: request.description.clone(),
    }
}

pub fn new_director_from_request(request: &CreateDirectorRequest) -> NewDirector {
    NewDirector {
        first_name: request.first_name.clone(),
        last_name: request.last_name.clone(),
        nationality: request.nationality.clone(),
        birth_date: request.birth_date,
        biography: request.biography.clone(),
    }
}

/// Build a transient film bound to an already-resolved director and category
pub fn new_film_from_request(
    request: &CreateFilmRequest,
    director: &Director,
    category: &Category,
) -> NewFilm {
    NewFilm {
        title: request.title.clone(),
        release_year: request.release_year,
        duration: request.duration,
        synopsis: request.synopsis.clone(),
        rating: request.rating,
        director_id: director.id,
        category_id: category.id,
    }
}

pub fn category_update_from_request(request: &UpdateCategoryRequest) -> CategoryUpdate {
    CategoryUpdate {
        name: request.name.clone(),
        description: request.description.clone(),
    }
}

pub fn director_update_from_request(request: &UpdateDirectorRequest) -> DirectorUpdate {
    DirectorUpdate {
        first_name: request.first_name.clone(),
        last_name: request.last_name.clone(),
        nationality: request.nationality.clone(),
        birth_date: request.birth_date,
        biography: request.biography.clone(),
    }
}

pub fn film_update_from_request(request: &UpdateFilmRequest) -> FilmUpdate {
    FilmUpdate {
        title: request.title.clone(),
        release_year: request.release_year,
        duration: request.duration,
        synopsis: request.synopsis.clone(),
        rating: request.rating,
        director_id: request.director_id.map(DirectorId),
        category_id: request.category_id.map(CategoryId),
    }
}
