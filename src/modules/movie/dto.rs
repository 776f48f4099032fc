use serde::{Deserialize, Serialize};
use time::Date;
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationError};

use super::model::{Movie, NewMovie};

fn validate_genre_names(genres: &[String]) -> Result<(), ValidationError> {
    if genres.iter().any(|g| g.trim().is_empty()) {
        return Err(ValidationError::new("genres")
            .with_message("Genre names must not be empty".into()));
    }
    Ok(())
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateMovieRequest {
    #[schema(example = "Inception")]
    #[validate(length(min = 1, max = 255, message = "Title must be between 1 and 255 characters"))]
    pub title: String,
    #[schema(example = "A mind-bending thriller about dreams within dreams.")]
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
    #[schema(value_type = String, format = Date, example = "2010-07-16")]
    pub release_date: Date,
    #[validate(custom(function = "validate_genre_names"))]
    pub genres: Vec<String>,
}

impl From<CreateMovieRequest> for NewMovie {
    fn from(req: CreateMovieRequest) -> Self {
        Self {
            title: req.title,
            description: req.description,
            release_date: req.release_date,
            genres: req.genres,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMovieRequest {
    #[validate(length(min = 1, max = 255, message = "Title must be between 1 and 255 characters"))]
    pub title: Option<String>,
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: Option<String>,
    #[schema(value_type = Option<String>, format = Date)]
    pub release_date: Option<Date>,
    #[validate(custom(function = "validate_genre_names"))]
    pub genres: Option<Vec<String>>,
}

impl UpdateMovieRequest {
    /// Overwrites only the fields present in the request.
    pub fn apply_to(self, movie: &mut Movie) {
        if let Some(title) = self.title {
            movie.title = title;
        }
        if let Some(description) = self.description {
            movie.description = description;
        }
        if let Some(release_date) = self.release_date {
            movie.release_date = release_date;
        }
        if let Some(genres) = self.genres {
            movie.genres = genres;
        }
    }
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListMoviesQuery {
    /// Page number, starting at 1
    pub page: Option<i64>,
    /// Movies per page (1-100)
    pub limit: Option<i64>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchMoviesQuery {
    /// Case-insensitive substring of the title
    pub title: Option<String>,
    /// Exact genre name
    pub genre: Option<String>,
    /// Page number, starting at 1
    pub page: Option<i64>,
    /// Movies per page (1-100)
    pub limit: Option<i64>,
}

#[derive(Debug, Serialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MovieResponse {
    pub id: i32,
    pub title: String,
    pub description: String,
    #[schema(value_type = String, format = Date)]
    pub release_date: Date,
    pub genres: Vec<String>,
}

impl From<Movie> for MovieResponse {
    fn from(m: Movie) -> Self {
        Self {
            id: m.id,
            title: m.title,
            description: m.description,
            release_date: m.release_date,
            genres: m.genres,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use time::macros::date;

    #[test]
    fn parses_camel_case_payload() {
        let req: CreateMovieRequest = serde_json::from_value(json!({
            "title": "Inception",
            "description": "Dreams",
            "releaseDate": "2010-07-16",
            "genres": ["Sci-Fi"]
        }))
        .unwrap();
        assert_eq!(req.release_date, date!(2010 - 07 - 16));
        assert!(req.validate().is_ok());
    }

    #[test]
    fn rejects_malformed_release_date() {
        let parsed = serde_json::from_value::<CreateMovieRequest>(json!({
            "title": "Inception",
            "description": "Dreams",
            "releaseDate": "16/07/2010",
            "genres": []
        }));
        assert!(parsed.is_err());
    }

    #[test]
    fn empty_fields_fail_validation() {
        let req = CreateMovieRequest {
            title: String::new(),
            description: String::new(),
            release_date: date!(2010 - 07 - 16),
            genres: vec![" ".into()],
        };
        let errors = req.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("title"));
        assert!(fields.contains_key("description"));
        assert!(fields.contains_key("genres"));
    }

    #[test]
    fn update_only_touches_present_fields() {
        let mut movie = Movie {
            id: 1,
            title: "Old Title".into(),
            description: "Old description".into(),
            release_date: date!(1999 - 03 - 31),
            genres: vec!["Sci-Fi".into()],
        };
        UpdateMovieRequest {
            title: Some("Updated Title".into()),
            ..Default::default()
        }
        .apply_to(&mut movie);
        assert_eq!(movie.title, "Updated Title");
        assert_eq!(movie.description, "Old description");
        assert_eq!(movie.genres, vec!["Sci-Fi"]);
    }
}
