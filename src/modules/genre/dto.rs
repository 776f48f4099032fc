use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::modules::genre::model::Genre;

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateGenreRequest {
    #[schema(example = "Action")]
    #[validate(length(min = 1, max = 255, message = "Name must be between 1 and 255 characters"))]
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateGenreRequest {
    #[schema(example = "Adventure")]
    #[validate(length(min = 1, max = 255, message = "Name must be between 1 and 255 characters"))]
    pub name: Option<String>,
}

#[derive(Debug, Serialize, ToSchema, PartialEq, Eq)]
pub struct GenreResponse {
    pub id: i32,
    pub name: String,
}

impl From<Genre> for GenreResponse {
    fn from(g: Genre) -> Self {
        Self {
            id: g.id,
            name: g.name,
        }
    }
}
