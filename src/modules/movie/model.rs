use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::Date;
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub id: i32,
    pub title: String,
    pub description: String,
    #[schema(value_type = String, format = Date, example = "2010-07-16")]
    pub release_date: Date,
    /// Genre names, in the order they were given. Not foreign keys.
    pub genres: Vec<String>,
}

impl Movie {
    pub fn has_genre(&self, name: &str) -> bool {
        self.genres.iter().any(|g| g == name)
    }

    /// Drops every occurrence of `name`, keeping the rest in order.
    /// Returns whether anything was removed.
    pub fn remove_genre(&mut self, name: &str) -> bool {
        let before = self.genres.len();
        self.genres.retain(|g| g != name);
        self.genres.len() != before
    }

    /// Case-insensitive substring match on the title.
    pub fn title_contains(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(&needle.to_lowercase())
    }
}

/// Field set for an insert; the id is assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMovie {
    pub title: String,
    pub description: String,
    pub release_date: Date,
    pub genres: Vec<String>,
}

/// Optional title/genre filters for a movie search. Empty strings count as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MovieFilter {
    pub title: Option<String>,
    pub genre: Option<String>,
}

impl MovieFilter {
    pub fn new(title: Option<String>, genre: Option<String>) -> Self {
        Self {
            title: title.filter(|t| !t.is_empty()),
            genre: genre.filter(|g| !g.is_empty()),
        }
    }

    pub fn matches(&self, movie: &Movie) -> bool {
        let title_ok = self.title.as_deref().is_none_or(|t| movie.title_contains(t));
        let genre_ok = self.genre.as_deref().is_none_or(|g| movie.has_genre(g));
        title_ok && genre_ok
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    fn movie(title: &str, genres: &[&str]) -> Movie {
        Movie {
            id: 1,
            title: title.to_string(),
            description: "desc".to_string(),
            release_date: date!(1999 - 03 - 31),
            genres: genres.iter().map(|g| g.to_string()).collect(),
        }
    }

    #[test]
    fn remove_genre_keeps_relative_order() {
        let mut m = movie("The Matrix", &["Action", "Sci-Fi", "Drama", "Sci-Fi"]);
        assert!(m.remove_genre("Sci-Fi"));
        assert_eq!(m.genres, vec!["Action", "Drama"]);
        assert!(!m.remove_genre("Comedy"));
    }

    #[test]
    fn filter_matches_title_substring_case_insensitively() {
        let f = MovieFilter::new(Some("matr".into()), None);
        assert!(f.matches(&movie("The Matrix", &[])));
        assert!(!f.matches(&movie("Inception", &[])));
    }

    #[test]
    fn filter_requires_exact_genre_element() {
        let f = MovieFilter::new(None, Some("Sci".into()));
        assert!(!f.matches(&movie("Inception", &["Sci-Fi"])));
        let f = MovieFilter::new(None, Some("Sci-Fi".into()));
        assert!(f.matches(&movie("Inception", &["Action", "Sci-Fi"])));
    }

    #[test]
    fn empty_filters_impose_no_constraint() {
        let f = MovieFilter::new(Some(String::new()), Some(String::new()));
        assert_eq!(f, MovieFilter::default());
        assert!(f.matches(&movie("Anything", &[])));
    }

    #[test]
    fn serializes_release_date_as_iso_day() {
        let value = serde_json::to_value(movie("Heat", &["Crime"])).unwrap();
        assert_eq!(value["releaseDate"], "1999-03-31");
    }
}
