//! Movie catalog payloads (TMDB wire names).

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

fn parse_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").ok()
}

fn deserialize_optional_date<'de, D>(
    deserializer: D,
) -> Result<Option<NaiveDate>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(parse_date))
}

/// Movie as returned by catalog search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub release_date: Option<NaiveDate>,
    #[serde(default)]
    pub vote_average: Option<f32>,
}

impl Movie {
    pub fn release_year(&self) -> Option<i32> {
        self.release_date.map(|date| date.year())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    pub id: u32,
    pub name: String,
}

/// Full movie record for the details screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieDetails {
    #[serde(flatten)]
    pub movie: Movie,
    #[serde(default)]
    pub runtime: Option<u32>,
    #[serde(default)]
    pub genres: Vec<Genre>,
    #[serde(default)]
    pub tagline: Option<String>,
}

/// One page of catalog search results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieSearchPage {
    pub page: u32,
    pub results: Vec<Movie>,
    pub total_pages: u32,
    #[serde(default)]
    pub total_results: u32,
}

impl MovieSearchPage {
    pub fn has_more(&self) -> bool {
        self.page < self.total_pages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_release_dates_become_none() {
        let json = serde_json::json!({
            "page": 1,
            "total_pages": 3,
            "total_results": 42,
            "results": [
                {"id": 1, "title": "A", "release_date": ""},
                {"id": 2, "title": "B", "release_date": "1989-06-23"}
            ]
        });

        let page: MovieSearchPage =
            serde_json::from_value(json).expect("deserialize");
        assert_eq!(page.results[0].release_date, None);
        assert_eq!(page.results[1].release_year(), Some(1989));
        assert!(page.has_more());
    }
}
