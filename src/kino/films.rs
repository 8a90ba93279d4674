use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use super::sanity::{blocks_to_plaintext, first_image_url, image_urls};
use super::{array_at, id_at, str_at, value_at};

/// Film details joined from the program and its `filmwebMovies` entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Film {
    pub id: String,
    pub title: Option<String>,
    pub original_title: String,

    pub age: Value,
    pub age_reason: Value,
    pub recommended_age: Value,

    pub running_time: Value,
    pub nationality: Value,
    pub original_language: Value,
    pub genres: Value,

    pub cast: Value,
    pub director: Value,
    pub distributor: String,

    pub ingress: String,
    pub description: String,
    pub oneliner: String,

    pub poster_url: Option<String>,
    pub stills: Vec<String>,
    pub trailers: Vec<String>,

    pub is_kinoklubb: bool,

    pub program_title: Option<String>,
    pub program_slug: Option<String>,
    pub movie_type: Value,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilmCatalog {
    pub last_updated: DateTime<Utc>,
    pub films: Vec<Film>,
}

/// Join `movies[]` with `filmwebMovies[mainVersionId]`.
///
/// Movies without an id or without filmweb data (local events, typically)
/// are skipped with a warning.
pub fn build_films(raw: &Value, now: DateTime<Utc>) -> FilmCatalog {
    let filmweb = raw.get("filmwebMovies").and_then(Value::as_object);
    let mut films = Vec::new();

    for movie in array_at(raw, "movies") {
        let program_title = str_at(movie, "title");

        let Some(movie_id) = id_at(movie, "mainVersionId").or_else(|| id_at(movie, "mainVersionEDI")) else {
            warn!(title = ?program_title, "No mainVersionId for movie, skipping");
            continue;
        };

        let Some(fw) = filmweb.and_then(|m| m.get(&movie_id)) else {
            warn!(id = %movie_id, title = ?program_title, "No filmwebMovies entry, skipping");
            continue;
        };

        films.push(build_film(movie_id, movie, fw, program_title));
    }

    FilmCatalog { last_updated: now, films }
}

fn build_film(id: String, movie: &Value, fw: &Value, program_title: Option<String>) -> Film {
    let age_rating = fw.get("ageRating").filter(|v| v.is_object());
    let age_field = |key: &str| age_rating.map(|r| or_empty_string(r.get(key))).unwrap_or_else(empty_string);

    let poster_url = first_image_url(fw.get("postersV2"))
        .or_else(|| first_image_url(fw.get("imagesOverrideV2")))
        .or_else(|| first_image_url(fw.get("imagesV2")));

    let stills = image_urls(fw.get("imagesV2"))
        .chain(image_urls(fw.get("imagesOverrideV2")))
        .collect();

    let trailers = array_at(fw, "trailers")
        .iter()
        .filter_map(|t| id_at(t, "videoId"))
        .collect();

    Film {
        title: str_at(fw, "title").or_else(|| program_title.clone()),
        original_title: str_at(fw, "originalTitle").unwrap_or_default(),

        age: age_field("age"),
        age_reason: age_field("ageReason"),
        recommended_age: age_field("recommendedAge"),

        running_time: or_empty_string(fw.get("runningTime")),
        nationality: or_empty_array(fw.get("nationality")),
        original_language: or_empty_array(fw.get("originalLanguage")),
        genres: or_empty_array(fw.get("genres")),

        cast: or_empty_string(fw.get("castV2")),
        director: or_empty_string(fw.get("directorV2")),
        distributor: fw
            .get("distributor")
            .and_then(|d| str_at(d, "name"))
            .unwrap_or_default(),

        ingress: blocks_to_plaintext(fw.get("ingress")),
        description: blocks_to_plaintext(fw.get("bodyText")),
        oneliner: str_at(fw, "oneliner").unwrap_or_default(),

        poster_url,
        stills,
        trailers,

        is_kinoklubb: fw.get("isKinoklubb").and_then(Value::as_bool).unwrap_or(false),

        program_title,
        program_slug: str_at(movie, "url"),
        movie_type: value_at(movie, "movieType"),
        id,
    }
}

fn empty_string() -> Value {
    Value::String(String::new())
}

fn or_empty_string(value: Option<&Value>) -> Value {
    match value {
        None | Some(Value::Null) => empty_string(),
        Some(v) => v.clone(),
    }
}

fn or_empty_array(value: Option<&Value>) -> Value {
    match value {
        None | Some(Value::Null) => Value::Array(Vec::new()),
        Some(v) => v.clone(),
    }
}
