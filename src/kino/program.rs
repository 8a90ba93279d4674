use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{array_at, id_at, str_at, value_at};

/// One screening in the simplified program.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgramShow {
    pub show_id: Value,
    pub start: Option<String>,
    pub screen: Option<String>,
    pub ticket_url: Option<String>,
    pub tags: Vec<String>,
}

/// A movie with its screenings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgramMovie {
    /// EDI id, used to join against `filmwebMovies`
    pub id: Option<String>,
    pub title: Option<String>,
    pub slug: Option<String>,
    pub movie_type: Value,
    pub is_advance_sale: Value,
    #[serde(rename = "is3D")]
    pub is_3d: Value,
    pub is_subtitled: Value,
    pub age_limit: Value,
    pub shows: Vec<ProgramShow>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KinoProgram {
    pub last_updated: DateTime<Utc>,
    pub movies: Vec<ProgramMovie>,
}

/// Simplify the program API response (`movies[].shows[]`) for the app.
pub fn build_program(raw: &Value, now: DateTime<Utc>) -> KinoProgram {
    let movies = array_at(raw, "movies").iter().map(simplify_movie).collect();
    KinoProgram { last_updated: now, movies }
}

fn simplify_movie(movie: &Value) -> ProgramMovie {
    ProgramMovie {
        id: id_at(movie, "mainVersionId").or_else(|| id_at(movie, "mainVersionEDI")),
        title: str_at(movie, "title"),
        slug: str_at(movie, "url"),
        movie_type: value_at(movie, "movieType"),
        is_advance_sale: value_at(movie, "isAdvanceSale"),
        is_3d: value_at(movie, "is3D"),
        is_subtitled: value_at(movie, "isSubtitled"),
        age_limit: value_at(movie, "ageLimit"),
        shows: array_at(movie, "shows").iter().map(simplify_show).collect(),
    }
}

fn simplify_show(show: &Value) -> ProgramShow {
    let tags = array_at(show, "versionTags")
        .iter()
        .filter_map(|t| str_at(t, "tag"))
        .collect();

    ProgramShow {
        show_id: value_at(show, "id"),
        start: str_at(show, "showStart"),
        screen: str_at(show, "screenName"),
        ticket_url: str_at(show, "ticketSaleUrl"),
        tags,
    }
}
