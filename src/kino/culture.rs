use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

use super::{array_at, id_at, str_at};
use crate::constants::FAUSKEKINO_BASE_URL;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CultureShow {
    pub screen_name: Option<String>,
    pub ticket_sale_url: Option<String>,
    pub show_start: Option<String>,
    pub show_type: Option<String>,
}

/// One culture event (KUL id) with all of its performances.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CultureEvent {
    pub id: String,
    pub title: Option<String>,
    pub movie_title: Option<String>,
    pub url: String,
    pub shows: Vec<CultureShow>,
}

impl CultureEvent {
    fn first_start(&self) -> &str {
        self.shows
            .first()
            .and_then(|s| s.show_start.as_deref())
            .unwrap_or("")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CultureProgram {
    pub last_updated: DateTime<Utc>,
    pub events: Vec<CultureEvent>,
}

/// Group `shows[]` by KUL id, titling each event from `fwpakkeArticles`,
/// and order events by their first performance.
pub fn build_culture_program(raw: &Value, now: DateTime<Utc>) -> CultureProgram {
    let articles = raw.get("fwpakkeArticles");
    let mut events: Vec<CultureEvent> = Vec::new();
    let mut index_by_id: HashMap<String, usize> = HashMap::new();

    for show in array_at(raw, "shows") {
        let Some(kul) = id_at(show, "movieVersionId") else {
            continue;
        };

        let idx = *index_by_id.entry(kul.clone()).or_insert_with(|| {
            let movie_title = str_at(show, "movieTitle");
            let article_title = articles
                .and_then(|a| a.get(&kul))
                .and_then(|art| str_at(art, "title"));

            events.push(CultureEvent {
                title: article_title.or_else(|| movie_title.clone()),
                movie_title,
                url: format!("{}/kulturprogram/{}", FAUSKEKINO_BASE_URL, kul),
                id: kul.clone(),
                shows: Vec::new(),
            });
            events.len() - 1
        });

        events[idx].shows.push(CultureShow {
            screen_name: str_at(show, "screenName"),
            ticket_sale_url: str_at(show, "ticketSaleUrl"),
            show_start: str_at(show, "showStart"),
            show_type: str_at(show, "showType"),
        });
    }

    // Stable: events starting at the same time keep first-seen order
    events.sort_by(|a, b| a.first_start().cmp(b.first_start()));

    CultureProgram { last_updated: now, events }
}
