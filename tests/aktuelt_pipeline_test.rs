use anyhow::Result;
use chrono::{TimeZone, Utc};
use serde_json::{json, Value};
use std::fs;
use tempfile::tempdir;

use fauske_feeds::app::AktueltUseCase;
use fauske_feeds::dates::normalize_date;
use fauske_feeds::pipeline::normalize::normalizers::{FauskeKommuneNormalizer, FauskenfNormalizer};
use fauske_feeds::pipeline::SourceNormalizer;
use fauske_feeds::{FeedConfig, FeedError, FeedSource, RawItem};

fn write_json(path: &std::path::Path, value: &Value) {
    fs::write(path, serde_json::to_string_pretty(value).unwrap()).unwrap();
}

fn read_json(path: &std::path::Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn test_two_sources_merge_newest_first() -> Result<()> {
    let dir = tempdir()?;
    let config = FeedConfig::with_data_dir(dir.path());

    write_json(
        &config.kommune_news,
        &json!({
            "lastUpdated": "2025-11-18T10:00:00",
            "items": [{ "title": "X", "url": "https://s/a/b", "published": "2025-11-13" }]
        }),
    );
    write_json(
        &config.fauskenf_news,
        &json!({
            "lastUpdated": "2025-11-18T10:00:00+00:00",
            "items": [{ "id": "b-1", "date": "17.11.2025", "title": "Y" }]
        }),
    );

    let now = Utc.with_ymd_and_hms(2025, 11, 18, 12, 0, 0).unwrap();
    let summary = AktueltUseCase::with_default_registry(&config).run(now)?;
    assert_eq!(summary.written, 2);

    let output = read_json(&config.aktuelt_output);
    let items = output["items"].as_array().unwrap();
    assert_eq!(items.len(), 2);

    assert_eq!(items[0]["title"], json!("Y"));
    assert_eq!(items[0]["id"], json!("b-1"));
    assert_eq!(items[0]["published"], json!("2025-11-17"));
    assert_eq!(items[0]["source"], json!("fauskenf"));
    assert_eq!(items[0]["sourceName"], json!("Fauske Næringsforum"));

    assert_eq!(items[1]["title"], json!("X"));
    assert_eq!(items[1]["id"], json!("fauske_kommune-b"));
    assert_eq!(items[1]["published"], json!("2025-11-13"));

    assert_eq!(output["lastUpdated"], json!("2025-11-18T12:00:00Z"));
    Ok(())
}

#[test]
fn test_missing_source_file_contributes_zero_items() -> Result<()> {
    let dir = tempdir()?;
    let config = FeedConfig::with_data_dir(dir.path());

    write_json(
        &config.fauskenf_news,
        &json!({ "items": [
            { "id": "nf-1", "date": "01.10.2025", "title": "A" },
            { "id": "nf-2", "date": "02.10.2025", "title": "B" }
        ]}),
    );

    let feed = AktueltUseCase::with_default_registry(&config).combine(Utc::now())?;
    assert_eq!(feed.items.len(), 2);
    assert!(feed.items.iter().all(|i| i.source == FeedSource::Fauskenf));
    assert_eq!(feed.items[0].id, "nf-2");
    Ok(())
}

#[test]
fn test_no_inputs_at_all_writes_empty_feed() -> Result<()> {
    let dir = tempdir()?;
    let config = FeedConfig::with_data_dir(dir.path().join("fresh"));

    let summary = AktueltUseCase::with_default_registry(&config).run(Utc::now())?;
    assert_eq!(summary.written, 0);
    assert_eq!(read_json(&config.aktuelt_output)["items"], json!([]));
    Ok(())
}

#[test]
fn test_malformed_input_aborts_without_touching_output() -> Result<()> {
    let dir = tempdir()?;
    let config = FeedConfig::with_data_dir(dir.path());

    fs::write(&config.aktuelt_output, "previous run")?;
    write_json(&config.kommune_news, &json!({ "items": [{ "title": "ok", "url": "https://s/ok" }] }));
    fs::write(&config.fauskenf_news, "{ \"items\": [ { \"id\": ")?;

    let result = AktueltUseCase::with_default_registry(&config).run(Utc::now());
    assert!(matches!(result, Err(FeedError::Json { .. })));
    assert_eq!(fs::read_to_string(&config.aktuelt_output)?, "previous run");
    Ok(())
}

#[test]
fn test_odd_header_shapes_still_merge() -> Result<()> {
    let dir = tempdir()?;
    let config = FeedConfig::with_data_dir(dir.path());

    write_json(
        &config.kommune_news,
        &json!({
            "lastUpdated": 1731840000,
            "items": [{ "title": "X", "url": "https://s/a/b", "published": "2025-11-13" }]
        }),
    );
    write_json(
        &config.fauskenf_news,
        &json!({ "lastUpdated": { "at": "i går" }, "items": {} }),
    );

    let summary = AktueltUseCase::with_default_registry(&config).run(Utc::now())?;
    assert_eq!(summary.written, 1);

    let output = read_json(&config.aktuelt_output);
    assert_eq!(output["items"][0]["id"], json!("fauske_kommune-b"));
    Ok(())
}

#[test]
fn test_undated_items_sort_last_and_ties_keep_source_order() -> Result<()> {
    let dir = tempdir()?;
    let config = FeedConfig::with_data_dir(dir.path());

    write_json(
        &config.kommune_news,
        &json!({ "items": [
            { "title": "k-undated", "url": "https://s/k-undated", "publishedText": "Snart" },
            { "title": "k-same-day", "url": "https://s/k-same-day", "published": "2025-11-13T08:00:00" },
            { "title": "k-old", "url": "https://s/k-old", "published": "2024-01-01" }
        ]}),
    );
    write_json(
        &config.fauskenf_news,
        &json!({ "items": [
            { "id": "nf-same-day", "date": "13.11.2025", "title": "nf-same-day" },
            { "id": "nf-undated", "date": "ukjent", "title": "nf-undated" }
        ]}),
    );

    let feed = AktueltUseCase::with_default_registry(&config).combine(Utc::now())?;
    let titles: Vec<&str> = feed.items.iter().map(|i| i.title.as_deref().unwrap()).collect();
    assert_eq!(
        titles,
        vec!["k-same-day", "nf-same-day", "k-old", "k-undated", "nf-undated"]
    );

    for pair in feed.items.windows(2) {
        assert!(pair[0].published >= pair[1].published);
    }
    Ok(())
}

#[test]
fn test_raw_field_round_trips_and_output_is_literal_utf8() -> Result<()> {
    let dir = tempdir()?;
    let config = FeedConfig::with_data_dir(dir.path());

    let raw_item = json!({
        "title": "Åpning av ny bru",
        "url": "https://www.fauske.kommune.no/aktuelt/bru/",
        "imageUrl": null,
        "published": "2025-11-13",
        "publishedText": "13. november 2025",
        "bodyHtml": "<p>Brua åpner kl. 12.</p>",
        "source": "forside-aktuelt-env-card",
        "extra": { "nested": [1, 2, { "x": true }] }
    });
    write_json(&config.kommune_news, &json!({ "items": [raw_item.clone()] }));

    AktueltUseCase::with_default_registry(&config).run(Utc::now())?;

    let text = fs::read_to_string(&config.aktuelt_output)?;
    assert!(text.contains("Åpning av ny bru"));
    assert!(!text.contains("\\u00c5"));

    let output: Value = serde_json::from_str(&text)?;
    assert_eq!(output["items"][0]["raw"], raw_item);
    Ok(())
}

#[test]
fn test_id_derivation_is_idempotent() {
    let kommune = RawItem::from_value(json!({ "title": "X", "url": "https://s/a/b/" })).unwrap();
    let nf = RawItem::from_value(json!({ "date": "17.11.2025", "url": "/nyheter/sak-42" })).unwrap();

    let k = FauskeKommuneNormalizer::new();
    let n = FauskenfNormalizer::new();
    assert_eq!(k.normalize(&kommune).id, k.normalize(&kommune.clone()).id);
    assert_eq!(n.normalize(&nf).id, n.normalize(&nf.clone()).id);
    assert_eq!(n.normalize(&nf).id, "fauskenf-17.11.2025-sak-42");
}

#[test]
fn test_date_parsing_is_total() {
    let inputs = [
        "",
        "2025-11-13",
        "2025-11-13T10:00:00Z",
        "2025-11-13xyz",
        "13.11.2025",
        "1.2.2025",
        "13. november 2025",
        "13. Brumaire 2025",
        "32.13.2025",
        "0. januar 0",
        "\u{0}\u{1}",
        "🙂🙂🙂🙂🙂🙂🙂🙂🙂🙂🙂",
    ];
    for input in inputs {
        if let Some(date) = normalize_date(input) {
            assert_eq!(date.format("%Y-%m-%d").to_string().len(), 10);
        }
    }
    assert!(normalize_date("13. Brumaire 2025").is_none());
}
