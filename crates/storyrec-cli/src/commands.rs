//! Command handlers.

use anyhow::{bail, Result};
use tracing::info;

use storyrec_engine::{Recommendation, Recommender};
use storyrec_fetch::{ArchiveClient, BlurbParser};
use storyrec_types::WorkRecord;

use crate::config::FileConfig;

/// Flag overrides for the recommend command.
#[derive(Debug, Default, Clone, Copy)]
pub struct RecommendOverrides {
    pub count: Option<usize>,
    pub topics: Option<usize>,
    pub query_tags: Option<usize>,
    pub seed: Option<u64>,
}

/// Crawl a collection and print its works, most-appreciated first.
pub fn handle_collection(config: &FileConfig, name: &str, json: bool) -> Result<()> {
    let archive = config.archive.to_archive_config();
    let client = ArchiveClient::new(&archive)?;
    let parser = BlurbParser::new(&archive.base_url)?;

    let mut works = client.collection_works(name, &parser)?;
    info!(collection = name, works = works.len(), "collection crawled");
    sort_by_popularity(&mut works);

    if json {
        println!("{}", serde_json::to_string_pretty(&works)?);
    } else {
        println!("Found {} works in collection:\n", works.len());
        for work in &works {
            print_work(work);
        }
    }
    Ok(())
}

/// Crawl a collection as the seed set and recommend further works.
pub fn handle_recommend(
    config: &FileConfig,
    collection: &str,
    overrides: RecommendOverrides,
    json: bool,
) -> Result<()> {
    let archive = config.archive.to_archive_config();
    let client = ArchiveClient::new(&archive)?;
    let parser = BlurbParser::new(&archive.base_url)?;

    let seeds = client.collection_works(collection, &parser)?;
    if seeds.is_empty() {
        bail!("collection '{collection}' has no works to seed from");
    }
    info!(collection, seeds = seeds.len(), "seed crawl finished");

    let mut engine_config = config.recommender.clone();
    if let Some(count) = overrides.count {
        engine_config.target_count = count;
    }
    if let Some(topics) = overrides.topics {
        engine_config.topic_count = topics;
    }
    if let Some(query_tags) = overrides.query_tags {
        engine_config.query_tag_count = query_tags;
    }
    if let Some(seed) = overrides.seed {
        engine_config.seed = seed;
    }

    let fetcher = ArchiveClient::new(&archive)?;
    let mut recommender = Recommender::new(engine_config, fetcher, parser);
    let recommendations = recommender.recommend_with_provenance(&seeds)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&recommendations)?);
    } else if recommendations.is_empty() {
        println!("No new works found for this collection's tag profile.");
    } else {
        println!("Recommended {} works:\n", recommendations.len());
        for recommendation in &recommendations {
            print_recommendation(recommendation);
        }
    }
    Ok(())
}

/// Presentation order: kudos, then hits, descending. The engine itself
/// never re-sorts; this is a display concern only.
pub fn sort_by_popularity(works: &mut [WorkRecord]) {
    works.sort_by(|a, b| (b.kudos, b.hits).cmp(&(a.kudos, a.hits)));
}

fn print_work(work: &WorkRecord) {
    println!("{}", work.url);
    println!("Title: {}", work.title);
    println!("Author: {}", work.author);
    println!("Fandom: {}", work.fandom);
    println!("Hits: {}, Kudos: {}", work.hits, work.kudos);
    println!("{}", "-".repeat(40));
    println!();
}

fn print_recommendation(recommendation: &Recommendation) {
    let work = &recommendation.work;
    println!("{}", work.url);
    println!("Title: {}", work.title);
    println!("Author: {}", work.author);
    println!("Tags: {}", work.tags.join(", "));
    println!("Found in relaxation round {}", recommendation.query_round);
    println!("{}", "-".repeat(40));
    println!();
}
