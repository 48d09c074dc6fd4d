//! Blocking HTTP client for the archive backend.

use std::time::Duration;

use scraper::{Html, Selector};
use tracing::{debug, info};

use storyrec_engine::{FetchError, SearchFetcher, WorkParser};
use storyrec_types::WorkRecord;

use crate::blurb::{selector, Blurb, BlurbParser};

/// Configuration for the archive client.
#[derive(Debug, Clone)]
pub struct ArchiveConfig {
    /// Base URL of the archive
    pub base_url: String,

    /// User agent sent with every request
    pub user_agent: String,

    /// Per-request timeout
    pub timeout: Duration,
}

impl Default for ArchiveConfig {
    fn default() -> Self {
        Self {
            base_url: "https://archiveofourown.org".to_string(),
            user_agent: "storyrec/0.1 (+https://github.com/storyrec/storyrec)".to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

/// Blocking archive client: tag search plus paginated collection crawls.
pub struct ArchiveClient {
    client: reqwest::blocking::Client,
    base_url: String,
    blurbs: Selector,
    next_page: Selector,
}

impl ArchiveClient {
    /// Build a client from config.
    pub fn new(config: &ArchiveConfig) -> Result<Self, FetchError> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(&config.user_agent)
            .timeout(config.timeout)
            .build()
            .map_err(|e| FetchError::Http(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            blurbs: selector("li.work.blurb.group")?,
            next_page: selector("li.next > a")?,
        })
    }

    /// The configured base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Crawl every page of a collection's works listing.
    ///
    /// Follows the "next" pagination link until it disappears or a page
    /// yields no blurbs. Blurbs the parser rejects are skipped, not
    /// fatal.
    pub fn collection_works(
        &self,
        collection: &str,
        parser: &BlurbParser,
    ) -> Result<Vec<WorkRecord>, FetchError> {
        let url = format!("{}/collections/{}/works", self.base_url, collection);
        let mut works = Vec::new();
        let mut page: u32 = 1;

        loop {
            info!(%url, page, "fetching collection page");
            let body = if page > 1 {
                self.get(&url, &[("page", page.to_string())])?
            } else {
                self.get(&url, &[])?
            };

            let blurbs = self.extract_blurbs(&body);
            if blurbs.is_empty() {
                break;
            }
            for blurb in &blurbs {
                match parser.parse(blurb) {
                    Some(work) => works.push(work),
                    None => debug!(page, "skipping blurb without a work link"),
                }
            }

            if !self.has_next_page(&body) {
                break;
            }
            page += 1;
        }

        debug!(collection, works = works.len(), "collection crawl finished");
        Ok(works)
    }

    fn get(&self, url: &str, query: &[(&str, String)]) -> Result<String, FetchError> {
        let response = self
            .client
            .get(url)
            .query(query)
            .send()
            .map_err(|e| FetchError::Http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }
        response.text().map_err(|e| FetchError::Http(e.to_string()))
    }

    fn extract_blurbs(&self, body: &str) -> Vec<Blurb> {
        Html::parse_document(body)
            .select(&self.blurbs)
            .map(|element| Blurb {
                html: element.html(),
            })
            .collect()
    }

    fn has_next_page(&self, body: &str) -> bool {
        Html::parse_document(body)
            .select(&self.next_page)
            .next()
            .is_some()
    }
}

impl SearchFetcher for ArchiveClient {
    type Item = Blurb;

    /// One works search constrained to all of `tags`, comma-joined in the
    /// engine's rank order (the backend is order-sensitive for relevance).
    fn search(&mut self, tags: &[String]) -> Result<Vec<Blurb>, FetchError> {
        let url = format!("{}/works/search", self.base_url);
        let joined = tags.join(",");
        debug!(query = %joined, "searching works");

        let body = self.get(&url, &[("work_search[other_tag_names]", joined)])?;
        Ok(self.extract_blurbs(&body))
    }
}
