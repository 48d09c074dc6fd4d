//! Work blurb extraction.
//!
//! A blurb is one `li.work.blurb.group` entry from a listing page. The
//! selectors mirror the archive's markup; a blurb without a work link is
//! not a work and parses to `None`.

use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use storyrec_engine::{FetchError, WorkParser};
use storyrec_types::{work::ANONYMOUS_AUTHOR, WorkRecord};

/// One raw listing entry: the HTML of a single work blurb.
#[derive(Debug, Clone)]
pub struct Blurb {
    /// Outer HTML of the blurb element
    pub html: String,
}

/// Parses blurbs into work records.
pub struct BlurbParser {
    base_url: String,
    link: Selector,
    author: Selector,
    tags: Selector,
    fandom: Selector,
    summary: Selector,
    hits: Selector,
    kudos: Selector,
}

impl BlurbParser {
    /// Create a parser; `base_url` is prefixed onto relative work hrefs
    /// to form the locator.
    pub fn new(base_url: impl Into<String>) -> Result<Self, FetchError> {
        Ok(Self {
            base_url: base_url.into(),
            link: selector("div.header > h4 > a")?,
            author: selector(r#"a[rel="author"]"#)?,
            tags: selector("ul.tags.commas > li")?,
            fandom: selector("h5.fandoms > a")?,
            summary: selector("blockquote.summary")?,
            hits: selector("dl.stats > dd.hits")?,
            kudos: selector("dl.stats > dd.kudos")?,
        })
    }
}

impl WorkParser<Blurb> for BlurbParser {
    fn parse(&self, item: &Blurb) -> Option<WorkRecord> {
        let fragment = Html::parse_fragment(&item.html);

        let link = fragment.select(&self.link).next()?;
        let href = link.value().attr("href")?;
        let url = format!("{}{}", self.base_url, href);
        let title = text_of(link);

        let author = fragment
            .select(&self.author)
            .next()
            .map(text_of)
            .unwrap_or_else(|| ANONYMOUS_AUTHOR.to_string());
        let fandom = fragment
            .select(&self.fandom)
            .next()
            .map(text_of)
            .unwrap_or_default();
        let summary = fragment
            .select(&self.summary)
            .next()
            .map(text_of)
            .unwrap_or_default();
        let tags: Vec<String> = fragment.select(&self.tags).map(text_of).collect();

        let hits = count_of(fragment.select(&self.hits).next());
        let kudos = count_of(fragment.select(&self.kudos).next());

        debug!(%url, tags = tags.len(), "parsed work blurb");

        Some(WorkRecord {
            url,
            title,
            author,
            fandom,
            tags,
            summary,
            hits,
            kudos,
        })
    }
}

pub(crate) fn selector(css: &str) -> Result<Selector, FetchError> {
    Selector::parse(css).map_err(|e| FetchError::Selector(e.to_string()))
}

fn text_of(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Grouped-digit counts ("1,234") parse with separators stripped. Any
/// parse failure defaults to 0; an unreadable stat is not a reason to
/// drop the work.
fn count_of(element: Option<ElementRef<'_>>) -> u64 {
    element
        .map(|el| text_of(el).replace(',', ""))
        .and_then(|text| text.parse().ok())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://archiveofourown.org";

    fn parse(html: &str) -> Option<WorkRecord> {
        let parser = BlurbParser::new(BASE).unwrap();
        parser.parse(&Blurb {
            html: html.to_string(),
        })
    }

    fn full_blurb() -> &'static str {
        r#"<li class="work blurb group">
            <div class="header module">
                <h4 class="heading">
                    <a href="/works/123">A Quiet Harbor</a>
                    by <a rel="author" href="/users/shoreline">shoreline</a>
                </h4>
                <h5 class="fandoms heading"><a class="tag" href="/tags/ow">Original Work</a></h5>
            </div>
            <ul class="tags commas">
                <li class="freeforms"><a class="tag">found family</a></li>
                <li class="freeforms"><a class="tag">slow burn</a></li>
                <li class="freeforms"><a class="tag">canon divergence</a></li>
            </ul>
            <blockquote class="userstuff summary">Two strangers share a lighthouse.</blockquote>
            <dl class="stats">
                <dd class="kudos"><a href="/works/123#kudos">1,204</a></dd>
                <dd class="hits">15,882</dd>
            </dl>
        </li>"#
    }

    #[test]
    fn test_full_blurb_parses() {
        let work = parse(full_blurb()).unwrap();
        assert_eq!(work.url, "https://archiveofourown.org/works/123");
        assert_eq!(work.title, "A Quiet Harbor");
        assert_eq!(work.author, "shoreline");
        assert_eq!(work.fandom, "Original Work");
        assert_eq!(
            work.tags,
            vec!["found family", "slow burn", "canon divergence"]
        );
        assert_eq!(work.summary, "Two strangers share a lighthouse.");
        assert_eq!(work.hits, 15882);
        assert_eq!(work.kudos, 1204);
    }

    #[test]
    fn test_blurb_without_link_is_skipped() {
        let html = r#"<li class="work blurb group"><div class="header"><h4></h4></div></li>"#;
        assert!(parse(html).is_none());
    }

    #[test]
    fn test_missing_author_defaults_to_anonymous() {
        let html = r#"<li class="work blurb group">
            <div class="header"><h4><a href="/works/9">Untitled</a></h4></div>
        </li>"#;
        let work = parse(html).unwrap();
        assert_eq!(work.author, ANONYMOUS_AUTHOR);
        assert_eq!(work.fandom, "");
        assert_eq!(work.summary, "");
        assert!(work.tags.is_empty());
    }

    #[test]
    fn test_malformed_counts_default_to_zero() {
        let html = r#"<li class="work blurb group">
            <div class="header"><h4><a href="/works/9">Untitled</a></h4></div>
            <dl class="stats"><dd class="hits">n/a</dd></dl>
        </li>"#;
        let work = parse(html).unwrap();
        assert_eq!(work.hits, 0);
        assert_eq!(work.kudos, 0);
    }

    #[test]
    fn test_multi_word_tags_survive_intact() {
        let work = parse(full_blurb()).unwrap();
        assert!(work.tags.contains(&"canon divergence".to_string()));
    }
}
