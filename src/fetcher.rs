use reqwest::StatusCode;
use url::Url;

use crate::listing;
use crate::{Dice, Error, ListingEntry};

/// Front page of the screencap blog the entries are scraped from.
const ANICOBIN_URL: &str = "http://anicobin.ldblog.jp/";

/// Number of listing pages walked per invocation.
const PAGE_COUNT: u32 = 5;

/// Walks the paginated listing, collects valid entries and draws one.
#[derive(Clone)]
pub struct AnimeListFetcher {
    http: reqwest::Client,
    base_url: Url,
    page_count: u32,
}

impl AnimeListFetcher {
    pub fn new() -> Self {
        let base_url = Url::parse(ANICOBIN_URL).expect("Unable to parse listing base url");
        Self::with_base_url(base_url, PAGE_COUNT)
    }

    fn with_base_url(base_url: Url, page_count: u32) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
            page_count,
        }
    }

    /// Fetches all listing pages in order and draws one candidate.
    ///
    /// The pages are requested one at a time; the first failure of any
    /// kind aborts the whole walk without touching the remaining pages.
    pub async fn fetch(&self, dice: &mut (dyn Dice + Send)) -> Result<ListingEntry, Error> {
        let mut candidates: Vec<ListingEntry> = Vec::new();

        for page in 1..=self.page_count {
            let mut url = self.base_url.clone();
            url.set_query(Some(&format!("p={}", page)));

            debug!("Requesting listing page {}", url);
            let response = self.http.get(url).send().await?;
            if response.status() != StatusCode::OK {
                warn!("Listing page {} answered with {}", page, response.status());
                return Err(Error::BadStatus(response.status()));
            }

            let body = response.text().await?;
            listing::parse_listing_page(&body, &mut candidates)?;
        }

        for (index, entry) in candidates.iter().enumerate() {
            debug!(
                "{} title: {} link: {} thumbnail: {}",
                index, entry.title, entry.link, entry.thumbnail
            );
        }

        if candidates.len() < 2 {
            warn!(
                "Collected {} candidates, not enough to draw from",
                candidates.len()
            );
            return Err(Error::NoCandidates);
        }

        // The newest entry (last in the sequence) is deliberately left out
        // of the draw, see DESIGN.md.
        let drawn = dice.roll(candidates.len() - 1);
        let entry = candidates.swap_remove(drawn);
        info!("Selected candidate {}: {}", drawn, entry.title);
        Ok(entry)
    }
}
