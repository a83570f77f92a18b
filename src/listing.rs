use scraper::{Html, Selector};

use crate::Error;

/// CSS class marking one scrapeable entry on a listing page.
const THUMBNAIL_CONTAINER: &str = ".ArticleFirstImageThumbnail";

/// Title substrings that disqualify an entry.
const EXCLUDED_YEARS: [&str; 2] = ["2018", "2017"];

/// One scraped candidate from a listing page.
#[derive(Clone, Debug, PartialEq)]
pub struct ListingEntry {
    /// Display text, taken from the image alt attribute.
    pub title: String,
    /// Article URL, taken from the anchor href attribute.
    pub link: String,
    /// Absolute image URL, rebuilt from the proxied image src attribute.
    pub thumbnail: String,
}

/// Scrapes all valid entries out of one listing page body, appending them
/// in document order to the candidate sequence of the current invocation.
pub fn parse_listing_page(body: &str, candidates: &mut Vec<ListingEntry>) -> Result<(), Error> {
    let container = Selector::parse(THUMBNAIL_CONTAINER).map_err(|_| Error::Parse)?;
    let anchor = Selector::parse("a").map_err(|_| Error::Parse)?;
    let image = Selector::parse("img").map_err(|_| Error::Parse)?;

    let document = Html::parse_document(body);
    for element in document.select(&container) {
        let link = element
            .select(&anchor)
            .next()
            .and_then(|a| a.value().attr("href"))
            .unwrap_or_default();
        let img = element.select(&image).next();
        let src = img.and_then(|i| i.value().attr("src")).unwrap_or_default();
        let title = img.and_then(|i| i.value().attr("alt")).unwrap_or_default();

        let Some(thumbnail) = rebuild_thumbnail(src) else {
            continue;
        };
        if has_excluded_year(title) {
            continue;
        }

        candidates.push(ListingEntry {
            title: title.to_string(),
            link: link.to_string(),
            thumbnail,
        });
    }

    Ok(())
}

/// Rebuilds the absolute thumbnail URL out of a proxied image src.
///
/// The src of interest wraps the real image URL behind a proxy, so the
/// string carries "http://" twice. Only then is the entry usable, and the
/// real URL is the part after the second occurrence.
pub fn rebuild_thumbnail(src: &str) -> Option<String> {
    let pieces: Vec<&str> = src.split("http://").collect();
    if pieces.len() < 3 {
        return None;
    }

    Some(format!("http://{}", pieces[2]))
}

/// Returns `true` if the title names one of the excluded years.
pub fn has_excluded_year(title: &str) -> bool {
    EXCLUDED_YEARS.iter().any(|year| title.contains(year))
}
