//!
//! src/extract.rs  Andrew Belles  Oct 19th, 2026
//!
//! Pure markup extraction for tracklist and track detail pages.
//! Nothing here touches the network; callers hand in parsed documents
//!

use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use thiserror::Error;
use tracing::debug;

use crate::types::TrackId;
use crate::ScraperError;

/// Characters in front of the digits of a trackValue span id ("tr_12345")
pub const TRACK_VALUE_PREFIX_LEN: usize = 3;

/// title attribute of the <li> whose onclick embeds the detail page's id
pub const MEDIA_LINK_ITEM_TITLE: &str = "add media links for this track";

static ID_ITEM_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"idItem:\s*([0-9]+)").unwrap()
});

fn selector(css: &str) -> Result<Selector, ScraperError> {
    Selector::parse(css)
        .map_err(|e| ScraperError::Parse(format!("selector {css}: {e:?}")))
}

fn text_of(element: ElementRef<'_>) -> String {
    element.text().collect::<String>()
}

/// One `tr.tlpItem` container as found on a tracklist page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackRow {
    pub track_id: TrackId,
    pub title: String,
    /// href of the first "/track/" link inside this row only
    pub link: Option<String>
}

/// Document <title> of a tracklist page
pub fn page_title(document: &Html) -> Result<String, ScraperError> {
    let title = selector("title")?;
    document.select(&title)
        .next()
        .map(|t| text_of(t).trim().to_string())
        .ok_or_else(|| ScraperError::Markup("page has no <title>".into()))
}

/// Every track row of a tracklist page, in page order. A row missing its
/// id or title fails the whole page.
pub fn track_rows(document: &Html) -> Result<Vec<TrackRow>, ScraperError> {
    let row_sel   = selector("tr.tlpItem")?;
    let link_sel  = selector("a[href]")?;
    let cell_sel  = selector("td")?;
    let value_sel = selector("span.trackValue")?;
    let name_sel  = selector(r#"meta[itemprop="name"]"#)?;

    let mut rows = Vec::new();
    for (index, row) in document.select(&row_sel).enumerate() {
        let link = row.select(&link_sel)
            .filter_map(|a| a.value().attr("href"))
            .find(|href| href.contains("/track/"))
            .map(str::to_string);

        let cell = row.select(&cell_sel)
            .nth(2)
            .ok_or_else(|| ScraperError::Markup(
                format!("row {index}: fewer than three <td> cells")
            ))?;

        let raw_id = cell.select(&value_sel)
            .next()
            .ok_or_else(|| ScraperError::Markup(
                format!("row {index}: missing span.trackValue")
            ))?
            .value()
            .attr("id")
            .ok_or_else(|| ScraperError::Markup(
                format!("row {index}: span.trackValue has no id")
            ))?;

        let digits: String = raw_id.chars().skip(TRACK_VALUE_PREFIX_LEN).collect();
        if digits.is_empty() {
            return Err(ScraperError::Markup(
                format!("row {index}: track value id {raw_id:?} is too short")
            ));
        }
        if !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(ScraperError::Markup(
                format!("row {index}: track value id {raw_id:?} is not numeric")
            ));
        }

        let title = cell.select(&name_sel)
            .next()
            .and_then(|m| m.value().attr("content"))
            .ok_or_else(|| ScraperError::Markup(
                format!("row {index}: missing meta[itemprop=name] content")
            ))?
            .to_string();

        debug!(row = index, track = %digits, link = ?link, "extract.row");
        rows.push(TrackRow { track_id: TrackId(digits), title, link });
    }
    Ok(rows)
}

/// Title heading of a track detail page
pub fn detail_title(document: &Html) -> Result<String, ScraperError> {
    let heading = selector("h1#pageTitle")?;
    document.select(&heading)
        .next()
        .map(|h| text_of(h).trim().to_string())
        .ok_or_else(|| ScraperError::Markup("detail page has no h1#pageTitle".into()))
}

/// Why a detail page's internal id could not be read
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IdFault {
    #[error("no <li title=\"add media links for this track\">")]
    MissingItem,
    #[error("media link item has no onclick")]
    MissingOnclick,
    #[error("no idItem in onclick {0:?}")]
    NoMatch(String)
}

/// Internal id embedded as `idItem: <digits>` in the media link item's onclick
pub fn detail_track_id(document: &Html) -> Result<Result<TrackId, IdFault>, ScraperError> {
    let item_sel = selector(&format!(r#"li[title="{MEDIA_LINK_ITEM_TITLE}"]"#))?;

    let Some(item) = document.select(&item_sel).next() else {
        return Ok(Err(IdFault::MissingItem));
    };
    let Some(onclick) = item.value().attr("onclick") else {
        return Ok(Err(IdFault::MissingOnclick));
    };

    Ok(match ID_ITEM_RE.captures(onclick).and_then(|c| c.get(1)) {
        Some(m) => Ok(TrackId::new(m.as_str())),
        None => Err(IdFault::NoMatch(onclick.to_string()))
    })
}
