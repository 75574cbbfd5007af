//! Plain-text rendering of search results for the terminal.

use chrono::{DateTime, Utc};
use lab_match::{Match, SearchQuery, SearchResult};

/// One line per swatch: `ID: 12 (https://…/12/) color: #1A2B3C.`
pub fn swatch_line(m: &Match) -> String {
    let swatch = &m.swatch;
    let mut line = format!("ID: {}", swatch.id);
    if let Some(url) = &swatch.url {
        line.push_str(&format!(" ({url})"));
    }
    line.push_str(&format!(" color: #{}", swatch.hex_color()));
    if let Some(name) = &swatch.name {
        line.push_str(&format!(", {name}"));
    }
    line.push('.');
    line
}

/// Full report for a search.
///
/// A single requested match is written as one sentence; several get a
/// header line followed by a numbered list.
pub fn render(query: &SearchQuery, result: &SearchResult) -> String {
    let method = query.method();
    let color = query.color().to_hex();
    let requested = query.count().get();

    if result.is_empty() {
        return format!(
            "No swatches left to compare against #{color} after exclusions."
        );
    }

    if requested == 1 {
        let best = &result.as_slice()[0];
        return format!(
            "The visually closest swatch (by {method}) to #{color} is {}",
            swatch_line(best)
        );
    }

    let width = requested.to_string().len();
    let mut out = format!(
        "The top-{requested} visually closest swatches (by {method}) to #{color} are:"
    );
    for (i, m) in result.iter().enumerate() {
        out.push_str(&format!("\n  {:>width$}. {}", i + 1, swatch_line(m)));
    }
    out
}

/// Message for a search against a store with no swatches.
///
/// `refreshed_at` tells a store that was never filled apart from one that
/// was refreshed from an empty catalog.
pub fn empty_store(refreshed_at: Option<DateTime<Utc>>) -> String {
    match refreshed_at {
        Some(when) => format!(
            "The catalog had no swatches at the last refresh ({}).\n\
             Run `swatchfinder update` to try again.",
            when.format("%Y-%m-%d %H:%M UTC")
        ),
        None => "There is no local database yet.\n\
                 No swatches were found. Run `swatchfinder update` first."
            .to_string(),
    }
}
