//! Stateless rendering of the dashboard session state.
//!
//! Pure functions from a [`SessionSnapshot`] to display text. No
//! business logic and no mutation; caps and formatting only.

use chrono::DateTime;

use crate::controller::{MAX_SUGGESTIONS, Phase, SessionSnapshot};
use crate::models::NewsItem;

/// Maximum number of news cards rendered.
pub const MAX_NEWS_CARDS: usize = 6;

/// Render the dashboard for `snapshot`.
#[must_use]
pub fn render(snapshot: &SessionSnapshot) -> String {
    let mut out = String::new();

    match &snapshot.phase {
        Phase::Idle => out.push_str("No symbol selected.\n"),
        Phase::Loading => out.push_str("Loading market data...\n"),
        Phase::Error(message) => {
            out.push_str(&format!("Error: {message}\n"));
        }
        Phase::Ready(data) => {
            out.push_str(&format!(
                "{}  ${:.2}  {}\n",
                snapshot.symbol,
                data.quote.c,
                format_change(data.quote.d, data.quote.dp)
            ));

            if !data.profile.name.is_empty() {
                out.push_str(&format!(
                    "{} ({})\n",
                    data.profile.name, data.profile.industry
                ));
            }
            if !data.profile.weburl.is_empty() {
                out.push_str(&format!("{}\n", data.profile.weburl));
            }

            if !data.news.is_empty() {
                out.push_str("\nLatest News\n");
                for item in data.news.iter().take(MAX_NEWS_CARDS) {
                    out.push_str(&format_news_item(item));
                }
            }
        }
    }

    if snapshot.suggestions_visible && !snapshot.suggestions.is_empty() {
        out.push_str("\nSuggestions\n");
        for suggestion in snapshot.suggestions.iter().take(MAX_SUGGESTIONS) {
            out.push_str(&format!(
                "  {}  {}\n",
                suggestion.display_symbol, suggestion.description
            ));
        }
    }

    out
}

/// Format the price change: explicit plus sign on gains, the percent
/// change keeps its own sign.
fn format_change(d: f64, dp: f64) -> String {
    let sign = if d >= 0.0 { "+" } else { "" };
    format!("{sign}{d:.2} ({dp:.2}%)")
}

fn format_news_item(item: &NewsItem) -> String {
    let date = DateTime::from_timestamp(item.datetime, 0)
        .map(|dt| dt.format("%Y-%m-%d").to_string())
        .unwrap_or_default();
    format!("  {} [{}, {}]\n", item.headline, item.source, date)
}
