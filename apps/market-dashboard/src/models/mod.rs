//! Wire models for the market data endpoints.
//!
//! Field names mirror the upstream JSON. Numeric fields default to zero
//! when absent: an unknown symbol comes back as an all-zero quote, which
//! the controller reports as "Symbol not found".

use serde::Deserialize;

/// Real-time quote for a symbol.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Quote {
    /// Current price.
    #[serde(default)]
    pub c: f64,
    /// Absolute change since previous close.
    #[serde(default)]
    pub d: f64,
    /// Percent change since previous close.
    #[serde(default)]
    pub dp: f64,
    /// Day high.
    #[serde(default)]
    pub h: f64,
    /// Day low.
    #[serde(default)]
    pub l: f64,
    /// Open price.
    #[serde(default)]
    pub o: f64,
    /// Previous close.
    #[serde(default)]
    pub pc: f64,
}

/// Quote payload as relayed: the quote fields plus an optional upstream
/// error message.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct QuotePayload {
    /// Upstream-provided error message, if any.
    #[serde(default)]
    pub error: Option<String>,
    /// The quote fields.
    #[serde(flatten)]
    pub quote: Quote,
}

/// Company profile.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Profile {
    /// Company name.
    #[serde(default)]
    pub name: String,
    /// Logo URL.
    #[serde(default)]
    pub logo: String,
    /// Ticker symbol.
    #[serde(default)]
    pub ticker: String,
    /// Industry classification.
    #[serde(default, rename = "finnhubIndustry")]
    pub industry: String,
    /// Company website URL.
    #[serde(default)]
    pub weburl: String,
    /// Market capitalization.
    #[serde(default, rename = "marketCapitalization")]
    pub market_capitalization: f64,
}

/// A single news article. Upstream order is preserved.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct NewsItem {
    /// Article id, unique within one response.
    #[serde(default)]
    pub id: i64,
    /// Headline.
    #[serde(default)]
    pub headline: String,
    /// Article summary.
    #[serde(default)]
    pub summary: String,
    /// Target URL.
    #[serde(default)]
    pub url: String,
    /// Image URL.
    #[serde(default)]
    pub image: String,
    /// Publication time, unix seconds.
    #[serde(default)]
    pub datetime: i64,
    /// Source name.
    #[serde(default)]
    pub source: String,
}

/// A symbol search hit. Upstream relevance order is preserved.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SearchResult {
    /// Instrument description.
    #[serde(default)]
    pub description: String,
    /// Display form of the symbol.
    #[serde(default, rename = "displaySymbol")]
    pub display_symbol: String,
    /// Upstream symbol code, used verbatim for follow-up requests.
    #[serde(default)]
    pub symbol: String,
    /// Instrument type.
    #[serde(default, rename = "type")]
    pub kind: String,
}

/// Symbol search response payload.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SearchPayload {
    /// Number of matches reported upstream.
    #[serde(default)]
    pub count: u64,
    /// Matches in upstream relevance order.
    #[serde(default)]
    pub result: Vec<SearchResult>,
}
