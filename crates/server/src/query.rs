//! Query-parameter binding for the browse endpoint.
//!
//! Binding is deliberately lenient: a malformed value (a non-numeric
//! `imdbMin`, say) binds as absent instead of failing the request, so the
//! caller sees a less-filtered result set rather than an error page. That
//! matches the filter stages' own absent-means-no-constraint policy.

use pipeline::FilterCriteria;
use serde::{Deserialize, Deserializer};
use std::str::FromStr;

/// The browse endpoint's query parameters, all independently optional.
///
/// Array parameters (`mpaaRatings`, `genres`) bind from repeated keys,
/// e.g. `?mpaaRatings=PG&mpaaRatings=G`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BrowseQuery {
    #[serde(rename = "searchTerms", default)]
    pub search_terms: Option<String>,

    #[serde(rename = "mpaaRatings", default)]
    pub mpaa_ratings: Vec<String>,

    #[serde(rename = "genres", default)]
    pub genres: Vec<String>,

    #[serde(rename = "imdbMin", default, deserialize_with = "lenient")]
    pub imdb_min: Option<f64>,

    #[serde(rename = "imdbMax", default, deserialize_with = "lenient")]
    pub imdb_max: Option<f64>,

    #[serde(rename = "rtMin", default, deserialize_with = "lenient")]
    pub rt_min: Option<i64>,

    #[serde(rename = "rtMax", default, deserialize_with = "lenient")]
    pub rt_max: Option<i64>,
}

/// Deserialize an optional numeric parameter, mapping unparseable input to
/// `None` rather than a binding error.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(|s| s.trim().parse().ok()))
}

impl BrowseQuery {
    /// Convert the bound parameters into pipeline criteria.
    ///
    /// Empty strings (an empty search box, a bare `genres=` key) carry no
    /// constraint and are dropped here.
    pub fn into_criteria(self) -> FilterCriteria {
        let mut criteria = FilterCriteria {
            search_terms: self.search_terms.filter(|s| !s.is_empty()),
            mpaa_ratings: self.mpaa_ratings,
            genres: self.genres,
            imdb_min: self.imdb_min,
            imdb_max: self.imdb_max,
            rt_min: self.rt_min,
            rt_max: self.rt_max,
        };
        criteria.mpaa_ratings.retain(|r| !r.is_empty());
        criteria.genres.retain(|g| !g.is_empty());
        criteria
    }
}
