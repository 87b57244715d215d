//! Filter stage implementations.
//!
//! One module per stage, in pipeline order. Each stage is a unit struct:
//! its criterion arrives with the request inside `FilterCriteria`, so the
//! stages themselves hold no state.

pub mod title_search;
pub mod mpaa_rating;
pub mod genre;
pub mod imdb_range;
pub mod rotten_tomatoes;

pub use title_search::TitleSearchFilter;
pub use mpaa_rating::MpaaRatingFilter;
pub use genre::GenreFilter;
pub use imdb_range::ImdbRangeFilter;
pub use rotten_tomatoes::RottenTomatoesFilter;
