//! Command line interface.
//!
//! Commands are parsed by hand from `std::env::args`; see [`help_text`].

mod commands;
mod errors;
mod help;
mod input;
mod output;


pub use commands::Command;
pub use errors::CommandParseError;
pub use help::help_text;
pub use input::AnalyzeInput;
pub use output::{AnalysisReport, ClaimOutput, HitOutput};

use crate::discovery::SearchQuery;

impl Command {
    /// The search query for a [`Command::Search`], `None` otherwise.
    #[must_use]
    pub fn search_query(&self) -> Option<SearchQuery> {
        let Self::Search {
            query,
            limit,
            exclude_preprints,
            from_year,
            to_year,
        } = self
        else {
            return None;
        };

        let mut search = SearchQuery::new(query.clone());
        if let Some(limit) = limit {
            search = search.with_limit(*limit);
        }
        if *exclude_preprints {
            search = search.excluding_preprints(true);
        }
        if let Some(year) = from_year {
            search = search.from_year(*year);
        }
        if let Some(year) = to_year {
            search = search.to_year(*year);
        }
        Some(search)
    }
}
