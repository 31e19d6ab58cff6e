//! Partner-school directory search, independent of the registration flow.
//!
//! Every filter change supersedes the previous query: each one carries a
//! generation number, and a result is only applied while its query is still
//! the current one. No in-flight request is cancelled; a stale response is
//! simply discarded, so the displayed list always matches the latest filter.

use tracing::warn;

use crate::{data, directory::SchoolDirectory, models::School};

pub const WELCOME: &str =
    "Welcome! Start your search for partner schools by selecting a state and city.";
pub const NO_RESULTS: &str =
    "No schools found in the selected state and city. We're working on adding more schools. Stay tuned!";

/// One issued filter query; valid until the next filter change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub state: String,
    pub city: String,
    generation: u64,
}

pub struct SchoolSearch {
    state: String,
    city: String,
    generation: u64,
    schools: Vec<School>,
    message: String,
}

impl Default for SchoolSearch {
    fn default() -> Self {
        Self::new()
    }
}

impl SchoolSearch {
    pub fn new() -> Self {
        Self {
            state: String::new(),
            city: String::new(),
            generation: 0,
            schools: Vec::new(),
            message: WELCOME.to_string(),
        }
    }

    pub fn states() -> impl Iterator<Item = &'static str> {
        data::states()
    }

    pub fn cities_for(state: &str) -> &'static [String] {
        data::cities_for(state)
    }

    pub fn schools(&self) -> &[School] {
        &self.schools
    }

    /// Explanatory text shown instead of results; empty when results are up.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Selecting a state clears the city, since the city options depend on it.
    pub fn set_state(&mut self, state: &str) -> Option<Query> {
        self.state = state.to_string();
        self.city.clear();
        self.advance()
    }

    pub fn set_city(&mut self, city: &str) -> Option<Query> {
        self.city = city.to_string();
        self.advance()
    }

    fn advance(&mut self) -> Option<Query> {
        self.generation += 1;

        if self.state.is_empty() && self.city.is_empty() {
            self.schools.clear();
            self.message = WELCOME.to_string();
            return None;
        }

        Some(Query {
            state: self.state.clone(),
            city: self.city.clone(),
            generation: self.generation,
        })
    }

    /// Applies a query's results; a superseded query is ignored so a slow
    /// response never overwrites results for a newer filter.
    pub fn apply(&mut self, query: &Query, schools: Vec<School>) -> bool {
        if query.generation != self.generation {
            return false;
        }

        self.message = if schools.is_empty() {
            NO_RESULTS.to_string()
        } else {
            String::new()
        };
        self.schools = schools;

        true
    }

    /// Runs one query to completion. A failed fetch counts as zero results.
    pub async fn run(&mut self, query: Query, directory: &dyn SchoolDirectory) -> bool {
        let schools = match directory.search(&query.state, &query.city).await {
            Ok(schools) => schools,
            Err(failure) => {
                warn!("Error fetching schools: {failure}");
                Vec::new()
            }
        };

        self.apply(&query, schools)
    }
}
