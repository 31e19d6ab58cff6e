//! Static affiliated-school dataset driving the search filter options.
//!
//! The JSON is bundled with the crate and parsed once; the remote directory
//! service holds the actual school listings.

use std::sync::LazyLock;

use serde::Deserialize;

const RAW: &str = include_str!("../data/affiliated_schools.json");

#[derive(Deserialize)]
struct Directory {
    states: Vec<StateEntry>,
}

#[derive(Deserialize)]
pub struct StateEntry {
    pub state: String,
    pub districts: Vec<String>,
}

static DIRECTORY: LazyLock<Vec<StateEntry>> = LazyLock::new(|| {
    let directory: Directory =
        serde_json::from_str(RAW).expect("Bundled school data misconfigured!");
    directory.states
});

pub fn states() -> impl Iterator<Item = &'static str> {
    DIRECTORY.iter().map(|entry| entry.state.as_str())
}

/// Cities for the selected state; unknown states have none.
pub fn cities_for(state: &str) -> &'static [String] {
    DIRECTORY
        .iter()
        .find(|entry| entry.state == state)
        .map(|entry| entry.districts.as_slice())
        .unwrap_or(&[])
}
