//! Invite-link registration flow for partner schools.
//!
//! A school representative opens a personalized link carrying their school
//! mail. The navigation gate checks with the remote registration API whether
//! the school already has participants and lands the visitor on one of four
//! screens; the identity travels along as transition-scoped session context.
//!
//!
//!
//! # Flow
//!
//! - Entry route carries the school mail taken from the link
//! - Gate looks the identity up once and routes:
//!   - existing participants → **dashboard**
//!   - none yet → **registration form**
//!   - rejected lookup → **unauthorized** / **not found**
//! - Dashboard lists the school's records and edits one at a time
//! - Registration creates a record and moves on to the dashboard
//! - Either screen can navigate to the other ("add another" / first submit)
//!
//! The partner-school search is independent of the flow above: a state/city
//! filter over the affiliated-school directory, last query wins.
//!
//!
//!
//! # Remote API
//!
//! All state lives behind the remote registration API; this crate keeps only
//! per-screen view state. Endpoints are wrapped in [`api::Api`] and injected
//! into the screens through the [`directory`] traits.

use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

pub mod api;
pub mod config;
pub mod dashboard;
pub mod data;
pub mod directory;
pub mod error;
pub mod gate;
pub mod models;
pub mod notice;
pub mod registration;
pub mod search;
pub mod validate;

use api::Api;
use config::Config;
use dashboard::{Dashboard, LoadOutcome};
use gate::{NavigationGate, Route};
use search::SchoolSearch;

/// Resolves an invite link from the command line and reports where the
/// visitor would land; optionally runs a partner-school search.
pub async fn run(school_mail: &str, state: Option<&str>, city: Option<&str>) {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = Config::load();
    let api = Api::new(&config);

    let mut gate = NavigationGate::new();
    let route = gate.resolve(school_mail, &api).await;

    match route {
        Route::Dashboard(session) => {
            info!("Existing registration found, opening dashboard");

            let mut dashboard = Dashboard::new(session);
            match dashboard.load(&api).await {
                LoadOutcome::Loaded => {
                    println!("Registered participants for {school_mail}:");
                    for record in dashboard.participants() {
                        println!(
                            "- {} ({}, {}, {})",
                            record.teacher_coordinator_name,
                            record.school_name,
                            record.teacher_coordinator_email,
                            record.teacher_coordinator_mobile
                        );
                    }
                }
                LoadOutcome::Redirect(_) => println!("Access Denied"),
                LoadOutcome::Failed { notice, .. } => {
                    println!("{}: {}", notice.title, notice.message)
                }
            }
        }
        Route::Registration(_) => {
            println!("No participants yet for {school_mail}, opening the registration form")
        }
        Route::Unauthorized { message } => println!("Access Denied. {message}"),
        Route::NotFound { message } => println!("Page not found. {message}"),
    }

    if let Some(state) = state {
        let mut search = SchoolSearch::new();

        let query = match city {
            Some(city) => {
                search.set_state(state);
                search.set_city(city)
            }
            None => search.set_state(state),
        };

        if let Some(query) = query {
            search.run(query, &api).await;
        }

        if search.message().is_empty() {
            println!("\nPartner schools:");
            for school in search.schools() {
                println!("- {} ({})", school.school_name, school.affiliation_id);
            }
        } else {
            println!("\n{}", search.message());
        }
    }
}
