//! Dataset profiles: fixed vocabularies plus naming and date configuration
//!
//! A profile is the complete input contract of the generator. Two built-in
//! profiles mirror the source datasets: cricket match statistics and FDA
//! adverse-event reports.

use chrono::{Days, NaiveDate};

use crate::error::{GraphSeedError, GraphSeedResult};

/// Fixed vocabulary and date window for one synthetic dataset.
#[derive(Debug, Clone)]
pub struct DatasetProfile {
    /// Subject name prefix; the generator appends " <n>" with a sequential n
    pub subject_name_template: String,
    /// Categorical attribute vocabulary (roles, age groups)
    pub categories: Vec<String>,
    /// Secondary-subject name vocabulary (teams, drugs)
    pub groups: Vec<String>,
    /// Occurrence location vocabulary (venues, reporting countries)
    pub locations: Vec<String>,
    /// First admissible occurrence date
    pub start_date: NaiveDate,
    /// Maximum day offset added to `start_date`; dates fall in
    /// [start_date, start_date + max_day_offset]
    pub max_day_offset: i64,
    /// Upper bound on group associations per subject (lower bound is zero)
    pub max_groups_per_subject: usize,
}

impl DatasetProfile {
    /// Cricket match statistics: players, teams, venues.
    pub fn cricket() -> Self {
        Self {
            subject_name_template: "Player".to_string(),
            categories: strings(&["Batsman", "Bowler", "All-Rounder"]),
            groups: strings(&[
                "Chennai Kings",
                "Mumbai Titans",
                "Delhi Chargers",
                "Bangalore Blazers",
            ]),
            locations: strings(&["Chennai", "Mumbai", "Delhi", "Bangalore", "Kolkata"]),
            start_date: date(2020, 1, 1),
            max_day_offset: 1000,
            max_groups_per_subject: 2,
        }
    }

    /// FDA adverse-event reports: cases, drugs, reporting countries.
    pub fn adverse_events() -> Self {
        Self {
            subject_name_template: "Case".to_string(),
            categories: strings(&["0-17", "18-64", "65+"]),
            groups: strings(&[
                "Acetaminophen",
                "Ibuprofen",
                "Lisinopril",
                "Metformin",
                "Atorvastatin",
            ]),
            locations: strings(&["US", "CA", "GB", "DE", "JP"]),
            start_date: date(2019, 1, 1),
            max_day_offset: 1460,
            max_groups_per_subject: 3,
        }
    }

    /// Check the profile invariants the generator relies on.
    pub fn validate(&self) -> GraphSeedResult<()> {
        if self.subject_name_template.trim().is_empty() {
            return Err(GraphSeedError::Profile(
                "subject name template must not be empty".to_string(),
            ));
        }
        for (field, values) in [
            ("categories", &self.categories),
            ("groups", &self.groups),
            ("locations", &self.locations),
        ] {
            if values.is_empty() {
                return Err(GraphSeedError::Profile(format!(
                    "{} vocabulary must not be empty",
                    field
                )));
            }
        }
        if self.max_day_offset < 0 {
            return Err(GraphSeedError::Profile(format!(
                "max day offset must be non-negative, got {}",
                self.max_day_offset
            )));
        }
        // The generator adds offsets with plain date arithmetic, which
        // panics past the calendar's end; reject such windows up front.
        if self
            .start_date
            .checked_add_days(Days::new(self.max_day_offset as u64))
            .is_none()
        {
            return Err(GraphSeedError::Profile(format!(
                "date window overflows the calendar: {} plus {} days",
                self.start_date, self.max_day_offset
            )));
        }
        Ok(())
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date")
}
