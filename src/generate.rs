//! Synthetic dataset generation
//!
//! Single-pass, synchronous generation with an explicitly seeded RNG, so a
//! run can be reproduced exactly from its seed.

use chrono::Days;
use rand::prelude::*;
use rand::rngs::StdRng;
use tracing::debug;

use crate::error::GraphSeedResult;
use crate::profile::DatasetProfile;
use crate::record::{Dataset, OccurrenceRecord, SubjectRecord};

/// Generates subject and occurrence records from a [`DatasetProfile`].
pub struct Generator {
    profile: DatasetProfile,
    rng: StdRng,
}

impl Generator {
    /// Create a generator over a validated profile with a fixed seed.
    pub fn new(profile: DatasetProfile, seed: u64) -> GraphSeedResult<Self> {
        profile.validate()?;
        Ok(Self {
            profile,
            rng: StdRng::seed_from_u64(seed),
        })
    }

    /// Produce `n_subjects` subject records and `m_occurrences` occurrence
    /// records in one pass. Identifiers are sequential from 1 and unique
    /// within the run.
    pub fn generate(&mut self, n_subjects: usize, m_occurrences: usize) -> Dataset {
        let subjects = (1..=n_subjects).map(|i| self.subject(i)).collect();
        let occurrences = (1..=m_occurrences)
            .map(|j| self.occurrence(j as u64))
            .collect();
        debug!(
            subjects = n_subjects,
            occurrences = m_occurrences,
            "generated dataset"
        );
        Dataset {
            subjects,
            occurrences,
        }
    }

    fn subject(&mut self, index: usize) -> SubjectRecord {
        let name = format!("{} {}", self.profile.subject_name_template, index);
        let category = pick(&mut self.rng, &self.profile.categories).clone();
        let group_count = self.rng.gen_range(0..=self.profile.max_groups_per_subject);
        let groups = (0..group_count)
            .map(|_| pick(&mut self.rng, &self.profile.groups).clone())
            .collect();
        SubjectRecord {
            name,
            category,
            groups,
        }
    }

    fn occurrence(&mut self, id: u64) -> OccurrenceRecord {
        let location = pick(&mut self.rng, &self.profile.locations).clone();
        let offset = self.rng.gen_range(0..=self.profile.max_day_offset);
        let date = self.profile.start_date + Days::new(offset as u64);
        // Chosen independently, so both participants may be the same group.
        let home = pick(&mut self.rng, &self.profile.groups).clone();
        let away = pick(&mut self.rng, &self.profile.groups).clone();
        OccurrenceRecord {
            id,
            date: date.format("%Y-%m-%d").to_string(),
            location,
            participants: vec![home, away],
        }
    }
}

// Uniform pick by index; vocabularies are validated non-empty.
fn pick<'a>(rng: &mut StdRng, items: &'a [String]) -> &'a String {
    &items[rng.gen_range(0..items.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn three_by_four_profile() -> DatasetProfile {
        DatasetProfile {
            subject_name_template: "Player".to_string(),
            categories: vec!["Batsman".into(), "Bowler".into(), "All-Rounder".into()],
            groups: vec!["A".into(), "B".into(), "C".into(), "D".into()],
            locations: vec!["Chennai".into(), "Mumbai".into()],
            start_date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
            max_day_offset: 1000,
            max_groups_per_subject: 2,
        }
    }

    #[test]
    fn generates_exact_subject_count_with_valid_fields() {
        let profile = three_by_four_profile();
        let mut generator = Generator::new(profile.clone(), 7).unwrap();
        let dataset = generator.generate(50, 0);

        assert_eq!(dataset.subjects.len(), 50);
        for (i, subject) in dataset.subjects.iter().enumerate() {
            assert!(!subject.name.is_empty());
            assert_eq!(subject.name, format!("Player {}", i + 1));
            assert!(profile.categories.contains(&subject.category));
            assert!(subject.groups.len() <= profile.max_groups_per_subject);
            for group in &subject.groups {
                assert!(profile.groups.contains(group));
            }
        }
    }

    #[test]
    fn subject_suffixes_are_unique_and_sequential() {
        let mut generator = Generator::new(three_by_four_profile(), 0).unwrap();
        let dataset = generator.generate(25, 0);
        let suffixes: Vec<usize> = dataset
            .subjects
            .iter()
            .map(|s| {
                s.name
                    .rsplit(' ')
                    .next()
                    .and_then(|n| n.parse().ok())
                    .unwrap()
            })
            .collect();
        assert_eq!(suffixes, (1..=25).collect::<Vec<_>>());
    }

    #[test]
    fn occurrence_dates_stay_in_window() {
        let profile = three_by_four_profile();
        let mut generator = Generator::new(profile.clone(), 99).unwrap();
        let dataset = generator.generate(0, 20);

        let start = profile.start_date;
        let end = NaiveDate::from_ymd_opt(2022, 9, 26).unwrap();
        assert_eq!(start + Days::new(1000), end);

        assert_eq!(dataset.occurrences.len(), 20);
        for occurrence in &dataset.occurrences {
            let parsed = NaiveDate::parse_from_str(&occurrence.date, "%Y-%m-%d").unwrap();
            assert!(parsed >= start && parsed <= end, "date {} out of window", parsed);
        }
    }

    #[test]
    fn occurrence_ids_sequential_and_fields_from_vocabulary() {
        let profile = three_by_four_profile();
        let mut generator = Generator::new(profile.clone(), 3).unwrap();
        let dataset = generator.generate(0, 10);
        for (j, occurrence) in dataset.occurrences.iter().enumerate() {
            assert_eq!(occurrence.id, j as u64 + 1);
            assert!(profile.locations.contains(&occurrence.location));
            assert_eq!(occurrence.participants.len(), 2);
            for participant in &occurrence.participants {
                assert!(profile.groups.contains(participant));
            }
        }
    }

    #[test]
    fn same_seed_reproduces_the_run() {
        let mut a = Generator::new(three_by_four_profile(), 1234).unwrap();
        let mut b = Generator::new(three_by_four_profile(), 1234).unwrap();
        assert_eq!(a.generate(30, 15), b.generate(30, 15));
    }

    #[test]
    fn different_seeds_keep_schema_and_ranges() {
        let mut a = Generator::new(three_by_four_profile(), 1).unwrap();
        let mut b = Generator::new(three_by_four_profile(), 2).unwrap();
        let first = a.generate(10, 10);
        let second = b.generate(10, 10);
        assert_eq!(first.subjects.len(), second.subjects.len());
        assert_eq!(first.occurrences.len(), second.occurrences.len());
    }

    #[test]
    fn zero_day_window_pins_every_date_to_start() {
        let mut profile = three_by_four_profile();
        profile.max_day_offset = 0;
        let mut generator = Generator::new(profile, 5).unwrap();
        let dataset = generator.generate(0, 5);
        for occurrence in &dataset.occurrences {
            assert_eq!(occurrence.date, "2020-01-01");
        }
    }

    #[test]
    fn invalid_profile_rejected_at_construction() {
        let mut profile = three_by_four_profile();
        profile.groups.clear();
        assert!(Generator::new(profile, 0).is_err());
    }

    #[test]
    fn overflowing_date_window_fails_before_generation() {
        let mut profile = three_by_four_profile();
        profile.max_day_offset = i64::MAX;
        // Rejected here, so occurrence generation can never hit the
        // panicking end of date arithmetic.
        assert!(Generator::new(profile, 0).is_err());
    }
}
