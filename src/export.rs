//! Artifact export: intermediate JSON files for bulk import
//!
//! Each entity class goes to its own pretty-printed JSON array. Writes
//! overwrite any previous artifact; there is no partial-write recovery, so a
//! failure mid-write is a total failure of the run and the output must be
//! regenerated.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::info;

use crate::error::GraphSeedResult;
use crate::record::{Dataset, OccurrenceRecord, SubjectRecord};

/// Subject artifact file name within the output directory
pub const SUBJECTS_FILE: &str = "subjects.json";
/// Occurrence artifact file name within the output directory
pub const OCCURRENCES_FILE: &str = "occurrences.json";

/// Locations of the two artifacts produced by a generation run.
#[derive(Debug, Clone)]
pub struct ArtifactPaths {
    pub subjects: PathBuf,
    pub occurrences: PathBuf,
}

/// Write both artifacts into `dir`, creating it if needed.
pub fn write_artifacts(dataset: &Dataset, dir: &Path) -> GraphSeedResult<ArtifactPaths> {
    std::fs::create_dir_all(dir)?;
    let paths = ArtifactPaths {
        subjects: dir.join(SUBJECTS_FILE),
        occurrences: dir.join(OCCURRENCES_FILE),
    };
    write_pretty(&paths.subjects, &dataset.subjects)?;
    write_pretty(&paths.occurrences, &dataset.occurrences)?;
    info!(
        subjects = dataset.subjects.len(),
        occurrences = dataset.occurrences.len(),
        dir = %dir.display(),
        "wrote dataset artifacts"
    );
    Ok(paths)
}

/// Re-read a subject artifact.
pub fn read_subjects(path: &Path) -> GraphSeedResult<Vec<SubjectRecord>> {
    let file = File::open(path)?;
    Ok(serde_json::from_reader(BufReader::new(file))?)
}

/// Re-read an occurrence artifact.
pub fn read_occurrences(path: &Path) -> GraphSeedResult<Vec<OccurrenceRecord>> {
    let file = File::open(path)?;
    Ok(serde_json::from_reader(BufReader::new(file))?)
}

fn write_pretty<T: Serialize>(path: &Path, records: &T) -> GraphSeedResult<()> {
    // File::create truncates, so a rerun replaces the previous artifact.
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, records)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}
