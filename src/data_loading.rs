//! Reads `people.csv`, `movies.csv` and `stars.csv` into a [`GraphIndex`].

use std::fs::File;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::error::DataError;
use crate::graph_index::GraphIndex;

pub const PEOPLE_FILE: &str = "people.csv";
pub const MOVIES_FILE: &str = "movies.csv";
pub const STARS_FILE: &str = "stars.csv";

#[derive(Debug, Deserialize)]
struct PersonRow {
    id: String,
    name: String,
    #[serde(default)]
    birth: String,
}

#[derive(Debug, Deserialize)]
struct MovieRow {
    id: String,
    title: String,
    #[serde(default)]
    year: String,
}

#[derive(Debug, Deserialize)]
struct StarRow {
    person_id: String,
    movie_id: String,
}

/// Counts from one load, mostly for logging.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LoadSummary {
    pub people: usize,
    pub movies: usize,
    pub links: usize,
    pub skipped: usize,
}

fn open_reader(path: &Path) -> Result<csv::Reader<File>, DataError> {
    let file = File::open(path).map_err(|source| DataError::Io { path: path.to_path_buf(), source })?;
    Ok(csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(file)) // header row expected
}

/// Loads the three tables from `dir`. People and movies must be well formed;
/// star rows that don't parse or point at unknown ids are skipped.
pub fn load_directory(dir: &Path) -> Result<(GraphIndex, LoadSummary), DataError> {
    let mut index = GraphIndex::new();
    let mut summary = LoadSummary::default();

    let people_path = dir.join(PEOPLE_FILE);
    let mut reader = open_reader(&people_path)?;
    for row in reader.deserialize::<PersonRow>() {
        let row = row.map_err(|source| DataError::Csv { path: people_path.clone(), source })?;
        index.insert_person(&row.id, &row.name, &row.birth);
        summary.people += 1;
    }

    let movies_path = dir.join(MOVIES_FILE);
    let mut reader = open_reader(&movies_path)?;
    for row in reader.deserialize::<MovieRow>() {
        let row = row.map_err(|source| DataError::Csv { path: movies_path.clone(), source })?;
        index.insert_movie(&row.id, &row.title, &row.year);
        summary.movies += 1;
    }

    let stars_path: PathBuf = dir.join(STARS_FILE);
    let mut reader = open_reader(&stars_path)?;
    for row in reader.deserialize::<StarRow>() {
        match row {
            Ok(row) => {
                if index.link(&row.person_id, &row.movie_id) {
                    summary.links += 1;
                } else {
                    debug!(person_id = %row.person_id, movie_id = %row.movie_id, "skipping star row with unknown id");
                    summary.skipped += 1;
                }
            }
            Err(err) if err.is_io_error() => {
                return Err(DataError::Csv { path: stars_path, source: err });
            }
            Err(err) => {
                debug!(error = %err, "skipping malformed star row");
                summary.skipped += 1;
            }
        }
    }

    if summary.skipped > 0 {
        warn!(skipped = summary.skipped, "ignored star rows that did not match a person and a movie");
    }
    info!(
        people = index.person_count(),
        movies = index.movie_count(),
        links = summary.links,
        "dataset loaded from {}",
        dir.display()
    );

    Ok((index, summary))
}
