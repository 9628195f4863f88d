//! Location of puzzle inputs on disk

use aoc_solver::FileSource;
use std::path::PathBuf;

/// Directory of puzzle inputs
///
/// Lookup order: `{dir}/{year}/day_{day:02}.txt`, then `{dir}/day_{day:02}.txt`.
pub struct InputStore {
    dir: PathBuf,
}

impl InputStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Get the input path for a specific year/day
    pub fn input_path(&self, year: u16, day: u8) -> PathBuf {
        let file_name = format!("day_{:02}.txt", day);
        let per_year = self.dir.join(year.to_string()).join(&file_name);
        if per_year.is_file() {
            per_year
        } else {
            self.dir.join(file_name)
        }
    }

    /// Check if the input file exists
    pub fn contains(&self, year: u16, day: u8) -> bool {
        self.input_path(year, day).is_file()
    }

    pub fn source(&self, year: u16, day: u8) -> FileSource {
        FileSource::new(self.input_path(year, day))
    }
}
