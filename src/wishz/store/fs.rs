use super::{LoadOutcome, RecordStore, SkippedLine};
use crate::error::Result;
use crate::model::BirthdayRecord;
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, ErrorKind, Write};
use std::path::{Path, PathBuf};

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordStore for FileStore {
    fn load(&self) -> LoadOutcome {
        let mut outcome = LoadOutcome::default();

        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!("record file {} not found, starting empty", self.path.display());
                return outcome;
            }
            Err(e) => {
                log::warn!("error reading {}: {}", self.path.display(), e);
                outcome.read_error = Some(e.to_string());
                return outcome;
            }
        };

        for (idx, line) in BufReader::new(file).lines().enumerate() {
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    // Keep whatever parsed so far.
                    log::warn!("error reading {}: {}", self.path.display(), e);
                    outcome.read_error = Some(e.to_string());
                    break;
                }
            };
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            match BirthdayRecord::from_line(trimmed) {
                Ok(record) => outcome.records.push(record),
                Err(e) => {
                    log::warn!("skipping malformed line {}: {}", idx + 1, e);
                    outcome.skipped.push(SkippedLine {
                        line_no: idx + 1,
                        line: trimmed.to_string(),
                        reason: e.to_string(),
                    });
                }
            }
        }

        outcome
    }

    fn append(&mut self, record: &BirthdayRecord) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{}", record.to_line())?;
        file.flush()?;
        Ok(())
    }

    fn overwrite(&mut self, records: &[BirthdayRecord]) -> Result<()> {
        let mut file = File::create(&self.path)?;
        for record in records {
            writeln!(file, "{}", record.to_line())?;
        }
        file.flush()?;
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        File::create(&self.path)?;
        Ok(())
    }
}
