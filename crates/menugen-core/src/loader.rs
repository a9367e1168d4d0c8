use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use csv::StringRecord;
use menugen_types::{CatalogBuilder, DishCatalog};

use crate::error::LoadError;

/// Catalog plus the rows that were dropped while reading it
#[derive(Debug, Clone)]
pub struct LoadedCatalog {
    pub catalog: DishCatalog,
    pub warnings: Vec<SkippedRow>,
}

/// A data row that did not make it into the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRow {
    /// 1-based line in the source
    pub line: u64,
    pub reason: SkipReason,
    pub fields: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    TooFewFields,
    EmptyDishName,
}

impl SkipReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkipReason::TooFewFields => "insufficient data",
            SkipReason::EmptyDishName => "empty dish name",
        }
    }
}

/// Reads `dish,ingredient,ingredient,...` rows. The first row is a header and is skipped.
pub struct CatalogLoader;

impl CatalogLoader {
    /// Load the catalog from a CSV file on disk
    pub fn load_from_file(path: &Path) -> Result<LoadedCatalog, LoadError> {
        tracing::info!("Loading dishes from file: {}", path.display());
        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(LoadError::NotFound(path.to_path_buf()));
            }
            Err(e) => return Err(e.into()),
        };

        let loaded = Self::load_from_reader(file)?;
        tracing::info!(
            "Loaded {} dishes ({} rows skipped)",
            loaded.catalog.len(),
            loaded.warnings.len()
        );
        Ok(loaded)
    }

    /// Load the catalog from any UTF-8 CSV source.
    ///
    /// Blank lines count as rows with no fields: a blank first line is a malformed
    /// header, blank data lines are reported as skipped.
    pub fn load_from_reader<R: Read>(mut reader: R) -> Result<LoadedCatalog, LoadError> {
        let mut input = Vec::new();
        reader.read_to_end(&mut input)?;

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(input.as_slice());
        let mut record = StringRecord::new();

        if !reader.read_record(&mut record)? {
            return Err(LoadError::MalformedInput("file is empty".to_string()));
        }
        if skip_line_breaks(&input, 0) > 0 {
            return Err(LoadError::MalformedInput("header row is empty".to_string()));
        }
        if record.len() < 2 {
            return Err(LoadError::MalformedInput(format!(
                "header has {} field(s), expected at least 2",
                record.len()
            )));
        }

        let mut builder = CatalogBuilder::default();
        let mut warnings = Vec::new();

        // `offset` is the byte just past the previous record, `line` the line it is on
        let mut offset = reader.position().byte() as usize;
        let mut line = 1 + count_line_breaks(&input, 0, offset);

        while reader.read_record(&mut record)? {
            let start = skip_line_breaks(&input, offset);
            let blank = count_line_breaks(&input, offset, start);
            skip_blank_lines(&mut warnings, line, blank);
            line += blank;

            let end = reader.position().byte() as usize;
            let record_line = line;
            line += count_line_breaks(&input, start, end);
            offset = end;

            let reason = if record.len() < 2 {
                Some(SkipReason::TooFewFields)
            } else if record[0].trim().is_empty() {
                Some(SkipReason::EmptyDishName)
            } else {
                None
            };

            if let Some(reason) = reason {
                let fields: Vec<String> = record.iter().map(str::to_string).collect();
                skip_row(&mut warnings, record_line, reason, fields);
                continue;
            }

            let name = record[0].trim();
            let ingredients: Vec<String> = record
                .iter()
                .skip(1)
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .map(str::to_string)
                .collect();

            if builder.insert(name, ingredients) {
                tracing::debug!("Dish '{}' redefined on line {}", name, record_line);
            }
        }

        let trailing = count_line_breaks(&input, offset, input.len());
        skip_blank_lines(&mut warnings, line, trailing);

        if builder.is_empty() {
            return Err(LoadError::MalformedInput(
                "no dish found in the file".to_string(),
            ));
        }

        Ok(LoadedCatalog {
            catalog: builder.build(),
            warnings,
        })
    }
}

fn skip_row(warnings: &mut Vec<SkippedRow>, line: u64, reason: SkipReason, fields: Vec<String>) {
    tracing::warn!(
        "Skipping row {} due to {}: {:?}",
        line,
        reason.as_str(),
        fields
    );
    warnings.push(SkippedRow {
        line,
        reason,
        fields,
    });
}

fn skip_blank_lines(warnings: &mut Vec<SkippedRow>, first_line: u64, count: u64) {
    for line in first_line..first_line + count {
        skip_row(warnings, line, SkipReason::TooFewFields, Vec::new());
    }
}

/// First byte at or after `from` that is not `\r` or `\n`
fn skip_line_breaks(input: &[u8], from: usize) -> usize {
    input[from..]
        .iter()
        .position(|&b| b != b'\r' && b != b'\n')
        .map_or(input.len(), |i| from + i)
}

/// Line breaks in `input[from..to]`. CRLF, LF and CR each count once; the `\n` of a
/// CRLF split across `from` belongs to the earlier range.
fn count_line_breaks(input: &[u8], from: usize, to: usize) -> u64 {
    (from..to)
        .filter(|&i| match input[i] {
            b'\r' => true,
            b'\n' => i == 0 || input[i - 1] != b'\r',
            _ => false,
        })
        .count() as u64
}
