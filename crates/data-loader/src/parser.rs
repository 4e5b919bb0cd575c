//! Parsers for the three CSV input tables.
//!
//! - critic ratings: `Title,<critic>,<critic>,...`, cells numeric or blank
//! - person ratings: `Title,<person name>`, cells numeric or blank
//! - movie catalog: `Title,Genre1,Year,Runtime,...` (extra columns ignored)
//!
//! Headers and numeric cells are whitespace-trimmed; titles and genres are
//! kept exactly as written, since titles are join keys.
//!
//! Each table has a `read_*` function over already-decoded text and a
//! `parse_*` function that reads the file first. Catalog files are
//! ISO-8859-1, the rating tables UTF-8.

use crate::error::{DataLoadError, Result};
use crate::types::*;
use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;
use tracing::warn;

pub const TITLE_COLUMN: &str = "Title";
pub const GENRE_COLUMN: &str = "Genre1";
pub const YEAR_COLUMN: &str = "Year";
pub const RUNTIME_COLUMN: &str = "Runtime";

fn open(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => DataLoadError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => DataLoadError::IoError(e),
    })
}

/// Read a file with ISO-8859-1 encoding (Latin-1)
///
/// Every byte maps directly to the Unicode code point of the same value, so
/// decoding cannot fail.
fn read_to_string_latin1(path: &Path) -> Result<String> {
    let mut bytes = Vec::new();
    open(path)?.read_to_end(&mut bytes)?;
    Ok(bytes.iter().map(|&b| b as char).collect())
}

fn read_to_string_utf8(path: &Path) -> Result<String> {
    let mut content = String::new();
    open(path)?.read_to_string(&mut content)?;
    Ok(content)
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Header row plus data records, with 1-based line numbers
fn read_table(content: &str) -> Result<(StringRecord, Vec<(usize, StringRecord)>)> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let mut reader = ReaderBuilder::new()
        .trim(Trim::Headers)
        .flexible(true)
        .from_reader(content.as_bytes());

    let headers = reader.headers()?.clone();
    let mut records = Vec::new();
    for (idx, result) in reader.records().enumerate() {
        let record = result?;
        let line = record
            .position()
            .map_or(idx + 2, |pos| pos.line() as usize);
        if record.len() != headers.len() {
            return Err(DataLoadError::FieldCountMismatch {
                expected: headers.len(),
                found: record.len(),
                line,
            });
        }
        records.push((line, record));
    }
    Ok((headers, records))
}

fn require_column(headers: &StringRecord, table: &str, column: &str) -> Result<usize> {
    headers
        .iter()
        .position(|h| h == column)
        .ok_or_else(|| DataLoadError::MissingColumn {
            table: table.to_string(),
            column: column.to_string(),
        })
}

fn optional_column(headers: &StringRecord, column: &str) -> Option<usize> {
    headers.iter().position(|h| h == column)
}

/// Parse a rating cell: blank (or NaN) is an absent rating
fn parse_rating(value: &str, file: &str, line: usize, column: &str) -> Result<RatingCell> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    let rating: f64 = value.parse().map_err(|e| DataLoadError::ParseError {
        file: file.to_string(),
        line,
        reason: format!("Invalid rating '{}' for {}: {}", value, column, e),
    })?;
    Ok((!rating.is_nan()).then_some(rating))
}

/// Parse a whole number that may be written as a float (`1995.0`)
fn parse_whole(value: &str, file: &str, line: usize, field: &str) -> Result<Option<u64>> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    if let Ok(n) = value.parse::<u64>() {
        return Ok(Some(n));
    }
    let parsed: f64 = value.parse().map_err(|e| DataLoadError::ParseError {
        file: file.to_string(),
        line,
        reason: format!("Invalid {} '{}': {}", field, value, e),
    })?;
    if parsed.is_nan() {
        return Ok(None);
    }
    if parsed < 0.0 || parsed.fract() != 0.0 {
        return Err(DataLoadError::InvalidValue {
            field: field.to_string(),
            value: value.to_string(),
        });
    }
    Ok(Some(parsed as u64))
}

// =============================================================================
// Critic ratings
// =============================================================================

/// Parse the critic ratings table
pub fn read_critic_ratings(content: &str, file: &str) -> Result<CriticRatings> {
    let (headers, records) = read_table(content)?;
    let title_col = require_column(&headers, "critic ratings", TITLE_COLUMN)?;

    let critic_cols: Vec<usize> = (0..headers.len()).filter(|&i| i != title_col).collect();
    let critics = critic_cols
        .iter()
        .map(|&i| headers[i].to_string())
        .collect();
    let mut table = CriticRatings::new(critics)?;

    for (line, record) in records {
        let title = &record[title_col];
        let cells = critic_cols
            .iter()
            .map(|&i| parse_rating(&record[i], file, line, &headers[i]))
            .collect::<Result<Vec<_>>>()?;
        table.insert_row(title, cells)?;
    }
    Ok(table)
}

pub fn parse_critic_ratings(path: &Path) -> Result<CriticRatings> {
    read_critic_ratings(&read_to_string_utf8(path)?, &file_name(path))
}

// =============================================================================
// Person ratings
// =============================================================================

/// Parse the person ratings table.
///
/// The first column other than `Title` holds the ratings and its header is
/// the person's name.
pub fn read_person_ratings(content: &str, file: &str) -> Result<PersonRatings> {
    let (headers, records) = read_table(content)?;
    let title_col = require_column(&headers, "person ratings", TITLE_COLUMN)?;
    let rating_col = (0..headers.len())
        .find(|&i| i != title_col)
        .ok_or_else(|| DataLoadError::MissingColumn {
            table: "person ratings".to_string(),
            column: "person rating".to_string(),
        })?;

    let mut person = PersonRatings::new(&headers[rating_col]);
    for (line, record) in records {
        let rating = parse_rating(&record[rating_col], file, line, person.name())?;
        person.insert(&record[title_col], rating)?;
    }
    Ok(person)
}

pub fn parse_person_ratings(path: &Path) -> Result<PersonRatings> {
    read_person_ratings(&read_to_string_utf8(path)?, &file_name(path))
}

// =============================================================================
// Movie catalog
// =============================================================================

/// Parse the movie catalog.
///
/// `Title` and `Genre1` are required. A catalog without a `Year` or `Runtime`
/// column loads with those values absent.
pub fn read_movie_catalog(content: &str, file: &str) -> Result<MovieCatalog> {
    let (headers, records) = read_table(content)?;
    let title_col = require_column(&headers, "movie catalog", TITLE_COLUMN)?;
    let genre_col = require_column(&headers, "movie catalog", GENRE_COLUMN)?;
    let year_col = optional_column(&headers, YEAR_COLUMN);
    let runtime_col = optional_column(&headers, RUNTIME_COLUMN);

    let mut catalog = MovieCatalog::new();
    for (line, record) in records {
        let year = match year_col {
            Some(col) => parse_whole(&record[col], file, line, "year")?
                .map(|y| {
                    u16::try_from(y).map_err(|_| DataLoadError::InvalidValue {
                        field: "year".to_string(),
                        value: y.to_string(),
                    })
                })
                .transpose()?,
            None => None,
        };
        let runtime = match runtime_col {
            Some(col) => parse_whole(&record[col], file, line, "runtime")?
                .map(|r| {
                    u32::try_from(r).map_err(|_| DataLoadError::InvalidValue {
                        field: "runtime".to_string(),
                        value: r.to_string(),
                    })
                })
                .transpose()?,
            None => None,
        };

        let title = &record[title_col];
        let entry = CatalogEntry {
            genre: record[genre_col].to_string(),
            year,
            runtime,
        };
        if !catalog.insert(title, entry) {
            warn!("Duplicate catalog title '{}' at line {} in {}, keeping first", title, line, file);
        }
    }
    Ok(catalog)
}

pub fn parse_movie_catalog(path: &Path) -> Result<MovieCatalog> {
    read_movie_catalog(&read_to_string_latin1(path)?, &file_name(path))
}
