//! Stable ordering of a car collection by a chosen field.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::domain::AppError;

use super::Car;

/// Field the visible list is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Keep server order.
    #[default]
    None,
    Engine,
    Type,
    Price,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::None => "none",
            SortKey::Engine => "engine",
            SortKey::Type => "type",
            SortKey::Price => "price",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "none" => Ok(SortKey::None),
            "engine" => Ok(SortKey::Engine),
            "type" => Ok(SortKey::Type),
            "price" => Ok(SortKey::Price),
            _ => Err(AppError::InvalidSortKey(s.to_string())),
        }
    }
}

/// Returns `cars` ordered by `key`. Equal keys keep their input order.
pub fn sort(cars: &[Car], key: SortKey) -> Vec<Car> {
    let mut sorted = cars.to_vec();
    match key {
        SortKey::None => {}
        SortKey::Engine => sorted.sort_by(|a, b| collate(&a.engine, &b.engine)),
        SortKey::Type => sorted.sort_by(|a, b| collate(&a.body_type, &b.body_type)),
        SortKey::Price => sorted.sort_by(|a, b| a.price.total_cmp(&b.price)),
    }
    sorted
}

/// Alphabetical comparison in three levels, the way root-locale collation
/// orders category labels: base letters with accents and case folded away,
/// then accents (unaccented first), then case (lowercase first).
fn collate(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(base_letters(b))
        .then_with(|| accented_letters(a).cmp(accented_letters(b)))
        .then_with(|| compare_case(a, b))
}

fn base_letters(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd().filter(|c| !is_combining_mark(*c)).flat_map(char::to_lowercase)
}

fn accented_letters(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd().flat_map(char::to_lowercase)
}

fn compare_case(a: &str, b: &str) -> Ordering {
    a.chars()
        .zip(b.chars())
        .find(|(x, y)| x != y)
        .map(|(x, y)| match (x.is_lowercase(), y.is_lowercase()) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            _ => x.cmp(&y),
        })
        .unwrap_or_else(|| a.len().cmp(&b.len()))
}
