//! In-memory album catalogue records and rating statistics.
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// A rating category, restricted to the 1–5 scale at construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
    /// All categories in ascending order.
    pub const ALL: [Rating; 5] = [Rating(1), Rating(2), Rating(3), Rating(4), Rating(5)];

    pub fn new(value: u8) -> Option<Self> {
        (1..=5).contains(&value).then_some(Rating(value))
    }

    #[inline]
    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Rating {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Rating::new(value).ok_or_else(|| format!("rating {value} is outside the 1-5 scale"))
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

/// One row of the ratings table. Cover paths are relative to the
/// configured images directory.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AlbumRecord {
    pub artist: String,
    pub title: String,
    pub rating: Rating,
    pub img: PathBuf,
}

/// Load a JSON catalogue (an array of [`AlbumRecord`]) from disk.
pub fn load_catalog(path: &Path) -> Result<Vec<AlbumRecord>, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read catalog {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse catalog {}: {e}", path.display()))
}

/// Per-rating tallies.
///
/// Counts are kept in a 7-slot array indexed by rating value, with the
/// slots for ratings 0 and 6 pinned at zero. The sentinels let the
/// neighbour comparison behind [`RatingCounts::prefers_trailing`] treat
/// the ends of the scale like any interior category.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RatingCounts {
    counts: [usize; 7],
}

impl RatingCounts {
    pub fn from_records(records: &[AlbumRecord]) -> Self {
        let mut out = Self::default();
        for record in records {
            out.counts[record.rating.value() as usize] += 1;
        }
        out
    }

    /// Build from per-category counts listed in rating order 1–5.
    pub fn from_per_rating(per_rating: [usize; 5]) -> Self {
        let mut out = Self::default();
        out.counts[1..6].copy_from_slice(&per_rating);
        out
    }

    #[inline]
    pub fn get(&self, rating: Rating) -> usize {
        self.counts[rating.value() as usize]
    }

    /// Largest category count.
    pub fn max(&self) -> usize {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    /// Number of tile rows needed to stack the fullest category at
    /// `n_wide` tiles per row.
    pub fn rows_needed(&self, n_wide: usize) -> usize {
        self.max().div_ceil(n_wide)
    }

    /// Whether a category's stack should be mirrored to the right edge:
    /// true when the neighbour one rating below holds at most as many
    /// albums as the neighbour one rating above, so the sparse top row
    /// hugs the taller side.
    pub fn prefers_trailing(&self, rating: Rating) -> bool {
        let r = rating.value() as usize;
        self.counts[r - 1] <= self.counts[r + 1]
    }
}
