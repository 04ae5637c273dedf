//! Album state: per-slot sticker counts, derived statistics, persistence.
//!
//! The album is a flat mapping from slot id (1..=441) to a non-negative copy
//! count. The mapping always holds exactly [`SLOT_COUNT`] keys; load restores
//! that invariant by filling keys absent from the file with zero.

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// Slots per side of the square album grid.
pub const GRID_SIZE: u32 = 21;

/// Total number of slots in the album.
pub const SLOT_COUNT: u32 = GRID_SIZE * GRID_SIZE;

/// Album errors
#[derive(Error, Debug)]
pub enum AlbumError {
    #[error("no saved album at {}", .0.display())]
    NothingToLoad(PathBuf),
    #[error("stored slot key {0:?} is not a slot number")]
    BadSlotKey(String),
    #[error("stored slot id {0} falls outside the 21x21 grid")]
    SlotOutOfRange(u32),
    #[error("malformed album file: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("could not serialize album: {0}")]
    Serialize(serde_json::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Grid position of a slot, row-major from the top-left. Ids start at 1.
pub fn slot_position(id: u32) -> (u32, u32) {
    debug_assert!(id >= 1, "slot ids start at 1");
    ((id - 1) / GRID_SIZE, (id - 1) % GRID_SIZE)
}

/// Integrity gate for keys read from a save file.
///
/// A key must parse as a slot id whose derived grid position lies inside the
/// 21x21 grid. This is the single place the consistency policy lives;
/// callers decide whether a failure is fatal (the desktop app treats it as
/// one).
pub fn validate_slot_key(key: &str) -> Result<u32, AlbumError> {
    let id: u32 = key
        .parse()
        .map_err(|_| AlbumError::BadSlotKey(key.to_owned()))?;
    if id == 0 {
        return Err(AlbumError::SlotOutOfRange(0));
    }
    let (row, col) = slot_position(id);
    if row >= GRID_SIZE || col >= GRID_SIZE {
        return Err(AlbumError::SlotOutOfRange(id));
    }
    Ok(id)
}

/// Aggregate album statistics.
///
/// `missing` counts slots with no copy; `double` counts owned copies beyond
/// the first, summed across all slots.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Statistics {
    pub missing: u32,
    pub double: u32,
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "missing: {}, double: {}", self.missing, self.double)
    }
}

/// The full album: copy counts for every slot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AlbumState {
    counts: BTreeMap<u32, u32>,
}

impl Default for AlbumState {
    fn default() -> Self {
        Self {
            counts: (1..=SLOT_COUNT).map(|id| (id, 0)).collect(),
        }
    }
}

impl AlbumState {
    /// An empty album: all 441 slots at count zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy count for a slot. Ids outside the grid read as zero.
    pub fn count(&self, id: u32) -> u32 {
        self.counts.get(&id).copied().unwrap_or(0)
    }

    /// Record one more copy of a slot. Total, never fails, no upper bound.
    pub fn increment(&mut self, id: u32) {
        if let Some(count) = self.counts.get_mut(&id) {
            *count += 1;
        }
    }

    /// Remove one copy of a slot, flooring at zero. Total, never fails.
    pub fn decrement(&mut self, id: u32) {
        if let Some(count) = self.counts.get_mut(&id) {
            *count = count.saturating_sub(1);
        }
    }

    /// All counts in slot order, so `counts()[id - 1]` is slot `id`.
    pub fn counts(&self) -> Vec<u32> {
        self.counts.values().copied().collect()
    }

    /// Derived statistics over the whole album.
    pub fn statistics(&self) -> Statistics {
        let missing = self.counts.values().filter(|&&c| c == 0).count() as u32;
        let double = self
            .counts
            .values()
            .filter(|&&c| c > 1)
            .map(|&c| c - 1)
            .sum();
        Statistics { missing, double }
    }

    /// Write the full mapping to `path` as a flat JSON object with string
    /// keys, overwriting any existing file. Write failures propagate.
    pub fn save(&self, path: &Path) -> Result<(), AlbumError> {
        let stored: BTreeMap<String, u32> = self
            .counts
            .iter()
            .map(|(id, count)| (id.to_string(), *count))
            .collect();
        let body = serde_json::to_string(&stored).map_err(AlbumError::Serialize)?;
        std::fs::write(path, body)?;
        info!("saved album to {} ({})", path.display(), self.statistics());
        Ok(())
    }

    /// Read a saved album from `path`, replacing the mapping entirely.
    ///
    /// A missing file is [`AlbumError::NothingToLoad`], which callers surface
    /// as a notice rather than a failure. Keys absent from the file load as
    /// zero; keys failing [`validate_slot_key`] are integrity errors.
    pub fn load(path: &Path) -> Result<Self, AlbumError> {
        if !path.is_file() {
            return Err(AlbumError::NothingToLoad(path.to_owned()));
        }
        let stored: BTreeMap<String, u32> =
            serde_json::from_str(&std::fs::read_to_string(path)?)?;
        let mut album = Self::new();
        for (key, count) in stored {
            let id = validate_slot_key(&key)?;
            album.counts.insert(id, count);
        }
        info!("loaded album from {} ({})", path.display(), album.statistics());
        Ok(album)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_album_is_all_missing() {
        let album = AlbumState::new();
        assert_eq!(album.counts().len(), SLOT_COUNT as usize);
        assert_eq!(
            album.statistics(),
            Statistics {
                missing: SLOT_COUNT,
                double: 0
            }
        );
    }

    #[test]
    fn decrement_floors_at_zero_for_every_slot() {
        let mut album = AlbumState::new();
        for id in 1..=SLOT_COUNT {
            album.decrement(id);
            album.decrement(id);
            assert_eq!(album.count(id), 0);
        }
    }

    #[test]
    fn increment_then_decrement_round_trips() {
        let mut album = AlbumState::new();
        for start in [0u32, 1, 5, 100] {
            for _ in 0..start {
                album.increment(7);
            }
            album.increment(7);
            album.decrement(7);
            assert_eq!(album.count(7), start);
            for _ in 0..start {
                album.decrement(7);
            }
        }
    }

    #[test]
    fn statistics_count_extras_beyond_the_first() {
        let mut album = AlbumState::new();
        for _ in 0..3 {
            album.increment(5);
        }
        assert_eq!(
            album.statistics(),
            Statistics {
                missing: SLOT_COUNT - 1,
                double: 2
            }
        );
    }

    #[test]
    fn display_matches_status_line_format() {
        let stats = Statistics {
            missing: 12,
            double: 34,
        };
        assert_eq!(stats.to_string(), "missing: 12, double: 34");
    }

    #[test]
    fn save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("album.json");
        let mut album = AlbumState::new();
        album.increment(1);
        for _ in 0..4 {
            album.increment(220);
        }
        album.increment(SLOT_COUNT);
        album.save(&path).unwrap();
        let loaded = AlbumState::load(&path).unwrap();
        assert_eq!(loaded, album);
    }

    #[test]
    fn load_of_missing_path_is_nothing_to_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");
        match AlbumState::load(&path) {
            Err(AlbumError::NothingToLoad(p)) => assert_eq!(p, path),
            other => panic!("expected NothingToLoad, got {other:?}"),
        }
    }

    #[test]
    fn load_fills_absent_keys_with_zero() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("partial.json");
        std::fs::write(&path, r#"{"3": 2, "441": 1}"#).unwrap();
        let album = AlbumState::load(&path).unwrap();
        assert_eq!(album.count(3), 2);
        assert_eq!(album.count(441), 1);
        assert_eq!(album.count(1), 0);
        assert_eq!(album.counts().len(), SLOT_COUNT as usize);
    }

    #[test]
    fn load_rejects_out_of_range_slot_id() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, r#"{"442": 1}"#).unwrap();
        match AlbumState::load(&path) {
            Err(AlbumError::SlotOutOfRange(442)) => {}
            other => panic!("expected SlotOutOfRange, got {other:?}"),
        }
    }

    #[test]
    fn load_rejects_non_numeric_slot_key() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, r#"{"first": 1}"#).unwrap();
        match AlbumState::load(&path) {
            Err(AlbumError::BadSlotKey(key)) => assert_eq!(key, "first"),
            other => panic!("expected BadSlotKey, got {other:?}"),
        }
    }

    #[test]
    fn slot_positions_cover_the_grid() {
        assert_eq!(slot_position(1), (0, 0));
        assert_eq!(slot_position(21), (0, 20));
        assert_eq!(slot_position(22), (1, 0));
        assert_eq!(slot_position(441), (20, 20));
    }

    #[test]
    fn validate_slot_key_accepts_the_full_range() {
        assert_eq!(validate_slot_key("1").unwrap(), 1);
        assert_eq!(validate_slot_key("441").unwrap(), 441);
        assert!(matches!(
            validate_slot_key("0"),
            Err(AlbumError::SlotOutOfRange(0))
        ));
    }

    #[test]
    fn validate_slot_key_rejects_positions_beyond_the_grid() {
        // Ids whose derived row falls past the last grid row
        for key in ["442", "462", "9000"] {
            assert!(matches!(
                validate_slot_key(key),
                Err(AlbumError::SlotOutOfRange(_))
            ));
        }
    }

    #[test]
    fn serialize_and_malformed_errors_read_differently() {
        let json_err = serde_json::from_str::<u32>("x").unwrap_err();
        let save_side = AlbumError::Serialize(json_err).to_string();
        assert!(save_side.starts_with("could not serialize album"));

        let json_err = serde_json::from_str::<u32>("x").unwrap_err();
        let load_side = AlbumError::Malformed(json_err).to_string();
        assert!(load_side.starts_with("malformed album file"));
    }
}
