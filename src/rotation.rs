use log::{info, warn};

use crate::category::Category;
use crate::state::ValueFile;

/// Position in the category cycle, persisted between runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RotationState {
    pub index: usize,
}

/// A fixed, non-empty cyclic order of categories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rotation {
    categories: Vec<Category>,
}

impl Rotation {
    pub fn new(categories: Vec<Category>) -> Option<Self> {
        (!categories.is_empty()).then_some(Self { categories })
    }

    #[cfg(test)]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Returns the category at `state` and the state that follows it. A
    /// state pointing past the end of the list restarts the cycle.
    pub fn next(&self, state: RotationState) -> (Category, RotationState) {
        let index = if state.index < self.categories.len() {
            state.index
        } else {
            0
        };

        let category = self.categories[index];
        let following = RotationState {
            index: (index + 1) % self.categories.len(),
        };

        (category, following)
    }
}

/// Rotation state kept as a bare integer in a text file.
pub struct RotationStore {
    file: ValueFile,
}

impl RotationStore {
    pub fn new(file: ValueFile) -> Self {
        Self { file }
    }

    /// Missing or unparsable state starts from the beginning.
    pub fn load(&self) -> RotationState {
        let Some(raw) = self.file.read() else {
            return RotationState::default();
        };

        match raw.parse::<usize>() {
            Ok(index) => RotationState { index },
            Err(_) => {
                warn!(
                    "Ignoring unreadable rotation state {:?} in {}",
                    raw,
                    self.file.path().display()
                );
                RotationState::default()
            }
        }
    }

    pub fn save(&self, state: RotationState) {
        if let Err(e) = self.file.write(&state.index.to_string()) {
            warn!(
                "Failed to save rotation state to {}: {}",
                self.file.path().display(),
                e
            );
        }
    }

    /// Picks this run's category and persists the advanced state right away.
    pub fn advance(&self, rotation: &Rotation) -> Category {
        let (category, next) = rotation.next(self.load());
        self.save(next);
        info!("Category for this run: {}", category);
        category
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use tempfile::TempDir;

    fn rotation(names: &[&str]) -> Rotation {
        Rotation::new(names.iter().map(|n| n.parse().unwrap()).collect()).unwrap()
    }

    #[test]
    fn empty_rotation_is_rejected() {
        assert!(Rotation::new(Vec::new()).is_none());
    }

    #[test]
    fn cycles_from_persisted_index() {
        let rotation = rotation(&["car", "character", "game_character"]);
        let mut state = RotationState { index: 2 };
        let mut seen = Vec::new();

        for _ in 0..7 {
            let (category, next) = rotation.next(state);
            seen.push(category.name());
            state = next;
        }

        assert_eq!(
            seen,
            [
                "game_character",
                "car",
                "character",
                "game_character",
                "car",
                "character",
                "game_character"
            ]
        );
    }

    #[test]
    fn out_of_range_index_restarts() {
        let rotation = rotation(&["car", "character"]);
        let (category, next) = rotation.next(RotationState { index: 9 });
        assert_eq!(category, Category::Car);
        assert_eq!(next, RotationState { index: 1 });
    }

    #[test]
    fn corrupt_state_file_resets_to_zero() {
        let dir = TempDir::new().unwrap();
        let file = ValueFile::new(dir.path().join("rotation_index.txt"));
        file.write("game_character?").unwrap();

        assert_eq!(RotationStore::new(file).load(), RotationState::default());
    }

    #[test]
    fn four_runs_from_fresh_state_alternate() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("rotation_index.txt");
        let rotation = rotation(&["car", "character"]);
        let mut seen = Vec::new();

        for _ in 0..4 {
            // A new store per run mirrors separate process invocations.
            let store = RotationStore::new(ValueFile::new(&path));
            seen.push(store.advance(&rotation).name());
        }

        assert_eq!(seen, ["car", "character", "car", "character"]);
        assert_eq!(ValueFile::new(&path).read().as_deref(), Some("0"));
    }
}
