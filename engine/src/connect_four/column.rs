use crate::PlayerId;
use crate::input::parse_positive_int;

/// Fixed-height stack of slots. Markers fill from row 0 upward without gaps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    slots: Vec<Option<PlayerId>>,
}

impl Column {
    /// A height of zero yields a column with no slots, which accepts nothing.
    pub fn new(height: usize) -> Self {
        Self {
            slots: vec![None; height],
        }
    }

    pub fn parse(raw_height: &str) -> Self {
        Self::new(parse_positive_int(raw_height).unwrap_or(0))
    }

    pub fn height(&self) -> usize {
        self.slots.len()
    }

    pub fn available_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_none()).count()
    }

    pub fn is_full(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    pub fn slots(&self) -> &[Option<PlayerId>] {
        &self.slots
    }

    /// Raw slot view with `0` for empty slots.
    pub fn slot_ids(&self) -> Vec<u32> {
        self.slots
            .iter()
            .map(|slot| slot.map_or(0, |id| id.get()))
            .collect()
    }

    pub fn get(&self, row: usize) -> Option<PlayerId> {
        self.slots.get(row).copied().flatten()
    }

    pub fn add_checker(&mut self, player_id: u32) -> bool {
        let Some(player_id) = PlayerId::new(player_id) else {
            return false;
        };

        match self.slots.iter_mut().find(|slot| slot.is_none()) {
            Some(slot) => {
                *slot = Some(player_id);
                true
            }
            None => false,
        }
    }

    pub fn reset(&mut self) {
        self.slots.fill(None);
    }
}
