/// Position in the vocabulary list plus the next auto-advance deadline.
///
/// Only exists alongside a loaded, non-empty list, so `index` is always valid
/// for the `len` it was created with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorState {
    index: usize,
    next_deadline: Option<u64>,
}

impl CursorState {
    /// Start at `seed mod len` with the first deadline one interval after `now`
    pub fn seeded(seed: u64, len: usize, now: u64, interval_ms: Option<u64>) -> Self {
        let index = if len == 0 {
            0
        } else {
            (seed % len as u64) as usize
        };

        Self {
            index,
            next_deadline: interval_ms.map(|interval| now.saturating_add(interval)),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// `None` means no automatic advance is scheduled
    pub fn next_deadline(&self) -> Option<u64> {
        self.next_deadline
    }

    pub fn is_due(&self, now: u64) -> bool {
        matches!(self.next_deadline, Some(deadline) if now >= deadline)
    }

    /// Move to `target`, wrapping anything out of range to 0. Returns true if the index changed.
    pub fn set_index(&mut self, target: usize, len: usize) -> bool {
        let target = if target < len { target } else { 0 };
        if self.index == target {
            return false;
        }
        self.index = target;
        true
    }

    pub fn advance(&mut self, len: usize) -> bool {
        self.set_index(self.index.saturating_add(1), len)
    }

    /// Schedule the next advance. Leaves the deadline alone when auto-switch is off.
    pub fn reschedule(&mut self, now: u64, interval_ms: Option<u64>) {
        if let Some(interval) = interval_ms {
            self.next_deadline = Some(now.saturating_add(interval));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_picks_index_modulo_length() {
        let cursor = CursorState::seeded(1_000_003, 10, 50, Some(20_000));
        assert_eq!(cursor.index(), 3);
        assert_eq!(cursor.next_deadline(), Some(20_050));
    }

    #[test]
    fn no_interval_means_no_deadline() {
        let cursor = CursorState::seeded(7, 3, 50, None);
        assert_eq!(cursor.next_deadline(), None);
        assert!(!cursor.is_due(u64::MAX));
    }

    #[test]
    fn out_of_range_target_wraps_to_zero() {
        let mut cursor = CursorState::seeded(2, 3, 0, None);
        assert!(cursor.set_index(99, 3));
        assert_eq!(cursor.index(), 0);
        assert!(!cursor.set_index(3, 3));
    }

    #[test]
    fn advance_wraps_past_the_end() {
        let mut cursor = CursorState::seeded(2, 3, 0, None);
        assert!(cursor.advance(3));
        assert_eq!(cursor.index(), 0);
    }

    #[test]
    fn single_entry_never_changes() {
        let mut cursor = CursorState::seeded(12345, 1, 0, None);
        assert_eq!(cursor.index(), 0);
        assert!(!cursor.advance(1));
    }

    #[test]
    fn reschedule_keeps_deadline_without_interval() {
        let mut cursor = CursorState::seeded(0, 3, 100, Some(1_000));
        cursor.reschedule(5_000, None);
        assert_eq!(cursor.next_deadline(), Some(1_100));
        cursor.reschedule(5_000, Some(1_000));
        assert_eq!(cursor.next_deadline(), Some(6_000));
    }
}
