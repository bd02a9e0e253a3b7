/// Generate an opaque dish id (UUID v4, simple form)
pub fn dish_id() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}

/// Timestamp-derived ids that never repeat within one owner.
///
/// The id is the creation time in Unix millis; when two records land in the
/// same millisecond (or the clock steps back) the id is bumped to one past
/// the last issued value.
#[derive(Debug, Clone, Default)]
pub struct MonotonicIds {
    last: Option<i64>,
}

impl MonotonicIds {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the next id for a record created at `at_millis`
    ///
    /// Returns `None` once the id space is used up; nothing is recorded then.
    pub fn next(&mut self, at_millis: i64) -> Option<i64> {
        let id = match self.last {
            Some(last) if at_millis <= last => last.checked_add(1)?,
            _ => at_millis,
        };
        self.last = Some(id);
        Some(id)
    }

    /// Make sure ids already in use are never issued again
    pub fn observe(&mut self, existing: i64) {
        if self.last.is_none_or(|last| existing > last) {
            self.last = Some(existing);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dish_id_unique() {
        let a = dish_id();
        let b = dish_id();
        assert_ne!(a, b);
        assert_eq!(a.len(), 32);
    }

    #[test]
    fn test_monotonic_ids_follow_clock() {
        let mut ids = MonotonicIds::new();
        assert_eq!(ids.next(1000), Some(1000));
        assert_eq!(ids.next(2000), Some(2000));
    }

    #[test]
    fn test_monotonic_ids_bump_on_same_millis() {
        let mut ids = MonotonicIds::new();
        assert_eq!(ids.next(1000), Some(1000));
        assert_eq!(ids.next(1000), Some(1001));
        // Clock went backwards
        assert_eq!(ids.next(900), Some(1002));
    }

    #[test]
    fn test_observe_skips_existing() {
        let mut ids = MonotonicIds::new();
        ids.observe(5000);
        ids.observe(4000);
        assert_eq!(ids.next(4500), Some(5001));
    }

    #[test]
    fn test_monotonic_ids_exhausted_at_max() {
        let mut ids = MonotonicIds::new();
        ids.observe(i64::MAX);
        assert_eq!(ids.next(1000), None);
        // Still exhausted, the last issued id is unchanged
        assert_eq!(ids.next(i64::MAX), None);
    }
}
