//! Per-depth open-subtree flags for tree connector rendering

/// Depth-indexed flags recording whether an ancestor at each depth still has
/// pending siblings. Threaded mutably through the whole recursion: the walker
/// sets a depth's flag before descending into a directory and clears it when
/// that directory's children finish, so a later sibling at a shallower depth
/// never sees a stale open flag.
#[derive(Debug, Default)]
pub struct DepthState {
    open: Vec<bool>,
}

impl DepthState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark whether the ancestor at `depth` still has siblings to deliver.
    pub fn set_open(&mut self, depth: usize, open: bool) {
        if self.open.len() <= depth {
            self.open.resize(depth + 1, false);
        }
        self.open[depth] = open;
    }

    /// Whether a connector at `depth` should render a continuation bar.
    pub fn is_open(&self, depth: usize) -> bool {
        self.open.get(depth).copied().unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_depth_is_closed() {
        let state = DepthState::new();
        assert!(!state.is_open(0));
        assert!(!state.is_open(7));
    }

    #[test]
    fn test_set_and_clear() {
        let mut state = DepthState::new();
        state.set_open(2, true);
        assert!(state.is_open(2));
        assert!(!state.is_open(0));
        assert!(!state.is_open(1));

        state.set_open(2, false);
        assert!(!state.is_open(2));
    }

    #[test]
    fn test_slot_reuse_across_siblings() {
        let mut state = DepthState::new();
        // First subtree at depth 1 opens and closes.
        state.set_open(1, true);
        state.set_open(1, false);
        // A sibling subtree reuses the slot.
        state.set_open(1, true);
        assert!(state.is_open(1));
    }
}
