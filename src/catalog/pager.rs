/// "Load more" window over a result list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    initial: usize,
    step: usize,
    shown: usize,
}

impl Pager {
    pub fn new(initial: usize, step: usize) -> Self {
        Self { initial, step: step.max(1), shown: initial }
    }

    /// Number of items visible out of `total`
    pub fn visible(&self, total: usize) -> usize {
        self.shown.min(total)
    }

    pub fn has_more(&self, total: usize) -> bool {
        self.shown < total
    }

    /// Reveal another step, capped at `total`. Returns whether anything changed.
    pub fn load_more(&mut self, total: usize) -> bool {
        if !self.has_more(total) {
            return false;
        }
        self.shown = (self.shown + self.step).min(total);
        true
    }

    /// Back to the initial window, e.g. after the filter changes
    pub fn reset(&mut self) {
        self.shown = self.initial;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_window() {
        let pager = Pager::new(4, 4);
        assert_eq!(pager.visible(8), 4);
        assert_eq!(pager.visible(3), 3);
        assert!(pager.has_more(8));
        assert!(!pager.has_more(4));
    }

    #[test]
    fn test_load_more_caps_at_total() {
        let mut pager = Pager::new(8, 4);
        assert!(pager.load_more(10));
        assert_eq!(pager.visible(10), 10);
        assert!(!pager.load_more(10));
    }

    #[test]
    fn test_reset() {
        let mut pager = Pager::new(4, 4);
        pager.load_more(20);
        pager.load_more(20);
        assert_eq!(pager.visible(20), 12);
        pager.reset();
        assert_eq!(pager.visible(20), 4);
    }
}
