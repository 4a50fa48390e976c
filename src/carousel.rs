/// Position within a property's image list. Stepping past either end wraps around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Carousel {
    index: usize,
    len: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn next(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    pub fn previous(&mut self) {
        if self.len > 0 {
            self.index = self.index.checked_sub(1).unwrap_or(self.len - 1);
        }
    }

    /// Jump to `index`; out-of-range positions are ignored
    pub fn go_to(&mut self, index: usize) {
        if index < self.len {
            self.index = index;
        }
    }

    /// The current item of `items`, which must be the list this carousel was built for
    pub fn current<'a, T>(&self, items: &'a [T]) -> Option<&'a T> {
        items.get(self.index)
    }

    /// "2 / 5" style position label
    pub fn label(&self) -> String {
        if self.is_empty() {
            return "0 / 0".to_string();
        }
        format!("{} / {}", self.index + 1, self.len)
    }
}
