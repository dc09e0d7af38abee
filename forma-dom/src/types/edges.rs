/// Per-side spacing in cells, used for padding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Edges {
    pub top: u16,
    pub right: u16,
    pub bottom: u16,
    pub left: u16,
}

impl Edges {
    pub const fn new(top: u16, right: u16, bottom: u16, left: u16) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    pub const fn all(value: u16) -> Self {
        Self::new(value, value, value, value)
    }

    /// Left and right only.
    pub const fn horizontal(value: u16) -> Self {
        Self::new(0, value, 0, value)
    }

    pub const fn horizontal_sum(&self) -> u16 {
        self.left + self.right
    }

    pub const fn vertical_sum(&self) -> u16 {
        self.top + self.bottom
    }

    /// Every side widened by `n`.
    pub const fn grow(self, n: u16) -> Self {
        Self::new(self.top + n, self.right + n, self.bottom + n, self.left + n)
    }
}
