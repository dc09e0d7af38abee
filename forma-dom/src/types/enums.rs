#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Size {
    /// Size to content.
    #[default]
    Auto,
    Fixed(u16),
    /// Take all space offered by the parent.
    Fill,
}

/// Main axis of a stack container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    Row,
    #[default]
    Column,
}
