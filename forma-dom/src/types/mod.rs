mod color;
mod edges;
mod enums;
mod style;

pub use color::{Color, Rgb};
pub use edges::Edges;
pub use enums::{Direction, Size};
pub use style::{Border, Style, TextStyle};
