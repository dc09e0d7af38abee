//! Terminal substrate for forma widgets.
//!
//! Widgets describe themselves as an [`Element`] tree carrying a semantic
//! [`Role`] and `aria-*` data. This crate lays the tree out as nested
//! stacks, paints it into a [`Buffer`], and turns raw crossterm input into
//! targeted [`Event`]s through [`FocusState`]. [`Terminal`] owns the real
//! screen and repaints only the cells that changed.

pub mod buffer;
pub mod element;
pub mod event;
pub mod focus;
pub mod hit;
pub mod layout;
pub mod render;
pub mod terminal;
pub mod text;
pub mod types;

pub use buffer::{Buffer, Cell};
pub use element::{Content, Element, Role};
pub use event::{Event, Key, Modifiers, MouseButton};
pub use focus::{collect_focusable, FocusState};
pub use hit::{hit_test, hit_test_any, hit_test_focusable};
pub use layout::{LayoutResult, Rect};
pub use terminal::Terminal;
pub use types::{Border, Color, Direction, Edges, Rgb, Size, Style, TextStyle};
