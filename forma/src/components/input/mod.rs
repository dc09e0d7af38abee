//! Text input field, controlled or uncontrolled.

mod events;
mod render;
mod state;
mod variant;

pub use state::{ChangeEvent, InputField, InputId, InputMode};
pub use variant::{InputSize, ValidationMessage, Variant};
