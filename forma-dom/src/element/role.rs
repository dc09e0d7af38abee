/// Semantic role of an element, kept alongside the visual tree so hosts and
/// tests can find headers, checkboxes and text boxes without parsing ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Role {
    #[default]
    Generic,
    Heading,
    Button,
    Table,
    Row,
    ColumnHeader,
    Cell,
    Checkbox {
        checked: bool,
    },
    TextBox,
    Label,
    Status,
}

impl Role {
    /// Compare roles ignoring per-instance state such as `checked`.
    pub fn matches(&self, other: &Role) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }
}
