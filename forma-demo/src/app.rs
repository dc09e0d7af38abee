//! The demo page: a counter, input stories, a controlled input and a users table.

use std::cell::RefCell;
use std::rc::Rc;

use forma::prelude::*;
use forma_dom::{Edges, Element, Event, Key, Role, Style};
use log::{debug, info};

/// Longest text the controlled input's host accepts.
pub const MIRROR_LIMIT: usize = 24;

pub const COUNTER_ID: &str = "counter";
pub const MIRROR_ID: &str = "controlled-mirror";
pub const SELECTION_ID: &str = "selection-status";

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: u32,
    pub name: String,
    pub email: Option<String>,
    pub role: String,
}

impl User {
    fn new(id: u32, name: &str, email: Option<&str>, role: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            email: email.map(String::from),
            role: role.to_string(),
        }
    }
}

impl TableRow for User {
    fn field(&self, key: &str) -> Option<CellValue> {
        match key {
            "id" => Some(self.id.into()),
            "name" => Some(self.name.as_str().into()),
            "email" => self.email.as_deref().map(CellValue::from),
            "role" => Some(self.role.as_str().into()),
            _ => None,
        }
    }
}

pub fn sample_users() -> Vec<User> {
    vec![
        User::new(3, "Carla", Some("carla@example.com"), "Admin"),
        User::new(1, "ann", Some("ann@example.com"), "Editor"),
        User::new(12, "Bob", None, "Viewer"),
        User::new(2, "Dmitri", Some("dmitri@example.com"), "Editor"),
        User::new(7, "Éva", Some("eva@example.com"), "Viewer"),
    ]
}

fn user_columns() -> Vec<Column> {
    vec![
        Column::new("id", "ID").sortable().align(Alignment::Right),
        Column::new("name", "Name").sortable(),
        Column::new("email", "Email"),
        Column::new("role", "Role"),
    ]
}

/// The four input stories: default, error, disabled and large.
fn stories(theme: &Theme) -> Vec<InputField> {
    let base = || {
        InputField::uncontrolled()
            .label("Username")
            .placeholder("Enter username")
            .helper_text("Helper message here")
            .theme(theme.clone())
    };
    vec![
        base(),
        base().invalid(true).error_message("This field is required"),
        base().disabled(true),
        base().size(InputSize::Lg).placeholder("Large input"),
    ]
}

pub struct DemoApp {
    theme: Theme,
    count: u32,
    stories: Vec<InputField>,
    controlled: InputField,
    proposed: Rc<RefCell<Option<String>>>,
    users: DataTable<User>,
    selected: Rc<RefCell<Vec<String>>>,
    quit: bool,
}

impl DemoApp {
    pub fn new() -> Self {
        let theme = Theme::default();

        let proposed: Rc<RefCell<Option<String>>> = Rc::default();
        let sink = Rc::clone(&proposed);
        let controlled = InputField::controlled("")
            .label("Controlled")
            .placeholder("Mirrored below")
            .helper_text(format!("The host keeps at most {MIRROR_LIMIT} characters"))
            .variant(Variant::Filled)
            .theme(theme.clone())
            .on_change(move |event: &ChangeEvent| {
                *sink.borrow_mut() = Some(event.value.clone());
            });

        let selected: Rc<RefCell<Vec<String>>> = Rc::default();
        let sink = Rc::clone(&selected);
        let users = DataTable::new(user_columns(), sample_users())
            .selectable(true)
            .theme(theme.clone())
            .on_row_select(move |rows: &[&User]| {
                *sink.borrow_mut() = rows.iter().map(|u| u.name.clone()).collect();
            });

        Self {
            stories: stories(&theme),
            theme,
            count: 0,
            controlled,
            proposed,
            users,
            selected,
            quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn users(&self) -> &DataTable<User> {
        &self.users
    }

    pub fn controlled(&self) -> &InputField {
        &self.controlled
    }

    /// Text of the controlled-input status line.
    pub fn mirror_text(&self) -> String {
        match self.controlled.value() {
            "" => "Controlled value: (empty)".to_string(),
            value => format!("Controlled value: {value}"),
        }
    }

    /// Text of the selection status line.
    pub fn selection_text(&self) -> String {
        let selected = self.selected.borrow();
        if selected.is_empty() {
            "Selected: none".to_string()
        } else {
            format!("Selected ({}): {}", selected.len(), selected.join(", "))
        }
    }

    /// Route one event: components first, then page-level keys.
    pub fn handle_event(&mut self, event: &Event) {
        if self.dispatch_to_components(event).is_handled() {
            self.sync_controlled();
            return;
        }

        match event {
            Event::Click {
                target: Some(target),
                ..
            } if target == COUNTER_ID => self.increment(),
            Event::Key {
                target,
                key,
                modifiers,
            } => match key {
                k if k.activates()
                    && modifiers.none()
                    && target.as_deref() == Some(COUNTER_ID) =>
                {
                    self.increment()
                }
                Key::Char('l') if modifiers.ctrl => {
                    let loading = !self.users.is_loading();
                    info!("users table loading: {loading}");
                    self.users.set_loading(loading);
                }
                Key::Char('c') if modifiers.ctrl => self.quit = true,
                Key::Escape => self.quit = true,
                _ => {}
            },
            _ => {}
        }
    }

    fn dispatch_to_components(&mut self, event: &Event) -> EventResult {
        let result = self.users.handle_event(event);
        if result.is_handled() {
            return result;
        }
        let result = self.controlled.handle_event(event);
        if result.is_handled() {
            return result;
        }
        for field in &mut self.stories {
            let result = field.handle_event(event);
            if result.is_handled() {
                return result;
            }
        }
        EventResult::Ignored
    }

    /// Acknowledge the controlled input's latest proposal, trimmed to the limit.
    fn sync_controlled(&mut self) {
        let Some(proposed) = self.proposed.borrow_mut().take() else {
            return;
        };
        let accepted: String = proposed.chars().take(MIRROR_LIMIT).collect();
        if accepted != proposed {
            debug!("controlled input trimmed to {MIRROR_LIMIT} characters");
        }
        // always controlled, so this cannot fail
        let _ = self.controlled.set_value(accepted);
    }

    fn increment(&mut self) {
        self.count += 1;
        debug!("count is {}", self.count);
    }

    pub fn element(&self) -> Element {
        let theme = &self.theme;
        let muted = Style::new().foreground(theme.muted);

        let counter = Element::text(format!(" count is {} ", self.count))
            .id(COUNTER_ID)
            .role(Role::Button)
            .focusable(true)
            .clickable(true)
            .style(Style::new().background(theme.primary).foreground(theme.background).bold())
            .style_focused(Style::new().background(theme.primary.lighten(0.1)).underline());

        let story_rows = self
            .stories
            .chunks(2)
            .map(|pair| Element::row().gap(4).children(pair.iter().map(InputField::element)));

        Element::col()
            .id("page")
            .padding(Edges::new(1, 2, 0, 2))
            .gap(1)
            .style(Style::new().background(theme.background).foreground(theme.text))
            .child(
                Element::text("forma demo")
                    .role(Role::Heading)
                    .style(Style::new().foreground(theme.primary).bold()),
            )
            .child(
                Element::row()
                    .gap(2)
                    .child(counter)
                    .child(
                        Element::text("Tab/Shift+Tab focus · Ctrl+L loading · Esc quit")
                            .style(muted.clone()),
                    ),
            )
            .children(story_rows)
            .child(
                Element::row()
                    .gap(4)
                    .child(self.controlled.element())
                    .child(
                        Element::text(self.mirror_text())
                            .id(MIRROR_ID)
                            .role(Role::Status)
                            .style(muted.clone()),
                    ),
            )
            .child(self.users.element())
            .child(
                Element::text(self.selection_text())
                    .id(SELECTION_ID)
                    .role(Role::Status)
                    .style(muted),
            )
    }
}

impl Default for DemoApp {
    fn default() -> Self {
        Self::new()
    }
}
