//! Registration screen state.

use enum_map::{Enum, EnumMap};

use crate::features::login::FieldFlags;

/// Form fields on the registration screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Enum)]
pub enum RegistrationField {
    DisplayName,
    Email,
    Password,
}

/// Registration screen state. Same shape as the login form plus the
/// display name.
#[derive(Debug)]
pub struct RegistrationScreen {
    pub display_name: String,
    pub email: String,
    pub password: String,
    pub password_hidden: bool,
    pub fields: EnumMap<RegistrationField, FieldFlags>,
    pub error: Option<String>,
    pub submitting: bool,
}

impl RegistrationScreen {
    pub fn new() -> Self {
        let mut screen = Self {
            display_name: String::new(),
            email: String::new(),
            password: String::new(),
            password_hidden: true,
            fields: EnumMap::default(),
            error: None,
            submitting: false,
        };
        screen.focus_field(RegistrationField::DisplayName);
        screen
    }

    pub fn focused_field(&self) -> Option<RegistrationField> {
        self.fields
            .iter()
            .find_map(|(field, flags)| flags.focused.then_some(field))
    }

    pub fn focus_field(&mut self, field: RegistrationField) {
        for (other, flags) in &mut self.fields {
            flags.focused = other == field;
        }
    }

    pub fn blur_all(&mut self) {
        for (_, flags) in &mut self.fields {
            flags.focused = false;
        }
    }

    pub fn focus_next(&mut self) {
        let next = match self.focused_field() {
            Some(RegistrationField::DisplayName) => RegistrationField::Email,
            Some(RegistrationField::Email) => RegistrationField::Password,
            Some(RegistrationField::Password) | None => RegistrationField::DisplayName,
        };
        self.focus_field(next);
    }

    pub fn focus_prev(&mut self) {
        let prev = match self.focused_field() {
            Some(RegistrationField::DisplayName) | None => RegistrationField::Password,
            Some(RegistrationField::Email) => RegistrationField::DisplayName,
            Some(RegistrationField::Password) => RegistrationField::Email,
        };
        self.focus_field(prev);
    }

    fn value_mut(&mut self, field: RegistrationField) -> &mut String {
        match field {
            RegistrationField::DisplayName => &mut self.display_name,
            RegistrationField::Email => &mut self.email,
            RegistrationField::Password => &mut self.password,
        }
    }

    pub fn insert_char(&mut self, c: char) {
        let Some(field) = self.focused_field() else {
            return;
        };
        self.value_mut(field).push(c);
        self.fields[field].touched = true;
    }

    pub fn delete_back(&mut self) {
        let Some(field) = self.focused_field() else {
            return;
        };
        self.value_mut(field).pop();
        self.fields[field].touched = true;
    }

    pub fn toggle_password_visibility(&mut self) {
        self.password_hidden = !self.password_hidden;
    }

    /// Empties every input field (flags are left alone).
    pub fn clear_fields(&mut self) {
        self.display_name.clear();
        self.email.clear();
        self.password.clear();
    }
}

impl Default for RegistrationScreen {
    fn default() -> Self {
        Self::new()
    }
}
