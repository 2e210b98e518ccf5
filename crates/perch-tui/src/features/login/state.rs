//! Login screen state.

use enum_map::{Enum, EnumMap};

/// Form fields on the login screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Enum)]
pub enum LoginField {
    Email,
    Password,
}

/// Per-field UI flags, kept in one map instead of a boolean per field.
///
/// `touched` drives only a cosmetic color change; it never gates
/// validation. Neither flag is reset until the screen unmounts.
#[derive(Debug, Default, Clone, Copy)]
pub struct FieldFlags {
    pub focused: bool,
    pub touched: bool,
}

/// Login screen state.
#[derive(Debug)]
pub struct LoginScreen {
    pub email: String,
    pub password: String,
    /// Whether password glyphs are masked. Defaults to hidden.
    pub password_hidden: bool,
    /// Focus/touched flags keyed by field.
    pub fields: EnumMap<LoginField, FieldFlags>,
    /// Message shown under the form (validation or sign-in failure).
    pub error: Option<String>,
    /// A sign-in is in flight; submits are ignored until it resolves.
    pub submitting: bool,
}

impl LoginScreen {
    pub fn new() -> Self {
        let mut screen = Self {
            email: String::new(),
            password: String::new(),
            password_hidden: true,
            fields: EnumMap::default(),
            error: None,
            submitting: false,
        };
        screen.focus_field(LoginField::Email);
        screen
    }

    /// The field currently holding input focus, if any.
    pub fn focused_field(&self) -> Option<LoginField> {
        self.fields
            .iter()
            .find_map(|(field, flags)| flags.focused.then_some(field))
    }

    pub fn value(&self, field: LoginField) -> &str {
        match field {
            LoginField::Email => &self.email,
            LoginField::Password => &self.password,
        }
    }

    /// Moves focus to `field`, blurring the others.
    pub fn focus_field(&mut self, field: LoginField) {
        for (other, flags) in &mut self.fields {
            flags.focused = other == field;
        }
    }

    pub fn blur_field(&mut self, field: LoginField) {
        self.fields[field].focused = false;
    }

    pub fn blur_all(&mut self) {
        for (_, flags) in &mut self.fields {
            flags.focused = false;
        }
    }

    /// Cycles focus to the next field (or the first when none is focused).
    pub fn focus_next(&mut self) {
        let next = match self.focused_field() {
            Some(LoginField::Email) => LoginField::Password,
            Some(LoginField::Password) | None => LoginField::Email,
        };
        self.focus_field(next);
    }

    pub fn focus_prev(&mut self) {
        // Two fields: previous and next coincide
        self.focus_next();
    }

    /// Appends a character to the focused field and marks it touched.
    pub fn insert_char(&mut self, c: char) {
        let Some(field) = self.focused_field() else {
            return;
        };
        match field {
            LoginField::Email => self.email.push(c),
            LoginField::Password => self.password.push(c),
        }
        self.fields[field].touched = true;
    }

    /// Deletes the last character of the focused field and marks it touched.
    pub fn delete_back(&mut self) {
        let Some(field) = self.focused_field() else {
            return;
        };
        match field {
            LoginField::Email => self.email.pop(),
            LoginField::Password => self.password.pop(),
        };
        self.fields[field].touched = true;
    }

    /// Flips password masking; no other state changes.
    pub fn toggle_password_visibility(&mut self) {
        self.password_hidden = !self.password_hidden;
    }

    /// Empties both credential fields (flags are left alone).
    pub fn clear_fields(&mut self) {
        self.email.clear();
        self.password.clear();
    }
}

impl Default for LoginScreen {
    fn default() -> Self {
        Self::new()
    }
}
