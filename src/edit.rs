//! Declarative edit-form descriptors.
//!
//! An [`EditForm`] is a pure-data description of a property sheet: an
//! ordered list of named fields with typed values and layout hints. Hosts
//! render it however they like; this module only guarantees field names are
//! unique and required fields are filled.

use std::collections::HashMap;

use thiserror::Error;
use time::{Date, OffsetDateTime};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EditFormError {
    #[error("field {0:?} already exists")]
    DuplicateField(String),
    #[error("no field named {0:?}")]
    UnknownField(String),
    #[error("field {0:?} must not be empty")]
    EmptyField(String),
}

// ---------------------------------------------------------------------------
// EditKind / EditValue
// ---------------------------------------------------------------------------

/// Editor flavor, with per-flavor configuration where one exists.
#[derive(Debug, Clone, PartialEq)]
pub enum EditKind {
    Text,
    Password,
    Integer,
    Double { decimal_places: u8 },
    Date,
    DateTime,
    Switch,
    Combo { items: Vec<String> },
    FileSelect { filter: String },
    DirSelect { prompt: String },
}

/// A field's current value.
#[derive(Debug, Clone, PartialEq)]
pub enum EditValue {
    Text(String),
    Integer(i64),
    Double(f64),
    Switch(bool),
    Date(Date),
    DateTime(OffsetDateTime),
    /// Combo selection; `None` means nothing picked yet.
    Index(Option<usize>),
}

impl EditValue {
    /// Whether the value counts as unfilled for required-field checks.
    fn is_empty(&self) -> bool {
        match self {
            EditValue::Text(text) => text.is_empty(),
            EditValue::Index(index) => index.is_none(),
            _ => false,
        }
    }
}

// ---------------------------------------------------------------------------
// EditField
// ---------------------------------------------------------------------------

/// One row of an edit form.
#[derive(Debug, Clone, PartialEq)]
pub struct EditField {
    name: String,
    label: String,
    kind: EditKind,
    value: EditValue,
    check_empty: bool,
    enabled: bool,
    half_width: bool,
}

impl EditField {
    fn new(
        name: impl Into<String>,
        label: impl Into<String>,
        kind: EditKind,
        value: EditValue,
        half_width: bool,
    ) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            kind,
            value,
            check_empty: false,
            enabled: true,
            half_width,
        }
    }

    pub fn text(name: impl Into<String>, label: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(name, label, EditKind::Text, EditValue::Text(value.into()), false)
    }

    pub fn password(
        name: impl Into<String>,
        label: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self::new(
            name,
            label,
            EditKind::Password,
            EditValue::Text(value.into()),
            false,
        )
    }

    pub fn integer(name: impl Into<String>, label: impl Into<String>, value: i64) -> Self {
        Self::new(name, label, EditKind::Integer, EditValue::Integer(value), true)
    }

    pub fn double(name: impl Into<String>, label: impl Into<String>, value: f64) -> Self {
        Self::new(
            name,
            label,
            EditKind::Double { decimal_places: 2 },
            EditValue::Double(value),
            true,
        )
    }

    pub fn date(name: impl Into<String>, label: impl Into<String>, value: Date) -> Self {
        Self::new(name, label, EditKind::Date, EditValue::Date(value), true)
    }

    pub fn date_time(
        name: impl Into<String>,
        label: impl Into<String>,
        value: OffsetDateTime,
    ) -> Self {
        Self::new(name, label, EditKind::DateTime, EditValue::DateTime(value), false)
    }

    pub fn switch(name: impl Into<String>, label: impl Into<String>, value: bool) -> Self {
        Self::new(name, label, EditKind::Switch, EditValue::Switch(value), true)
    }

    pub fn combo<I, S>(
        name: impl Into<String>,
        label: impl Into<String>,
        items: I,
        selected: Option<usize>,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(
            name,
            label,
            EditKind::Combo {
                items: items.into_iter().map(Into::into).collect(),
            },
            EditValue::Index(selected),
            false,
        )
    }

    pub fn file_select(
        name: impl Into<String>,
        label: impl Into<String>,
        path: impl Into<String>,
        filter: impl Into<String>,
    ) -> Self {
        Self::new(
            name,
            label,
            EditKind::FileSelect {
                filter: filter.into(),
            },
            EditValue::Text(path.into()),
            false,
        )
    }

    pub fn dir_select(
        name: impl Into<String>,
        label: impl Into<String>,
        path: impl Into<String>,
        prompt: impl Into<String>,
    ) -> Self {
        Self::new(
            name,
            label,
            EditKind::DirSelect {
                prompt: prompt.into(),
            },
            EditValue::Text(path.into()),
            false,
        )
    }

    /// Require a value before the form may be accepted (chainable).
    pub fn with_check_empty(mut self) -> Self {
        self.check_empty = true;
        self
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn with_half_width(mut self, half_width: bool) -> Self {
        self.half_width = half_width;
        self
    }

    /// Adjust displayed decimal places; only meaningful for double fields.
    pub fn with_decimal_places(mut self, places: u8) -> Self {
        if let EditKind::Double { decimal_places } = &mut self.kind {
            *decimal_places = places;
        }
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn kind(&self) -> &EditKind {
        &self.kind
    }

    pub fn value(&self) -> &EditValue {
        &self.value
    }

    pub fn set_value(&mut self, value: EditValue) {
        self.value = value;
    }

    pub fn check_empty(&self) -> bool {
        self.check_empty
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn half_width(&self) -> bool {
        self.half_width
    }
}

// ---------------------------------------------------------------------------
// EditForm
// ---------------------------------------------------------------------------

/// Ordered field collection with unique names.
#[derive(Debug, Clone)]
pub struct EditForm {
    title: String,
    fields: Vec<EditField>,
    index: HashMap<String, usize>,
    auto_label_width: bool,
    label_width: u32,
    value_width: u32,
}

impl EditForm {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            fields: Vec::new(),
            index: HashMap::new(),
            auto_label_width: false,
            label_width: 180,
            value_width: 320,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_auto_label_width(&mut self, auto: bool) {
        self.auto_label_width = auto;
    }

    pub fn auto_label_width(&self) -> bool {
        self.auto_label_width
    }

    pub fn set_label_width(&mut self, width: u32) {
        self.label_width = width;
    }

    pub fn label_width(&self) -> u32 {
        self.label_width
    }

    pub fn set_value_width(&mut self, width: u32) {
        self.value_width = width;
    }

    pub fn value_width(&self) -> u32 {
        self.value_width
    }

    /// Append a field. Names must be unique across the form.
    pub fn add(&mut self, field: EditField) -> Result<(), EditFormError> {
        if self.index.contains_key(field.name()) {
            return Err(EditFormError::DuplicateField(field.name().to_owned()));
        }
        self.index.insert(field.name().to_owned(), self.fields.len());
        self.fields.push(field);
        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn field(&self, name: &str) -> Option<&EditField> {
        self.index.get(name).map(|&at| &self.fields[at])
    }

    pub fn field_mut(&mut self, name: &str) -> Option<&mut EditField> {
        let at = *self.index.get(name)?;
        Some(&mut self.fields[at])
    }

    /// Fields in insertion order.
    pub fn fields(&self) -> &[EditField] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Replace a field's value by name.
    pub fn set_value(&mut self, name: &str, value: EditValue) -> Result<(), EditFormError> {
        let field = self
            .field_mut(name)
            .ok_or_else(|| EditFormError::UnknownField(name.to_owned()))?;
        field.set_value(value);
        Ok(())
    }

    /// Check every required field is filled, reporting the first that is not.
    pub fn validate(&self) -> Result<(), EditFormError> {
        for field in &self.fields {
            if field.check_empty() && field.value().is_empty() {
                return Err(EditFormError::EmptyField(field.name().to_owned()));
            }
        }
        Ok(())
    }
}

impl Default for EditForm {
    fn default() -> Self {
        Self::new("Edit")
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use time::Month;

    fn sample_form() -> EditForm {
        let mut form = EditForm::new("Connection");
        form.add(EditField::text("host", "Host", "localhost").with_check_empty())
            .unwrap();
        form.add(EditField::integer("port", "Port", 5432)).unwrap();
        form.add(EditField::switch("tls", "Use TLS", true)).unwrap();
        form
    }

    #[test]
    fn fields_keep_insertion_order() {
        let form = sample_form();
        let names: Vec<_> = form.fields().iter().map(EditField::name).collect();
        assert_eq!(names, ["host", "port", "tls"]);
        assert_eq!(form.len(), 3);
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let mut form = sample_form();
        let err = form
            .add(EditField::text("host", "Hostname", ""))
            .unwrap_err();
        assert_eq!(err, EditFormError::DuplicateField("host".into()));
        // The rejected field was not appended.
        assert_eq!(form.len(), 3);
    }

    #[test]
    fn lookup_by_name() {
        let form = sample_form();
        assert!(form.contains("port"));
        assert_eq!(form.field("port").unwrap().value(), &EditValue::Integer(5432));
        assert!(form.field("missing").is_none());
    }

    #[test]
    fn set_value_by_name() {
        let mut form = sample_form();
        form.set_value("port", EditValue::Integer(5433)).unwrap();
        assert_eq!(form.field("port").unwrap().value(), &EditValue::Integer(5433));

        let err = form
            .set_value("missing", EditValue::Integer(0))
            .unwrap_err();
        assert_eq!(err, EditFormError::UnknownField("missing".into()));
    }

    #[test]
    fn validate_flags_the_first_empty_required_field() {
        let mut form = sample_form();
        assert_eq!(form.validate(), Ok(()));

        form.set_value("host", EditValue::Text(String::new())).unwrap();
        assert_eq!(
            form.validate(),
            Err(EditFormError::EmptyField("host".into()))
        );
    }

    #[test]
    fn unselected_combo_counts_as_empty() {
        let mut form = EditForm::new("Prefs");
        form.add(
            EditField::combo("style", "Theme", ["Blue", "Green"], None).with_check_empty(),
        )
        .unwrap();
        assert_eq!(
            form.validate(),
            Err(EditFormError::EmptyField("style".into()))
        );

        form.set_value("style", EditValue::Index(Some(1))).unwrap();
        assert_eq!(form.validate(), Ok(()));
    }

    #[test]
    fn constructor_defaults_match_field_flavors() {
        assert!(!EditField::text("a", "A", "").half_width());
        assert!(EditField::integer("b", "B", 0).half_width());
        assert!(EditField::double("c", "C", 0.5).half_width());
        assert!(!EditField::date_time("d", "D", OffsetDateTime::UNIX_EPOCH).half_width());
        assert!(EditField::switch("e", "E", false).half_width());
        assert!(EditField::text("f", "F", "").enabled());
    }

    #[test]
    fn double_decimal_places_adjustable() {
        let field = EditField::double("ratio", "Ratio", 0.125).with_decimal_places(3);
        assert_eq!(field.kind(), &EditKind::Double { decimal_places: 3 });
    }

    #[test]
    fn date_fields_hold_calendar_values() {
        let birthday = Date::from_calendar_date(1991, Month::July, 16).unwrap();
        let field = EditField::date("born", "Birthday", birthday);
        assert_eq!(field.value(), &EditValue::Date(birthday));
    }

    #[test]
    fn file_and_dir_kinds_carry_their_hints() {
        let file = EditField::file_select("cfg", "Config file", "", "*.toml");
        assert_eq!(
            file.kind(),
            &EditKind::FileSelect {
                filter: "*.toml".into()
            }
        );
        let dir = EditField::dir_select("out", "Output", "/tmp", "Pick a folder");
        assert_eq!(
            dir.kind(),
            &EditKind::DirSelect {
                prompt: "Pick a folder".into()
            }
        );
    }

    #[test]
    fn form_width_defaults() {
        let form = EditForm::new("Edit");
        assert_eq!(form.label_width(), 180);
        assert_eq!(form.value_width(), 320);
        assert!(!form.auto_label_width());
    }
}
