//! The fixed set of toy attributes collected by the prediction form.

use serde::Serialize;
use std::fmt;

/// Name of one form field. The set is closed: every `FormFields` carries
/// exactly these seven keys, in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldKey {
    Category,
    Brand,
    AgeGroup,
    Size,
    Weight,
    Material,
    Condition,
}

/// HTML input type used to edit a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Number,
}

impl InputKind {
    /// Value for the `type` attribute of an `<input>`.
    pub fn html_type(&self) -> &'static str {
        match self {
            InputKind::Text => "text",
            InputKind::Number => "number",
        }
    }
}

impl FieldKey {
    /// All keys in display order.
    pub const ALL: [FieldKey; 7] = [
        FieldKey::Category,
        FieldKey::Brand,
        FieldKey::AgeGroup,
        FieldKey::Size,
        FieldKey::Weight,
        FieldKey::Material,
        FieldKey::Condition,
    ];

    /// Key as sent on the wire and used for the input `name` attribute.
    pub fn name(&self) -> &'static str {
        match self {
            FieldKey::Category => "Category",
            FieldKey::Brand => "Brand",
            FieldKey::AgeGroup => "AgeGroup",
            FieldKey::Size => "Size",
            FieldKey::Weight => "Weight",
            FieldKey::Material => "Material",
            FieldKey::Condition => "Condition",
        }
    }

    /// `Size` and `Weight` are edited as numbers, everything else as text.
    /// The value is still carried as a string either way.
    pub fn input_kind(&self) -> InputKind {
        match self {
            FieldKey::Size | FieldKey::Weight => InputKind::Number,
            _ => InputKind::Text,
        }
    }

    /// Human readable label, e.g. `Age Group`.
    pub fn label(&self) -> String {
        let name = self.name();
        let mut label = String::with_capacity(name.len() + 2);
        for (i, ch) in name.chars().enumerate() {
            if i > 0 && ch.is_ascii_uppercase() {
                label.push(' ');
            }
            label.push(ch);
        }
        label
    }

    /// Placeholder shown in an empty input, e.g. `AGE GROUP`.
    pub fn placeholder(&self) -> String {
        self.label().to_uppercase()
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Editable record of toy attributes submitted for prediction.
///
/// Serializes to a JSON object with exactly the seven wire keys, every value
/// a string. Numeric-looking fields are never coerced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct FormFields {
    pub category: String,
    pub brand: String,
    pub age_group: String,
    pub size: String,
    pub weight: String,
    pub material: String,
    pub condition: String,
}

impl FormFields {
    pub fn get(&self, key: FieldKey) -> &str {
        match key {
            FieldKey::Category => &self.category,
            FieldKey::Brand => &self.brand,
            FieldKey::AgeGroup => &self.age_group,
            FieldKey::Size => &self.size,
            FieldKey::Weight => &self.weight,
            FieldKey::Material => &self.material,
            FieldKey::Condition => &self.condition,
        }
    }

    /// Replaces the value of `key`. No validation: empty and non-numeric
    /// values are accepted for every field.
    pub fn set(&mut self, key: FieldKey, value: impl Into<String>) {
        let slot = match key {
            FieldKey::Category => &mut self.category,
            FieldKey::Brand => &mut self.brand,
            FieldKey::AgeGroup => &mut self.age_group,
            FieldKey::Size => &mut self.size,
            FieldKey::Weight => &mut self.weight,
            FieldKey::Material => &mut self.material,
            FieldKey::Condition => &mut self.condition,
        };
        *slot = value.into();
    }

    /// `(key, value)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (FieldKey, &str)> + '_ {
        FieldKey::ALL.into_iter().map(move |key| (key, self.get(key)))
    }
}
