//! Form field definitions and validation
//!
//! Checkout and contact forms are plain lists of fields; submitted entries keep
//! the declared order.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Tel,
    TextArea,
}

impl FieldKind {
    /// `type` attribute for `<input>` (textareas ignore it)
    pub fn input_type(&self) -> &'static str {
        match self {
            FieldKind::Text | FieldKind::TextArea => "text",
            FieldKind::Email => "email",
            FieldKind::Tel => "tel",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub value: String,
}

impl FormField {
    pub fn new(key: &'static str, label: &'static str, kind: FieldKind, required: bool) -> Self {
        FormField {
            key,
            label,
            kind,
            required,
            value: String::new(),
        }
    }

    pub fn is_valid(&self) -> bool {
        let value = self.value.trim();
        if value.is_empty() {
            return !self.required;
        }
        match self.kind {
            FieldKind::Email => looks_like_email(value),
            _ => true,
        }
    }
}

// local@domain with something on both sides
fn looks_like_email(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && !domain.is_empty() && !domain.contains('@') && !value.contains(' ')
        }
        None => false,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormFields {
    fields: Vec<FormField>,
}

impl FormFields {
    pub fn new(fields: Vec<FormField>) -> Self {
        FormFields { fields }
    }

    /// Customer details sent along with the order
    pub fn checkout() -> Self {
        FormFields::new(vec![
            FormField::new("name", "Full Name", FieldKind::Text, true),
            FormField::new("phone", "Phone", FieldKind::Tel, true),
            FormField::new("address", "Address", FieldKind::TextArea, true),
            FormField::new("notes", "Device / Notes", FieldKind::TextArea, false),
        ])
    }

    pub fn contact() -> Self {
        FormFields::new(vec![
            FormField::new("name", "Name", FieldKind::Text, true),
            FormField::new("email", "Email", FieldKind::Email, true),
            FormField::new("phone", "Phone", FieldKind::Tel, false),
            FormField::new("message", "Message", FieldKind::TextArea, true),
        ])
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    pub fn value(&self, key: &str) -> &str {
        self.fields
            .iter()
            .find(|f| f.key == key)
            .map(|f| f.value.as_str())
            .unwrap_or_default()
    }

    /// Unknown keys are ignored
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        if let Some(field) = self.fields.iter_mut().find(|f| f.key == key) {
            field.value = value.into();
        }
    }

    pub fn invalid_keys(&self) -> Vec<&'static str> {
        self.fields
            .iter()
            .filter(|f| !f.is_valid())
            .map(|f| f.key)
            .collect()
    }

    pub fn is_valid(&self) -> bool {
        self.fields.iter().all(FormField::is_valid)
    }

    pub fn is_field_valid(&self, key: &str) -> bool {
        self.fields
            .iter()
            .find(|f| f.key == key)
            .map_or(true, FormField::is_valid)
    }

    /// Clears every value, keeping the field definitions
    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.value.clear();
        }
    }

    pub fn entries(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.fields.iter().map(|f| (f.key, f.value.as_str()))
    }

    /// `application/x-www-form-urlencoded` body
    pub fn to_urlencoded(&self) -> String {
        self.entries()
            .map(|(key, value)| format!("{}={}", urlencoding::encode(key), urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&")
    }
}
