use serde::Serialize;

/// One text input owned by the screen that renders it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormField {
    name: &'static str,
    value: String,
}

impl FormField {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            value: String::new(),
        }
    }

    pub fn set(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn trimmed(&self) -> &str {
        self.value.trim()
    }

    pub fn is_blank(&self) -> bool {
        self.value.trim().is_empty()
    }
}
