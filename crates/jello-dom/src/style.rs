//! Inline Style Declarations (element.style)
//!
//! Ordered `property: value` pairs. Setting an existing property replaces
//! its value in place, so serialization order is first-set order.

/// Inline CSS declaration block of one element
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleDeclaration {
    declarations: Vec<(String, String)>,
}

impl StyleDeclaration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `cssText` (`a: b; c: d`). Malformed entries are skipped.
    pub fn from_css_text(text: &str) -> Self {
        let mut style = Self::new();
        for entry in text.split(';') {
            if let Some((name, value)) = entry.split_once(':') {
                let name = name.trim();
                let value = value.trim();
                if !name.is_empty() && !value.is_empty() {
                    style.set_property(name, value);
                }
            }
        }
        style
    }

    /// Set a property. Names are ASCII-lowercased; an empty value removes it.
    pub fn set_property(&mut self, name: &str, value: impl Into<String>) {
        let name = name.to_ascii_lowercase();
        let value = value.into();
        if value.is_empty() {
            self.declarations.retain(|(n, _)| *n != name);
            return;
        }
        match self.declarations.iter_mut().find(|(n, _)| *n == name) {
            Some((_, slot)) => *slot = value,
            None => self.declarations.push((name, value)),
        }
    }

    /// Get a property value
    pub fn get_property_value(&self, name: &str) -> Option<&str> {
        self.declarations
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.declarations.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Serialized form used for the `style` attribute
    pub fn css_text(&self) -> String {
        let mut out = String::new();
        for (name, value) in &self.declarations {
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(name);
            out.push_str(": ");
            out.push_str(value);
            out.push(';');
        }
        out
    }
}

impl std::fmt::Display for StyleDeclaration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.css_text())
    }
}
