use std::fmt;

/// CSS properties that affect text rendering and may be copied onto a label.
const TEXT_PROPERTIES: &[&str] = &[
    "color",
    "direction",
    "font",
    "font-family",
    "font-size",
    "font-style",
    "font-variant",
    "font-weight",
    "letter-spacing",
    "line-height",
    "text-align",
    "text-decoration",
    "text-indent",
    "text-shadow",
    "text-transform",
    "white-space",
    "word-spacing",
];

/// Inline style declarations in source order.
///
/// Property names are stored lowercase. A later declaration of the same
/// property replaces the earlier value but keeps its position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleMap {
    decls: Vec<(String, String)>,
}

impl StyleMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse an inline style attribute value such as `color: red; width: 10px`.
    ///
    /// Declarations without a colon or with an empty name or value are skipped.
    pub fn parse(css: &str) -> Self {
        let mut map = Self::new();
        for decl in css.split(';') {
            let Some((name, value)) = decl.split_once(':') else {
                continue;
            };
            let name = name.trim();
            let value = value.trim();
            if name.is_empty() || value.is_empty() {
                continue;
            }
            map.set(name, value);
        }
        map
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        let name = name.to_ascii_lowercase();
        self.decls
            .iter()
            .find(|(k, _)| *k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        let name = name.to_ascii_lowercase();
        let value = value.into();
        match self.decls.iter_mut().find(|(k, _)| *k == name) {
            Some(slot) => slot.1 = value,
            None => self.decls.push((name, value)),
        }
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        let name = name.to_ascii_lowercase();
        let pos = self.decls.iter().position(|(k, _)| *k == name)?;
        Some(self.decls.remove(pos).1)
    }

    pub fn is_empty(&self) -> bool {
        self.decls.is_empty()
    }

    pub fn len(&self) -> usize {
        self.decls.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.decls.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// The subset of declarations that affect text rendering.
    pub fn text_only(&self) -> StyleMap {
        StyleMap {
            decls: self
                .decls
                .iter()
                .filter(|(k, _)| TEXT_PROPERTIES.contains(&k.as_str()))
                .cloned()
                .collect(),
        }
    }
}

impl fmt::Display for StyleMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (k, v)) in self.decls.iter().enumerate() {
            if i > 0 {
                f.write_str(";")?;
            }
            write!(f, "{k}:{v}")?;
        }
        Ok(())
    }
}

/// Extract the text-related declarations of an inline style string.
pub fn text_style(css: &str) -> String {
    StyleMap::parse(css).text_only().to_string()
}
