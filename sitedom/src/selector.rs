//! A small subset of CSS selectors: one compound selector made of a tag,
//! `#id`, `.class` and `[attr]` / `[attr="value"]` parts.
//!
//! Combinators and pseudo-classes are not supported. Scoping is done by the
//! caller through [`Document::query_all`](crate::Document::query_all).

use std::fmt;

/// One simple selector inside a compound selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Simple {
    Tag(String),
    Id(String),
    Class(String),
    Attr { name: String, value: Option<String> },
}

/// A compound selector. Matches when every part matches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selector {
    parts: Vec<Simple>,
}

impl Selector {
    pub fn tag(name: impl Into<String>) -> Self {
        Self::default().and_tag(name)
    }

    pub fn id(id: impl Into<String>) -> Self {
        Self::default().and_id(id)
    }

    pub fn class(class: impl Into<String>) -> Self {
        Self::default().and_class(class)
    }

    /// `[name]`
    pub fn attr(name: impl Into<String>) -> Self {
        Self::default().and_attr(name)
    }

    /// `[name="value"]`
    pub fn attr_eq(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::default().and_attr_eq(name, value)
    }

    pub fn and_tag(mut self, name: impl Into<String>) -> Self {
        self.parts.push(Simple::Tag(name.into()));
        self
    }

    pub fn and_id(mut self, id: impl Into<String>) -> Self {
        self.parts.push(Simple::Id(id.into()));
        self
    }

    pub fn and_class(mut self, class: impl Into<String>) -> Self {
        self.parts.push(Simple::Class(class.into()));
        self
    }

    pub fn and_attr(mut self, name: impl Into<String>) -> Self {
        self.parts.push(Simple::Attr {
            name: name.into(),
            value: None,
        });
        self
    }

    pub fn and_attr_eq(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.parts.push(Simple::Attr {
            name: name.into(),
            value: Some(value.into()),
        });
        self
    }

    pub fn parts(&self) -> &[Simple] {
        &self.parts
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for part in &self.parts {
            match part {
                Simple::Tag(t) => write!(f, "{t}")?,
                Simple::Id(id) => write!(f, "#{id}")?,
                Simple::Class(c) => write!(f, ".{c}")?,
                Simple::Attr { name, value: None } => write!(f, "[{name}]")?,
                Simple::Attr {
                    name,
                    value: Some(v),
                } => write!(f, "[{name}=\"{v}\"]")?,
            }
        }
        Ok(())
    }
}
