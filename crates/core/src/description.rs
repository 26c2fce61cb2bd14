// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The description union.
//!
//! API v3 sends the body as a document tree, API v2 as a wiki markup string,
//! and either may send `null`. The JSON shape decides the variant.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::document::Document;

/// Rich-text body of an issue.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Description {
    #[default]
    Absent,
    /// Structured document tree.
    Document(Document),
    /// Legacy wiki markup string.
    Markup(String),
}

impl Description {
    pub fn is_absent(&self) -> bool {
        matches!(self, Description::Absent)
    }
}

impl From<Document> for Description {
    fn from(doc: Document) -> Self {
        Description::Document(doc)
    }
}

impl From<String> for Description {
    fn from(markup: String) -> Self {
        Description::Markup(markup)
    }
}

impl From<&str> for Description {
    fn from(markup: &str) -> Self {
        Description::Markup(markup.to_string())
    }
}

/// Wire form: a string or an object.
#[derive(Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(untagged)]
enum Repr {
    Markup(String),
    Document(Document),
}

impl<'de> Deserialize<'de> for Description {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Option::<Repr>::deserialize(deserializer)? {
            None => Description::Absent,
            Some(Repr::Markup(markup)) => Description::Markup(markup),
            Some(Repr::Document(doc)) => Description::Document(doc),
        })
    }
}

impl Serialize for Description {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Description::Absent => serializer.serialize_none(),
            Description::Markup(markup) => serializer.serialize_str(markup),
            Description::Document(doc) => doc.serialize(serializer),
        }
    }
}

#[cfg(feature = "schemars")]
impl schemars::JsonSchema for Description {
    fn schema_name() -> String {
        "Description".to_string()
    }

    fn json_schema(gen: &mut schemars::gen::SchemaGenerator) -> schemars::schema::Schema {
        <Option<Repr>>::json_schema(gen)
    }
}

#[cfg(test)]
#[path = "description_tests.rs"]
mod tests;
