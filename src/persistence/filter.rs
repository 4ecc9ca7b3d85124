//! Backend-neutral document filters.
//!
//! A [`Filter`] renders to a MongoDB query document for the Mongo backend
//! and is evaluated directly by the in-memory backend, so both stores
//! agree on what a query matches.

use mongodb::bson::oid::ObjectId;
use mongodb::bson::{Bson, Document, doc};

/// Predicate over stored documents.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Filter {
    /// Matches every document.
    #[default]
    All,
    /// Matches the document whose `_id` equals the given id.
    Id(ObjectId),
    /// Matches documents whose string `field` equals `value` exactly.
    Equals {
        /// Field name.
        field: String,
        /// Expected value.
        value: String,
    },
    /// Case-insensitive substring match against any of `fields`. Array
    /// fields match when any string element matches.
    TextSearch {
        /// Fields searched.
        fields: Vec<String>,
        /// Literal text to look for.
        needle: String,
    },
    /// Matches when every inner filter matches.
    And(Vec<Filter>),
}

impl Filter {
    /// Combines two filters into a conjunction. `All` is the identity.
    #[must_use]
    pub fn and(self, other: Self) -> Self {
        match (self, other) {
            (Self::All, other) => other,
            (this, Self::All) => this,
            (Self::And(mut parts), Self::And(more)) => {
                parts.extend(more);
                Self::And(parts)
            }
            (Self::And(mut parts), other) => {
                parts.push(other);
                Self::And(parts)
            }
            (this, other) => Self::And(vec![this, other]),
        }
    }

    /// Renders the filter as a MongoDB query document.
    ///
    /// Text needles are regex-escaped so they match literally.
    #[must_use]
    pub fn to_document(&self) -> Document {
        match self {
            Self::All => Document::new(),
            Self::Id(oid) => doc! { "_id": *oid },
            Self::Equals { field, value } => {
                let mut document = Document::new();
                document.insert(field.clone(), value.clone());
                document
            }
            Self::TextSearch { fields, needle } => {
                let pattern = regex::escape(needle);
                let clauses: Vec<Bson> = fields
                    .iter()
                    .map(|field| {
                        let mut clause = Document::new();
                        clause.insert(
                            field.clone(),
                            doc! { "$regex": pattern.clone(), "$options": "i" },
                        );
                        Bson::Document(clause)
                    })
                    .collect();
                doc! { "$or": clauses }
            }
            Self::And(parts) if parts.is_empty() => Document::new(),
            Self::And(parts) => {
                let clauses: Vec<Bson> = parts
                    .iter()
                    .map(|p| Bson::Document(p.to_document()))
                    .collect();
                doc! { "$and": clauses }
            }
        }
    }

    /// Evaluates the filter against a document in process.
    #[must_use]
    pub fn matches(&self, document: &Document) -> bool {
        match self {
            Self::All => true,
            Self::Id(oid) => document.get_object_id("_id").is_ok_and(|id| id == *oid),
            Self::Equals { field, value } => {
                document.get_str(field).is_ok_and(|v| v == value.as_str())
            }
            Self::TextSearch { fields, needle } => {
                let needle = needle.to_lowercase();
                fields
                    .iter()
                    .any(|field| field_contains(document.get(field), &needle))
            }
            Self::And(parts) => parts.iter().all(|p| p.matches(document)),
        }
    }
}

fn field_contains(value: Option<&Bson>, needle: &str) -> bool {
    match value {
        Some(Bson::String(s)) => s.to_lowercase().contains(needle),
        Some(Bson::Array(items)) => items
            .iter()
            .filter_map(Bson::as_str)
            .any(|s| s.to_lowercase().contains(needle)),
        _ => false,
    }
}
