//! Embedded demo documents.
//!
//! This crate is the app's data source: a static in-memory collection
//! mapping document ids to [`OperationalDocument`] values, plus an
//! ordered summary list that populates the navigation sidebar. One
//! fixture carries an unrecognized `type` ("Memo") on purpose, to
//! exercise the viewer's diagnostic fallback path.

use ops_model::OperationalDocument;
use thiserror::Error;

/// Fixture name/content pairs in sidebar display order.
const FIXTURES: [(&str, &str); 6] = [
    (
        "recipe_seared_salmon",
        include_str!("../data/recipe_seared_salmon.json"),
    ),
    (
        "sop_fryer_oil_change",
        include_str!("../data/sop_fryer_oil_change.json"),
    ),
    (
        "checklist_line_opening",
        include_str!("../data/checklist_line_opening.json"),
    ),
    (
        "equipment_combi_oven",
        include_str!("../data/equipment_combi_oven.json"),
    ),
    (
        "guide_allergen_service",
        include_str!("../data/guide_allergen_service.json"),
    ),
    ("memo_walk_in_door", include_str!("../data/memo_walk_in_door.json")),
];

/// Errors raised while loading the embedded collection.
#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("fixture '{name}' failed to parse")]
    Parse {
        name: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// Two fixtures declared the same document id.
    #[error("duplicate document id '{id}' in fixtures")]
    DuplicateId { id: String },
}

/// A sidebar entry: enough to render and select a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentSummary {
    pub id: String,
    pub title: String,
    pub type_label: String,
}

/// The static document collection.
///
/// Documents keep fixture order; `get` resolves zero-or-one document
/// for an id.
#[derive(Debug, Clone, Default)]
pub struct DocumentLibrary {
    documents: Vec<OperationalDocument>,
}

impl DocumentLibrary {
    /// Parse every embedded fixture.
    pub fn load() -> Result<Self, FixtureError> {
        let mut documents = Vec::with_capacity(FIXTURES.len());
        for (name, json) in FIXTURES {
            let doc: OperationalDocument = serde_json::from_str(json)
                .map_err(|source| FixtureError::Parse { name, source })?;
            if documents
                .iter()
                .any(|existing: &OperationalDocument| existing.id() == doc.id())
            {
                return Err(FixtureError::DuplicateId {
                    id: doc.id().to_string(),
                });
            }
            documents.push(doc);
        }
        Ok(Self { documents })
    }

    pub fn get(&self, id: &str) -> Option<&OperationalDocument> {
        self.documents.iter().find(|doc| doc.id() == id)
    }

    /// Summaries in fixture order, for navigation UI.
    pub fn summaries(&self) -> Vec<DocumentSummary> {
        self.documents
            .iter()
            .map(|doc| DocumentSummary {
                id: doc.id().to_string(),
                title: doc.title().to_string(),
                type_label: doc.type_label().to_string(),
            })
            .collect()
    }

    /// Id of the first document, the default selection.
    pub fn first_id(&self) -> Option<&str> {
        self.documents.first().map(|doc| doc.id())
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ops_model::DocumentType;

    #[test]
    fn all_fixtures_load() {
        let library = DocumentLibrary::load().expect("fixtures parse");
        assert_eq!(library.len(), 6);
    }

    #[test]
    fn summaries_preserve_fixture_order() {
        let library = DocumentLibrary::load().expect("fixtures parse");
        let labels: Vec<String> = library
            .summaries()
            .iter()
            .map(|s| s.type_label.clone())
            .collect();
        assert_eq!(
            labels,
            ["Recipe", "SOP", "Checklist", "Equipment", "Guide", "Memo"]
        );
    }

    #[test]
    fn get_resolves_each_summary_id() {
        let library = DocumentLibrary::load().expect("fixtures parse");
        for summary in library.summaries() {
            let doc = library.get(&summary.id).expect("id resolves");
            assert_eq!(doc.title(), summary.title);
        }
        assert!(library.get("no-such-id").is_none());
    }

    #[test]
    fn memo_fixture_hits_the_fallback_variant() {
        let library = DocumentLibrary::load().expect("fixtures parse");
        let memo = library
            .summaries()
            .into_iter()
            .find(|s| s.type_label == "Memo")
            .expect("memo fixture present");
        let doc = library.get(&memo.id).expect("memo resolves");
        assert_eq!(doc.doc_type(), None);
        assert!(matches!(doc, OperationalDocument::Unknown(_)));
    }

    #[test]
    fn known_fixtures_cover_every_document_type() {
        let library = DocumentLibrary::load().expect("fixtures parse");
        for doc_type in DocumentType::ALL {
            assert!(
                library
                    .summaries()
                    .iter()
                    .any(|s| s.type_label == doc_type.as_str()),
                "missing fixture for {doc_type}"
            );
        }
    }
}
