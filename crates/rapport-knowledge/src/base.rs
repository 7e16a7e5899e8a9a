//! Knowledge-base documents and their merge into a single statement pool.
//!
//! A document lists a vocabulary (entities, relation types, attributes,
//! operations) and a `statements` map of `subject -> verb -> [objects]`.
//! Every `(subject, verb, object)` expands to the statement
//! `"<subject> <verb> <object>"`. Subject and verb order follow the document.

use std::collections::HashSet;
use std::fmt;

use rapport_core::errors::KnowledgeError;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::debug;

use crate::lenient;

/// One verb of a subject with its objects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relation {
    pub verb: String,
    pub objects: Vec<String>,
}

/// A subject and its relations, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subject {
    pub name: String,
    pub relations: Vec<Relation>,
}

impl Subject {
    /// Append `objects` to `verb`, creating the relation if it is new.
    fn extend(&mut self, verb: String, objects: Vec<String>) {
        match self.relations.iter_mut().find(|r| r.verb == verb) {
            Some(relation) => relation.objects.extend(objects),
            None => self.relations.push(Relation { verb, objects }),
        }
    }
}

/// A parsed (or merged) knowledge-base document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KnowledgeBase {
    pub entities: Vec<String>,
    pub relation_types: Vec<String>,
    pub attributes: Vec<String>,
    #[serde(rename = "operation", alias = "operations")]
    pub operations: Vec<String>,
    #[serde(
        serialize_with = "serialize_subjects",
        deserialize_with = "deserialize_subjects"
    )]
    pub statements: Vec<Subject>,
}

impl KnowledgeBase {
    /// Parse one document. Trailing commas are tolerated.
    pub fn from_json(source_name: &str, json: &str) -> Result<Self, KnowledgeError> {
        let cleaned = lenient::strip_trailing_commas(json);
        let base: Self = serde_json::from_str(&cleaned).map_err(|e| KnowledgeError::Parse {
            source_name: source_name.to_string(),
            reason: e.to_string(),
        })?;
        debug!(
            source = source_name,
            subjects = base.statements.len(),
            "knowledge document parsed"
        );
        Ok(base)
    }

    /// Merge documents in order.
    ///
    /// Vocabulary lists are concatenated and deduplicated, keeping first
    /// occurrences. Subjects seen again have their objects appended per verb;
    /// object lists are not deduplicated.
    pub fn merge(documents: impl IntoIterator<Item = KnowledgeBase>) -> Self {
        let mut merged = Self::default();
        let mut count = 0;

        for document in documents {
            count += 1;
            merged.entities.extend(document.entities);
            merged.relation_types.extend(document.relation_types);
            merged.attributes.extend(document.attributes);
            merged.operations.extend(document.operations);
            merged.absorb(document.statements);
        }

        dedup_in_order(&mut merged.entities);
        dedup_in_order(&mut merged.relation_types);
        dedup_in_order(&mut merged.attributes);
        dedup_in_order(&mut merged.operations);

        debug!(
            documents = count,
            subjects = merged.statements.len(),
            "knowledge documents merged"
        );
        merged
    }

    /// The statement pool: subject order, then verb order, then object order.
    pub fn statements(&self) -> Vec<String> {
        self.statements
            .iter()
            .flat_map(|subject| {
                subject.relations.iter().flat_map(move |relation| {
                    relation
                        .objects
                        .iter()
                        .map(move |object| format!("{} {} {}", subject.name, relation.verb, object))
                })
            })
            .collect()
    }

    pub fn subject(&self, name: &str) -> Option<&Subject> {
        self.statements.iter().find(|s| s.name == name)
    }

    fn absorb(&mut self, subjects: Vec<Subject>) {
        for incoming in subjects {
            match self.statements.iter_mut().find(|s| s.name == incoming.name) {
                Some(existing) => {
                    for relation in incoming.relations {
                        existing.extend(relation.verb, relation.objects);
                    }
                }
                None => self.statements.push(incoming),
            }
        }
    }
}

fn dedup_in_order(items: &mut Vec<String>) {
    let mut seen = HashSet::new();
    items.retain(|item| seen.insert(item.clone()));
}

// --- serde: ordered `subject -> verb -> objects` maps ---

fn serialize_subjects<S: Serializer>(subjects: &[Subject], serializer: S) -> Result<S::Ok, S::Error> {
    struct Verbs<'a>(&'a [Relation]);

    impl Serialize for Verbs<'_> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut map = serializer.serialize_map(Some(self.0.len()))?;
            for relation in self.0 {
                map.serialize_entry(&relation.verb, &relation.objects)?;
            }
            map.end()
        }
    }

    let mut map = serializer.serialize_map(Some(subjects.len()))?;
    for subject in subjects {
        map.serialize_entry(&subject.name, &Verbs(&subject.relations))?;
    }
    map.end()
}

fn deserialize_subjects<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<Subject>, D::Error> {
    struct SubjectsVisitor;

    impl<'de> Visitor<'de> for SubjectsVisitor {
        type Value = Vec<Subject>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a map of subject to verb map")
        }

        fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
            let mut subjects: Vec<Subject> = Vec::new();
            while let Some((name, Verbs(relations))) = access.next_entry::<String, Verbs>()? {
                match subjects.iter_mut().find(|s| s.name == name) {
                    Some(existing) => {
                        for relation in relations {
                            existing.extend(relation.verb, relation.objects);
                        }
                    }
                    None => subjects.push(Subject { name, relations }),
                }
            }
            Ok(subjects)
        }

        fn visit_unit<E: serde::de::Error>(self) -> Result<Self::Value, E> {
            Ok(Vec::new())
        }
    }

    struct Verbs(Vec<Relation>);

    impl<'de> Deserialize<'de> for Verbs {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            struct VerbsVisitor;

            impl<'de> Visitor<'de> for VerbsVisitor {
                type Value = Verbs;

                fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                    f.write_str("a map of verb to object list")
                }

                fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                    let mut subject = Subject {
                        name: String::new(),
                        relations: Vec::new(),
                    };
                    while let Some((verb, objects)) = access.next_entry::<String, Option<Vec<String>>>()? {
                        subject.extend(verb, objects.unwrap_or_default());
                    }
                    Ok(Verbs(subject.relations))
                }
            }

            deserializer.deserialize_map(VerbsVisitor)
        }
    }

    deserializer.deserialize_any(SubjectsVisitor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statements_follow_document_order() {
        let base = KnowledgeBase::from_json(
            "inline",
            r#"{
                "statements": {
                    "Sun": { "is": ["hot", "bright"], "can": ["shine"] },
                    "Birds": { "can": ["fly"], "is": null }
                }
            }"#,
        )
        .unwrap();
        assert_eq!(
            base.statements(),
            vec!["Sun is hot", "Sun is bright", "Sun can shine", "Birds can fly"]
        );
        assert!(base.entities.is_empty());
    }

    #[test]
    fn missing_statements_and_trailing_commas() {
        let base = KnowledgeBase::from_json("inline", r#"{"entities": ["A", "B",],}"#).unwrap();
        assert_eq!(base.entities, vec!["A", "B"]);
        assert!(base.statements().is_empty());
    }

    #[test]
    fn malformed_json_names_its_source() {
        let err = KnowledgeBase::from_json("broken.json", "{ \"entities\": [").unwrap_err();
        assert!(err.to_string().contains("broken.json"));
    }

    #[test]
    fn merge_appends_objects_and_dedups_vocabulary() {
        let a = KnowledgeBase::from_json(
            "a",
            r#"{"entities": ["Sun"], "statements": {"Sun": {"is": ["hot"]}}}"#,
        )
        .unwrap();
        let b = KnowledgeBase::from_json(
            "b",
            r#"{"entities": ["Sun", "Sky"], "statements": {"Sun": {"is": ["hot"], "can": ["shine"]}, "Sky": {"is": ["blue"]}}}"#,
        )
        .unwrap();
        let merged = KnowledgeBase::merge([a, b]);
        assert_eq!(merged.entities, vec!["Sun", "Sky"]);
        assert_eq!(
            merged.statements(),
            vec!["Sun is hot", "Sun is hot", "Sun can shine", "Sky is blue"]
        );
    }

    #[test]
    fn serialization_preserves_order() {
        let base = KnowledgeBase::from_json(
            "inline",
            r#"{"statements": {"Zebra": {"is": ["striped"]}, "Ant": {"can": ["carry"], "is": ["small"]}}}"#,
        )
        .unwrap();
        let json = serde_json::to_string(&base).unwrap();
        let zebra = json.find("Zebra").unwrap();
        let ant = json.find("Ant").unwrap();
        assert!(zebra < ant);
        let reparsed = KnowledgeBase::from_json("again", &json).unwrap();
        assert_eq!(reparsed, base);
    }
}
