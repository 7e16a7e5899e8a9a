//! Sample knowledge bases bundled with the binary.

use rapport_core::errors::KnowledgeError;

use crate::base::KnowledgeBase;

pub const BASICS: &str = include_str!("../data/basics.json");
pub const MEMORY_SAFETY: &str = include_str!("../data/memory_safety.json");
pub const ELECTRONICS_REPAIR: &str = include_str!("../data/electronics_repair.json");
pub const ROSES_ARE_RED: &str = include_str!("../data/roses_are_red.json");

/// `(name, json)` for every bundled document, in merge order.
pub fn documents() -> [(&'static str, &'static str); 4] {
    [
        ("basics", BASICS),
        ("memory_safety", MEMORY_SAFETY),
        ("electronics_repair", ELECTRONICS_REPAIR),
        ("roses_are_red", ROSES_ARE_RED),
    ]
}

/// Parse and merge all bundled documents.
pub fn merged() -> Result<KnowledgeBase, KnowledgeError> {
    let documents = documents()
        .into_iter()
        .map(|(name, json)| KnowledgeBase::from_json(name, json))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(KnowledgeBase::merge(documents))
}
