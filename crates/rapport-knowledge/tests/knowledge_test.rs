//! Knowledge loading, merging, and assignment against fixture documents.

use rapport_core::config::PopulationConfig;
use rapport_knowledge::{samples, KnowledgeBase, PopulationGenerator};
use test_fixtures::load_fixture_text;

fn fixture(name: &str) -> KnowledgeBase {
    let path = format!("knowledge/{name}");
    KnowledgeBase::from_json(&path, &load_fixture_text(&path)).expect("fixture parses")
}

#[test]
fn fixture_documents_merge_in_order() {
    let merged = KnowledgeBase::merge([fixture("garden.json"), fixture("weather.json")]);

    assert_eq!(merged.entities, vec!["Grass", "Sun", "Trees", "Snow", "Sky"]);
    assert_eq!(merged.relation_types, vec!["is", "can", "are"]);
    assert_eq!(merged.attributes, vec!["green", "hot", "tall", "cold", "blue"]);
    assert_eq!(merged.operations, vec!["grow", "shine"]);
    assert_eq!(
        merged.statements(),
        vec![
            "Grass is green",
            "Grass is tall",
            "Grass can grow",
            "Sun is hot",
            "Sun is bright",
            "Sun can shine",
            "Sun warms the grass",
            "Trees are tall",
            "Snow is cold",
            "Sky is blue",
        ]
    );
}

#[test]
fn bundled_samples_parse_and_merge() {
    for (name, json) in samples::documents() {
        let base = KnowledgeBase::from_json(name, json).unwrap();
        assert!(!base.statements().is_empty(), "{name} has no statements");
    }

    let merged = samples::merged().unwrap();
    let pool = merged.statements();

    let basics = KnowledgeBase::from_json("basics", samples::BASICS).unwrap();
    assert_eq!(basics.statements().len(), 19);

    assert!(pool.contains(&"Fire is hot".to_string()));
    assert!(pool.contains(&"Fire is gasoline-like".to_string()));
    assert!(pool.contains(&"XSS attacks were eliminated through tooling".to_string()));
    assert!(pool.contains(&"Electronics Repair provides enjoyment".to_string()));
    assert!(pool.contains(&"Memory-safe languages are C51 ASM".to_string()));

    let fire = merged.subject("Fire").unwrap();
    assert_eq!(fire.relations.len(), 1);
    assert_eq!(fire.relations[0].objects, vec!["hot", "gasoline-like"]);

    let entities = merged.entities.iter().filter(|e| *e == "Fire").count();
    assert_eq!(entities, 1);
}

#[test]
fn seeded_population_from_samples() {
    let pool = samples::merged().unwrap().statements();
    let config = PopulationConfig {
        node_count: 10,
        min_statements: 4,
        max_statements: 6,
        seed: Some(2024),
    };
    let generator = PopulationGenerator::new(config).unwrap();
    let first = generator.generate(&pool);
    let second = generator.generate(&pool);

    assert_eq!(first.len(), 10);
    assert_eq!(first.fingerprint(), second.fingerprint());
    assert!(first.iter().all(|node| (4..6).contains(&node.len())));
}
