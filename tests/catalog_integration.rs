//! Integration tests for catalog loading through the engine context

use std::sync::Arc;

use request_check::catalog::{collation_key, SkillOrigin, FALLBACK_TALENTS};
use request_check::context::{HostAdapters, ModuleConfig, RequestCheck};
use request_check::core::types::SkillId;
use request_check::host::memory::{
    MemorySettings, RecordingChat, RecordingNotifier, StaticSkillSource,
};
use request_check::host::traits::{CompendiumEntry, ConfigEntry};

fn engine_with(source: StaticSkillSource) -> RequestCheck {
    RequestCheck::new(
        HostAdapters {
            settings: Arc::new(MemorySettings::new()),
            chat: Arc::new(RecordingChat::new()),
            notifier: Arc::new(RecordingNotifier::new()),
            source: Arc::new(source),
        },
        ModuleConfig::default(),
    )
}

/// Test 1: dead host sources still produce a usable catalog
#[tokio::test]
async fn test_fallback_catalog_when_host_is_silent() {
    let mut engine = engine_with(
        StaticSkillSource::new("dsa5")
            .failing_system()
            .failing_compendium(),
    );
    engine.initialize().await.unwrap();

    let catalog = engine.catalog();
    assert_eq!(catalog.len(), FALLBACK_TALENTS.len());
    assert!(catalog
        .all()
        .iter()
        .all(|s| s.origin == SkillOrigin::Fallback));

    // Transliterated ids for names synthesized from the fallback list
    let skill = catalog.by_name("Bekehren & Überzeugen").unwrap();
    assert_eq!(skill.id.as_str(), "bekehren_und_ueberzeugen");
    let skill = catalog.by_name("Sinnesschärfe").unwrap();
    assert_eq!(skill.id.as_str(), "sinnesschaerfe");
}

/// Test 2: the catalog is sorted by collated display name
#[tokio::test]
async fn test_catalog_sorted_for_display() {
    let mut engine = engine_with(
        StaticSkillSource::new("dsa5")
            .failing_system()
            .failing_compendium(),
    );
    engine.initialize().await.unwrap();

    let names: Vec<&str> = engine
        .catalog()
        .all()
        .iter()
        .map(|s| s.name.as_str())
        .collect();
    let mut sorted = names.clone();
    sorted.sort_by_key(|n| (collation_key(n), n.to_string()));
    assert_eq!(names, sorted);

    // Umlauts collate with their base letters
    let ueberreden = names.iter().position(|n| *n == "Überreden").unwrap();
    let verbergen = names.iter().position(|n| *n == "Verbergen").unwrap();
    assert!(ueberreden < verbergen);
}

/// Test 3: the system source wins over compendium and fallback
#[tokio::test]
async fn test_system_source_takes_precedence() {
    let source = StaticSkillSource::new("dsa5")
        .with_system(vec![ConfigEntry {
            key: "klettern".into(),
            label: "Klettern".into(),
        }])
        .with_compendium(vec![CompendiumEntry {
            id: Some("tanzen".into()),
            name: "Tanzen".into(),
            kind: "skill".into(),
        }]);
    let mut engine = engine_with(source);
    engine.initialize().await.unwrap();

    assert_eq!(engine.catalog().len(), 1);
    assert_eq!(
        engine.catalog().all()[0].origin,
        SkillOrigin::System
    );
}

/// Test 4: visibility filtering is idempotent between changes
#[tokio::test]
async fn test_visible_is_idempotent() {
    let mut engine = engine_with(
        StaticSkillSource::new("dsa5")
            .failing_system()
            .failing_compendium(),
    );
    engine.initialize().await.unwrap();

    engine
        .visibility()
        .set_visible(&SkillId::from("klettern"), false);

    let first: Vec<String> = engine
        .catalog()
        .visible(engine.visibility())
        .iter()
        .map(|s| s.name.clone())
        .collect();
    let second: Vec<String> = engine
        .catalog()
        .visible(engine.visibility())
        .iter()
        .map(|s| s.name.clone())
        .collect();

    assert_eq!(first, second);
    assert_eq!(first.len(), FALLBACK_TALENTS.len() - 1);
    assert!(!first.contains(&"Klettern".to_string()));
}

/// Test 5: reload rebuilds the snapshot wholesale
#[tokio::test]
async fn test_reload_replaces_snapshot() {
    let mut engine = engine_with(
        StaticSkillSource::new("dsa5")
            .failing_system()
            .failing_compendium(),
    );
    engine.initialize().await.unwrap();
    let before = engine.catalog().len();

    engine.reload_catalog().await;
    assert_eq!(engine.catalog().len(), before);
    // Stale visibility entries survive a reload untouched
    engine
        .visibility()
        .set_visible(&SkillId::from("verwaist"), false);
    engine.reload_catalog().await;
    assert_eq!(engine.visibility().snapshot().len(), 1);
}
