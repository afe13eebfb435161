//! Integration tests for the request pipeline: panel state to chat message

use std::sync::Arc;

use request_check::context::{HostAdapters, ModuleConfig, RequestCheck};
use request_check::core::types::SkillId;
use request_check::host::memory::{
    MemorySettings, RecordingChat, RecordingNotifier, StaticSkillSource,
};
use request_check::host::traits::ConfigEntry;
use request_check::panel::{PanelData, PanelSurface, ToggleOutcome};
use request_check::request::{RequestFlags, SkillRequest, ZeroModifierStyle};

struct Fixture {
    engine: RequestCheck,
    chat: Arc<RecordingChat>,
    notifier: Arc<RecordingNotifier>,
}

async fn fixture(config: ModuleConfig) -> Fixture {
    let chat = Arc::new(RecordingChat::new());
    let notifier = Arc::new(RecordingNotifier::new());
    let source = StaticSkillSource::new("dsa5").with_system(vec![
        ConfigEntry {
            key: "klettern".into(),
            label: "Klettern".into(),
        },
        ConfigEntry {
            key: "sinnesschaerfe".into(),
            label: "Sinnesschärfe".into(),
        },
    ]);
    let mut engine = RequestCheck::new(
        HostAdapters {
            settings: Arc::new(MemorySettings::new()),
            chat: chat.clone(),
            notifier: notifier.clone(),
            source: Arc::new(source),
        },
        config,
    );
    engine.initialize().await.unwrap();
    Fixture {
        engine,
        chat,
        notifier,
    }
}

/// Test 1: adjusted modifier flows into the posted request
#[tokio::test]
async fn test_adjusted_modifier_reaches_chat() {
    let f = fixture(ModuleConfig::default()).await;
    let id = SkillId::from("klettern");

    f.engine.modifiers().adjust(&id, -2);
    f.engine.modifiers().adjust(&id, -1);
    f.engine.send_request_for(&id).await.unwrap();

    let messages = f.chat.messages();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].content, "@Rq[Klettern -3]");
    assert_eq!(messages[0].speaker, "GM");
    match &messages[0].flags {
        RequestFlags::Single {
            skill,
            modifier,
            timestamp_ms,
        } => {
            assert_eq!(skill, "Klettern");
            assert_eq!(*modifier, -3);
            assert!(*timestamp_ms > 0);
        }
        other => panic!("expected single flags, got {other:?}"),
    }
}

/// Test 2: a zero modifier still renders with its sign on the single path
#[tokio::test]
async fn test_single_request_keeps_plus_zero() {
    let f = fixture(ModuleConfig::default()).await;
    f.engine
        .send_request_for(&SkillId::from("klettern"))
        .await
        .unwrap();
    assert_eq!(f.chat.messages()[0].content, "@Rq[Klettern +0]");
}

/// Test 3: batch of twelve valid requests truncates to ten with a warning
#[tokio::test]
async fn test_batch_truncation() {
    let f = fixture(ModuleConfig::default()).await;
    let requests: Vec<SkillRequest> = (0..12)
        .map(|i| SkillRequest::unchecked(format!("Talent {i}"), 1))
        .collect();

    f.engine.send_batch(&requests).await.unwrap();

    let messages = f.chat.messages();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].content.lines().count(), 10);
    assert_eq!(f.notifier.warnings().len(), 1);
}

/// Test 4: all-invalid batch posts nothing and reports an error
#[tokio::test]
async fn test_all_invalid_batch() {
    let f = fixture(ModuleConfig::default()).await;
    let requests = vec![
        SkillRequest::unchecked("", 0),
        SkillRequest::unchecked("Klettern", 11),
        SkillRequest::unchecked("   ", -11),
    ];

    assert!(f.engine.send_batch(&requests).await.is_err());
    assert!(f.chat.messages().is_empty());
    assert_eq!(f.notifier.errors().len(), 1);
}

/// Test 5: the zero-modifier batch style is configurable
#[tokio::test]
async fn test_batch_zero_style_switch() {
    let requests = vec![
        SkillRequest::unchecked("Klettern", 0),
        SkillRequest::unchecked("Tanzen", 2),
    ];

    let f = fixture(ModuleConfig::default()).await;
    f.engine.send_batch(&requests).await.unwrap();
    assert_eq!(f.chat.messages()[0].content, "@Rq[Klettern]\n@Rq[Tanzen +2]");

    let f = fixture(ModuleConfig {
        zero_modifier_style: ZeroModifierStyle::AlwaysSigned,
        ..ModuleConfig::default()
    })
    .await;
    f.engine.send_batch(&requests).await.unwrap();
    assert_eq!(
        f.chat.messages()[0].content,
        "@Rq[Klettern +0]\n@Rq[Tanzen +2]"
    );
}

/// Test 6: names are escaped before they reach the chat log
#[tokio::test]
async fn test_names_escaped_in_chat() {
    let f = fixture(ModuleConfig::default()).await;
    f.engine
        .send_request("<b>Klettern</b> & Co", 1)
        .await
        .unwrap();
    assert_eq!(
        f.chat.messages()[0].content,
        "@Rq[&lt;b&gt;Klettern&lt;/b&gt; &amp; Co +1]"
    );
}

/// Surface double for panel tests
#[derive(Default)]
struct NullSurface;

#[async_trait::async_trait]
impl PanelSurface for NullSurface {
    async fn open(&self, _data: PanelData) -> request_check::core::error::Result<()> {
        Ok(())
    }

    async fn close(&self) -> request_check::core::error::Result<()> {
        Ok(())
    }
}

/// Test 7: panel data reflects stores, and toggling round-trips
#[tokio::test]
async fn test_panel_data_and_toggle() {
    let f = fixture(ModuleConfig::default()).await;
    f.engine
        .modifiers()
        .set(&SkillId::from("sinnesschaerfe"), 4);
    f.engine
        .visibility()
        .set_visible(&SkillId::from("klettern"), false);

    let data = f.engine.panel_data();
    assert_eq!(data.skills.len(), 1);
    assert_eq!(data.skills[0].name, "Sinnesschärfe");
    assert_eq!(data.skills[0].modifier, 4);
    assert_eq!(data.all_skills.len(), 2);

    let surface = NullSurface;
    assert_eq!(
        f.engine.toggle_panel(&surface).await.unwrap(),
        ToggleOutcome::Opened
    );
    assert_eq!(
        f.engine.toggle_panel(&surface).await.unwrap(),
        ToggleOutcome::Closed
    );
}
