use appnames_core::{
    filter, matches_query, select_apps, AddOutcome, AliasSession, AliasStore, InstalledApp,
    StoreConfig, StoreError, WireFormat,
};
use appnames_storage::MemoryBackend;
use appnames_core::apps::DEFAULT_SYSTEM_ALLOW_LIST;

mod common;
use common::{init_test_logging, memory_store, seeded_store};

fn installed() -> Vec<InstalledApp> {
    vec![
        InstalledApp::new("com.whatsapp", "WhatsApp", true),
        InstalledApp::new("com.android.settings", "Settings", true),
        InstalledApp::new("org.telegram.messenger", "telegram", false),
        InstalledApp::new("com.android.camera2", "Camera", true),
        InstalledApp::new("com.google.android.youtube", "YouTube", true),
        InstalledApp::new("com.example.notes", "Notes", false),
    ]
}

#[test]
fn filter_matches_case_insensitive_substrings() {
    assert_eq!(
        filter(&[("WhatsApp", true), ("Camera", true)], "cam"),
        [false, true]
    );
    assert_eq!(
        filter(&[("WhatsApp", false), ("Camera", false)], ""),
        [true, true],
        "an empty query shows everything"
    );
    assert!(matches_query("YouTube", "TUB"));
    assert!(!matches_query("YouTube", "tube "));
    assert!(matches_query("واتساب", "واتس"));
}

#[test]
fn selection_keeps_user_apps_and_allow_listed_system_apps() {
    let selected = select_apps(installed(), DEFAULT_SYSTEM_ALLOW_LIST);
    let labels: Vec<&str> = selected.iter().map(|app| app.label.as_str()).collect();

    assert_eq!(
        labels,
        ["Camera", "Notes", "telegram", "WhatsApp", "YouTube"],
        "settings is filtered out and labels sort case-insensitively"
    );
}

#[test]
fn selection_with_empty_allow_list_keeps_only_user_apps() {
    let selected = select_apps(installed(), &[] as &[&str]);
    assert!(selected.iter().all(|app| !app.is_system));
    assert_eq!(selected.len(), 2);

    let ignore_blank = select_apps(installed(), &[""]);
    assert_eq!(ignore_blank.len(), 2, "a blank needle must not admit every system app");
}

#[test]
fn session_add_saves_immediately() -> anyhow::Result<()> {
    let mut session = AliasSession::open(memory_store())?;

    let outcomes = session.add("com.whatsapp", "واتس، واتساب, whats")?;
    assert!(outcomes.iter().all(|(_, outcome)| *outcome == AddOutcome::Added));

    let persisted = session.store().load()?;
    assert_eq!(persisted, *session.aliases());
    assert_eq!(
        persisted.aliases_for("com.whatsapp"),
        ["واتس", "واتساب", "whats"]
    );
    Ok(())
}

#[test]
fn session_duplicate_add_reports_without_writing() -> anyhow::Result<()> {
    let mut session = AliasSession::open(seeded_store("com.whatsapp:whats"))?;
    let before = session.store().raw()?;

    let outcomes = session.add("com.whatsapp", "whats")?;
    assert_eq!(outcomes, [("whats".to_owned(), AddOutcome::Duplicate)]);
    assert_eq!(
        session.store().raw()?,
        before,
        "nothing changed, so the legacy record is left as it was"
    );
    Ok(())
}

#[test]
fn session_remove_persists_and_tolerates_unknowns() -> anyhow::Result<()> {
    let mut session = AliasSession::open(memory_store())?;
    session.add("com.whatsapp", "whats")?;

    assert!(!session.remove("com.whatsapp", "nope")?);
    assert!(!session.remove("com.unknown", "whats")?);
    assert!(session.remove("com.whatsapp", "whats")?);

    assert!(session.aliases().is_empty());
    assert!(session.store().load()?.is_empty());
    Ok(())
}

#[test]
fn session_reload_reads_the_copy_of_record() -> anyhow::Result<()> {
    let mut session = AliasSession::open(memory_store())?;
    session.add("com.whatsapp", "whats")?;

    let mut other = AliasSession::open(session.store().clone())?;
    assert_eq!(other.aliases(), session.aliases());

    other.add("com.whatsapp", "واتس")?;
    other.reload()?;
    assert_eq!(other.aliases().aliases_for("com.whatsapp"), ["whats", "واتس"]);
    Ok(())
}

#[test]
fn visible_apps_joins_selection_filter_and_aliases() -> anyhow::Result<()> {
    let mut session = AliasSession::open(memory_store())?;
    session.add("com.whatsapp", "واتس")?;

    let all = session.visible_apps(installed(), DEFAULT_SYSTEM_ALLOW_LIST, "");
    assert_eq!(all.len(), 5);

    let matching = session.visible_apps(installed(), DEFAULT_SYSTEM_ALLOW_LIST, "WHATS");
    assert_eq!(matching.len(), 1);
    assert_eq!(matching[0].app.package_name, "com.whatsapp");
    assert_eq!(matching[0].aliases, ["واتس"]);

    let none = session.visible_apps(installed(), DEFAULT_SYSTEM_ALLOW_LIST, "settings");
    assert!(none.is_empty(), "settings is never selected");
    Ok(())
}

#[test]
fn failed_save_leaves_the_session_unchanged() -> anyhow::Result<()> {
    init_test_logging();
    let config = StoreConfig {
        write_format: WireFormat::Legacy,
        ..StoreConfig::default()
    };
    let store = AliasStore::with_config(MemoryBackend::new(), &config);
    let mut session = AliasSession::open(store)?;
    session.add("com.whatsapp", "whats")?;
    let before = session.aliases().clone();

    assert!(matches!(
        session.add("com.clock", "10:30"),
        Err(StoreError::Unrepresentable(_))
    ));
    assert_eq!(session.aliases(), &before, "memory must not run ahead of storage");
    assert_eq!(session.store().load()?, before);

    let outcomes = session.add("com.other", "fine")?;
    assert_eq!(outcomes, [("fine".to_owned(), AddOutcome::Added)]);
    assert_eq!(session.store().load()?, *session.aliases());
    assert!(!session.aliases().contains_app("com.clock"));

    assert!(session.remove("com.other", "fine")?);
    assert_eq!(session.store().load()?, before);
    Ok(())
}
