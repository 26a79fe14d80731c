//! Session workflow tests.

use score_notice_core::category::Category;
use score_notice_core::clipboard::{ClipboardSink, MemorySink};
use score_notice_core::config::NoticeConfig;
use score_notice_core::error::NoticeError;
use score_notice_core::record::Record;
use score_notice_core::NoticeSession;

/// Sink that always rejects writes and counts attempts.
#[derive(Default)]
struct FailingSink {
    attempts: usize,
}

impl ClipboardSink for FailingSink {
    fn write_text(&mut self, _text: &str) -> Result<(), NoticeError> {
        self.attempts += 1;
        Err(NoticeError::ClipboardFailed("permission denied".to_string()))
    }
}

fn names(session: &NoticeSession) -> Vec<&str> {
    session.records().iter().map(Record::name).collect()
}

#[test]
fn test_import_appends_batches() -> anyhow::Result<()> {
    let mut session = NoticeSession::new();

    let summary = session.import_pasted("Kim\t77\tA\n\t90\tB\nLee\t88\tC")?;
    assert_eq!(summary.rows_kept(), 2);
    assert_eq!(summary.rows_dropped, 1);
    assert_eq!(session.records().len(), 2);

    let summary = session.import_pasted("   ")?;
    assert_eq!(summary.rows_seen, 0);

    session.import_pasted("Park\t60\tD")?;
    assert_eq!(names(&session), vec!["Kim", "Lee", "Park"]);
    Ok(())
}

#[test]
fn test_mixed_categories_render_with_own_template() -> anyhow::Result<()> {
    let mut session = NoticeSession::new();
    session.set_template("EPT \"{name}\"");
    session.import_pasted("Kim\t77\tA")?;

    session.select_category(Category::ToeflJr)?;
    session.set_template("JR \"{name}\" \"{score2}\"");
    session.import_pasted("Lee\t80\t85\tB")?;

    let messages: Vec<String> = session
        .render_all()?
        .into_iter()
        .map(|(_, message)| message)
        .collect();
    assert_eq!(messages, vec!["EPT \"Kim\"", "JR \"Lee\" \"85\""]);
    Ok(())
}

#[test]
fn test_manual_entry() -> anyhow::Result<()> {
    let mut session = NoticeSession::new();
    session.select_category(Category::ToeflJr)?;

    let id = session
        .add_manual([("name", "Kim"), ("score", "77"), ("score2", "80")])?
        .expect("record added");
    assert!(session.add_manual([("score", "10")])?.is_none());
    assert_eq!(session.records().len(), 1);

    let record = session.records().get(id).unwrap();
    assert_eq!(record.category(), Category::ToeflJr);
    assert_eq!(record.get("assignedClass"), Some(""));
    Ok(())
}

#[test]
fn test_remove_and_clear() -> anyhow::Result<()> {
    let mut session = NoticeSession::new();
    session.import_pasted("a\t1\tA\nb\t2\tB\nc\t3\tC")?;
    let b = session.records().get_index(1).unwrap().id();

    assert!(session.remove(b));
    assert_eq!(names(&session), vec!["a", "c"]);
    assert!(!session.remove(b));
    assert_eq!(session.records().len(), 2);

    assert_eq!(session.clear(), 2);
    assert!(session.records().is_empty());
    Ok(())
}

#[test]
fn test_copy_to_sink() -> anyhow::Result<()> {
    let mut session = NoticeSession::new();
    session.set_template("\"{name}\"/\"{score}\"");
    session.import_pasted("Kim\t77\tA")?;
    let id = session.records().get_index(0).unwrap().id();

    let mut sink = MemorySink::new();
    assert!(session.copy(id, &mut sink)?);
    assert_eq!(sink.last(), Some("\"Kim\"/\"77\""));

    session.remove(id);
    assert!(!session.copy(id, &mut sink)?);
    assert_eq!(sink.messages.len(), 1);
    Ok(())
}

#[test]
fn test_copy_failure_is_reported_once() -> anyhow::Result<()> {
    let mut session = NoticeSession::new();
    session.import_pasted("Kim\t77\tA")?;
    let id = session.records().get_index(0).unwrap().id();

    let mut sink = FailingSink::default();
    let err = session.copy(id, &mut sink).unwrap_err();
    assert!(matches!(err, NoticeError::ClipboardFailed(_)));
    assert_eq!(sink.attempts, 1);
    Ok(())
}

#[test]
fn test_template_reset_and_config_default() -> anyhow::Result<()> {
    let config = NoticeConfig {
        default_category: Category::To,
        ..Default::default()
    };
    let mut session = NoticeSession::from_config(&config);
    assert_eq!(session.selected_category(), Category::To);

    let original = session.template()?.to_string();
    session.set_template("x");
    assert!(session.templates().is_customized(Category::To));
    session.reset_template();
    assert_eq!(session.template()?, original);
    Ok(())
}
