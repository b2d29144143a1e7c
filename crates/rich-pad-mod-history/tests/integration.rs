//! End-to-end editing timelines against the public history API.

use rich_pad_mod_history::{HistoryConfig, Snapshot, SnapshotHistory};

#[test]
fn typing_session_with_undo_redo_and_branch_truncation() {
    // Fresh session with empty content.
    let mut history = SnapshotHistory::new(Snapshot::empty());

    // Type "a", then "ab".
    history.record(Snapshot::from("a"));
    history.record(Snapshot::from("ab"));

    // Undo twice back to the seed; a third undo is a no-op.
    assert_eq!(history.undo().unwrap().as_str(), "a");
    assert_eq!(history.undo().unwrap().as_str(), "");
    assert!(history.undo().is_none());
    assert_eq!(history.current().as_str(), "");

    // Redo forward once.
    assert_eq!(history.redo().unwrap().as_str(), "a");

    // A new edit here truncates the redo branch: "ab" is lost.
    history.record(Snapshot::from("ax"));
    assert!(history.redo().is_none());
    assert_eq!(history.current().as_str(), "ax");
}

#[test]
fn reload_discards_previous_document_timeline() {
    let mut history = SnapshotHistory::new(Snapshot::empty());
    history.record(Snapshot::from("draft one"));
    history.record(Snapshot::from("draft two"));
    history.undo();

    // Loading a document from a file replaces the history wholesale.
    history.reset(Snapshot::from("<p>imported</p>"));

    assert_eq!(history.current().as_str(), "<p>imported</p>");
    assert!(!history.can_undo());
    assert!(!history.can_redo());
    assert!(history.undo().is_none());
    assert!(history.redo().is_none());
}

#[test]
fn long_session_respects_depth_bound() {
    let mut history =
        SnapshotHistory::with_config(Snapshot::empty(), HistoryConfig { max_depth: 16 });

    for i in 0..200 {
        history.record(Snapshot::from(format!("revision {i}")));
    }
    assert_eq!(history.depth(), 16);
    assert_eq!(history.current().as_str(), "revision 199");

    // Undo all the way down; the oldest retained revision is 184.
    let mut last = String::new();
    while let Some(snapshot) = history.undo() {
        last = snapshot.as_str().to_string();
    }
    assert_eq!(last, "revision 184");
}

#[test]
fn availability_flags_track_cursor_position() {
    let mut history = SnapshotHistory::new(Snapshot::from("start"));
    assert!(!history.can_undo());
    assert!(!history.can_redo());

    history.record(Snapshot::from("middle"));
    history.record(Snapshot::from("end"));
    assert!(history.can_undo());
    assert!(!history.can_redo());

    history.undo();
    assert!(history.can_undo());
    assert!(history.can_redo());

    history.undo();
    assert!(!history.can_undo());
    assert!(history.can_redo());
}
