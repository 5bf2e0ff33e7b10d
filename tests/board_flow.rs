use pretty_assertions::assert_eq;
use taskflow_core::{
    CardDraft, DropTarget, Label, ListId, ListStore, MoveOutcome, RecordingNotifier, Severity,
    Workspace, WorkspaceConfig,
};

fn titles(store: &ListStore) -> Vec<String> {
    store.lists().iter().map(|l| l.title.clone()).collect()
}

fn card_titles(store: &ListStore, id: &ListId) -> Vec<String> {
    store
        .list(id)
        .map(|l| l.cards.iter().map(|c| c.title.clone()).collect())
        .unwrap_or_default()
}

#[test]
fn test_move_first_card_into_empty_list() {
    let mut store = ListStore::new();
    let a = store.add_list("A").unwrap();
    let b = store.add_list("B").unwrap();
    store.add_card(&a, CardDraft::new("c1")).unwrap();
    store.add_card(&a, CardDraft::new("c2")).unwrap();

    store.move_card(&a, &b, 0, 0).unwrap();

    assert_eq!(card_titles(&store, &a), vec!["c2"]);
    assert_eq!(card_titles(&store, &b), vec!["c1"]);
}

#[test]
fn test_reorder_last_list_to_front() {
    let mut store = ListStore::new();
    for title in ["L1", "L2", "L3"] {
        store.add_list(title).unwrap();
    }

    store.reorder_lists(2, 0).unwrap();

    assert_eq!(titles(&store), vec!["L3", "L1", "L2"]);
}

#[test]
fn test_sample_workspace_session() {
    let mut ws = Workspace::new(WorkspaceConfig::default(), RecordingNotifier::new()).unwrap();
    let store = ws.store().unwrap();
    let todo = store.lists()[0].id.clone();
    let done = store.lists()[2].id.clone();
    let research = store.lists()[0].cards[0].id.clone();
    let total = store.total_cards();

    // drag "Research competitors" onto "Done"
    ws.begin_card_drag(&todo, &research);
    assert_eq!(
        ws.drop_on(&DropTarget::List(done.clone())).unwrap(),
        MoveOutcome::Moved
    );
    let store = ws.store().unwrap();
    assert_eq!(store.total_cards(), total);
    assert_eq!(
        card_titles(store, &done),
        vec!["Set up development environment", "Research competitors"]
    );

    // add a card through the form
    ws.open_card_form(&todo, None).unwrap();
    let draft = ws.card_draft_mut().unwrap();
    draft.title = "Fix login bug".to_string();
    ws.toggle_draft_label(Label::Bug);
    ws.save_card().unwrap();
    assert_eq!(ws.active_board().unwrap().card_count(), total + 1);

    // delete a list with its cards
    ws.delete_list(&done).unwrap();
    let store = ws.store().unwrap();
    assert!(store.find_card(&research).is_none());
    assert_eq!(titles(store), vec!["To Do", "In Progress"]);

    let messages: Vec<(Severity, &str)> = ws
        .notifier()
        .notifications()
        .iter()
        .map(|n| (n.severity, n.message.as_str()))
        .collect();
    assert_eq!(
        messages,
        vec![
            (Severity::Info, "Card moved to Done"),
            (Severity::Success, "Card added"),
            (Severity::Success, "List deleted"),
        ]
    );
}

#[test]
fn test_empty_titles_are_rejected_without_changes() {
    let config = WorkspaceConfig::from_json(r#"{ "seed_sample_data": false }"#).unwrap();
    let mut ws = Workspace::new(config, RecordingNotifier::new()).unwrap();
    ws.create_board("Personal Tasks", None).unwrap();
    let list = ws.add_list().unwrap();
    let before = ws.store().unwrap().clone();

    assert!(ws.add_card(&list, CardDraft::new("  ")).is_err());
    assert!(ws.edit_list_title(&list, "").is_err());

    assert_eq!(ws.store().unwrap(), &before);
    let errors = ws
        .notifier()
        .notifications()
        .iter()
        .filter(|n| n.severity == Severity::Error)
        .count();
    assert_eq!(errors, 2);
}
