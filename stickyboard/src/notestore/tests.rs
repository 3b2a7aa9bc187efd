use crate::notestore::NoteStore;
use crate::{Geometry, GlobalPreference, Note, NoteID, NoteStyle};

fn sample_note(id: i32) -> Note {
    Note {
        id: NoteID::new(id),
        text: "hi".to_owned(),
        geometry: Geometry {
            x: 10,
            y: 10,
            width: 100,
            height: 100,
        },
        style: NoteStyle::new("#fff", "Arial", "#000"),
    }
}

pub(super) async fn save_retrieve(store: impl NoteStore) {
    let note = sample_note(0);
    assert_eq!(store.save(&note).await.unwrap(), note.id);
    assert_eq!(store.retrieve().await.unwrap(), vec![note]);
}

pub(super) async fn retrieve_ordered_by_id(store: impl NoteStore) {
    for id in [7, 2, 5] {
        store.save(&sample_note(id)).await.unwrap();
    }
    let ids: Vec<i32> = store
        .retrieve()
        .await
        .unwrap()
        .iter()
        .map(|n| n.id.as_i32())
        .collect();
    assert_eq!(ids, vec![2, 5, 7]);
}

pub(super) async fn save_overwrites_full_record(store: impl NoteStore) {
    let mut note = sample_note(1);
    store.save(&note).await.unwrap();
    note.set_text("bye");
    note.move_to(300, 400);
    note.style = NoteStyle::new("lightblue", "Monospace,11,-1,5,50,0,0,0,0,0", "navy");
    store.save(&note).await.unwrap();
    assert_eq!(store.retrieve().await.unwrap(), vec![note]);
}

pub(super) async fn update_keeps_style(store: impl NoteStore) {
    let note = sample_note(3);
    store.save(&note).await.unwrap();
    let mut edited = note.clone();
    edited.set_text("edited");
    edited.resize(640, 480);
    edited.style = NoteStyle::new("red", "Serif", "white");
    store.update(&edited).await.unwrap();
    let stored = store.retrieve().await.unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].text, "edited");
    assert_eq!(stored[0].geometry, edited.geometry);
    assert_eq!(stored[0].style, note.style);
}

pub(super) async fn update_missing_note(store: impl NoteStore) {
    store.update(&sample_note(9)).await.unwrap();
    assert!(store.retrieve().await.unwrap().is_empty());
}

pub(super) async fn delete_note(store: impl NoteStore) {
    store.save(&sample_note(0)).await.unwrap();
    store.save(&sample_note(1)).await.unwrap();
    store.delete(NoteID::new(0)).await.unwrap();
    let stored = store.retrieve().await.unwrap();
    assert!(stored.iter().all(|n| n.id != NoteID::new(0)));
    assert_eq!(stored, vec![sample_note(1)]);
}

pub(super) async fn text_is_not_interpreted(store: impl NoteStore) {
    let mut note = sample_note(0);
    note.set_text("it's \"quoted\"\n'); DELETE FROM notes; --\nzażółć ✓");
    store.save(&note).await.unwrap();
    store.save(&sample_note(1)).await.unwrap();
    assert_eq!(store.retrieve().await.unwrap(), vec![note, sample_note(1)]);
}

pub(super) async fn preferences_absent(store: impl NoteStore) {
    assert_eq!(store.get_preferences().await.unwrap(), None);
}

pub(super) async fn preferences_last_write_wins(store: impl NoteStore) {
    let first = GlobalPreference::new(true, NoteStyle::new("#fff", "Arial", "#000"));
    let second = GlobalPreference::new(false, NoteStyle::new("khaki", "", "maroon"));
    store.save_preferences(&first).await.unwrap();
    assert_eq!(store.get_preferences().await.unwrap(), Some(first));
    store.save_preferences(&second).await.unwrap();
    assert_eq!(store.get_preferences().await.unwrap(), Some(second));
}
