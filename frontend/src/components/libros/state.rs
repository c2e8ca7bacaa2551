//! Component state for the book form.
//!
//! The form works on a disposable draft: a full snapshot of the record being
//! edited, seeded from the shared store by exact id match. Its lifecycle is
//! an explicit tagged state (`Phase`) so a save in flight can neither be
//! re-triggered nor interleaved with field edits.

use yew::context::ContextHandle;

use common::model::book::Book;

use crate::store::{Store, StoreContext};

/// Lifecycle of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// An id was requested but the shared collection has not arrived yet.
    Loading,
    /// Draft is editable. Also the silent fallback when the id is absent
    /// from a fetched collection (create mode with an empty draft).
    Editing,
    /// A save is in flight; further saves and edits are ignored.
    Saving,
}

/// Form fields; each edit targets exactly one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Author,
    Summary,
    Gender,
}

pub struct LibroForm {
    pub draft: Book,
    pub phase: Phase,
    /// True once the draft has been seeded (or create mode decided); the
    /// store context may keep updating afterwards without reseeding.
    pub seeded: bool,
    /// Generation counter for thumbnail reads. A completion carrying an older
    /// sequence is stale (superseded selection) and gets discarded.
    pub read_seq: u32,
    /// Fingerprint of the last loaded or saved snapshot, for the
    /// unsaved-changes indicator.
    pub saved_fingerprint: Option<String>,
    pub store: Option<StoreContext>,
    pub store_handle: Option<ContextHandle<StoreContext>>,
}

impl LibroForm {
    pub fn new() -> Self {
        Self {
            draft: Book::default(),
            phase: Phase::Loading,
            seeded: false,
            read_seq: 0,
            saved_fingerprint: None,
            store: None,
            store_handle: None,
        }
    }

    /// Seeds the draft from the shared collection. With no id the form goes
    /// straight to create mode. With an id, the matching record becomes the
    /// draft; an id missing from a fetched collection silently leaves the
    /// empty draft in place. An unfetched collection keeps the form loading
    /// until the next store update.
    pub fn seed(&mut self, store: &Store, id: Option<u32>) {
        match id {
            None => {
                self.phase = Phase::Editing;
                self.seeded = true;
            }
            Some(id) => {
                if let Some(libro) = store.find_libro(id) {
                    self.draft = libro.clone();
                    self.saved_fingerprint = Some(fingerprint(&self.draft));
                    self.phase = Phase::Editing;
                    self.seeded = true;
                } else if store.libros_cargados {
                    self.phase = Phase::Editing;
                    self.seeded = true;
                } else {
                    self.phase = Phase::Loading;
                }
            }
        }
    }

    pub fn can_edit(&self) -> bool {
        self.phase == Phase::Editing
    }

    pub fn can_save(&self) -> bool {
        self.phase == Phase::Editing
    }

    /// Whether a finished thumbnail read is still current.
    pub fn accepts_read(&self, seq: u32) -> bool {
        seq == self.read_seq
    }

    /// Invalidates any thumbnail read still in flight. Called when a save
    /// starts, so a read that began before the save cannot land on the
    /// just-saved draft afterwards.
    pub fn invalidate_reads(&mut self) {
        self.read_seq += 1;
    }

    /// Completes a save attempt. Success refreshes the fingerprint so the
    /// draft reads as clean; failure leaves the draft intact for retry.
    /// Either way the form returns to `Editing`.
    pub fn finish_save(&mut self, ok: bool) {
        self.phase = Phase::Editing;
        if ok {
            self.saved_fingerprint = Some(fingerprint(&self.draft));
        }
    }

    /// Discards the draft, the fingerprint and any in-flight read, returning
    /// the form to its pre-seed state. Used when the form is retargeted to a
    /// different record id.
    pub fn reset(&mut self) {
        self.draft = Book::default();
        self.phase = Phase::Loading;
        self.seeded = false;
        self.saved_fingerprint = None;
        self.invalidate_reads();
    }

    pub fn dirty(&self) -> bool {
        match &self.saved_fingerprint {
            Some(saved) => saved != &fingerprint(&self.draft),
            None => self.draft != Book::default(),
        }
    }
}

/// Applies a single field edit, leaving every other attribute untouched.
pub fn apply_edit(draft: &mut Book, field: Field, value: String) {
    match field {
        Field::Title => draft.title = value,
        Field::Author => draft.author = value,
        Field::Summary => draft.summary = value,
        Field::Gender => draft.book_gender = value,
    }
}

pub fn fingerprint(draft: &Book) -> String {
    let json = serde_json::to_string(draft).unwrap_or_default();
    format!("{:x}", md5::compute(json))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::StoreMsg;

    fn libro(id: u32) -> Book {
        Book {
            id: Some(id),
            title: "Ficciones".into(),
            author: "Borges".into(),
            summary: "Cuentos".into(),
            book_gender: "Cuento".into(),
            miniatura: "https://example.org/ficciones.png".into(),
        }
    }

    fn loaded_store() -> Store {
        let mut store = Store::default();
        store.apply(StoreMsg::LibrosCargados(vec![libro(1)]));
        store
    }

    #[test]
    fn seeding_with_known_id_copies_every_field() {
        let mut form = LibroForm::new();
        form.seed(&loaded_store(), Some(1));
        assert_eq!(form.phase, Phase::Editing);
        assert_eq!(form.draft, libro(1));
        assert!(!form.dirty());
    }

    #[test]
    fn seeding_with_unknown_id_keeps_the_empty_draft() {
        let mut form = LibroForm::new();
        form.seed(&loaded_store(), Some(99));
        assert_eq!(form.phase, Phase::Editing);
        assert_eq!(form.draft, Book::default());
    }

    #[test]
    fn seeding_waits_for_an_unfetched_collection() {
        let mut form = LibroForm::new();
        form.seed(&Store::default(), Some(1));
        assert_eq!(form.phase, Phase::Loading);
        assert!(!form.seeded);

        form.seed(&loaded_store(), Some(1));
        assert_eq!(form.phase, Phase::Editing);
        assert_eq!(form.draft.title, "Ficciones");
    }

    #[test]
    fn create_mode_needs_no_collection() {
        let mut form = LibroForm::new();
        form.seed(&Store::default(), None);
        assert_eq!(form.phase, Phase::Editing);
        assert_eq!(form.draft, Book::default());
    }

    #[test]
    fn each_edit_changes_exactly_one_attribute() {
        let mut draft = libro(1);
        let before = draft.clone();

        apply_edit(&mut draft, Field::Title, "Otro título".into());
        assert_eq!(draft.title, "Otro título");
        assert_eq!(draft.author, before.author);
        assert_eq!(draft.summary, before.summary);
        assert_eq!(draft.book_gender, before.book_gender);
        assert_eq!(draft.miniatura, before.miniatura);

        apply_edit(&mut draft, Field::Gender, "Novela".into());
        assert_eq!(draft.book_gender, "Novela");
        assert_eq!(draft.title, "Otro título");
    }

    #[test]
    fn stale_thumbnail_reads_are_rejected() {
        let mut form = LibroForm::new();
        form.read_seq = 2;
        assert!(!form.accepts_read(1));
        assert!(form.accepts_read(2));
    }

    #[test]
    fn saving_blocks_further_saves_and_edits() {
        let mut form = LibroForm::new();
        form.seed(&loaded_store(), Some(1));
        assert!(form.can_save());

        form.phase = Phase::Saving;
        assert!(!form.can_save());
        assert!(!form.can_edit());
    }

    #[test]
    fn reads_in_flight_at_save_time_cannot_land_on_the_saved_draft() {
        let mut form = LibroForm::new();
        form.seed(&loaded_store(), Some(1));

        // A file pick issues sequence 1 and the read is still in flight.
        form.read_seq = 1;
        assert!(form.accepts_read(1));

        // Saving invalidates it; completion after the save is discarded.
        form.phase = Phase::Saving;
        form.invalidate_reads();
        form.finish_save(true);
        assert!(!form.accepts_read(1));
        assert!(!form.dirty());
    }

    #[test]
    fn save_failure_keeps_the_draft_for_retry() {
        let mut form = LibroForm::new();
        form.seed(&loaded_store(), Some(1));
        apply_edit(&mut form.draft, Field::Author, "Cortázar".into());

        form.phase = Phase::Saving;
        form.finish_save(false);
        assert_eq!(form.phase, Phase::Editing);
        assert_eq!(form.draft.author, "Cortázar");
        assert!(form.dirty());
    }

    #[test]
    fn save_success_marks_the_draft_clean() {
        let mut form = LibroForm::new();
        form.seed(&loaded_store(), Some(1));
        apply_edit(&mut form.draft, Field::Title, "Otro título".into());
        assert!(form.dirty());

        form.phase = Phase::Saving;
        form.finish_save(true);
        assert_eq!(form.phase, Phase::Editing);
        assert!(!form.dirty());
    }

    #[test]
    fn resetting_discards_the_draft_and_pending_reads() {
        let mut form = LibroForm::new();
        form.seed(&loaded_store(), Some(1));
        form.read_seq = 3;

        form.reset();
        assert_eq!(form.draft, Book::default());
        assert_eq!(form.phase, Phase::Loading);
        assert!(!form.seeded);
        assert!(!form.accepts_read(3));

        // Retargeting to another id seeds from the collection again.
        form.seed(&loaded_store(), Some(1));
        assert_eq!(form.draft.title, "Ficciones");
    }

    #[test]
    fn dirty_tracks_edits_against_the_seeded_snapshot() {
        let mut form = LibroForm::new();
        form.seed(&loaded_store(), Some(1));
        assert!(!form.dirty());

        apply_edit(&mut form.draft, Field::Author, "Cortázar".into());
        assert!(form.dirty());

        form.saved_fingerprint = Some(fingerprint(&form.draft));
        assert!(!form.dirty());
    }
}
