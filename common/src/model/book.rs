use serde::{Deserialize, Serialize};

/// A book record as exchanged with the backend.
///
/// The edit form works on a full snapshot of this struct and resubmits the
/// whole record on save; there is no partial patching. `id` is assigned by
/// the backend, so `None` marks a record that has not been created yet.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Book {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub summary: String,
    /// Genre label as shown in the form select. Empty string when the user
    /// has not picked one yet.
    #[serde(default)]
    pub book_gender: String,
    /// Thumbnail: either a URL served by the backend or an inline `data:` URI
    /// produced from a locally selected file.
    #[serde(default)]
    pub miniatura: String,
}

/// Genres offered by the book form select.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookGender {
    Biografia,
    Cuento,
    Novela,
}

impl BookGender {
    pub const ALL: [BookGender; 3] = [
        BookGender::Biografia,
        BookGender::Cuento,
        BookGender::Novela,
    ];

    /// The label stored in `Book::book_gender` and rendered in the UI.
    pub fn label(&self) -> &'static str {
        match self {
            BookGender::Biografia => "Biografía",
            BookGender::Cuento => "Cuento",
            BookGender::Novela => "Novela",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_book_is_the_empty_draft() {
        let book = Book::default();
        assert_eq!(book.id, None);
        assert_eq!(book.title, "");
        assert_eq!(book.author, "");
        assert_eq!(book.summary, "");
        assert_eq!(book.book_gender, "");
        assert_eq!(book.miniatura, "");
    }

    #[test]
    fn deserializes_backend_record_with_missing_thumbnail() {
        let json = r#"{"id": 7, "title": "Ficciones", "author": "Borges",
                       "summary": "Cuentos", "book_gender": "Cuento"}"#;
        let book: Book = serde_json::from_str(json).unwrap();
        assert_eq!(book.id, Some(7));
        assert_eq!(book.book_gender, "Cuento");
        assert_eq!(book.miniatura, "");
    }

    #[test]
    fn new_book_serializes_without_id() {
        let book = Book {
            title: "Rayuela".into(),
            ..Book::default()
        };
        let json = serde_json::to_string(&book).unwrap();
        assert!(!json.contains("\"id\""));
    }

    #[test]
    fn gender_labels_match_the_select_options() {
        let labels: Vec<&str> = BookGender::ALL.iter().map(|g| g.label()).collect();
        assert_eq!(labels, vec!["Biografía", "Cuento", "Novela"]);
    }
}
