use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::core::domain::Identifiable;

/// Reviewer id to review text.
pub type Reviews = BTreeMap<String, String>;

// BookDto is a data transfer object for the catalog service. Records coming from a catalog
// document or a remote catalog may leave out isbn (it is implied by the key) and reviews.
// An absent reviews field is kept apart from an empty one: only the former means "no reviews".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct BookDto {
    #[serde(default)]
    pub isbn: String,
    pub title: String,
    pub author: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviews: Option<Reviews>,
}

impl BookDto {
    pub fn new(isbn: &str, title: &str, author: &str) -> BookDto {
        BookDto {
            isbn: isbn.to_string(),
            title: title.to_string(),
            author: author.to_string(),
            reviews: Some(Reviews::new()),
        }
    }

    // keyed fills a missing isbn from the key the record was stored under
    pub fn keyed(mut self, isbn: &str) -> BookDto {
        if self.isbn.is_empty() {
            self.isbn = isbn.to_string();
        }
        self
    }
}

impl Identifiable for BookDto {
    fn id(&self) -> String {
        self.isbn.to_string()
    }
}

impl Book for BookDto {
    fn title(&self) -> &str {
        self.title.as_str()
    }

    fn author(&self) -> &str {
        self.author.as_str()
    }

    fn has_reviews(&self) -> bool {
        self.reviews.is_some()
    }
}

#[cfg(test)]
mod tests {
    use crate::books::domain::Book;
    use crate::books::dto::{BookDto, Reviews};

    #[tokio::test]
    async fn test_should_build_books() {
        let book = BookDto::new("isbn", "title", "author");
        assert_eq!("isbn", book.isbn.as_str());
        assert_eq!("title", book.title.as_str());
        assert_eq!("author", book.author.as_str());
        assert!(book.has_reviews());
    }

    #[tokio::test]
    async fn test_should_parse_record_without_isbn() {
        let book: BookDto = serde_json::from_str(r#"{"author": "Jane Austen", "title": "Pride and Prejudice"}"#)
            .expect("should parse book");
        assert_eq!("", book.isbn.as_str());
        assert_eq!(None, book.reviews);
        assert!(!book.has_reviews());

        let book = book.keyed("8");
        assert_eq!("8", book.isbn.as_str());
        assert_eq!("8", book.keyed("9").isbn.as_str());
    }

    #[tokio::test]
    async fn test_should_keep_empty_reviews_apart_from_missing() {
        let book: BookDto = serde_json::from_str(r#"{"author": "A", "title": "T", "reviews": {}}"#)
            .expect("should parse book");
        assert_eq!(Some(Reviews::new()), book.reviews);
        let book: BookDto = serde_json::from_str(r#"{"author": "A", "title": "T", "reviews": null}"#)
            .expect("should parse book");
        assert_eq!(None, book.reviews);
    }

    #[tokio::test]
    async fn test_should_serialize_book() {
        let mut book = BookDto::new("1", "T", "A");
        book.reviews = Some(Reviews::from([("r1".to_string(), "good".to_string())]));
        let json = serde_json::to_value(&book).expect("should serialize");
        assert_eq!(serde_json::json!({"isbn": "1", "title": "T", "author": "A", "reviews": {"r1": "good"}}), json);

        book.reviews = None;
        let json = serde_json::to_value(&book).expect("should serialize");
        assert_eq!(serde_json::json!({"isbn": "1", "title": "T", "author": "A"}), json);
    }
}
