use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::books::dto::Reviews;
use crate::core::domain::Identifiable;
use crate::core::repository::Queryable;

// BookEntity is a catalog record keyed by its isbn. Reviews map a reviewer id to the review text;
// a record without a reviews field has no reviews at all, which is not the same as an empty map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookEntity {
    pub isbn: String,
    pub title: String,
    pub author: String,
    pub reviews: Option<Reviews>,
}

impl BookEntity {
    pub fn new(isbn: &str, title: &str, author: &str) -> Self {
        Self {
            isbn: isbn.to_string(),
            title: title.to_string(),
            author: author.to_string(),
            reviews: Some(Reviews::new()),
        }
    }

    pub fn with_review(mut self, reviewer: &str, review: &str) -> Self {
        self.reviews.get_or_insert_with(Reviews::new).insert(reviewer.to_string(), review.to_string());
        self
    }

    pub fn without_reviews(mut self) -> Self {
        self.reviews = None;
        self
    }
}

impl Identifiable for BookEntity {
    fn id(&self) -> String {
        self.isbn.to_string()
    }
}

impl Queryable for BookEntity {
    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "isbn" => Some(self.isbn.as_str()),
            "title" => Some(self.title.as_str()),
            "author" => Some(self.author.as_str()),
            _ => None,
        }
    }
}

impl Book for BookEntity {
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
