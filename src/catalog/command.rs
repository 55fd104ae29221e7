pub mod find_books_cmd;
pub mod get_book_cmd;
pub mod get_books_cmd;
pub mod get_reviews_cmd;
