use tracing::info;
use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::books::repository::memory_book_repository::MemoryBookRepository;
use crate::core::library::LibraryResult;
use crate::core::repository::Repository;

// create_book_repository loads the fixed catalog; a duplicate isbn aborts the load
pub(crate) async fn create_book_repository(books: &[BookEntity]) -> LibraryResult<Box<dyn BookRepository>> {
    let repo = MemoryBookRepository::new("books");
    for book in books {
        let _ = repo.create(book).await?;
    }
    info!("loaded {} books into catalog", repo.count().await?);
    Ok(Box::new(repo))
}
