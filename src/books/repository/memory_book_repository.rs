use std::collections::HashMap;
use async_trait::async_trait;
use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::core::library::LibraryResult;
use crate::core::repository::Repository;
use crate::utils::memory::MemoryTable;

#[derive(Debug)]
pub(crate) struct MemoryBookRepository {
    table: MemoryTable<BookEntity>,
}

impl MemoryBookRepository {
    pub(crate) fn new(table_name: &str) -> Self {
        Self {
            table: MemoryTable::new(table_name),
        }
    }
}

#[async_trait]
impl Repository<BookEntity> for MemoryBookRepository {
    async fn create(&self, entity: &BookEntity) -> LibraryResult<usize> {
        self.table.insert(entity).await
    }

    async fn get(&self, id: &str) -> LibraryResult<BookEntity> {
        self.table.get(id).await
    }

    async fn query(&self, predicate: &HashMap<String, String>) -> LibraryResult<Vec<BookEntity>> {
        self.table.scan(predicate).await
    }

    async fn find_all(&self) -> LibraryResult<Vec<BookEntity>> {
        self.table.scan(&HashMap::new()).await
    }
}

#[async_trait]
impl BookRepository for MemoryBookRepository {
    async fn count(&self) -> LibraryResult<usize> {
        Ok(self.table.len().await)
    }
}
