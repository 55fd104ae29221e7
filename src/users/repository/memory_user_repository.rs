use std::collections::HashMap;
use async_trait::async_trait;
use crate::core::library::LibraryResult;
use crate::core::repository::Repository;
use crate::users::domain::model::UserEntity;
use crate::users::repository::UserRepository;
use crate::utils::memory::MemoryTable;

// MemoryUserRepository is the append-only user list; nothing is kept across restarts
#[derive(Debug)]
pub(crate) struct MemoryUserRepository {
    table: MemoryTable<UserEntity>,
}

impl MemoryUserRepository {
    pub(crate) fn new(table_name: &str) -> Self {
        Self {
            table: MemoryTable::new(table_name),
        }
    }
}

#[async_trait]
impl Repository<UserEntity> for MemoryUserRepository {
    async fn create(&self, entity: &UserEntity) -> LibraryResult<usize> {
        self.table.insert(entity).await
    }

    async fn get(&self, id: &str) -> LibraryResult<UserEntity> {
        self.table.get(id).await
    }

    async fn query(&self, predicate: &HashMap<String, String>) -> LibraryResult<Vec<UserEntity>> {
        self.table.scan(predicate).await
    }

    async fn find_all(&self) -> LibraryResult<Vec<UserEntity>> {
        self.table.scan(&HashMap::new()).await
    }
}

impl UserRepository for MemoryUserRepository {}
