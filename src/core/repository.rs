use async_trait::async_trait;
use std::collections::HashMap;
use crate::core::library::LibraryResult;

#[async_trait]
pub trait Repository<Entity>: Sync + Send {
    // create an entity, fails with duplicate-key if the id is taken
    async fn create(&self, entity: &Entity) -> LibraryResult<usize>;

    // get an entity
    async fn get(&self, id: &str) -> LibraryResult<Entity>;

    // find entities whose fields equal every predicate value
    async fn query(&self, predicate: &HashMap::<String, String>) -> LibraryResult<Vec<Entity>>;

    // all entities ordered by id
    async fn find_all(&self) -> LibraryResult<Vec<Entity>>;
}

// Queryable exposes named string fields of an entity for predicate matching
pub trait Queryable {
    fn field(&self, name: &str) -> Option<&str>;
}
