use std::collections::{BTreeMap, HashMap};
use tokio::sync::RwLock;
use crate::core::domain::Identifiable;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Queryable;

// MemoryTable is an in-process table keyed by entity id
#[derive(Debug)]
pub(crate) struct MemoryTable<Entity> {
    table_name: String,
    rows: RwLock<BTreeMap<String, Entity>>,
}

impl<Entity> MemoryTable<Entity>
    where Entity: Identifiable + Queryable + Clone {
    pub(crate) fn new(table_name: &str) -> Self {
        Self {
            table_name: table_name.to_string(),
            rows: RwLock::new(BTreeMap::new()),
        }
    }

    // the existence check and the insert happen under the same write lock
    pub(crate) async fn insert(&self, entity: &Entity) -> LibraryResult<usize> {
        let id = entity.id();
        let mut rows = self.rows.write().await;
        if rows.contains_key(&id) {
            return Err(LibraryError::duplicate_key(
                format!("{} already contains {:?}", self.table_name, id).as_str()));
        }
        rows.insert(id, entity.clone());
        Ok(1)
    }

    pub(crate) async fn get(&self, id: &str) -> LibraryResult<Entity> {
        self.rows.read().await.get(id).cloned().ok_or_else(|| LibraryError::not_found(
            format!("{} does not contain {:?}", self.table_name, id).as_str()))
    }

    pub(crate) async fn scan(&self, predicate: &HashMap<String, String>) -> LibraryResult<Vec<Entity>> {
        let rows = self.rows.read().await;
        let mut res = vec![];
        for entity in rows.values() {
            if matches_predicate(entity, predicate)? {
                res.push(entity.clone());
            }
        }
        Ok(res)
    }

    pub(crate) async fn len(&self) -> usize {
        self.rows.read().await.len()
    }
}

fn matches_predicate<Entity: Queryable>(entity: &Entity, predicate: &HashMap<String, String>) -> LibraryResult<bool> {
    for (name, expected) in predicate {
        match entity.field(name) {
            Some(actual) if actual == expected => {}
            Some(_) => return Ok(false),
            None => return Err(LibraryError::validation(
                format!("unknown field {:?}", name).as_str(), None)),
        }
    }
    Ok(true)
}
