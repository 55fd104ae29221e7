use std::sync::Arc;
use crate::books::factory;
use crate::books::seed::load_catalog;
use crate::catalog::domain::CatalogService;
use crate::catalog::domain::service::CatalogServiceImpl;
use crate::core::domain::Configuration;
use crate::core::library::LibraryResult;
use crate::gateway::factory::create_remote_catalog;

pub(crate) async fn create_catalog_service(config: &Configuration) -> LibraryResult<Arc<dyn CatalogService>> {
    let books = load_catalog(config.catalog_path.as_deref()).await?;
    let book_repo = factory::create_book_repository(&books).await?;
    let remote = create_remote_catalog(config).await?;
    Ok(Arc::new(CatalogServiceImpl::new(book_repo, remote)))
}
