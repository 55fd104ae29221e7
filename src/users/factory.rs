use std::sync::Arc;
use crate::core::domain::Configuration;
use crate::gateway::factory::create_publisher;
use crate::users::domain::UserService;
use crate::users::domain::service::UserServiceImpl;
use crate::users::repository::memory_user_repository::MemoryUserRepository;

pub(crate) async fn create_user_service(config: &Configuration) -> Arc<dyn UserService> {
    let user_repo = Box::new(MemoryUserRepository::new("users"));
    let publisher = create_publisher().await;
    Arc::new(UserServiceImpl::new(config, user_repo, publisher))
}
