use tracing::info;
use crate::core::domain::Configuration;
use crate::core::library::LibraryResult;
use crate::gateway::events::EventPublisher;
use crate::gateway::logs::publisher::LogPublisher;
use crate::gateway::remote::RemoteCatalog;
use crate::gateway::remote::http_catalog::HttpRemoteCatalog;

pub(crate) async fn create_publisher() -> Box<dyn EventPublisher> {
    Box::new(LogPublisher::new())
}

// create_remote_catalog returns None when no remote catalog is configured
pub(crate) async fn create_remote_catalog(config: &Configuration) -> LibraryResult<Option<Box<dyn RemoteCatalog>>> {
    match &config.remote_url {
        Some(url) => {
            info!("delegating catalog lookups to {} with {}ms timeout", url, config.remote_timeout_ms);
            Ok(Some(Box::new(HttpRemoteCatalog::new(url.as_str(), config.remote_timeout())?)))
        }
        None => {
            info!("no remote catalog configured, serving from local catalog");
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::domain::Configuration;
    use crate::core::library::LibraryError;
    use crate::gateway::factory::create_remote_catalog;

    #[tokio::test]
    async fn test_should_skip_remote_without_url() {
        let remote = create_remote_catalog(&Configuration::new("test")).await.expect("should build");
        assert!(remote.is_none());
    }

    #[tokio::test]
    async fn test_should_create_remote_with_url() {
        let mut config = Configuration::new("test");
        config.remote_url = Some("http://localhost:5000".to_string());
        let remote = create_remote_catalog(&config).await.expect("should build");
        assert!(remote.is_some());

        config.remote_url = Some("localhost".to_string());
        assert!(matches!(create_remote_catalog(&config).await, Err(LibraryError::Validation { .. })));
    }
}
