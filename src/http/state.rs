//! Application state and configuration for the HTTP server.

use std::sync::Arc;

use crate::config::{ConfigError, ServiceInfo};

/// Application state shared by the router.
///
/// Holds only immutable metadata; handlers never mutate it.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Service metadata published in the API documentation
    pub info: Arc<ServiceInfo>,
}

impl AppState {
    /// Create new application state with the given metadata.
    ///
    /// # Parameters
    ///
    /// - `info` - Service title, description and version
    ///
    /// # Returns
    ///
    /// Returns configured `AppState` instance.
    pub fn new(info: ServiceInfo) -> Self {
        Self { info: Arc::new(info) }
    }

    /// Get a builder for configuring application state step by step.
    pub fn builder() -> AppStateBuilder {
        AppStateBuilder::new()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ServiceInfo::default())
    }
}

/// Builder for constructing `AppState` with a fluent interface.
#[derive(Debug, Default)]
pub struct AppStateBuilder {
    info: Option<ServiceInfo>,
}

impl AppStateBuilder {
    /// Create a new builder with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the service metadata.
    ///
    /// # Parameters
    ///
    /// - `info` - Metadata to publish
    ///
    /// # Returns
    ///
    /// Returns the builder for method chaining.
    pub fn with_info(mut self, info: ServiceInfo) -> Self {
        self.info = Some(info);
        self
    }

    /// Build the final `AppState` with validation.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` if the metadata has a blank title or version.
    pub fn build(self) -> Result<AppState, ConfigError> {
        let info = self.info.unwrap_or_default();
        info.validate()?;
        Ok(AppState::new(info))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let state = AppState::builder().build().expect("valid configuration");
        assert_eq!(*state.info, ServiceInfo::default());
    }

    #[test]
    fn test_builder_with_info() {
        let info = ServiceInfo::default().with_overrides(Some("Custom".into()), None, None);
        let state = AppState::builder().with_info(info).build().expect("valid configuration");
        assert_eq!(state.info.title, "Custom");
    }

    /// Test that the builder rejects metadata that cannot be published.
    #[test]
    fn test_builder_rejects_blank_version() {
        let info = ServiceInfo::default().with_overrides(None, None, Some(String::new()));
        let err = AppState::builder().with_info(info).build().expect_err("blank version");
        assert!(matches!(err, ConfigError::Invalid(_)));
    }
}
