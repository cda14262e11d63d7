use super::InstallationReport;
use crate::config::LlmConfig;
use crate::constants::{STATUS_ERROR, STATUS_OK};
use crate::llm::ProviderRegistry;
use tracing::{info, warn};

/// Reports whether the bridge can run conversations.
///
/// The group-chat engine is compiled in, so the check comes down to building
/// the provider of the default LLM configuration (endpoint and API key).
pub fn check_installation(registry: &ProviderRegistry) -> InstallationReport {
    let config = LlmConfig::default();
    match registry.build(&config) {
        Ok(provider) => {
            info!(
                "Installation check passed: provider={} model={}",
                provider.name(),
                provider.model()
            );
            InstallationReport {
                installed: true,
                version: Some(env!("CARGO_PKG_VERSION").to_string()),
                provider: Some(provider.name().to_string()),
                model: Some(provider.model().to_string()),
                error: None,
                status: STATUS_OK.to_string(),
            }
        }
        Err(e) => {
            warn!("Installation check failed: {}", e);
            InstallationReport {
                installed: false,
                version: None,
                provider: None,
                model: None,
                error: Some(e.to_string()),
                status: STATUS_ERROR.to_string(),
            }
        }
    }
}
