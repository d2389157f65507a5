mod configuration;

pub use configuration::*;

use crate::algebra::{MayanClient, TriggerResource};
use anyhow::Context;
use dotenvy::dotenv;

/// Entry point a host configures once and asks for resource bindings.
#[derive(Clone, Debug)]
pub struct Provider {
    configuration: MayanConfig,
    client: MayanClient,
}

impl Provider {
    pub fn try_from(configuration: MayanConfig) -> Result<Self, anyhow::Error> {
        tracing::info!(
            "Configuring provider with configuration: {}{:#?}{}",
            "\n",
            &configuration,
            "\n"
        );
        let client =
            MayanClient::new(&configuration).context("Failed to create Mayan EDMS client.")?;

        Ok(Self {
            configuration,
            client,
        })
    }

    /// Loads `.env` (when present) and the process environment.
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenv().ok();

        let configuration = MayanConfig::load().context("Failed to load configuration.")?;
        Self::try_from(configuration)
    }

    pub fn configuration(&self) -> &MayanConfig {
        &self.configuration
    }

    pub fn client(&self) -> &MayanClient {
        &self.client
    }

    pub fn workflow_template_transition_trigger(&self) -> TriggerResource<MayanClient> {
        TriggerResource::new(self.client.clone())
    }
}
