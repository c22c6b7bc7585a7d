use std::sync::Arc;

use anyhow::Context;
use atlas_config::AtlasConfig;
use atlas_db::service::AtlasService;
use atlas_editor::{AlwaysConfirm, EditSession};

use crate::cli::GlobalFlags;
use crate::prompt::StdinConfirm;

/// Load layered config and apply the `--database` override.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<AtlasConfig> {
    let mut config = AtlasConfig::load_with_dotenv().context("failed to load atlas config")?;
    if let Some(path) = &flags.database {
        config.database.path.clone_from(path);
        config.validate()?;
    }
    Ok(config)
}

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub service: Arc<AtlasService>,
    pub session: EditSession,
    pub config: AtlasConfig,
}

impl AppContext {
    /// Open the store and start an edit session over it.
    pub async fn init(config: AtlasConfig) -> anyhow::Result<Self> {
        let service = Arc::new(
            AtlasService::from_config(&config.database)
                .await
                .with_context(|| format!("failed to open database '{}'", config.database.path))?,
        );
        let session = EditSession::open(Arc::clone(&service), config.editor.clone())
            .await
            .context("failed to start edit session")?;
        tracing::debug!(path = %config.database.path, "context ready");

        Ok(Self {
            service,
            session,
            config,
        })
    }

    /// Install the confirmation strategy for one destructive command.
    pub fn confirm_with(&mut self, assume_yes: bool) {
        if assume_yes {
            self.session.set_confirm(AlwaysConfirm);
        } else {
            self.session.set_confirm(StdinConfirm);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn init_creates_database_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("world.db");
        let mut config = AtlasConfig::default();
        config.database.path = path.to_string_lossy().into_owned();

        let ctx = AppContext::init(config).await.unwrap();
        ctx.service.check_connection().await.unwrap();
        assert!(ctx.session.summaries().is_empty());
        assert!(path.exists());
    }
}
