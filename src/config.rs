use crate::domain::IconName;
use crate::error::{Result, TaskflowError};
use serde::{Deserialize, Serialize};

/// Workspace configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkspaceConfig {
    /// Title given to a freshly added list
    pub default_list_title: String,
    /// Icon used when a board is created without one
    pub default_board_icon: IconName,
    /// Start with the sample boards and lists
    pub seed_sample_data: bool,
}

impl Default for WorkspaceConfig {
    fn default() -> Self {
        Self {
            default_list_title: crate::domain::List::DEFAULT_TITLE.to_string(),
            default_board_icon: IconName::default(),
            seed_sample_data: true,
        }
    }
}

impl WorkspaceConfig {
    /// Parses a JSON config; omitted keys take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.default_list_title.trim().is_empty() {
            return Err(TaskflowError::ConfigError(
                "default_list_title must not be blank".to_string(),
            ));
        }
        if self.default_board_icon.as_str().trim().is_empty() {
            return Err(TaskflowError::ConfigError(
                "default_board_icon must not be blank".to_string(),
            ));
        }
        Ok(())
    }
}
