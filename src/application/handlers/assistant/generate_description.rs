//! GenerateDescription - Command handler for standalone description drafting.

use thiserror::Error;

use crate::domain::wizard::{DescriptionGenerator, EngineError};

/// Command to draft a description from free-form project information.
#[derive(Debug, Clone)]
pub struct GenerateDescriptionCommand {
    pub project_info: String,
}

/// Result of successful generation.
#[derive(Debug, Clone)]
pub struct GenerateDescriptionResult {
    pub description: String,
}

#[derive(Debug, Error)]
pub enum GenerateDescriptionError {
    #[error("project_info cannot be empty")]
    EmptyProjectInfo,

    #[error(transparent)]
    Generation(#[from] EngineError),
}

/// Handler for description drafting.
pub struct GenerateDescriptionHandler {
    generator: DescriptionGenerator,
}

impl GenerateDescriptionHandler {
    pub fn new(generator: DescriptionGenerator) -> Self {
        Self { generator }
    }

    pub async fn handle(
        &self,
        cmd: GenerateDescriptionCommand,
    ) -> Result<GenerateDescriptionResult, GenerateDescriptionError> {
        let info = cmd.project_info.trim();
        if info.is_empty() {
            return Err(GenerateDescriptionError::EmptyProjectInfo);
        }

        let description = self.generator.describe(info).await?;
        Ok(GenerateDescriptionResult { description })
    }
}
