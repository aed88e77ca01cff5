use async_trait::async_trait;

use crate::AssistError;

/// Generated marketing text for a package
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct PackageCopy {
    pub description: String,
    pub itinerary: String,
}

/// Generative-text collaborator that drafts package copy from the basic
/// facts. Failures mean "no suggested text" and are never fatal to
/// package creation.
#[async_trait]
pub trait CopyGenerator: Send + Sync {
    async fn generate(
        &self,
        destination: &str,
        duration: &str,
        price: i32,
    ) -> Result<PackageCopy, AssistError>;
}

/// Deterministic generator for tests and offline demos
pub struct MockCopyGenerator {
    fail: bool,
}

impl MockCopyGenerator {
    pub fn new() -> Self {
        Self { fail: false }
    }

    /// A generator that always fails, for exercising fallback paths
    pub fn failing() -> Self {
        Self { fail: true }
    }
}

impl Default for MockCopyGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CopyGenerator for MockCopyGenerator {
    async fn generate(
        &self,
        destination: &str,
        duration: &str,
        price: i32,
    ) -> Result<PackageCopy, AssistError> {
        if self.fail {
            return Err(AssistError::CallFailed(
                "simulated generation failure".to_string(),
            ));
        }

        Ok(PackageCopy {
            description: format!(
                "Descubra {destination} em uma experiência de {duration} por R$ {price}."
            ),
            itinerary: format!("Dia 1: chegada em {destination}. Dias seguintes: passeios guiados."),
        })
    }
}
