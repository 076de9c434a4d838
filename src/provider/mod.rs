//! Read-only clients for the mod hosting APIs
//!
//! Both services expose the same two operations this tool needs: a name
//! search returning at most one usable hit, and a listing of a project's
//! published files with the game versions each one supports. The clients
//! normalize their service-specific response shapes into the shared types
//! in [`types`], so everything above this module is provider-agnostic.

pub mod curseforge;
pub mod error;
pub mod modrinth;
pub mod types;

pub use curseforge::CurseForgeClient;
pub use error::ProviderError;
pub use modrinth::ModrinthClient;
pub use types::{ProjectFile, SearchHit, Source};

#[cfg(test)]
use mockall::automock;

/// Read-only access to a mod hosting service.
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait ModProvider: Send + Sync {
    /// Which service this client talks to.
    fn source(&self) -> Source;

    /// First hit of a name search, or `Ok(None)` when the search comes
    /// up empty.
    async fn search(&self, name: &str) -> Result<Option<SearchHit>, ProviderError>;

    /// Published files/versions for a project. CurseForge returns them
    /// newest first; Modrinth order is taken as the service sends it.
    async fn list_files(&self, project_id: &str) -> Result<Vec<ProjectFile>, ProviderError>;
}
