//! Project resolution across providers
//!
//! CurseForge is preferred when a client exists; Modrinth is the
//! fallback. A search error at either provider counts as "no hit" there,
//! so a flaky CurseForge never blocks the Modrinth attempt.

use tracing::{debug, warn};

use crate::provider::{ModProvider, SearchHit, Source};

/// Outcome of a successful name search: enough to fill a catalog row's
/// identifier fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    pub source: Source,
    pub project_id: String,
    pub url: Option<String>,
    pub author: Option<String>,
}

impl MatchResult {
    fn from_hit(source: Source, hit: SearchHit) -> Self {
        Self {
            source,
            project_id: hit.project_id,
            url: hit.url,
            author: hit.author,
        }
    }
}

/// Finds a project for `mod_name`. When the CurseForge client is present
/// and its search hits, Modrinth is never contacted for this mod.
pub async fn resolve(
    curseforge: Option<&dyn ModProvider>,
    modrinth: &dyn ModProvider,
    mod_name: &str,
) -> Option<MatchResult> {
    if let Some(cf) = curseforge {
        match cf.search(mod_name).await {
            Ok(Some(hit)) => return Some(MatchResult::from_hit(cf.source(), hit)),
            Ok(None) => debug!("no CurseForge hit for {:?}", mod_name),
            Err(e) => warn!("CurseForge search failed for {:?}: {}", mod_name, e),
        }
    }

    match modrinth.search(mod_name).await {
        Ok(Some(hit)) => Some(MatchResult::from_hit(modrinth.source(), hit)),
        Ok(None) => {
            debug!("no Modrinth hit for {:?}", mod_name);
            None
        }
        Err(e) => {
            warn!("Modrinth search failed for {:?}: {}", mod_name, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::{MockModProvider, ProviderError};

    fn hit(project_id: &str) -> SearchHit {
        SearchHit {
            project_id: project_id.to_string(),
            url: Some(format!("https://example.com/{}", project_id)),
            author: Some("someone".to_string()),
        }
    }

    #[tokio::test]
    async fn curseforge_hit_short_circuits_modrinth() {
        let mut curseforge = MockModProvider::new();
        curseforge.expect_source().return_const(Source::CurseForge);
        curseforge
            .expect_search()
            .times(1)
            .returning(|_| Ok(Some(hit("12345"))));

        let mut modrinth = MockModProvider::new();
        modrinth.expect_search().times(0);

        let result = resolve(Some(&curseforge), &modrinth, "Sodium")
            .await
            .unwrap();

        assert_eq!(result.source, Source::CurseForge);
        assert_eq!(result.project_id, "12345");
    }

    #[tokio::test]
    async fn missing_curseforge_client_falls_through_to_modrinth() {
        let mut modrinth = MockModProvider::new();
        modrinth.expect_source().return_const(Source::Modrinth);
        modrinth
            .expect_search()
            .times(1)
            .returning(|_| Ok(Some(hit("abc123"))));

        let result = resolve(None, &modrinth, "Sodium").await.unwrap();

        assert_eq!(result.source, Source::Modrinth);
        assert_eq!(result.project_id, "abc123");
    }

    #[tokio::test]
    async fn curseforge_miss_falls_through_to_modrinth() {
        let mut curseforge = MockModProvider::new();
        curseforge.expect_search().times(1).returning(|_| Ok(None));

        let mut modrinth = MockModProvider::new();
        modrinth.expect_source().return_const(Source::Modrinth);
        modrinth
            .expect_search()
            .times(1)
            .returning(|_| Ok(Some(hit("abc123"))));

        let result = resolve(Some(&curseforge), &modrinth, "Sodium")
            .await
            .unwrap();

        assert_eq!(result.source, Source::Modrinth);
    }

    #[tokio::test]
    async fn curseforge_error_falls_through_to_modrinth() {
        let mut curseforge = MockModProvider::new();
        curseforge
            .expect_search()
            .times(1)
            .returning(|_| Err(ProviderError::InvalidResponse("boom".to_string())));

        let mut modrinth = MockModProvider::new();
        modrinth.expect_source().return_const(Source::Modrinth);
        modrinth
            .expect_search()
            .times(1)
            .returning(|_| Ok(Some(hit("abc123"))));

        let result = resolve(Some(&curseforge), &modrinth, "Sodium")
            .await
            .unwrap();

        assert_eq!(result.source, Source::Modrinth);
    }

    #[tokio::test]
    async fn both_providers_failing_yields_none() {
        let mut curseforge = MockModProvider::new();
        curseforge
            .expect_search()
            .times(1)
            .returning(|_| Err(ProviderError::InvalidResponse("boom".to_string())));

        let mut modrinth = MockModProvider::new();
        modrinth.expect_search().times(1).returning(|_| Ok(None));

        let result = resolve(Some(&curseforge), &modrinth, "Sodium").await;

        assert_eq!(result, None);
    }
}
