//! Best-version selection over a project's published files

use tracing::warn;

use crate::provider::ModProvider;
use crate::version::mcver::{McVersion, max_mc_version};

/// Highest supported Minecraft version across all of a project's files,
/// together with the id of the file that provides it.
///
/// Each file contributes its own maximum supported version; the file
/// whose maximum is globally highest wins. Comparison is strict `>`, so
/// on an exact tie the earliest file in the provider's listing order is
/// kept (date-descending for CurseForge, service order for Modrinth).
///
/// A listing failure is caught here and reported as `(None, None)`; the
/// caller moves on to the next row.
pub async fn best_version_and_id(
    provider: &dyn ModProvider,
    project_id: &str,
) -> (Option<String>, Option<String>) {
    let files = match provider.list_files(project_id).await {
        Ok(files) => files,
        Err(e) => {
            warn!("listing files for project {} failed: {}", project_id, e);
            return (None, None);
        }
    };

    let mut best: Option<(McVersion, String, String)> = None;
    for file in files {
        let Some(candidate) = max_mc_version(&file.game_versions) else {
            continue;
        };
        let Some(parsed) = McVersion::parse(candidate) else {
            continue;
        };
        if best.as_ref().is_none_or(|(b, _, _)| parsed > *b) {
            best = Some((parsed, candidate.to_string(), file.id));
        }
    }

    match best {
        Some((_, version, id)) => (Some(version), Some(id)),
        None => (None, None),
    }
}
