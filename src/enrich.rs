//! Per-row enrichment loop
//!
//! Rows are processed strictly in input order, one request chain at a
//! time, with a fixed pause between rows. A row's failures never abort
//! the run; they just leave its derived fields absent.

use std::time::Duration;

use tokio::time::sleep;
use tracing::debug;

use crate::catalog::{ModRecord, normalized};
use crate::config::{FLAG_MAJOR_MINOR, SLEEP_BETWEEN_MODS};
use crate::provider::{ModProvider, Source};
use crate::resolver;
use crate::selector;
use crate::version::mcver::meets_threshold;

/// Drives resolve -> select best version -> flag for every catalog row.
pub struct Enricher<'a> {
    curseforge: Option<&'a dyn ModProvider>,
    modrinth: &'a dyn ModProvider,
    threshold: (u64, u64),
    delay: Duration,
}

impl<'a> Enricher<'a> {
    pub fn new(curseforge: Option<&'a dyn ModProvider>, modrinth: &'a dyn ModProvider) -> Self {
        Self {
            curseforge,
            modrinth,
            threshold: FLAG_MAJOR_MINOR,
            delay: SLEEP_BETWEEN_MODS,
        }
    }

    /// Overrides the inter-row pacing delay. Tests use zero.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    fn provider_for(&self, source: Source) -> Option<&'a dyn ModProvider> {
        match source {
            Source::CurseForge => self.curseforge,
            Source::Modrinth => Some(self.modrinth),
        }
    }

    /// Enriches every record in place, in input order. Rows with a blank
    /// mod name are left untouched and consume no pacing delay.
    pub async fn run(&self, records: &mut [ModRecord]) {
        for record in records.iter_mut() {
            if record.mod_name.trim().is_empty() {
                continue;
            }
            self.enrich_record(record).await;
            sleep(self.delay).await;
        }
    }

    async fn enrich_record(&self, record: &mut ModRecord) {
        let mod_name = record.mod_name.trim().to_string();

        let mut source = normalized(&record.source).and_then(Source::parse);
        let mut project_id = normalized(&record.project_id).map(str::to_string);

        if project_id.is_none() {
            if let Some(found) = resolver::resolve(self.curseforge, self.modrinth, &mod_name).await
            {
                record.source = found.source.to_string();
                record.project_id = found.project_id.clone();
                // url/author are only filled in, never clobbered
                if normalized(&record.url).is_none() {
                    if let Some(url) = &found.url {
                        record.url = url.clone();
                    }
                }
                if normalized(&record.author).is_none() {
                    if let Some(author) = &found.author {
                        record.author = author.clone();
                    }
                }
                source = Some(found.source);
                project_id = Some(found.project_id);
            }
        }

        let (latest, file_id) = match (source, project_id) {
            (Some(source), Some(project_id)) => match self.provider_for(source) {
                Some(provider) => selector::best_version_and_id(provider, &project_id).await,
                None => {
                    debug!("{} disabled, skipping lookup for {:?}", source, mod_name);
                    (None, None)
                }
            },
            _ => (None, None),
        };

        if let Some(latest) = &latest {
            record.latest_version_available = latest.clone();
        }
        if let Some(file_id) = file_id {
            record.file_id = file_id;
        }

        // Recomputed on every run so a stale flag cannot outlive a mod
        // that no longer resolves.
        record.compatibility_flag = compatibility_flag(latest.as_deref(), self.threshold);
    }
}

/// "1.21.x"-style marker when `latest` meets the threshold, otherwise
/// absent. Absence is meaningful and distinct from any set value.
pub fn compatibility_flag(latest: Option<&str>, threshold: (u64, u64)) -> Option<String> {
    match latest {
        Some(v) if meets_threshold(v, threshold) => {
            Some(format!("{}.{}.x", threshold.0, threshold.1))
        }
        _ => None,
    }
}
