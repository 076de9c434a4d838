//! Strict release-version parsing

use std::sync::LazyLock;

use regex::Regex;

/// Release versions only: "1.21" or "1.21.5". Anchored at both ends so
/// loader names, snapshots and anything with letters fail to match.
static MC_VERSION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)\.(\d+)(?:\.(\d+))?$").expect("valid version regex"));

/// A parsed Minecraft release version, ordered by (major, minor, patch).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct McVersion {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl McVersion {
    /// Parses "1.21" (patch defaults to 0) or "1.21.5". Returns `None`
    /// for anything else ("Fabric", "24w14a", "Java 17", "").
    pub fn parse(s: &str) -> Option<Self> {
        let caps = MC_VERSION_RE.captures(s.trim())?;
        Some(Self {
            major: caps[1].parse().ok()?,
            minor: caps[2].parse().ok()?,
            patch: match caps.get(3) {
                Some(m) => m.as_str().parse().ok()?,
                None => 0,
            },
        })
    }

    /// True when (major, minor) is at or above the threshold pair.
    /// Patch is ignored, so "1.21.0" meets (1, 21).
    pub fn meets(&self, threshold: (u64, u64)) -> bool {
        (self.major, self.minor) >= threshold
    }
}

/// Highest version among `versions`, returned as the original input
/// string. Unparsable entries are skipped. Comparison is strict `>`, so
/// the first occurrence wins on exact ties. `None` when nothing parses.
pub fn max_mc_version<S: AsRef<str>>(versions: &[S]) -> Option<&str> {
    let mut best: Option<(McVersion, &str)> = None;
    for v in versions {
        let s = v.as_ref();
        let Some(parsed) = McVersion::parse(s) else {
            continue;
        };
        if best.is_none_or(|(b, _)| parsed > b) {
            best = Some((parsed, s));
        }
    }
    best.map(|(_, s)| s)
}

/// False when the string fails to parse.
pub fn meets_threshold(version: &str, threshold: (u64, u64)) -> bool {
    McVersion::parse(version).is_some_and(|v| v.meets(threshold))
}
