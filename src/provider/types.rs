//! Types shared by the provider clients

use std::fmt;

/// Which hosting service a catalog row was resolved against. The display
/// strings are what the catalog's `source` column stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    CurseForge,
    Modrinth,
}

impl Source {
    /// Case-insensitive parse of a catalog `source` cell.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "curseforge" => Some(Source::CurseForge),
            "modrinth" => Some(Source::Modrinth),
            _ => None,
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::CurseForge => write!(f, "CurseForge"),
            Source::Modrinth => write!(f, "Modrinth"),
        }
    }
}

/// Normalized search result. Each client maps its own response shape
/// into this; `url` and `author` are best-effort and may be absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub project_id: String,
    pub url: Option<String>,
    pub author: Option<String>,
}

/// One published file (CurseForge) or version (Modrinth) of a project,
/// with the game versions it declares support for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectFile {
    pub id: String,
    pub game_versions: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_round_trips_through_display() {
        assert_eq!(Source::parse(&Source::CurseForge.to_string()), Some(Source::CurseForge));
        assert_eq!(Source::parse(&Source::Modrinth.to_string()), Some(Source::Modrinth));
    }

    #[test]
    fn source_parse_is_case_insensitive() {
        assert_eq!(Source::parse("curseforge"), Some(Source::CurseForge));
        assert_eq!(Source::parse(" MODRINTH "), Some(Source::Modrinth));
    }

    #[test]
    fn source_parse_rejects_unknown_values() {
        assert_eq!(Source::parse(""), None);
        assert_eq!(Source::parse("github"), None);
    }
}
