//! Minecraft version parsing and comparison
//!
//! Providers tag each published file with the game versions it supports.
//! Those lists mix release versions ("1.21.5") with loader names and
//! snapshot identifiers; [`mcver`] parses only strict release versions and
//! lets callers skip everything else.

pub mod mcver;
