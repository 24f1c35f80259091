//! Indentation classification against a catalog of known page layouts.

use crate::error::{Error, Result};
use crate::model::Run;

/// How far a document's leftmost line start may sit from a profile's
/// level-0 offset for that profile to be selected.
const PROFILE_MATCH_TOLERANCE: i64 = 3;

/// One known indentation layout: the left offsets of levels 0, 1, 2, ...
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndentProfile {
    /// Profile name, for logs
    pub name: String,
    /// Ascending left offsets, one per level
    pub offsets: Vec<i64>,
}

impl IndentProfile {
    /// Create a profile from ascending level offsets.
    pub fn new(name: impl Into<String>, offsets: Vec<i64>) -> Self {
        Self {
            name: name.into(),
            offsets,
        }
    }

    /// The layouts the renderer produces for ISAP unified texts.
    pub fn catalog() -> Vec<Self> {
        vec![
            Self::new("standard", vec![96, 124, 152, 181, 209, 238]),
            Self::new("narrow", vec![71, 99, 128, 156, 184, 213]),
            Self::new("wide", vec![85, 113, 142, 170, 198, 227]),
        ]
    }

    /// Offset of level 0.
    pub fn base(&self) -> Option<i64> {
        self.offsets.first().copied()
    }

    /// Level whose offset lies within `tolerance` of `left`; the first
    /// (shallowest) match wins.
    pub fn level_of(&self, left: i64, tolerance: i64) -> Option<usize> {
        self.offsets
            .iter()
            .position(|&offset| (left - offset).abs() <= tolerance)
    }
}

/// Pick the profile matching the document's smallest line-start offset.
///
/// Runs are expected one per line. Returns `Ok(None)` for an empty stream.
pub fn select_profile<'a>(runs: &[Run], catalog: &'a [IndentProfile]) -> Result<Option<&'a IndentProfile>> {
    let Some(leftmost) = runs.iter().min_by_key(|run| run.left) else {
        return Ok(None);
    };

    let profile = catalog
        .iter()
        .find(|profile| {
            profile
                .base()
                .is_some_and(|base| (leftmost.left - base).abs() <= PROFILE_MATCH_TOLERANCE)
        })
        .ok_or_else(|| Error::UnknownIndentProfile {
            left: leftmost.left,
            location: leftmost.location(),
        })?;

    log::info!("indentation profile '{}' (leftmost line at {})", profile.name, leftmost.left);
    Ok(Some(profile))
}

/// Assign every run its indentation level under `profile`.
pub fn classify(runs: &mut [Run], profile: &IndentProfile, tolerance: i64) {
    let mut unmatched = 0;
    for run in runs.iter_mut() {
        run.indent_level = profile.level_of(run.left, tolerance);
        if run.indent_level.is_none() {
            unmatched += 1;
        }
    }
    log::debug!("{} lines without an indentation level", unmatched);
}
