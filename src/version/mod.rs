//! Version key extraction and ordering.
//!
//! Release tags of the target feed are not strict semantic versions (e.g.
//! `145.0.7632.45-1.1`), so comparison works on a numeric projection: all
//! maximal digit runs are extracted in order, parsed as integers, and
//! truncated to the first four. Two keys compare lexicographically as
//! integer tuples with no zero padding, so `145.0.7632.45-1.1` compares
//! only on `145, 0, 7632, 45`.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

use crate::constants::MAX_VERSION_COMPONENTS;

fn digit_runs() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\d+").expect("digit-run pattern is valid"))
}

/// Comparable numeric form of a version tag.
///
/// Ordering is derived from the inner `Vec<u64>`, which gives exactly the
/// element-by-element integer tuple comparison the feed's tag conventions
/// require; a strictly shorter key that is a prefix of a longer one orders
/// before it.
///
/// # Examples
///
/// ```
/// use chromup::version::VersionKey;
///
/// let latest = VersionKey::parse("145.0.7632.45-1.1");
/// assert_eq!(latest.components(), &[145, 0, 7632, 45]);
///
/// let installed = VersionKey::parse("1.0.0");
/// assert!(latest > installed);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VersionKey(Vec<u64>);

impl VersionKey {
    /// Projects a version tag onto its numeric key, keeping at most
    /// [`MAX_VERSION_COMPONENTS`] leading components.
    pub fn parse(tag: &str) -> Self {
        let components = digit_runs()
            .find_iter(tag)
            .filter_map(|run| run.as_str().parse().ok())
            .take(MAX_VERSION_COMPONENTS)
            .collect();
        Self(components)
    }

    /// The ordered numeric components of this key.
    pub fn components(&self) -> &[u64] {
        &self.0
    }

    /// True when the tag contained no digits at all.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for VersionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for component in &self.0 {
            if !first {
                write!(f, ".")?;
            }
            write!(f, "{component}")?;
            first = false;
        }
        Ok(())
    }
}
