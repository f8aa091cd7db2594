// SPDX-License-Identifier: Apache-2.0
//! Surface identity types.

use core::fmt;

/// Stable identifier for a tracked planar surface.
///
/// The same physical surface keeps the same `PlaneId` across frames, and ids
/// are unique within one frame's snapshot. Backends disagree about what
/// identity looks like on the wire — some report an opaque string, others a
/// numeric handle — so every raw identity is canonicalized to its decimal
/// string form. A backend reporting `7` and one reporting `"7"` therefore
/// name the same plane, by construction.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlaneId(String);

impl PlaneId {
    /// Returns the canonical string form of this id.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlaneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for PlaneId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for PlaneId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl From<u64> for PlaneId {
    fn from(n: u64) -> Self {
        Self(n.to_string())
    }
}

/// Surface identity exactly as a backend reports it, before stringification.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum RawId {
    /// Numeric handle (draft ARCore-style backends).
    Number(u64),
    /// Opaque textual identifier.
    Text(String),
}

impl RawId {
    /// Canonicalizes this raw identity into a [`PlaneId`].
    #[must_use]
    pub fn canonicalize(&self) -> PlaneId {
        match self {
            Self::Number(n) => PlaneId::from(*n),
            Self::Text(s) => PlaneId::from(s.as_str()),
        }
    }
}
