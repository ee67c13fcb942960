// tagtune/src/types.rs

use crate::Error;
use std::collections::HashMap;
use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;

/// Tag UID - Newtype Pattern (1..=10 バイト)
///
/// Compared by exact byte equality only; the bytes are never interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct TagId(Vec<u8>);

impl TagId {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Upper-case hex with no separators, e.g. `04AABBCCDD11`.
    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex(self.as_bytes())
    }
}

impl TryFrom<&[u8]> for TagId {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.is_empty() || bytes.len() > crate::constants::MAX_TAG_ID_LEN {
            return Err(Error::InvalidTagLength(bytes.len()));
        }
        Ok(Self(bytes.to_vec()))
    }
}

impl<const N: usize> TryFrom<[u8; N]> for TagId {
    type Error = Error;

    fn try_from(bytes: [u8; N]) -> Result<Self, Self::Error> {
        Self::try_from(&bytes[..])
    }
}

impl FromStr for TagId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = crate::utils::parse_hex(s).map_err(Error::InvalidHex)?;
        Self::try_from(&bytes[..])
    }
}

impl TryFrom<String> for TagId {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<TagId> for String {
    fn from(id: TagId) -> Self {
        id.to_hex()
    }
}

impl fmt::Display for TagId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Read-only mapping from tag identifier to track index.
///
/// Built once (via `FromIterator` or the config builder) and then only
/// consulted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "HashMap<String, u16>", into = "HashMap<String, u16>")
)]
pub struct TrackMap(HashMap<TagId, u16>);

impl TrackMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, tag: &TagId) -> Option<u16> {
        self.0.get(tag).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&TagId, u16)> {
        self.0.iter().map(|(tag, &track)| (tag, track))
    }
}

impl FromIterator<(TagId, u16)> for TrackMap {
    fn from_iter<I: IntoIterator<Item = (TagId, u16)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl TryFrom<HashMap<String, u16>> for TrackMap {
    type Error = Error;

    fn try_from(raw: HashMap<String, u16>) -> Result<Self, Self::Error> {
        raw.into_iter()
            .map(|(hex, track)| -> Result<(TagId, u16), Error> { Ok((hex.parse()?, track)) })
            .collect()
    }
}

impl From<TrackMap> for HashMap<String, u16> {
    fn from(map: TrackMap) -> Self {
        map.0
            .into_iter()
            .map(|(tag, track)| (tag.to_hex(), track))
            .collect()
    }
}
