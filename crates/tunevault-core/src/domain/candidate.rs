//! Provider search candidate types.
//!
//! The gateway normalizes each provider's wire shapes into [`TrackHit`]s
//! grouped per provider; the pipeline flattens those groups into
//! [`TrackCandidate`]s tagged with their originating provider before the
//! quality selection runs.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Upstream music providers the gateway can search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    Qq,
    Xiami,
    Netease,
}

impl Provider {
    /// All providers, in the order they are searched.
    pub const ALL: [Self; 3] = [Self::Qq, Self::Xiami, Self::Netease];

    /// Stable string form used in storage and display.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Qq => "qq",
            Self::Xiami => "xiami",
            Self::Netease => "netease",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Provider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "qq" => Ok(Self::Qq),
            "xiami" => Ok(Self::Xiami),
            "netease" => Ok(Self::Netease),
            other => Err(format!("unknown provider '{other}'")),
        }
    }
}

/// Quality tier label stored on a resource.
///
/// Derived from a candidate's availability flags, never reported directly
/// by a provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Quality {
    #[serde(rename = "lossless")]
    Lossless,
    #[serde(rename = "320kbps")]
    Kbps320,
    #[serde(rename = "192kbps")]
    Kbps192,
    #[serde(rename = "unknown")]
    Unknown,
}

impl Quality {
    /// Map availability flags to the stored tier label.
    ///
    /// Priority: lossless, then 320kbps, then 192kbps, else unknown.
    pub const fn from_flags(lossless: bool, kbps320: bool, kbps192: bool) -> Self {
        if lossless {
            Self::Lossless
        } else if kbps320 {
            Self::Kbps320
        } else if kbps192 {
            Self::Kbps192
        } else {
            Self::Unknown
        }
    }

    /// Stable string form used in storage and display.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lossless => "lossless",
            Self::Kbps320 => "320kbps",
            Self::Kbps192 => "192kbps",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Quality {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lossless" => Ok(Self::Lossless),
            "320kbps" => Ok(Self::Kbps320),
            "192kbps" => Ok(Self::Kbps192),
            "unknown" => Ok(Self::Unknown),
            other => Err(format!("unknown quality tier '{other}'")),
        }
    }
}

/// One normalized search hit, not yet tagged with its provider.
///
/// This is the uniform shape every provider's results are parsed into
/// before they cross the gateway port.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackHit {
    /// Provider-native identifier, needed later for URL resolution.
    pub native_id: String,
    /// Album name as reported by the provider.
    pub album_name: String,
    /// Artist name as reported by the provider.
    pub artist_name: String,
    /// Song title as reported by the provider.
    pub song_name: String,
    /// Provider reports the track as licensed.
    pub copyrighted: bool,
    /// Provider permits downloading the track.
    pub downloadable: bool,
    /// A lossless encode is available.
    pub lossless: bool,
    /// A 320kbps encode is available.
    pub kbps320: bool,
    /// A 192kbps encode is available.
    pub kbps192: bool,
}

/// A search hit tagged with the provider it came from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackCandidate {
    /// Provider this candidate originated from.
    pub source: Provider,
    /// Provider-native identifier, needed later for URL resolution.
    pub native_id: String,
    /// Album name as reported by the provider.
    pub album_name: String,
    /// Artist name as reported by the provider.
    pub artist_name: String,
    /// Song title as reported by the provider.
    pub song_name: String,
    /// Provider reports the track as licensed.
    pub copyrighted: bool,
    /// Provider permits downloading the track.
    pub downloadable: bool,
    /// A lossless encode is available.
    pub lossless: bool,
    /// A 320kbps encode is available.
    pub kbps320: bool,
    /// A 192kbps encode is available.
    pub kbps192: bool,
}

impl TrackCandidate {
    /// Tag a normalized hit with its originating provider.
    pub fn tagged(source: Provider, hit: TrackHit) -> Self {
        Self {
            source,
            native_id: hit.native_id,
            album_name: hit.album_name,
            artist_name: hit.artist_name,
            song_name: hit.song_name,
            copyrighted: hit.copyrighted,
            downloadable: hit.downloadable,
            lossless: hit.lossless,
            kbps320: hit.kbps320,
            kbps192: hit.kbps192,
        }
    }

    /// Quality tier label this candidate would be stored with.
    pub const fn quality(&self) -> Quality {
        Quality::from_flags(self.lossless, self.kbps320, self.kbps192)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quality_prefers_lossless_over_everything() {
        assert_eq!(Quality::from_flags(true, true, true), Quality::Lossless);
    }

    #[test]
    fn quality_prefers_320_over_192() {
        assert_eq!(Quality::from_flags(false, true, true), Quality::Kbps320);
    }

    #[test]
    fn quality_falls_back_to_192_then_unknown() {
        assert_eq!(Quality::from_flags(false, false, true), Quality::Kbps192);
        assert_eq!(Quality::from_flags(false, false, false), Quality::Unknown);
    }

    #[test]
    fn quality_serializes_to_tier_labels() {
        assert_eq!(Quality::Kbps320.as_str(), "320kbps");
        assert_eq!("lossless".parse::<Quality>(), Ok(Quality::Lossless));
    }

    #[test]
    fn provider_round_trips_through_str() {
        for provider in Provider::ALL {
            assert_eq!(provider.as_str().parse::<Provider>(), Ok(provider));
        }
    }
}
