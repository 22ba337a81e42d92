use alloc::string::String;
use alloc::vec::Vec;

/// Download targets the release lookup can rewrite.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Platform {
    WindowsX64,
    MacArm64,
    MacIntel64,
}

impl Platform {
    /// All targets, in the order link rewrites are planned.
    pub const ALL: [Self; 3] = [Self::WindowsX64, Self::MacArm64, Self::MacIntel64];

    /// Identifier of the link element this target rewrites.
    pub fn element_id(self) -> &'static str {
        match self {
            Self::WindowsX64 => "windows-download",
            Self::MacArm64 => "mac-silicon-download",
            Self::MacIntel64 => "mac-intel-download",
        }
    }

    /// Both substrings an asset name must contain to match this target.
    ///
    /// Matching is case-sensitive: the publisher controls asset naming and
    /// uses these tokens verbatim.
    pub fn name_tokens(self) -> (&'static str, &'static str) {
        match self {
            Self::WindowsX64 => ("windows", "x64"),
            Self::MacArm64 => ("macos", "arm64"),
            Self::MacIntel64 => ("macos", "x64"),
        }
    }

    /// Whether `asset_name` matches this target.
    pub fn matches(self, asset_name: &str) -> bool {
        let (family, arch) = self.name_tokens();
        asset_name.contains(family) && asset_name.contains(arch)
    }
}

/// A downloadable file entry within release metadata.
///
/// Sourced fresh from the listing service on every page load; never
/// persisted.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReleaseAsset {
    pub name: String,
    pub download_url: String,
}

impl ReleaseAsset {
    pub fn new(name: impl Into<String>, download_url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            download_url: download_url.into(),
        }
    }
}

/// Metadata for the most recent published release of a repository.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Release {
    /// Release tag as published (e.g. `v1.2.0`).
    pub tag: String,
    /// Asset descriptors in the order the listing service returned them.
    pub assets: Vec<ReleaseAsset>,
}

/// A planned rewrite of one download link.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LinkUpdate {
    pub platform: Platform,
    pub url: String,
}

impl LinkUpdate {
    /// Identifier of the link element this update writes.
    pub fn element_id(&self) -> &'static str {
        self.platform.element_id()
    }
}

/// Observation state of a revealable content block.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RevealState {
    #[default]
    Unrevealed,
    /// Terminal: blocks never transition back.
    Revealed,
}
