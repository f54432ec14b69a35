// ============================================================================
// vidgen-core/src/params.rs
// ============================================================================
//
// GENERATION PARAMETERS: Enumerated Request Parameters and Validation
//
// This module defines the enumerated parameters accepted by the remote video
// generation API (model tier, clip duration, resolution) and the pre-flight
// validation applied to a request before any network call is made.
//
// KEY COMPONENTS:
// - VideoModel / ClipDuration / Resolution: wire-value enums with FromStr
// - GenerationRequest: immutable parameter set for one job submission
//
// Invalid values are rejected with messages naming the valid set, so the
// caller can abort with a non-zero exit status without touching the network.

use crate::error::{CoreError, CoreResult};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

// ============================================================================
// MODEL
// ============================================================================

/// Model tier used for generation. The two high-resolution sizes are only
/// legal with [`VideoModel::Sora2Pro`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VideoModel {
    Sora2,
    Sora2Pro,
}

impl VideoModel {
    /// All valid wire values, in display order.
    pub const ALL: [VideoModel; 2] = [VideoModel::Sora2, VideoModel::Sora2Pro];

    /// The wire value sent to the API.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            VideoModel::Sora2 => "sora-2",
            VideoModel::Sora2Pro => "sora-2-pro",
        }
    }

    fn valid_values() -> String {
        Self::ALL
            .iter()
            .map(|m| m.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for VideoModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VideoModel {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        Self::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| {
                CoreError::Validation(format!(
                    "Invalid model '{}'. Valid: {}",
                    s,
                    Self::valid_values()
                ))
            })
    }
}

// ============================================================================
// DURATION
// ============================================================================

/// Clip length in seconds. The API accepts exactly these three values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipDuration {
    Seconds4,
    Seconds8,
    Seconds12,
}

impl ClipDuration {
    pub const ALL: [ClipDuration; 3] = [
        ClipDuration::Seconds4,
        ClipDuration::Seconds8,
        ClipDuration::Seconds12,
    ];

    /// The wire value sent to the API (the API expects a string).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ClipDuration::Seconds4 => "4",
            ClipDuration::Seconds8 => "8",
            ClipDuration::Seconds12 => "12",
        }
    }

    /// Clip length as a number of seconds.
    #[must_use]
    pub fn as_secs(self) -> u32 {
        match self {
            ClipDuration::Seconds4 => 4,
            ClipDuration::Seconds8 => 8,
            ClipDuration::Seconds12 => 12,
        }
    }

    fn valid_values() -> String {
        Self::ALL
            .iter()
            .map(|d| d.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for ClipDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClipDuration {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        Self::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| {
                CoreError::Validation(format!(
                    "Invalid seconds '{}'. Valid: {}",
                    s,
                    Self::valid_values()
                ))
            })
    }
}

// ============================================================================
// RESOLUTION
// ============================================================================

/// Output resolution as WIDTHxHEIGHT. The 1792-pixel sizes require the pro
/// model tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Landscape720p,
    Portrait720p,
    Landscape1792,
    Portrait1792,
}

impl Resolution {
    pub const ALL: [Resolution; 4] = [
        Resolution::Landscape720p,
        Resolution::Portrait720p,
        Resolution::Landscape1792,
        Resolution::Portrait1792,
    ];

    /// The wire value sent to the API.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Resolution::Landscape720p => "1280x720",
            Resolution::Portrait720p => "720x1280",
            Resolution::Landscape1792 => "1792x1024",
            Resolution::Portrait1792 => "1024x1792",
        }
    }

    /// Whether this resolution is only available with the pro model tier.
    #[must_use]
    pub fn requires_pro(self) -> bool {
        matches!(self, Resolution::Landscape1792 | Resolution::Portrait1792)
    }

    fn valid_values() -> String {
        Self::ALL
            .iter()
            .map(|r| r.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Resolution {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        Self::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| {
                CoreError::Validation(format!(
                    "Invalid size '{}'. Valid: {}",
                    s,
                    Self::valid_values()
                ))
            })
    }
}

// ============================================================================
// GENERATION REQUEST
// ============================================================================

/// Parameter set for one video generation job. Immutable once submitted.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    /// Text prompt describing the video to generate
    pub prompt: String,

    /// Model tier
    pub model: VideoModel,

    /// Clip duration
    pub duration: ClipDuration,

    /// Output resolution
    pub resolution: Resolution,

    /// Optional reference image for image-to-video generation
    pub reference_image: Option<PathBuf>,
}

impl GenerationRequest {
    pub fn new(
        prompt: impl Into<String>,
        model: VideoModel,
        duration: ClipDuration,
        resolution: Resolution,
    ) -> Self {
        Self {
            prompt: prompt.into(),
            model,
            duration,
            resolution,
            reference_image: None,
        }
    }

    /// Attaches a reference image for image-to-video generation.
    #[must_use]
    pub fn with_reference_image(mut self, path: impl Into<PathBuf>) -> Self {
        self.reference_image = Some(path.into());
        self
    }

    /// Pre-flight validation. Fails before any network call when the
    /// parameter combination is illegal or the reference image is missing.
    pub fn validate(&self) -> CoreResult<()> {
        if self.resolution.requires_pro() && self.model != VideoModel::Sora2Pro {
            return Err(CoreError::Validation(format!(
                "Size '{}' requires model '{}'",
                self.resolution,
                VideoModel::Sora2Pro
            )));
        }

        if let Some(image) = &self.reference_image {
            if !image.is_file() {
                return Err(CoreError::InputNotFound(image.display().to_string()));
            }
        }

        Ok(())
    }
}
