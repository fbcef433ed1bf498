//! Capture orientation and the image orientation it implies

use crate::depth::DepthError;
use clap::ValueEnum;
use image::metadata::Orientation;
use std::fmt::Display;
use std::str::FromStr;

/// Orientation of the capture connection when the frame was taken
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum CaptureOrientation {
    Portrait,
    PortraitUpsideDown,
    LandscapeRight,
    LandscapeLeft,
}

/// How the stored frame is rotated relative to its upright presentation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageOrientation {
    /// Unrotated
    Up,
    /// Rotated 180°
    Down,
    /// Rotated 90° counter-clockwise
    Left,
    /// Rotated 90° clockwise
    Right,
}

impl CaptureOrientation {
    #[must_use]
    pub fn image_orientation(self) -> ImageOrientation {
        match self {
            Self::Portrait => ImageOrientation::Right,
            Self::PortraitUpsideDown => ImageOrientation::Left,
            Self::LandscapeRight => ImageOrientation::Up,
            Self::LandscapeLeft => ImageOrientation::Down,
        }
    }
}

impl FromStr for CaptureOrientation {
    type Err = DepthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim() {
            "portrait" => Self::Portrait,
            "portrait-upside-down" => Self::PortraitUpsideDown,
            "landscape-right" => Self::LandscapeRight,
            "landscape-left" => Self::LandscapeLeft,
            other => return Err(DepthError::UnknownOrientation(other.to_string())),
        })
    }
}

impl Display for CaptureOrientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Portrait => write!(f, "portrait"),
            Self::PortraitUpsideDown => write!(f, "portrait-upside-down"),
            Self::LandscapeRight => write!(f, "landscape-right"),
            Self::LandscapeLeft => write!(f, "landscape-left"),
        }
    }
}

impl ImageOrientation {
    /// Equivalent EXIF orientation
    #[must_use]
    pub fn to_exif(self) -> Orientation {
        match self {
            Self::Up => Orientation::NoTransforms,
            Self::Down => Orientation::Rotate180,
            Self::Left => Orientation::Rotate270,
            Self::Right => Orientation::Rotate90,
        }
    }

    /// True when presenting the frame swaps its width and height
    #[inline(always)]
    #[must_use]
    pub fn swaps_dimensions(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }
}

impl From<CaptureOrientation> for ImageOrientation {
    fn from(orientation: CaptureOrientation) -> Self {
        orientation.image_orientation()
    }
}

impl Display for ImageOrientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Up => write!(f, "up"),
            Self::Down => write!(f, "down"),
            Self::Left => write!(f, "left"),
            Self::Right => write!(f, "right"),
        }
    }
}
