//! The link and QR placements used by the department's resume page.

use std::fmt;
use std::str::FromStr;

use crate::config::RenderOptions;
use crate::error::Error;
use crate::helper::DEFAULT_MARGIN;

/// Shared folder holding the student resumes.
pub const RESUME_FOLDER_URL: &str =
    "https://drive.google.com/drive/folders/1KIbdaQQ3MpBFnwkzisuw403gWa8ttQPX?usp=drive_link";

/// Where a QR code appears on the page.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Placement {
    /// Hero card next to the call-to-action buttons.
    Compact,
    /// Closing section, shown large for scanning from a screen.
    Showcase,
}

impl Placement {
    pub const ALL: [Placement; 2] = [Placement::Compact, Placement::Showcase];

    pub fn pixel_size(self) -> u32 {
        match self {
            Placement::Compact => 128,
            Placement::Showcase => 160,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Placement::Compact => "compact",
            Placement::Showcase => "showcase",
        }
    }

    /// Render options for `payload` at this placement, with the standard quiet zone.
    pub fn options(self, payload: impl Into<String>) -> RenderOptions {
        RenderOptions::new(payload)
            .pixel_size(self.pixel_size())
            .margin(DEFAULT_MARGIN)
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Placement {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Placement::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                Error::Config(format!(
                    "Unknown placement '{s}', expected compact or showcase"
                ))
            })
    }
}
