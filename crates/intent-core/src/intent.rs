//! Keyword-based intent classification.
//!
//! The mock stands in for a real classification model, so the rule is
//! deliberately trivial: lowercase the input and scan ordered keyword
//! tables, first match wins. The keyword lists, their priority, and
//! the fixed confidence are load-bearing for whatever system consumes
//! this mock — do not reorder or "improve" them.

use serde::{Deserialize, Serialize};

/// Keywords that select [`Intent::ImageGeneration`]. Checked first.
pub const IMAGE_KEYWORDS: &[&str] = &["image", "draw", "picture"];

/// Keywords that select [`Intent::VideoGeneration`]. Checked second.
pub const VIDEO_KEYWORDS: &[&str] = &["video", "movie"];

/// The confidence reported with every classification.
///
/// A constant placeholder — the mock does not vary it by match
/// strength.
pub const CONFIDENCE: f64 = 0.95;

/// An intent label categorizing the purpose of a user's text input.
///
/// Serializes in `snake_case` to match the wire format of the model
/// this mock replaces.
///
/// # Example
///
/// ```
/// use intent_core::Intent;
///
/// let json = serde_json::to_string(&Intent::ImageGeneration).unwrap();
/// assert_eq!(json, "\"image_generation\"");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    /// Default label when no keyword matches.
    Chat,
    /// The text asks for an image.
    ImageGeneration,
    /// The text asks for a video.
    VideoGeneration,
}

impl Intent {
    /// The wire-format label for this intent.
    ///
    /// # Example
    ///
    /// ```
    /// use intent_core::Intent;
    ///
    /// assert_eq!(Intent::Chat.as_str(), "chat");
    /// assert_eq!(Intent::VideoGeneration.as_str(), "video_generation");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Chat => "chat",
            Intent::ImageGeneration => "image_generation",
            Intent::VideoGeneration => "video_generation",
        }
    }
}

/// Classify free text into an [`Intent`].
///
/// The input is lowercased and tested against the keyword tables in
/// priority order: image keywords win over video keywords, and any
/// text matching neither falls through to [`Intent::Chat`]. Matching
/// is substring-based, so `"imagery"` matches `image`.
///
/// # Example
///
/// ```
/// use intent_core::{classify, Intent};
///
/// assert_eq!(classify("please draw me a cat"), Intent::ImageGeneration);
/// assert_eq!(classify("make a movie trailer"), Intent::VideoGeneration);
/// assert_eq!(classify("tell me a joke"), Intent::Chat);
/// ```
pub fn classify(text: &str) -> Intent {
    let text = text.to_lowercase();

    if IMAGE_KEYWORDS.iter().any(|kw| text.contains(kw)) {
        Intent::ImageGeneration
    } else if VIDEO_KEYWORDS.iter().any(|kw| text.contains(kw)) {
        Intent::VideoGeneration
    } else {
        Intent::Chat
    }
}
