//! Image- and window-based desktop automation.
//!
//! The screen-automation facility (screenshot search, synthetic clicks,
//! window management) is supplied by the caller behind [`ScreenDriver`],
//! the desktop counterpart of [`crate::session::Session`].

use std::path::PathBuf;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::config::WaitConfig;
use crate::error::Result;
use crate::wait;

/// An absolute screen coordinate in physical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

/// A reference image to search for on the visible screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageTarget {
    /// Path to the reference image file.
    pub path: PathBuf,
    /// Match against a grayscale conversion of the screen.
    pub grayscale: bool,
    /// Minimum match confidence, in `0.0..=1.0`.
    pub confidence: f32,
}

impl ImageTarget {
    /// A target with grayscale matching and 0.9 confidence.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            grayscale: true,
            confidence: 0.9,
        }
    }

    #[must_use]
    pub fn grayscale(mut self, grayscale: bool) -> Self {
        self.grayscale = grayscale;
        self
    }

    #[must_use]
    pub fn confidence(mut self, confidence: f32) -> Self {
        self.confidence = confidence;
        self
    }
}

/// A located on-screen occurrence of a reference image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageMatch {
    /// Center of the matched region.
    pub center: Point,
}

/// A desktop screen-automation facility.
///
/// Owned by the caller; this crate only adds waiting and null-safety on
/// top of it.
#[async_trait]
pub trait ScreenDriver: Send + Sync {
    /// Search the visible screen once for the target image.
    async fn locate_center(&self, target: &ImageTarget) -> Result<Option<Point>>;

    /// Click at an absolute screen coordinate.
    async fn click_at(&self, point: Point) -> Result<()>;

    /// Whether a window with this title currently exists.
    async fn window_exists(&self, title: &str) -> Result<bool>;

    /// Bring the window with this title to the foreground.
    async fn activate_window(&self, title: &str) -> Result<()>;
}

/// Wait for a reference image to appear on screen.
pub async fn locate_image<D: ScreenDriver>(
    screen: &D,
    target: &ImageTarget,
    wait: &WaitConfig,
) -> Option<ImageMatch> {
    wait::resolve(
        move || async move {
            match screen.locate_center(target).await {
                Ok(Some(center)) => Some(ImageMatch { center }),
                _ => None,
            }
        },
        wait,
    )
    .await
}

/// Click the center of a previously located image match.
pub async fn click_image<D: ScreenDriver>(screen: &D, located: Option<&ImageMatch>) -> bool {
    let Some(located) = located else {
        return false;
    };
    screen.click_at(located.center).await.is_ok()
}

/// Wait for a window with `title` to exist, then bring it to the
/// foreground. Each step's failure is logged and reported as `false`.
pub async fn activate_window<D: ScreenDriver>(screen: &D, title: &str, wait: &WaitConfig) -> bool {
    let exists = wait::resolve(
        move || async move { matches!(screen.window_exists(title).await, Ok(true)).then_some(()) },
        wait,
    )
    .await;
    if exists.is_none() {
        warn!(title, "no window with this title appeared");
        return false;
    }

    if let Err(error) = screen.activate_window(title).await {
        warn!(title, %error, "failed to bring the window to the foreground");
        return false;
    }
    true
}
