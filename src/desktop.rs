//! High-level bundle of a screen-automation handle.

use crate::config::{WaitConfig, DEFAULT_WINDOW_TIMEOUT};
use crate::screen::{self, ImageMatch, ImageTarget, ScreenDriver};

/// A screen-automation facility paired with default wait policies.
///
/// Window activation carries its own, shorter default budget than image
/// searches; both can be overridden per call with the `*_within` variants.
#[derive(Debug, Clone)]
pub struct Desktop<D> {
    screen: D,
    wait: WaitConfig,
    window_wait: WaitConfig,
}

impl<D: ScreenDriver> Desktop<D> {
    /// Wrap a screen driver with the crate-default wait policies.
    pub fn new(screen: D) -> Self {
        Self::with_wait(screen, WaitConfig::default())
    }

    /// Wrap a screen driver with an explicit default wait policy for image
    /// searches.
    pub fn with_wait(screen: D, wait: WaitConfig) -> Self {
        Self {
            screen,
            wait,
            window_wait: WaitConfig::new(DEFAULT_WINDOW_TIMEOUT, wait.interval),
        }
    }

    /// The wrapped screen driver.
    pub fn screen(&self) -> &D {
        &self.screen
    }

    /// Wait for a reference image to appear on screen.
    pub async fn locate_image(&self, target: &ImageTarget) -> Option<ImageMatch> {
        screen::locate_image(&self.screen, target, &self.wait).await
    }

    pub async fn locate_image_within(
        &self,
        target: &ImageTarget,
        wait: &WaitConfig,
    ) -> Option<ImageMatch> {
        screen::locate_image(&self.screen, target, wait).await
    }

    /// Click the center of a previously located image match.
    pub async fn click_image(&self, located: Option<&ImageMatch>) -> bool {
        screen::click_image(&self.screen, located).await
    }

    /// Wait for the target image to appear, then click its center.
    pub async fn click_image_at(&self, target: &ImageTarget) -> bool {
        let located = self.locate_image(target).await;
        screen::click_image(&self.screen, located.as_ref()).await
    }

    /// Wait for a window with `title` to exist, then bring it to the
    /// foreground.
    pub async fn activate_window(&self, title: &str) -> bool {
        screen::activate_window(&self.screen, title, &self.window_wait).await
    }

    pub async fn activate_window_within(&self, title: &str, wait: &WaitConfig) -> bool {
        screen::activate_window(&self.screen, title, wait).await
    }
}
