//! Wait-and-act conveniences for browser and desktop UI automation.
//!
//! Every lookup polls the underlying driver until it resolves or a time
//! budget runs out; every action tolerates a missing handle and reports
//! `false` instead of propagating driver errors. The driver itself, whether
//! a browser session or a desktop screen facility, is an opaque handle
//! supplied by the caller behind the [`Session`] and [`ScreenDriver`]
//! seams; a [`thirtyfour`]-based session binding ships in [`backend`].
//!
//! [`Automation`] and [`Desktop`] bundle a handle with a default wait
//! policy for the common case; the free functions underneath take an
//! explicit [`WaitConfig`] per call.

mod actions;
mod alert;
mod automation;
pub mod backend;
mod config;
mod desktop;
mod error;
mod frame;
#[cfg(test)]
pub(crate) mod mock;
mod screen;
mod session;
mod wait;

pub use actions::{click, find_clickable, find_element, find_elements, select_option, type_text};
pub use alert::{accept_alert, accept_alert_with_text, dismiss_alert, find_alert};
pub use automation::Automation;
pub use config::{WaitConfig, DEFAULT_INTERVAL, DEFAULT_TIMEOUT, DEFAULT_WINDOW_TIMEOUT};
pub use desktop::Desktop;
pub use error::{Error, Result};
pub use frame::with_frame;
pub use screen::{
    activate_window, click_image, locate_image, ImageMatch, ImageTarget, Point, ScreenDriver,
};
pub use session::{AlertHandle, ElementHandle, Selector, Session};
pub use wait::resolve;
