//! Concrete driver bindings for the session seam.

pub mod webdriver;
