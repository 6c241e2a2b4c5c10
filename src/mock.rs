//! Hand-rolled driver doubles for the unit tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::error::{Error, Result};
use crate::screen::{ImageTarget, Point, ScreenDriver};
use crate::session::{AlertHandle, ElementHandle, Selector, Session};

/// Shared, ordered record of the driver calls a test exercised.
#[derive(Debug, Clone, Default)]
pub struct CallLog(Arc<Mutex<Vec<String>>>);

impl CallLog {
    pub fn push(&self, entry: impl Into<String>) {
        self.0.lock().expect("call log lock poisoned").push(entry.into());
    }

    pub fn entries(&self) -> Vec<String> {
        self.0.lock().expect("call log lock poisoned").clone()
    }

    pub fn contains(&self, entry: &str) -> bool {
        self.entries().iter().any(|e| e == entry)
    }
}

#[derive(Debug, Clone)]
pub struct MockElement {
    pub log: CallLog,
    pub click_ok: bool,
    pub clear_ok: bool,
    /// Value attribute the element reports after a clear.
    pub value: Option<String>,
    pub interactable: bool,
}

impl MockElement {
    pub fn new(log: CallLog) -> Self {
        Self {
            log,
            click_ok: true,
            clear_ok: true,
            value: None,
            interactable: true,
        }
    }
}

#[async_trait]
impl ElementHandle for MockElement {
    async fn click(&self) -> Result<()> {
        self.log.push("click");
        if self.click_ok {
            Ok(())
        } else {
            Err(Error::driver("click rejected"))
        }
    }

    async fn clear(&self) -> Result<()> {
        self.log.push("clear");
        if self.clear_ok {
            Ok(())
        } else {
            Err(Error::driver("clear rejected"))
        }
    }

    async fn send_keys(&self, text: &str) -> Result<()> {
        self.log.push(format!("send_keys:{text}"));
        Ok(())
    }

    async fn value(&self) -> Result<Option<String>> {
        Ok(self.value.clone())
    }

    async fn is_interactable(&self) -> Result<bool> {
        Ok(self.interactable)
    }

    async fn select_visible_text(&self, text: &str) -> Result<()> {
        self.log.push(format!("select:{text}"));
        Ok(())
    }

    fn script_arg(&self) -> Result<Value> {
        Ok(json!({ "element-6066-11e4-a52e-4f735466cecf": "mock" }))
    }
}

#[derive(Debug, Clone)]
pub struct MockAlert {
    pub log: CallLog,
    pub text: String,
}

impl MockAlert {
    pub fn new(log: CallLog, text: impl Into<String>) -> Self {
        Self {
            log,
            text: text.into(),
        }
    }
}

#[async_trait]
impl AlertHandle for MockAlert {
    async fn text(&self) -> Result<String> {
        Ok(self.text.clone())
    }

    async fn accept(&self) -> Result<()> {
        self.log.push("alert_accept");
        Ok(())
    }

    async fn dismiss(&self) -> Result<()> {
        self.log.push("alert_dismiss");
        Ok(())
    }
}

pub struct MockSession {
    pub log: CallLog,
    /// Template element returned by successful finds.
    pub element: MockElement,
    /// Elements returned by `find_all` once finds succeed.
    pub elements: Vec<MockElement>,
    /// 1-based attempt at which finds start succeeding; `usize::MAX` never.
    pub find_succeeds_after: usize,
    pub find_attempts: AtomicUsize,
    pub alert: Option<MockAlert>,
    pub enter_frame_ok: bool,
    pub execute_ok: bool,
}

impl MockSession {
    /// A session whose finds succeed immediately.
    pub fn new() -> Self {
        let log = CallLog::default();
        Self {
            element: MockElement::new(log.clone()),
            elements: vec![MockElement::new(log.clone())],
            find_succeeds_after: 1,
            find_attempts: AtomicUsize::new(0),
            alert: None,
            enter_frame_ok: true,
            execute_ok: true,
            log,
        }
    }

    /// A session whose finds never succeed.
    pub fn never_found() -> Self {
        Self {
            find_succeeds_after: usize::MAX,
            ..Self::new()
        }
    }

    /// A session whose finds start succeeding on the given 1-based attempt.
    pub fn found_after(attempts: usize) -> Self {
        Self {
            find_succeeds_after: attempts,
            ..Self::new()
        }
    }

    pub fn with_alert(text: impl Into<String>) -> Self {
        let mut session = Self::new();
        session.alert = Some(MockAlert::new(session.log.clone(), text));
        session
    }

    fn find_ready(&self) -> bool {
        let attempt = self.find_attempts.fetch_add(1, Ordering::SeqCst) + 1;
        attempt >= self.find_succeeds_after
    }
}

impl Default for MockSession {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Session for MockSession {
    type Element = MockElement;
    type Alert = MockAlert;

    async fn goto(&self, url: &str) -> Result<()> {
        self.log.push(format!("goto:{url}"));
        Ok(())
    }

    async fn find(&self, _selector: &Selector) -> Result<Self::Element> {
        if self.find_ready() {
            Ok(self.element.clone())
        } else {
            Err(Error::driver("no such element"))
        }
    }

    async fn find_all(&self, _selector: &Selector) -> Result<Vec<Self::Element>> {
        if self.find_ready() {
            Ok(self.elements.clone())
        } else {
            Err(Error::driver("no such element"))
        }
    }

    async fn execute(&self, script: &str, _args: Vec<Value>) -> Result<Value> {
        self.log.push(format!("execute:{script}"));
        if self.execute_ok {
            Ok(Value::Null)
        } else {
            Err(Error::driver("script failed"))
        }
    }

    async fn enter_frame(&self, _frame: &Self::Element) -> Result<()> {
        self.log.push("enter_frame");
        if self.enter_frame_ok {
            Ok(())
        } else {
            Err(Error::driver("frame switch rejected"))
        }
    }

    async fn enter_parent_frame(&self) -> Result<()> {
        self.log.push("parent_frame");
        Ok(())
    }

    async fn active_alert(&self) -> Result<Self::Alert> {
        self.alert.clone().ok_or(Error::NoAlert)
    }
}

pub struct MockScreen {
    pub log: CallLog,
    /// 1-based search attempt at which the image is found; `usize::MAX` never.
    pub locate_succeeds_after: usize,
    pub locate_attempts: AtomicUsize,
    pub center: Point,
    /// 1-based existence check at which the window appears; `usize::MAX` never.
    pub window_appears_after: usize,
    pub window_attempts: AtomicUsize,
    pub activate_ok: bool,
}

impl MockScreen {
    pub fn new() -> Self {
        Self {
            log: CallLog::default(),
            locate_succeeds_after: 1,
            locate_attempts: AtomicUsize::new(0),
            center: Point { x: 320, y: 240 },
            window_appears_after: 1,
            window_attempts: AtomicUsize::new(0),
            activate_ok: true,
        }
    }
}

impl Default for MockScreen {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ScreenDriver for MockScreen {
    async fn locate_center(&self, target: &ImageTarget) -> Result<Option<Point>> {
        self.log.push(format!("locate:{}", target.path.display()));
        let attempt = self.locate_attempts.fetch_add(1, Ordering::SeqCst) + 1;
        if attempt >= self.locate_succeeds_after {
            Ok(Some(self.center))
        } else {
            Ok(None)
        }
    }

    async fn click_at(&self, point: Point) -> Result<()> {
        self.log.push(format!("click_at:{},{}", point.x, point.y));
        Ok(())
    }

    async fn window_exists(&self, title: &str) -> Result<bool> {
        self.log.push(format!("window_exists:{title}"));
        let attempt = self.window_attempts.fetch_add(1, Ordering::SeqCst) + 1;
        Ok(attempt >= self.window_appears_after)
    }

    async fn activate_window(&self, title: &str) -> Result<()> {
        self.log.push(format!("activate:{title}"));
        if self.activate_ok {
            Ok(())
        } else {
            Err(Error::no_window(title))
        }
    }
}
