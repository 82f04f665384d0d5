//! Error and status reporting service.
//!
//! DESIGN
//! ======
//! `Reporter` is a cheap cloneable handle around shared state, constructed
//! once per application and handed to whoever needs it (Leptos context in
//! the browser, a plain value in tests). Storage, clock, and both rendering
//! paths are injected so the whole service runs natively under test.
//!
//! ERROR HANDLING
//! ==============
//! Nothing here returns an error to a reporting caller or panics. Storage
//! failures are logged through `log::warn!` and otherwise swallowed. The
//! internal lock is released before calling into a surface or alert sink.

#[cfg(test)]
#[path = "reporter_test.rs"]
mod reporter_test;

use std::panic::Location;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, TryLockError};

use crate::clock::Clock;
use crate::component::{Component, Lifecycle};
use crate::error_log::{ErrorLog, ErrorRecord};
use crate::notice::{AlertSink, Notice, NoticeSurface};
use crate::status::StatusTable;
use crate::storage::{KeyValueStore, StorageError};
use crate::{ERROR_LOG_KEY, STATUS_KEY};

/// Code for a status update naming a component outside the known set.
pub const STATUS_UNKNOWN_COMPONENT: &str = "STATUS_UNKNOWN_COMPONENT";
/// Code for uncaught synchronous errors.
pub const UNCAUGHT_ERROR: &str = "UNCAUGHT_ERROR";
/// Code for unhandled promise rejections.
pub const UNHANDLED_REJECTION: &str = "UNHANDLED_REJECTION";
/// Code for Rust panics caught by the panic hook.
pub const PANIC: &str = "PANIC";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReporterError {
    #[error("notice surface already attached")]
    SurfaceAlreadyAttached,
}

struct Inner {
    store: Box<dyn KeyValueStore>,
    clock: Box<dyn Clock>,
    alert: Arc<dyn AlertSink>,
    surface: Option<Arc<dyn NoticeSurface>>,
    status: StatusTable,
    history: ErrorLog,
    next_notice_id: u64,
}

/// Shared handle to the application's reporter.
#[derive(Clone)]
pub struct Reporter {
    inner: Arc<Mutex<Inner>>,
}

impl Reporter {
    /// Build a reporter, loading any error log already in `store`.
    pub fn new(
        store: impl KeyValueStore + 'static,
        clock: impl Clock + 'static,
        alert: impl AlertSink + 'static,
    ) -> Self {
        let history = load_history(&store);
        let inner = Inner {
            store: Box::new(store),
            clock: Box::new(clock),
            alert: Arc::new(alert),
            surface: None,
            status: StatusTable::new(),
            history,
            next_notice_id: 1,
        };
        Self { inner: Arc::new(Mutex::new(inner)) }
    }

    /// Attach the primary notice surface. Allowed exactly once.
    ///
    /// # Errors
    ///
    /// Returns [`ReporterError::SurfaceAlreadyAttached`] on a second call.
    pub fn attach_surface(&self, surface: impl NoticeSurface + 'static) -> Result<(), ReporterError> {
        let mut inner = self.lock();
        if inner.surface.is_some() {
            log::warn!("reporter: surface already attached");
            return Err(ReporterError::SurfaceAlreadyAttached);
        }
        inner.surface = Some(Arc::new(surface));
        Ok(())
    }

    #[must_use]
    pub fn has_surface(&self) -> bool {
        self.lock().surface.is_some()
    }

    /// Record and surface an error raised at the caller's location.
    #[track_caller]
    pub fn report(&self, message: &str, component: impl AsRef<str>, code: &str, is_critical: bool) {
        let source_file = Location::caller().file();
        self.report_from(source_file, message, component, code, is_critical);
    }

    /// Record and surface an error with an explicit source file.
    pub fn report_from(
        &self,
        source_file: &str,
        message: &str,
        component: impl AsRef<str>,
        code: &str,
        is_critical: bool,
    ) {
        let component = component.as_ref();
        log::error!("[{component}] {code}: {message} ({source_file})");
        let mut inner = self.lock();
        let delivery = inner.record(source_file, message, component, code, is_critical);
        drop(inner);
        delivery.deliver();
    }

    /// Like [`Reporter::report_from`], but gives up instead of waiting when
    /// the reporter is already locked. Returns whether the report was
    /// recorded.
    ///
    /// Used from the panic hook, which may run while a report is in flight.
    pub fn try_report_from(
        &self,
        source_file: &str,
        message: &str,
        component: impl AsRef<str>,
        code: &str,
        is_critical: bool,
    ) -> bool {
        let component = component.as_ref();
        log::error!("[{component}] {code}: {message} ({source_file})");
        let mut inner = match self.inner.try_lock() {
            Ok(guard) => guard,
            Err(TryLockError::Poisoned(poisoned)) => poisoned.into_inner(),
            Err(TryLockError::WouldBlock) => return false,
        };
        let delivery = inner.record(source_file, message, component, code, is_critical);
        drop(inner);
        delivery.deliver();
        true
    }

    /// Update the status of a component named by string.
    ///
    /// Unknown names leave the table untouched and are reported once.
    #[track_caller]
    pub fn set_status(&self, component: &str, state: Lifecycle) {
        match component.parse::<Component>() {
            Ok(known) => self.set_component_status(known, state),
            Err(err) => self.report(&err.to_string(), Component::App, STATUS_UNKNOWN_COMPONENT, false),
        }
    }

    /// Update the status of a known component and persist the table.
    pub fn set_component_status(&self, component: Component, state: Lifecycle) {
        let mut inner = self.lock();
        let previous = inner.status.set(component, state);
        if previous != state {
            log::debug!("status {component}: {} -> {}", previous.as_str(), state.as_str());
        }
        inner.persist_status();
    }

    #[must_use]
    pub fn status(&self, component: Component) -> Lifecycle {
        self.lock().status.get(component)
    }

    #[must_use]
    pub fn status_table(&self) -> StatusTable {
        self.lock().status.clone()
    }

    #[must_use]
    pub fn error_log(&self) -> ErrorLog {
        self.lock().history.clone()
    }

    /// Milliseconds from the injected clock.
    #[must_use]
    pub fn now_ms(&self) -> u64 {
        self.lock().clock.now_ms()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// A notice ready to render once the lock is released.
struct Delivery {
    notice: Notice,
    surface: Option<Arc<dyn NoticeSurface>>,
    alert: Arc<dyn AlertSink>,
}

impl Delivery {
    fn deliver(self) {
        match self.surface {
            Some(surface) => surface.show(self.notice),
            None => self.alert.alert(&self.notice.alert_text()),
        }
    }
}

impl Inner {
    fn record(
        &mut self,
        source_file: &str,
        message: &str,
        component: &str,
        code: &str,
        is_critical: bool,
    ) -> Delivery {
        let record = ErrorRecord {
            component: component.to_owned(),
            message: message.to_owned(),
            code: code.to_owned(),
            timestamp: self.clock.now_ms(),
            source_file: source_file.to_owned(),
        };
        self.history.push(record);
        self.persist_history();

        let id = self.next_notice_id;
        self.next_notice_id += 1;
        Delivery {
            notice: Notice::new(id, component, code, message, is_critical),
            surface: self.surface.clone(),
            alert: Arc::clone(&self.alert),
        }
    }

    fn persist_history(&self) {
        let result = self
            .history
            .to_json()
            .map_err(StorageError::from)
            .and_then(|json| self.store.set(ERROR_LOG_KEY, &json));
        if let Err(err) = result {
            log::warn!("reporter: failed to persist error log: {err}");
        }
    }

    fn persist_status(&self) {
        let result = self
            .status
            .to_json()
            .map_err(StorageError::from)
            .and_then(|json| self.store.set(STATUS_KEY, &json));
        if let Err(err) = result {
            log::warn!("reporter: failed to persist status table: {err}");
        }
    }
}

fn load_history(store: &dyn KeyValueStore) -> ErrorLog {
    match store.get(ERROR_LOG_KEY) {
        Ok(Some(raw)) => match ErrorLog::from_json(&raw) {
            Ok(history) => history,
            Err(err) => {
                log::warn!("reporter: discarding unreadable error log: {err}");
                ErrorLog::new()
            }
        },
        Ok(None) => ErrorLog::new(),
        Err(err) => {
            log::warn!("reporter: error log unavailable: {err}");
            ErrorLog::new()
        }
    }
}
