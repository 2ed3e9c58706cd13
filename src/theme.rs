//! Light/dark theme input.
//!
//! The host owns the real theme signal (a style attribute, a system setting);
//! the engine only sees this interface and keeps a local copy of the latest
//! value for color selection.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn is_dark(&self) -> bool {
        *self == Theme::Dark
    }

    pub fn from_dark(dark: bool) -> Self {
        if dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn suffix(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

/// Callback invoked with the new theme after every change
pub type ThemeCallback = Box<dyn Fn(Theme) + Send + Sync>;

/// Keeps a change listener registered; dropping it unregisters the listener
#[must_use = "the listener is removed as soon as the subscription is dropped"]
pub struct ThemeSubscription {
    cancel: Option<Box<dyn FnOnce() + Send>>,
}

impl ThemeSubscription {
    pub fn new(cancel: impl FnOnce() + Send + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// Subscription with nothing to unregister
    pub fn detached() -> Self {
        Self { cancel: None }
    }
}

impl Drop for ThemeSubscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl fmt::Debug for ThemeSubscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeSubscription")
            .field("attached", &self.cancel.is_some())
            .finish()
    }
}

/// Observable theme signal
pub trait ThemeSource {
    fn current(&self) -> Theme;

    /// Register a change listener, kept until the returned subscription drops
    fn on_change(&self, callback: ThemeCallback) -> ThemeSubscription;
}

/// A theme that never changes
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedTheme(pub Theme);

impl ThemeSource for FixedTheme {
    fn current(&self) -> Theme {
        self.0
    }

    fn on_change(&self, _callback: ThemeCallback) -> ThemeSubscription {
        ThemeSubscription::detached()
    }
}

/// Theme shared with the host, updated through [`SharedTheme::set`]
#[derive(Clone, Default)]
pub struct SharedTheme {
    inner: Arc<SharedThemeInner>,
}

#[derive(Default)]
struct SharedThemeInner {
    theme: RwLock<Theme>,
    callbacks: RwLock<Vec<(u64, ThemeCallback)>>,
    next_id: AtomicU64,
}

impl SharedTheme {
    pub fn new(theme: Theme) -> Self {
        let shared = Self::default();
        *shared.inner.theme.write() = theme;
        shared
    }

    /// Store a new theme and notify listeners if it differs
    pub fn set(&self, theme: Theme) {
        {
            let mut current = self.inner.theme.write();
            if *current == theme {
                return;
            }
            *current = theme;
        }

        for (_, callback) in self.inner.callbacks.read().iter() {
            callback(theme);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.inner.callbacks.read().len()
    }
}

impl ThemeSource for SharedTheme {
    fn current(&self) -> Theme {
        *self.inner.theme.read()
    }

    fn on_change(&self, callback: ThemeCallback) -> ThemeSubscription {
        let id = self.inner.next_id.fetch_add(1, Ordering::Relaxed);
        self.inner.callbacks.write().push((id, callback));

        let inner: Weak<SharedThemeInner> = Arc::downgrade(&self.inner);
        ThemeSubscription::new(move || {
            if let Some(inner) = inner.upgrade() {
                inner.callbacks.write().retain(|(other, _)| *other != id);
            }
        })
    }
}

impl<T: ThemeSource + ?Sized> ThemeSource for Arc<T> {
    fn current(&self) -> Theme {
        (**self).current()
    }

    fn on_change(&self, callback: ThemeCallback) -> ThemeSubscription {
        (**self).on_change(callback)
    }
}
