//! Light/dark theme access for components.
//!
//! ## Usage
//!
//! Components read the mode through [`ThemeProvider`] and never write it.
//! The application owns the mode, typically in a [`SharedTheme`] it can
//! toggle and persist.

use std::{fmt, str::FromStr, sync::Arc};

use parking_lot::RwLock;

/// Light or dark appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum ThemeMode {
    /// Light appearance (default).
    #[default]
    Light,
    /// Dark appearance.
    Dark,
}

impl ThemeMode {
    /// Returns `true` for [`ThemeMode::Dark`].
    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// The opposite mode.
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Stable string form, `"light"` or `"dark"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses `"dark"` as dark; anything else is light.
impl FromStr for ThemeMode {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(if s == "dark" { Self::Dark } else { Self::Light })
    }
}

/// Read-only access to the current theme mode.
pub trait ThemeProvider {
    /// The mode components should render with.
    fn mode(&self) -> ThemeMode;

    /// Shorthand for `self.mode().is_dark()`.
    fn is_dark(&self) -> bool {
        self.mode().is_dark()
    }
}

/// A theme fixed at construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StaticTheme(pub ThemeMode);

impl ThemeProvider for StaticTheme {
    fn mode(&self) -> ThemeMode {
        self.0
    }
}

/// A theme mode shared between the application and its components.
#[derive(Debug, Clone, Default)]
pub struct SharedTheme {
    mode: Arc<RwLock<ThemeMode>>,
}

impl SharedTheme {
    /// Creates a shared theme starting at `mode`.
    pub fn new(mode: ThemeMode) -> Self {
        Self {
            mode: Arc::new(RwLock::new(mode)),
        }
    }

    /// Replaces the mode.
    pub fn set(&self, mode: ThemeMode) {
        *self.mode.write() = mode;
    }

    /// Flips between light and dark, returning the new mode.
    pub fn toggle(&self) -> ThemeMode {
        let mut mode = self.mode.write();
        *mode = mode.toggled();
        tracing::debug!(mode = %*mode, "theme toggled");
        *mode
    }
}

impl ThemeProvider for SharedTheme {
    fn mode(&self) -> ThemeMode {
        *self.mode.read()
    }
}
