//! Public contract for spacing policies

use std::sync::atomic::{AtomicBool, Ordering};

/// Answers whether the active locale separates words with spaces
///
/// The engine queries the policy on every call and never caches the
/// answer, so implementations must be cheap and thread-safe.
pub trait SpacingPolicy: Send + Sync {
    /// True for space-delimited languages, false for ones like Japanese
    fn consider_spaces(&self) -> bool;
}

impl SpacingPolicy for bool {
    #[inline]
    fn consider_spaces(&self) -> bool {
        *self
    }
}

impl<P: SpacingPolicy + ?Sized> SpacingPolicy for &P {
    #[inline]
    fn consider_spaces(&self) -> bool {
        (**self).consider_spaces()
    }
}

impl<P: SpacingPolicy + ?Sized> SpacingPolicy for std::sync::Arc<P> {
    #[inline]
    fn consider_spaces(&self) -> bool {
        (**self).consider_spaces()
    }
}

/// Policy for space-delimited languages
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpaceDelimited;

impl SpacingPolicy for SpaceDelimited {
    #[inline]
    fn consider_spaces(&self) -> bool {
        true
    }
}

/// Policy for languages written without spaces between words
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Unspaced;

impl SpacingPolicy for Unspaced {
    #[inline]
    fn consider_spaces(&self) -> bool {
        false
    }
}

/// Policy that can be reconfigured while shared across threads
#[derive(Debug)]
pub struct SharedSpacing {
    consider_spaces: AtomicBool,
}

impl SharedSpacing {
    /// Create with an explicit flag
    pub fn new(consider_spaces: bool) -> Self {
        Self {
            consider_spaces: AtomicBool::new(consider_spaces),
        }
    }

    /// Create from a locale tag using the built-in locale table
    pub fn from_locale(locale: &str) -> Self {
        Self::new(super::LocaleInfo::new(locale).consider_spaces())
    }

    /// Switch to the policy of another locale
    pub fn set_locale(&self, locale: &str) {
        let consider_spaces = super::LocaleInfo::new(locale).consider_spaces();
        tracing::debug!(locale, consider_spaces, "spacing policy switched locale");
        self.set_consider_spaces(consider_spaces);
    }

    /// Set the flag directly
    pub fn set_consider_spaces(&self, consider_spaces: bool) {
        self.consider_spaces.store(consider_spaces, Ordering::Relaxed);
    }
}

impl Default for SharedSpacing {
    fn default() -> Self {
        Self::new(true)
    }
}

impl SpacingPolicy for SharedSpacing {
    #[inline]
    fn consider_spaces(&self) -> bool {
        self.consider_spaces.load(Ordering::Relaxed)
    }
}
