//! Process-wide cache of system colors and metrics.
//!
//! The platform values are fetched on first use and kept until the widget
//! module shuts down.

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::cell::Maybe;

/// System colors, as `0xAARRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorId {
    /// Window background.
    WindowBackground,
    /// Window text.
    WindowForeground,
    /// Selection background.
    Highlight,
    /// Selection text.
    HighlightText,
}

/// Integer metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntMetric {
    /// Caret blink period in milliseconds.
    CaretBlinkTime,
    /// Nonzero if scrollbars hide themselves when idle.
    ScrollbarsAutoHide,
    /// Touch slop in device pixels.
    DragThreshold,
}

/// Cached look-and-feel values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookAndFeel {
    colors: [u32; 4],
    caret_blink_ms: i32,
    scrollbars_auto_hide: bool,
    drag_threshold_px: i32,
}

static CACHE: Mutex<Maybe<LookAndFeel>> = Mutex::new(Maybe::new());

fn cache() -> MutexGuard<'static, Maybe<LookAndFeel>> {
    CACHE.lock().unwrap_or_else(PoisonError::into_inner)
}

impl LookAndFeel {
    fn load() -> Self {
        tracing::debug!("loading system look and feel");
        Self {
            colors: [0xffff_ffff, 0xff00_0000, 0xffff_9900, 0xff00_0000],
            caret_blink_ms: 500,
            scrollbars_auto_hide: true,
            drag_threshold_px: 25,
        }
    }

    /// Runs `f` against the cache, filling it first if needed.
    pub fn with<R>(f: impl FnOnce(&LookAndFeel) -> R) -> R {
        let mut cache = cache();
        if cache.is_empty() {
            cache.construct_with(Self::load);
        }
        f(cache.get())
    }

    /// A system color.
    pub fn color(id: ColorId) -> u32 {
        Self::with(|laf| laf.colors[id as usize])
    }

    /// An integer metric.
    pub fn int_metric(id: IntMetric) -> i32 {
        Self::with(|laf| match id {
            IntMetric::CaretBlinkTime => laf.caret_blink_ms,
            IntMetric::ScrollbarsAutoHide => i32::from(laf.scrollbars_auto_hide),
            IntMetric::DragThreshold => laf.drag_threshold_px,
        })
    }

    /// `true` while values are cached.
    pub fn is_cached() -> bool {
        !cache().is_empty()
    }

    /// Drops the cache.
    pub fn shutdown() {
        cache().destroy_if_constructed();
    }
}
