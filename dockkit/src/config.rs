//! Toolkit-wide defaults.

use std::sync::{Arc, OnceLock};

use crate::layout::Coord;
use crate::scrollbar::{KnownTheme, MetricsInfo};

static SHARED: OnceLock<Arc<ToolkitConfig>> = OnceLock::new();

/// Defaults shared by splitters and scrollbars.
///
/// Controls take the config explicitly; [`ToolkitConfig::shared`] exists for
/// callers that want one process-wide instance.
#[derive(Debug, Clone)]
pub struct ToolkitConfig {
    /// Thickness of a newly created splitter.
    pub splitter_width: Coord,

    /// Minimum drag distance before a splitter move is applied.
    pub splitter_size_delta: i32,

    /// Minimum size of a splitter's resize target.
    pub splitter_min_size: Coord,

    /// Space a splitter leaves for the remaining docked content.
    pub splitter_min_extra: Coord,

    /// Theme used when a scrollbar asks for [`KnownTheme::System`].
    system_theme: KnownTheme,

    default_metrics: OnceLock<MetricsInfo>,
}

impl Default for ToolkitConfig {
    fn default() -> Self {
        Self {
            splitter_width: 5.0,
            splitter_size_delta: 10,
            splitter_min_size: 25.0,
            splitter_min_extra: 25.0,
            system_theme: KnownTheme::WindowsAuto,
            default_metrics: OnceLock::new(),
        }
    }
}

impl ToolkitConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide config, created with defaults on first access.
    pub fn shared() -> Arc<ToolkitConfig> {
        SHARED.get_or_init(|| Arc::new(ToolkitConfig::default())).clone()
    }

    /// Install `config` as the process-wide config.
    /// Returns false if [`shared`](Self::shared) was already initialized.
    pub fn install(config: ToolkitConfig) -> bool {
        SHARED.set(Arc::new(config)).is_ok()
    }

    pub fn splitter_width(mut self, width: Coord) -> Self {
        self.splitter_width = width;
        self
    }

    pub fn splitter_size_delta(mut self, delta: i32) -> Self {
        self.splitter_size_delta = delta;
        self
    }

    pub fn splitter_min_size(mut self, size: Coord) -> Self {
        self.splitter_min_size = size;
        self
    }

    pub fn splitter_min_extra(mut self, extra: Coord) -> Self {
        self.splitter_min_extra = extra;
        self
    }

    /// Set the theme behind [`KnownTheme::System`]. `System` itself is ignored.
    pub fn system_theme(mut self, theme: KnownTheme) -> Self {
        self.set_system_theme(theme);
        self
    }

    pub fn set_system_theme(&mut self, theme: KnownTheme) {
        if theme == KnownTheme::System {
            log::debug!("ignoring KnownTheme::System as system theme");
            return;
        }
        self.system_theme = theme;
    }

    pub fn current_system_theme(&self) -> KnownTheme {
        self.system_theme
    }

    /// Replace the default scrollbar metrics before anyone reads them.
    pub fn default_metrics(mut self, metrics: MetricsInfo) -> Self {
        self.default_metrics = OnceLock::from(metrics);
        self
    }

    /// Scrollbar metrics used when a scrollbar has none of its own.
    pub fn scrollbar_metrics(&self) -> &MetricsInfo {
        self.default_metrics.get_or_init(MetricsInfo::default)
    }
}
