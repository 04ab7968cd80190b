use std::sync::OnceLock;

use crate::layout::Coord;
use crate::types::{Color, VisualState};

/// Built-in scrollbar looks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum KnownTheme {
    /// Whatever the toolkit config names as system theme.
    System,
    VisualStudioAuto,
    VisualStudioLight,
    VisualStudioDark,
    #[default]
    WindowsAuto,
    WindowsDark,
    WindowsLight,
    MauiAuto,
    MauiLight,
    MauiDark,
}

/// One value per [`VisualState`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StateValues<T>([T; 4]);

impl<T: Copy> StateValues<T> {
    pub const fn all(value: T) -> Self {
        Self([value; 4])
    }

    pub fn get(&self, state: VisualState) -> T {
        self.0[state.index()]
    }

    pub fn set(&mut self, state: VisualState, value: T) {
        self.0[state.index()] = value;
    }

    pub fn set_all(&mut self, value: T) {
        self.0 = [value; 4];
    }
}

impl<T: Copy + Default> Default for StateValues<T> {
    fn default() -> Self {
        Self::all(T::default())
    }
}

/// Colors and layout switches of a themed scrollbar.
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeMetrics {
    pub background: StateValues<Option<Color>>,
    pub corner_background: StateValues<Option<Color>>,
    pub arrow: StateValues<Option<Color>>,
    pub thumb_background: StateValues<Option<Color>>,
    pub thumb_border: StateValues<Option<Color>>,
    pub arrow_margin: StateValues<Coord>,
    pub thumb_margin: StateValues<Coord>,
    pub use_arrow_size_for_thumb: StateValues<bool>,
    pub arrows_visible: StateValues<bool>,
    pub thumb_visible: StateValues<bool>,
    pub buttons_visible: StateValues<bool>,
}

impl Default for ThemeMetrics {
    fn default() -> Self {
        Self {
            background: StateValues::default(),
            corner_background: StateValues::default(),
            arrow: StateValues::default(),
            thumb_background: StateValues::default(),
            thumb_border: StateValues::default(),
            arrow_margin: StateValues::all(1.0),
            thumb_margin: StateValues::all(1.0),
            use_arrow_size_for_thumb: StateValues::all(true),
            arrows_visible: StateValues::all(true),
            thumb_visible: StateValues::all(true),
            buttons_visible: StateValues::all(true),
        }
    }
}

static WINDOWS_LIGHT: OnceLock<ThemeMetrics> = OnceLock::new();
static WINDOWS_DARK: OnceLock<ThemeMetrics> = OnceLock::new();
static VISUAL_STUDIO_LIGHT: OnceLock<ThemeMetrics> = OnceLock::new();
static VISUAL_STUDIO_DARK: OnceLock<ThemeMetrics> = OnceLock::new();
static MAUI_LIGHT: OnceLock<ThemeMetrics> = OnceLock::new();
static MAUI_DARK: OnceLock<ThemeMetrics> = OnceLock::new();

impl ThemeMetrics {
    /// Resolve `theme` to concrete metrics. `System` is looked up as
    /// `system_theme`; `*Auto` themes pick their dark or light variant.
    pub fn for_theme(theme: KnownTheme, is_dark: bool, system_theme: KnownTheme) -> &'static Self {
        match theme {
            KnownTheme::System => {
                let resolved = match system_theme {
                    KnownTheme::System => KnownTheme::WindowsAuto,
                    other => other,
                };
                Self::for_theme(resolved, is_dark, KnownTheme::WindowsAuto)
            }
            KnownTheme::VisualStudioAuto if is_dark => Self::visual_studio_dark(),
            KnownTheme::VisualStudioAuto | KnownTheme::VisualStudioLight => {
                Self::visual_studio_light()
            }
            KnownTheme::VisualStudioDark => Self::visual_studio_dark(),
            KnownTheme::WindowsAuto if is_dark => Self::windows_dark(),
            KnownTheme::WindowsAuto | KnownTheme::WindowsLight => Self::windows_light(),
            KnownTheme::WindowsDark => Self::windows_dark(),
            KnownTheme::MauiAuto if is_dark => Self::maui_dark(),
            KnownTheme::MauiAuto | KnownTheme::MauiLight => Self::maui_light(),
            KnownTheme::MauiDark => Self::maui_dark(),
        }
    }

    pub fn windows_light() -> &'static Self {
        WINDOWS_LIGHT.get_or_init(|| {
            let mut m = Self::default();
            m.background.set(VisualState::Normal, Some(Color::rgb(226, 226, 226)));
            m.corner_background.set(VisualState::Normal, Some(Color::rgb(238, 238, 242)));
            m.arrow.set(VisualState::Normal, Some(Color::rgb(194, 195, 201)));
            m.arrow.set(VisualState::Hovered, Some(Color::rgb(104, 104, 104)));
            m.thumb_background.set(VisualState::Normal, Some(Color::rgb(194, 195, 201)));
            m.thumb_border.set(VisualState::Normal, Some(Color::rgb(194, 195, 201)));
            m.thumb_background.set(VisualState::Hovered, Some(Color::rgb(104, 104, 104)));
            m.thumb_border.set(VisualState::Hovered, Some(Color::rgb(104, 104, 104)));
            m
        })
    }

    pub fn windows_dark() -> &'static Self {
        WINDOWS_DARK.get_or_init(|| {
            let mut m = Self::default();
            m.background.set(VisualState::Normal, Some(Color::rgb(46, 46, 46)));
            m.corner_background.set(VisualState::Normal, Some(Color::rgb(102, 102, 102)));
            m.arrow.set(VisualState::Normal, Some(Color::rgb(153, 153, 153)));
            m.arrow.set(VisualState::Hovered, Some(Color::rgb(153, 153, 153)));
            m.thumb_background.set(VisualState::Normal, Some(Color::rgb(77, 77, 77)));
            m.thumb_border.set(VisualState::Normal, Some(Color::rgb(77, 77, 77)));
            m
        })
    }

    pub fn visual_studio_light() -> &'static Self {
        VISUAL_STUDIO_LIGHT.get_or_init(|| {
            let mut m = Self::default();
            m.background.set(VisualState::Normal, Some(Color::rgb(245, 245, 245)));
            m.arrow.set(VisualState::Normal, Some(Color::rgb(134, 137, 153)));
            m.arrow.set(VisualState::Hovered, Some(Color::rgb(28, 151, 234)));
            m.thumb_background.set(VisualState::Normal, Some(Color::rgb(255, 255, 255)));
            m.thumb_border.set(VisualState::Normal, Some(Color::rgb(0, 0, 0)));
            m.corner_background.set(VisualState::Normal, Some(Color::rgb(245, 245, 245)));
            m.use_arrow_size_for_thumb.set_all(false);
            m.thumb_margin.set_all(0.0);
            m
        })
    }

    pub fn visual_studio_dark() -> &'static Self {
        VISUAL_STUDIO_DARK.get_or_init(|| {
            let mut m = Self::default();
            m.background.set(VisualState::Normal, Some(Color::rgb(62, 62, 66)));
            m.corner_background.set(VisualState::Normal, Some(Color::rgb(62, 62, 66)));
            m.arrow.set(VisualState::Normal, Some(Color::rgb(153, 153, 153)));
            m.arrow.set(VisualState::Hovered, Some(Color::rgb(28, 151, 234)));
            m.thumb_background.set(VisualState::Normal, Some(Color::rgb(0, 0, 0)));
            m.thumb_border.set(VisualState::Normal, Some(Color::rgb(104, 104, 104)));
            m.use_arrow_size_for_thumb.set_all(false);
            m.thumb_margin.set_all(0.0);
            m
        })
    }

    pub fn maui_light() -> &'static Self {
        MAUI_LIGHT.get_or_init(|| Self::windows_light().clone())
    }

    pub fn maui_dark() -> &'static Self {
        MAUI_DARK.get_or_init(|| Self::windows_dark().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_falls_back_to_windows() {
        let m = ThemeMetrics::for_theme(KnownTheme::System, true, KnownTheme::System);
        assert_eq!(m, ThemeMetrics::windows_dark());
    }

    #[test]
    fn auto_picks_variant_by_darkness() {
        assert_eq!(
            ThemeMetrics::for_theme(KnownTheme::VisualStudioAuto, false, KnownTheme::WindowsAuto),
            ThemeMetrics::visual_studio_light()
        );
        assert_eq!(
            ThemeMetrics::for_theme(KnownTheme::MauiAuto, true, KnownTheme::WindowsAuto),
            ThemeMetrics::windows_dark()
        );
    }
}
