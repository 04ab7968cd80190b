use crate::layout::RectD;
use crate::types::Color;

/// Explorer splitter color on light backgrounds.
pub const EXPLORER_SPLITTER_LIGHT: Color = Color::rgb(229, 229, 229);

/// Explorer splitter color on dark backgrounds.
pub const EXPLORER_SPLITTER_DARK: Color = Color::rgb(43, 43, 43);

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SplitterColors {
    pub background: Option<Color>,
    /// Color of the one pixel center line; `None` draws no line.
    pub foreground: Option<Color>,
}

impl SplitterColors {
    pub const fn new(background: Option<Color>, foreground: Option<Color>) -> Self {
        Self {
            background,
            foreground,
        }
    }
}

/// Color settings of a splitter.
#[derive(Debug, Clone, Default)]
pub struct SplitterAppearance {
    /// Colors that win over the light/dark defaults.
    pub normal: Option<SplitterColors>,
    pub default_light: Option<SplitterColors>,
    pub default_dark: Option<SplitterColors>,
    /// Use the parent's background instead of the Explorer color.
    pub parent_back_color: bool,
    pub background_painted: bool,
    pub foreground_painted: bool,
    /// Replaces color resolution entirely.
    pub resolve_override: Option<fn() -> SplitterColors>,
}

impl SplitterAppearance {
    pub fn new() -> Self {
        Self {
            background_painted: true,
            foreground_painted: true,
            ..Default::default()
        }
    }

    pub fn resolve(&self, is_dark: bool, real_background: Color) -> SplitterColors {
        if let Some(resolve) = self.resolve_override {
            return resolve();
        }
        resolve_splitter_colors(
            is_dark,
            self.parent_back_color.then_some(real_background),
            self.normal,
            if is_dark {
                self.default_dark
            } else {
                self.default_light
            },
        )
    }
}

/// Pick the colors a splitter paints with.
///
/// `normal` wins over `defaults`; a missing background falls back to
/// `parent_background` when given, else to the Explorer color for the theme.
pub fn resolve_splitter_colors(
    is_dark: bool,
    parent_background: Option<Color>,
    normal: Option<SplitterColors>,
    defaults: Option<SplitterColors>,
) -> SplitterColors {
    let fallback = parent_background.unwrap_or(if is_dark {
        EXPLORER_SPLITTER_DARK
    } else {
        EXPLORER_SPLITTER_LIGHT
    });
    let colors = normal.or(defaults);
    SplitterColors {
        background: Some(colors.and_then(|c| c.background).unwrap_or(fallback)),
        foreground: colors.and_then(|c| c.foreground),
    }
}

/// One rectangle fill of a splitter paint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FillRect {
    pub rect: RectD,
    pub color: Color,
}

/// Vertical one pixel line through the middle of `rect`.
pub fn center_line_vert(rect: RectD) -> RectD {
    RectD::new(rect.center().x.trunc(), rect.top(), 1.0, rect.height)
}

/// Horizontal one pixel line through the middle of `rect`.
pub fn center_line_horz(rect: RectD) -> RectD {
    RectD::new(rect.left(), rect.center().y.trunc(), rect.width, 1.0)
}
