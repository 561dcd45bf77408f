//! Component color palettes.
//!
//! ## Usage
//!
//! Resolve a palette from the host's [`ThemeProvider`] or pass explicit
//! colors through component args.

use glide_ui::{Color, ThemeProvider};

/// Standard alpha values for disabled content.
pub struct ContentAlpha;

impl ContentAlpha {
    /// Alpha for disabled tracks and thumbs.
    pub const DISABLED: f32 = 0.38;
    /// Alpha for the disabled inactive track.
    pub const DISABLED_CONTAINER: f32 = 0.12;
}

/// Colors used by the slider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderColors {
    /// Track left of the thumb.
    pub minimum_track: Color,
    /// Track right of the thumb.
    pub maximum_track: Color,
    /// Thumb fill.
    pub thumb: Color,
    /// Outer dot of a tick at or below the committed value.
    pub tick_reached: Color,
    /// Inner dot of a reached tick.
    pub tick_reached_center: Color,
    /// Outer dot of a tick above the committed value.
    pub tick: Color,
    /// Inner dot of an unreached tick.
    pub tick_center: Color,
    /// Tick label text.
    pub label_text: Color,
    /// Floating value bubble background.
    pub bubble: Color,
    /// Floating value bubble text.
    pub bubble_text: Color,
}

impl SliderColors {
    /// Light palette.
    pub const LIGHT: Self = Self {
        minimum_track: Color::from_rgb_u8(0x3f, 0x3f, 0x3f),
        maximum_track: Color::from_rgb_u8(0xb3, 0xb3, 0xb3),
        thumb: Color::from_rgb_u8(0x34, 0x34, 0x34),
        tick_reached: Color::from_rgb_u8(0xff, 0xf3, 0xcc),
        tick_reached_center: Color::YELLOW,
        tick: Color::from_rgb_u8(0xee, 0xee, 0xee),
        tick_center: Color::BLACK,
        label_text: Color::from_rgb_u8(0x33, 0x33, 0x33),
        bubble: Color::from_rgb_u8(0xff, 0xd3, 0x3d),
        bubble_text: Color::from_rgb_u8(0x33, 0x33, 0x33),
    };

    /// Dark palette.
    pub const DARK: Self = Self {
        minimum_track: Color::from_rgb_u8(0xe0, 0xe0, 0xe0),
        maximum_track: Color::from_rgb_u8(0x5c, 0x5c, 0x5c),
        thumb: Color::from_rgb_u8(0xf5, 0xf5, 0xf5),
        tick_reached: Color::from_rgb_u8(0x5c, 0x4d, 0x1a),
        tick_reached_center: Color::from_rgb_u8(0xff, 0xd3, 0x3d),
        tick: Color::from_rgb_u8(0x3a, 0x3a, 0x3a),
        tick_center: Color::WHITE,
        label_text: Color::WHITE,
        bubble: Color::from_rgb_u8(0xff, 0xd3, 0x3d),
        bubble_text: Color::from_rgb_u8(0x33, 0x33, 0x33),
    };

    /// Picks the palette matching the provider's mode.
    pub fn from_theme<T: ThemeProvider + ?Sized>(theme: &T) -> Self {
        if theme.is_dark() {
            Self::DARK
        } else {
            Self::LIGHT
        }
    }

    /// Fades the interactive parts of the palette for a disabled slider.
    pub fn disabled(self) -> Self {
        Self {
            minimum_track: self.minimum_track.with_alpha(ContentAlpha::DISABLED),
            maximum_track: self
                .maximum_track
                .with_alpha(ContentAlpha::DISABLED_CONTAINER),
            thumb: self.thumb.with_alpha(ContentAlpha::DISABLED),
            ..self
        }
    }
}

impl Default for SliderColors {
    fn default() -> Self {
        Self::LIGHT
    }
}

#[cfg(test)]
mod tests {
    use glide_ui::{StaticTheme, ThemeMode};

    use super::*;

    #[test]
    fn palette_follows_theme_mode() {
        assert_eq!(
            SliderColors::from_theme(&StaticTheme(ThemeMode::Dark)),
            SliderColors::DARK
        );
        assert_eq!(
            SliderColors::from_theme(&StaticTheme(ThemeMode::Light)),
            SliderColors::LIGHT
        );
    }

    #[test]
    fn disabled_palette_only_fades_track_and_thumb() {
        let disabled = SliderColors::LIGHT.disabled();
        assert_eq!(disabled.thumb.a, ContentAlpha::DISABLED);
        assert_eq!(disabled.maximum_track.a, ContentAlpha::DISABLED_CONTAINER);
        assert_eq!(disabled.tick, SliderColors::LIGHT.tick);
    }
}
