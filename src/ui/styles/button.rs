// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Primary button style (main action).
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(palette::PRIMARY_500)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_600,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette::PRIMARY_400)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_500,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::MD,
            snap: true,
        },
        button::Status::Disabled => disabled(),
    }
}

/// Outlined button painted with an accent color (toast actions, severity
/// triggers in the gallery).
pub fn accent(color: Color) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let fill = match status {
            button::Status::Hovered => opacity::OVERLAY_SUBTLE,
            button::Status::Pressed => opacity::OVERLAY_MEDIUM,
            button::Status::Active => opacity::TRANSPARENT,
            button::Status::Disabled => return disabled(),
        };

        button::Style {
            background: Some(Background::Color(Color { a: fill, ..color })),
            text_color: color,
            border: Border {
                color,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Style for the selected entry of a toggle group.
pub fn selected(theme: &Theme, status: button::Status) -> button::Style {
    primary(theme, status)
}

/// Style for unselected entries of a toggle group.
/// Adapts to light/dark theme while maintaining consistency.
pub fn unselected(theme: &Theme, status: button::Status) -> button::Style {
    let is_light = !theme.extended_palette().is_dark;

    let (bg_color, text_color, border_color) = if is_light {
        (palette::GRAY_100, palette::GRAY_900, palette::GRAY_400)
    } else {
        (palette::GRAY_700, WHITE, palette::GRAY_400)
    };

    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(bg_color)),
            text_color,
            border: Border {
                color: border_color,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(if is_light {
                palette::GRAY_200
            } else {
                palette::GRAY_400
            })),
            text_color,
            border: Border {
                color: palette::PRIMARY_500,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Disabled => disabled(),
    }
}

fn disabled() -> button::Style {
    button::Style {
        background: Some(Background::Color(palette::GRAY_200)),
        text_color: palette::GRAY_400,
        border: Border {
            color: palette::GRAY_400,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accent_uses_color_for_text_and_border() {
        let style = accent(palette::ERROR_500)(&Theme::Dark, button::Status::Active);
        assert_eq!(style.text_color, palette::ERROR_500);
        assert_eq!(style.border.color, palette::ERROR_500);
    }

    #[test]
    fn accent_fills_on_hover() {
        let style = accent(palette::INFO_500);
        let idle = style(&Theme::Dark, button::Status::Active);
        let hovered = style(&Theme::Dark, button::Status::Hovered);
        assert_ne!(idle.background, hovered.background);
    }

    #[test]
    fn unselected_differs_between_themes() {
        let light = unselected(&Theme::Light, button::Status::Active);
        let dark = unselected(&Theme::Dark, button::Status::Active);
        assert_ne!(light.text_color, dark.text_color);
    }
}
