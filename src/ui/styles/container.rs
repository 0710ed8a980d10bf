// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Theme};

/// Panel surface grouping the gallery controls.
///
/// Derived from the active Iced `Theme` so it stays readable in both light and
/// dark modes without hard-coding colors.
pub fn panel(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        border: Border {
            color: palette.background.strong.color,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        shadow: shadow::SM,
        text_color: Some(palette.background.weak.text),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panel_has_background_and_border() {
        let style = panel(&Theme::Light);
        assert!(style.background.is_some());
        assert_eq!(style.border.width, border::WIDTH_SM);
    }
}
