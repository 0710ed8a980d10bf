// SPDX-License-Identifier: MPL-2.0
//! Centralized icon module.
//!
//! Icons are monochrome SVGs embedded at compile time via `include_bytes!` and
//! their handles are cached using `OnceLock`. Being monochrome, they are tinted
//! at render time with [`tinted`] instead of shipping one file per color.
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::icons;
//!
//! let close = icons::sized(icons::cross(), sizing::ICON_SM);
//! let accent = icons::tinted(icons::warning(), palette::WARNING_500);
//! ```
//!
//! # Naming Convention
//!
//! Icons use generic visual names describing the icon's appearance,
//! not the action context (e.g., `cross` not `dismiss_toast`).

use iced::widget::svg::{self, Handle, Svg};
use iced::{Color, Length, Theme};
use std::sync::OnceLock;

/// Macro to define an icon function with a cached handle.
/// The handle is created once on first access and reused thereafter.
macro_rules! define_icon {
    ($name:ident, $filename:literal, $doc:literal) => {
        #[doc = $doc]
        pub fn $name<'a>() -> Svg<'a> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            static DATA: &[u8] = include_bytes!(concat!(
                env!("CARGO_MANIFEST_DIR"),
                "/assets/icons/",
                $filename
            ));
            let handle = HANDLE.get_or_init(|| Handle::from_memory(DATA));
            Svg::new(handle.clone())
        }
    };
}

define_icon!(
    checkmark,
    "checkmark.svg",
    "Checkmark icon: circle with a tick."
);
define_icon!(info, "info.svg", "Info icon: circle with a lowercase i.");
define_icon!(
    warning,
    "warning.svg",
    "Warning icon: triangle with an exclamation mark."
);
define_icon!(
    error,
    "error.svg",
    "Error icon: octagon with an exclamation mark."
);
define_icon!(cross, "cross.svg", "Cross icon: two diagonal strokes.");
define_icon!(
    bell,
    "bell.svg",
    "Bell icon: used as the gallery header glyph."
);

/// Creates an icon with a fixed square size.
pub fn sized<'a>(icon: Svg<'a>, size: f32) -> Svg<'a> {
    icon.width(Length::Fixed(size)).height(Length::Fixed(size))
}

/// Paints a monochrome icon with `color`.
pub fn tinted<'a>(icon: Svg<'a>, color: Color) -> Svg<'a> {
    icon.style(move |_theme: &Theme, _status| svg::Style { color: Some(color) })
}

/// Paints a monochrome icon with the theme's text color.
pub fn themed<'a>(icon: Svg<'a>) -> Svg<'a> {
    icon.style(|theme: &Theme, _status| svg::Style {
        color: Some(theme.palette().text),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_icons_load_successfully() {
        // These calls verify that all include_bytes! paths are valid
        let _ = checkmark();
        let _ = info();
        let _ = warning();
        let _ = error();
        let _ = cross();
        let _ = bell();
    }

    #[test]
    fn icons_fit_in_borrowed_widgets() {
        fn labelled<'a>(label: &'a str) -> iced::Element<'a, ()> {
            iced::widget::button(
                iced::widget::Row::new()
                    .push(sized(themed(bell()), 16.0))
                    .push(iced::widget::text(label)),
            )
            .into()
        }

        let label = String::from("borrowed");
        let _ = labelled(&label);
    }

    #[test]
    fn icon_handles_are_cached() {
        let _ = sized(themed(cross()), 16.0);
        let _ = tinted(cross(), Color::WHITE);
    }
}
