// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering individual notifications.
//!
//! Toasts are the visual representation of notifications, appearing as
//! small cards with severity-colored accents, an optional action and a
//! dismiss button. They hold no state: everything comes from the record, and
//! user input is reported back as [`Message`]s.

use super::manager::{Manager, Message};
use super::notification::{Notification, Severity};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{
    border, opacity, palette, radius, shadow, sizing, spacing, typography,
};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::svg::Svg;
use iced::widget::{button, container, text, tooltip, Column, Container, Row, Text};
use iced::{alignment, font, Color, Element, Font, Length, Theme};
use serde::{Deserialize, Serialize};

/// Screen corner the toast stack is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Position {
    TopLeft,
    TopRight,
    BottomLeft,
    #[default]
    BottomRight,
}

impl Position {
    pub const ALL: [Position; 4] = [
        Position::TopLeft,
        Position::TopRight,
        Position::BottomLeft,
        Position::BottomRight,
    ];

    /// Returns the container alignment anchoring the stack to this corner.
    #[must_use]
    pub fn alignment(self) -> (alignment::Horizontal, alignment::Vertical) {
        match self {
            Position::TopLeft => (alignment::Horizontal::Left, alignment::Vertical::Top),
            Position::TopRight => (alignment::Horizontal::Right, alignment::Vertical::Top),
            Position::BottomLeft => (alignment::Horizontal::Left, alignment::Vertical::Bottom),
            Position::BottomRight => (alignment::Horizontal::Right, alignment::Vertical::Bottom),
        }
    }

    /// Returns the i18n key naming this corner.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            Position::TopLeft => "position-top-left",
            Position::TopRight => "position-top-right",
            Position::BottomLeft => "position-bottom-left",
            Position::BottomRight => "position-bottom-right",
        }
    }
}

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders a single toast notification.
    pub fn view<'a>(notification: &'a Notification, i18n: &'a I18n) -> Element<'a, Message> {
        let severity = notification.severity();
        let accent_color = severity.color();
        let notification_id = notification.id();

        let icon = icons::tinted(
            icons::sized(Self::severity_icon(severity), sizing::ICON_MD),
            accent_color,
        );
        let icon_widget = tooltip(
            Container::new(icon).padding(spacing::XXS),
            Text::new(i18n.tr(severity.label_key())).size(typography::CAPTION),
            tooltip::Position::Top,
        )
        .style(container::rounded_box);

        // Title, message and optional action stacked vertically
        let mut body = Column::new().spacing(spacing::XXS);
        if let Some(title) = notification.title() {
            body = body.push(
                Text::new(title)
                    .size(typography::BODY)
                    .font(Font {
                        weight: font::Weight::Bold,
                        ..Font::DEFAULT
                    })
                    .style(primary_text_style),
            );
        }
        body = body.push(
            Text::new(notification.message())
                .size(typography::BODY)
                .style(primary_text_style),
        );
        if let Some(action) = notification.action() {
            body = body.push(
                button(Text::new(action.label()).size(typography::CAPTION))
                    .on_press(Message::Activate(notification_id))
                    .padding([spacing::XXS, spacing::XS])
                    .style(styles::button::accent(accent_color)),
            );
        }

        // Dismiss button (always visible, uses main text color for good contrast)
        let dismiss_button = tooltip(
            button(icons::sized(icons::themed(icons::cross()), sizing::ICON_SM))
                .on_press(Message::Dismiss(notification_id))
                .padding(spacing::XXS)
                .style(dismiss_button_style),
            Text::new(i18n.tr("notification-dismiss")).size(typography::CAPTION),
            tooltip::Position::Left,
        )
        .style(container::rounded_box);

        // Layout: [icon] [title/message/action] [dismiss]
        let content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(icon_widget)
            .push(
                Container::new(body)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Left),
            )
            .push(dismiss_button);

        // Toast container with accent border
        Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |theme: &Theme| toast_container_style(theme, accent_color))
            .into()
    }

    /// Renders the toast overlay with all visible notifications.
    ///
    /// Toasts are stacked oldest first in the requested corner.
    pub fn view_overlay<'a>(
        manager: &'a Manager,
        i18n: &'a I18n,
        position: Position,
    ) -> Element<'a, Message> {
        let toasts: Vec<Element<'a, Message>> = manager
            .visible()
            .map(|notification| Self::view(notification, i18n))
            .collect();

        if toasts.is_empty() {
            // Return an empty container that takes no space
            return Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into();
        }

        let (horizontal, vertical) = position.alignment();
        let toast_column = Column::with_children(toasts)
            .spacing(spacing::XS)
            .align_x(horizontal);

        Container::new(toast_column)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(horizontal)
            .align_y(vertical)
            .padding(spacing::MD)
            .into()
    }

    /// Returns the appropriate icon for the severity level.
    fn severity_icon<'a>(severity: Severity) -> Svg<'a> {
        match severity {
            Severity::Success => icons::checkmark(),
            Severity::Info => icons::info(),
            Severity::Warning => icons::warning(),
            Severity::Error => icons::error(),
        }
    }
}

fn primary_text_style(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(theme.palette().text),
    }
}

/// Style function for the toast container.
fn toast_container_style(theme: &Theme, accent_color: Color) -> container::Style {
    let bg_color = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(iced::Background::Color(bg_color)),
        border: iced::Border {
            color: accent_color,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

/// Style function for the dismiss button.
fn dismiss_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;
    let hover_alpha = match status {
        button::Status::Hovered => Some(opacity::OVERLAY_SUBTLE),
        button::Status::Pressed => Some(opacity::OVERLAY_MEDIUM),
        button::Status::Active | button::Status::Disabled => None,
    };

    button::Style {
        background: hover_alpha.map(|a| iced::Background::Color(Color { a, ..palette::GRAY_400 })),
        text_color: base.text,
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::notification::Action;

    #[test]
    fn toast_container_style_uses_accent_color() {
        let theme = Theme::Dark;
        let accent = palette::SUCCESS_500;
        let style = toast_container_style(&theme, accent);

        assert_eq!(style.border.color, accent);
        assert!(style.background.is_some());
    }

    #[test]
    fn dismiss_button_is_transparent_until_hovered() {
        let theme = Theme::Light;
        assert!(dismiss_button_style(&theme, button::Status::Active)
            .background
            .is_none());
        assert!(dismiss_button_style(&theme, button::Status::Hovered)
            .background
            .is_some());
    }

    #[test]
    fn severity_icons_are_defined() {
        for severity in Severity::ALL {
            let _ = Toast::severity_icon(severity);
        }
    }

    #[test]
    fn toast_renders_from_borrowed_records() {
        let i18n = I18n::default();
        let notifications: Vec<Notification> = Severity::ALL
            .iter()
            .map(|&severity| {
                Notification::new(severity, format!("{severity:?}"))
                    .with_action(Action::new("Retry", "retry"))
            })
            .collect();

        let rendered: Vec<Element<'_, Message>> = notifications
            .iter()
            .map(|notification| Toast::view(notification, &i18n))
            .collect();
        assert_eq!(rendered.len(), Severity::ALL.len());
    }

    #[test]
    fn positions_anchor_to_their_corner() {
        assert_eq!(
            Position::BottomRight.alignment(),
            (alignment::Horizontal::Right, alignment::Vertical::Bottom)
        );
        assert_eq!(
            Position::TopLeft.alignment(),
            (alignment::Horizontal::Left, alignment::Vertical::Top)
        );
    }

    #[test]
    fn overlay_renders_visible_toasts() {
        let i18n = I18n::default();
        let mut manager = Manager::new();
        manager.push(Notification::info("hello").with_title("Greeting"));

        let _ = Toast::view_overlay(&manager, &i18n, Position::TopRight);
        let _ = Toast::view_overlay(&Manager::new(), &i18n, Position::default());
    }
}
