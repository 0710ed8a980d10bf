// SPDX-License-Identifier: MPL-2.0
//! View rendering for the gallery.
//!
//! The gallery panel fills the window and the toast overlay is stacked on top
//! of it, anchored to the selected corner.

use super::{Message, Trigger};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::notifications::{Manager, Position, Severity, Toast};
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use iced::{
    alignment,
    widget::{button, Column, Container, Row, Stack, Text},
    Element, Length,
};

/// Context required to render the gallery.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub notifications: &'a Manager,
    pub position: Position,
    pub theme_mode: ThemeMode,
}

/// Renders the gallery panel with the toast overlay on top.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let panel = Container::new(gallery_panel(&ctx))
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::LG)
        .style(styles::container::panel);

    let overlay = Toast::view_overlay(ctx.notifications, ctx.i18n, ctx.position)
        .map(Message::Notification);

    Stack::new()
        .push(panel)
        .push(overlay)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn gallery_panel<'a>(ctx: &ViewContext<'a>) -> Column<'a, Message> {
    let i18n = ctx.i18n;

    let header = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(icons::sized(icons::themed(icons::bell()), sizing::ICON_LG))
        .push(Text::new(i18n.tr("gallery-title")).size(typography::TITLE_LG));

    let visible = ctx.notifications.visible_count().to_string();
    let evicted = ctx.notifications.evicted_count().to_string();
    let status = Text::new(i18n.tr_with_args(
        "gallery-status",
        &[("visible", &visible), ("evicted", &evicted)],
    ))
    .size(typography::CAPTION);

    let severity_row = Severity::ALL.iter().fold(
        Row::new().spacing(spacing::XS),
        |row, &severity| {
            row.push(
                button(Text::new(i18n.tr(trigger_key(severity))).size(typography::BODY))
                    .height(Length::Fixed(sizing::BUTTON_HEIGHT))
                    .on_press(Message::Trigger(Trigger::Severity(severity)))
                    .style(styles::button::accent(severity.color())),
            )
        },
    );

    let variants_row = [
        (Trigger::Titled, "gallery-trigger-titled"),
        (Trigger::WithAction, "gallery-trigger-action"),
        (Trigger::Persistent, "gallery-trigger-persistent"),
        (Trigger::Burst, "gallery-trigger-burst"),
    ]
    .into_iter()
    .fold(Row::new().spacing(spacing::XS), |row, (trigger, key)| {
        row.push(
            button(Text::new(i18n.tr(key)).size(typography::BODY))
                .height(Length::Fixed(sizing::BUTTON_HEIGHT))
                .on_press(Message::Trigger(trigger))
                .style(styles::button::primary),
        )
    })
    .push(
        button(Text::new(i18n.tr("gallery-dismiss-all")).size(typography::BODY))
            .height(Length::Fixed(sizing::BUTTON_HEIGHT))
            .on_press_maybe(
                ctx.notifications
                    .has_notifications()
                    .then_some(Message::DismissAll),
            )
            .style(styles::button::unselected),
    );

    let position_row = Position::ALL.iter().fold(
        Row::new().spacing(spacing::XS),
        |row, &position| {
            row.push(toggle(
                i18n.tr(position.label_key()),
                position == ctx.position,
                Message::PositionSelected(position),
            ))
        },
    );

    let theme_row = ThemeMode::ALL
        .iter()
        .fold(Row::new().spacing(spacing::XS), |row, &mode| {
            row.push(toggle(
                i18n.tr(mode.label_key()),
                mode == ctx.theme_mode,
                Message::ThemeSelected(mode),
            ))
        });

    Column::new()
        .spacing(spacing::MD)
        .push(header)
        .push(Text::new(i18n.tr("gallery-subtitle")).size(typography::BODY))
        .push(status)
        .push(section(i18n.tr("gallery-section-severity"), severity_row))
        .push(section(i18n.tr("gallery-section-variants"), variants_row))
        .push(section(i18n.tr("gallery-section-position"), position_row))
        .push(section(i18n.tr("gallery-section-theme"), theme_row))
}

fn section<'a>(title: String, row: Row<'a, Message>) -> Column<'a, Message> {
    Column::new()
        .spacing(spacing::XS)
        .push(Text::new(title).size(typography::TITLE_SM))
        .push(row)
}

fn toggle<'a>(label: String, is_selected: bool, message: Message) -> Element<'a, Message> {
    button(Text::new(label).size(typography::BODY))
        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
        .on_press(message)
        .style(if is_selected {
            styles::button::selected
        } else {
            styles::button::unselected
        })
        .into()
}

fn trigger_key(severity: Severity) -> &'static str {
    match severity {
        Severity::Info => "gallery-trigger-info",
        Severity::Success => "gallery-trigger-success",
        Severity::Warning => "gallery-trigger-warning",
        Severity::Error => "gallery-trigger-error",
    }
}
