//! Screen rendering
//!
//! Each screen is a function of borrowed state returning an [`Element`].
//! Shared building blocks live here.

pub mod admins;
pub mod canteens;
pub mod dashboard;
pub mod products;
pub mod settings;
pub mod sidebar;

use crate::app::Message;
use crate::confirm::Pending;
use crate::error::FormError;
use crate::router::Screen;
use iced::widget::{Row, button, column, container, row, text, text_input};
use iced::{Element, Length};
use std::fmt;

pub fn loading<'a>() -> Element<'a, Message> {
    container(text("Memuat data...").size(18))
        .padding(20)
        .into()
}

pub fn not_found<'a>(tag: &'a str) -> Element<'a, Message> {
    column![
        text("Fitur Sedang Dikembangkan").size(28),
        text(format!("Halaman '{tag}' akan segera tersedia.")),
        button("Kembali ke Dashboard").on_press(Message::Navigate(Screen::Dashboard)),
    ]
    .spacing(10)
    .into()
}

pub fn header<'a>(title: &'a str, subtitle: &'a str) -> Element<'a, Message> {
    column![text(title).size(30), text(subtitle).size(14)]
        .spacing(4)
        .into()
}

pub fn banner<'a>(message: &'a str) -> Element<'a, Message> {
    container(text(message).size(16))
        .padding(10)
        .width(Length::Fill)
        .style(container::rounded_box)
        .into()
}

pub fn status_bar<'a>(message: &'a str) -> Element<'a, Message> {
    container(
        row![
            text(message).width(Length::Fill),
            button("Tutup").on_press(Message::DismissStatus),
        ]
        .spacing(10),
    )
    .padding(10)
    .style(container::rounded_box)
    .into()
}

pub fn confirm_bar<'a>(pending: Pending) -> Element<'a, Message> {
    container(
        row![
            text(pending.prompt()).width(Length::Fill),
            button("Ya").on_press(Message::Confirm),
            button("Batal")
                .style(button::secondary)
                .on_press(Message::Decline),
        ]
        .spacing(10),
    )
    .padding(10)
    .style(container::rounded_box)
    .into()
}

/// A labelled figure for the summary rows
pub fn stat_card<'a>(label: &'a str, value: String) -> Element<'a, Message> {
    container(column![text(label).size(13), text(value).size(24)].spacing(4))
        .padding(14)
        .width(Length::Fill)
        .style(container::rounded_box)
        .into()
}

/// One button per option; the selected one is highlighted.
pub fn choices<'a, T>(
    options: impl IntoIterator<Item = T>,
    selected: T,
    on_select: impl Fn(T) -> Message,
) -> Element<'a, Message>
where
    T: Copy + PartialEq + fmt::Display,
{
    Row::with_children(options.into_iter().map(|option| {
        let style = if option == selected {
            button::primary
        } else {
            button::secondary
        };
        button(text(option.to_string()))
            .style(style)
            .on_press(on_select(option))
            .into()
    }))
    .spacing(6)
    .into()
}

pub fn field<'a>(
    label: &'a str,
    placeholder: &'a str,
    value: &'a str,
    on_input: impl Fn(String) -> Message + 'a,
) -> Element<'a, Message> {
    row![
        text(label).width(180),
        text_input(placeholder, value)
            .on_input(on_input)
            .width(Length::Fill),
    ]
    .spacing(10)
    .into()
}

pub fn form_error<'a>(error: Option<&FormError>) -> Element<'a, Message> {
    match error {
        Some(error) => text(error.to_string()).size(14).into(),
        None => text("").size(1).into(),
    }
}

/// A titled panel
pub fn card<'a>(content: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    container(content)
        .padding(16)
        .width(Length::Fill)
        .style(container::rounded_box)
        .into()
}
