use crate::app::Message;
use crate::router::Screen;
use iced::widget::{Column, button, column, container, text};
use iced::{Element, Length};

pub fn view<'a>(active: Option<Screen>, school: &'a str) -> Element<'a, Message> {
    let links = Column::with_children(Screen::ALL.into_iter().map(|screen| {
        let style = if Some(screen) == active {
            button::primary
        } else {
            button::text
        };
        button(text(screen.label()))
            .width(Length::Fill)
            .style(style)
            .on_press(Message::Navigate(screen))
            .into()
    }))
    .spacing(4);

    container(
        column![
            text("Kantin SMK Telkom").size(20),
            text(school).size(12),
            text("").size(8),
            links,
        ]
        .spacing(6),
    )
    .padding(16)
    .width(220)
    .height(Length::Fill)
    .style(container::bordered_box)
    .into()
}
