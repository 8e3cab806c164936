use iced::{Color, Element, Length};
use iced::widget::container::{background, bordered_box};
use iced::widget::{button, column, horizontal_space, row, text, Container};
use crate::app::state::{Confirm, Notice, NoticeKind};
use crate::app::Message;

fn overlay<'a>(card: Container<'a, Message>) -> Element<'a, Message> {
    Container::new(
        Container::new(card.style(bordered_box).padding(20).width(Length::Fixed(420.0))).center(Length::Fill),
    )
        .width(Length::Fill)
        .height(Length::Fill)
        .style(move |_| background(Color { r: 0.0, g: 0.0, b: 0.0, a: 0.7 }))
        .into()
}

pub fn notice_dialog(notice: &Notice) -> Element<Message> {
    let title = text(&notice.title).size(22).style(match notice.kind {
        NoticeKind::Info => text::success,
        NoticeKind::Warning => text::primary,
        NoticeKind::Error => text::danger,
    });
    overlay(Container::new(
        column![
            title,
            text(&notice.body).size(16),
            row![horizontal_space(), button("OK").on_press(Message::DismissNotice)],
        ]
            .spacing(15),
    ))
}

pub fn confirm_dialog<'a>(confirm: Confirm) -> Element<'a, Message> {
    let (title, body) = match confirm {
        Confirm::Delete(entity, _) => (
            "Confirm Deletion",
            format!("Are you sure you want to delete this {}?", entity.label()),
        ),
        Confirm::Logout => ("Confirm Logout", "Are you sure you want to logout?".to_string()),
    };
    overlay(Container::new(
        column![
            text(title).size(22),
            text(body).size(16),
            row![
                horizontal_space(),
                button("No").style(button::secondary).on_press(Message::ConfirmCancelled),
                button("Yes").on_press(Message::ConfirmAccepted),
            ]
                .spacing(10),
        ]
            .spacing(15),
    ))
}
