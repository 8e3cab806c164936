use iced::widget::container::bordered_box;
use iced::widget::{button, column, row, scrollable, text, text_input, Column, Container, Row, Rule};
use iced::{Alignment, Element, Length};
use crate::app::state::Entity;
use crate::app::Message;

/// One selectable table row: the row id and the text of each column.
pub type TableRow = (i64, Vec<String>);

/// A header plus scrollable body. Rows become buttons when `on_select` yields
/// a message for them; otherwise they are plain text.
pub fn table<'a>(
    headers: &[&'a str],
    rows: Vec<TableRow>,
    selected: Option<i64>,
    on_select: impl Fn(i64) -> Option<Message>,
) -> Element<'a, Message> {
    let header = headers.iter().fold(Row::new().spacing(10).padding([5, 10]), |r, h| {
        r.push(text(*h).size(16).width(Length::FillPortion(1)))
    });

    let body = if rows.is_empty() {
        Column::new().padding(10).push(text("No records.").size(14))
    } else {
        rows.into_iter().fold(Column::new().spacing(2), |col, (id, cells)| {
            let line = cells.into_iter().fold(Row::new().spacing(10).align_y(Alignment::Center), |r, cell| {
                r.push(text(cell).size(14).width(Length::FillPortion(1)))
            });
            match on_select(id) {
                Some(message) => {
                    let is_selected = selected == Some(id);
                    col.push(
                        button(line)
                            .width(Length::Fill)
                            .padding([5, 10])
                            .style(move |theme, status| {
                                if is_selected {
                                    button::primary(theme, status)
                                } else {
                                    button::text(theme, status)
                                }
                            })
                            .on_press(message),
                    )
                }
                None => col.push(Container::new(line).width(Length::Fill).padding([5, 10])),
            }
        })
    };

    Container::new(
        column![header, Rule::horizontal(1), scrollable(body).height(Length::Fill)].spacing(4),
    )
    .style(bordered_box)
    .padding(5)
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}

pub fn field<'a>(label: &'a str, input: impl Into<Element<'a, Message>>) -> Column<'a, Message> {
    column![text(label).size(14), input.into()].spacing(4)
}

pub fn search_bar<'a>(entity: Entity, term: &str) -> Row<'a, Message> {
    row![
        text("Search:"),
        text_input("Search...", term)
            .on_input(move |t| Message::SearchChanged(entity, t))
            .padding(8)
            .width(Length::Fixed(300.0)),
    ]
    .spacing(10)
    .align_y(Alignment::Center)
}

pub fn form_buttons<'a>(entity: Entity) -> Row<'a, Message> {
    row![
        button("Submit").on_press(Message::Submit(entity)),
        button("Update").on_press(Message::Update(entity)),
        button("Delete").style(button::danger).on_press(Message::Delete(entity)),
        button("Clear").style(button::secondary).on_press(Message::ClearForm(entity)),
    ]
    .spacing(10)
}

/// Table on the left, form on the right, search above, the way every admin
/// panel is laid out.
pub fn crud_panel<'a>(
    title: &'a str,
    entity: Entity,
    term: &str,
    table: Element<'a, Message>,
    form: Column<'a, Message>,
) -> Container<'a, Message> {
    let form = Container::new(form.spacing(12).push(form_buttons(entity)))
        .style(bordered_box)
        .padding(15)
        .width(Length::FillPortion(2));

    let content = column![
        text(title).size(30),
        search_bar(entity, term),
        row![Container::new(table).width(Length::FillPortion(3)), form]
            .spacing(15)
            .height(Length::Fill),
    ]
    .spacing(15);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(20)
}
