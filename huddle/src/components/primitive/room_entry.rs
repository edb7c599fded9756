use iced::widget::{Space, button, column, container, row, text};
use iced::{Border, Color, Element, Font, Length, alignment, font};

use crate::theme::ThemeProps;

const ROOM_ENTRY_HEIGHT: f32 = 70.0;
const ROOM_ENTRY_RADIUS: f32 = 12.0;
const ROOM_ENTRY_PADDING_H: f32 = 8.0;
const ROOM_ENTRY_SPACING: f32 = 8.0;
const AVATAR_SIZE: f32 = 40.0;
const TITLE_SIZE: f32 = 17.0;
const PREVIEW_SIZE: f32 = 15.0;
const LINES_SPACING: f32 = 4.0;

/// UI events emitted by a room entry card.
#[derive(Debug, Clone)]
pub(crate) enum RoomEntryEvent {
    Pressed,
}

/// Props for rendering one room card.
#[derive(Debug, Clone)]
pub(crate) struct RoomEntryProps<'a> {
    pub(crate) title: String,
    pub(crate) preview: &'a str,
    pub(crate) is_selected: bool,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render a card with an avatar, a bold title and a one-line preview.
pub(crate) fn view<'a>(
    props: RoomEntryProps<'a>,
) -> Element<'a, RoomEntryEvent> {
    let palette = *props.theme.theme.palette();
    let card = if props.is_selected {
        palette.card_selected
    } else {
        palette.card
    };

    let avatar = container(Space::new())
        .width(Length::Fixed(AVATAR_SIZE))
        .height(Length::Fixed(AVATAR_SIZE))
        .style(move |_| container::Style {
            background: Some(palette.avatar.into()),
            border: Border {
                radius: (AVATAR_SIZE / 2.0).into(),
                ..Border::default()
            },
            ..container::Style::default()
        });

    let title = text(props.title)
        .size(TITLE_SIZE)
        .font(Font {
            weight: font::Weight::Semibold,
            ..Font::DEFAULT
        })
        .color(palette.foreground)
        .wrapping(text::Wrapping::None);

    let preview = text(props.preview)
        .size(PREVIEW_SIZE)
        .color(palette.dim_foreground)
        .wrapping(text::Wrapping::None);

    let lines = column![title, preview]
        .spacing(LINES_SPACING)
        .width(Length::Fill)
        .clip(true);

    let content = row![avatar, lines]
        .spacing(ROOM_ENTRY_SPACING)
        .align_y(alignment::Vertical::Center)
        .padding([0.0, ROOM_ENTRY_PADDING_H])
        .width(Length::Fill)
        .height(Length::Fill);

    button(content)
        .on_press(RoomEntryEvent::Pressed)
        .padding(0)
        .width(Length::Fill)
        .height(Length::Fixed(ROOM_ENTRY_HEIGHT))
        .style(move |_, _| button::Style {
            background: Some(card.into()),
            text_color: palette.foreground,
            border: Border {
                radius: ROOM_ENTRY_RADIUS.into(),
                color: Color::TRANSPARENT,
                width: 0.0,
            },
            ..button::Style::default()
        })
        .into()
}
