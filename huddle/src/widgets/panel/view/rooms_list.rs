use iced::widget::{Column, container, scrollable};
use iced::{Element, Length, Padding};

use crate::components::primitive::room_entry::{self, RoomEntryProps};
use crate::theme::ThemeProps;
use crate::widgets::panel::event::PanelIntent;
use crate::widgets::panel::model::{
    PanelViewModel, ROOM_PREVIEW, ROOMS_COUNT, room_title,
};

const ENTRY_SPACING: f32 = 16.0;
const TOP_PADDING: f32 = 20.0;

/// Props for the rooms list.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RoomsListProps<'a> {
    pub(crate) vm: PanelViewModel,
    pub(crate) width: f32,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render the scrollable list of room cards.
pub(crate) fn view(props: RoomsListProps<'_>) -> Element<'_, PanelIntent> {
    let palette = *props.theme.theme.palette();

    let entries = (0..ROOMS_COUNT).map(|index| {
        room_entry::view(RoomEntryProps {
            title: room_title(index),
            preview: ROOM_PREVIEW,
            is_selected: props.vm.selected_room == Some(index),
            theme: props.theme,
        })
        .map(move |_| PanelIntent::RoomPressed(index))
    });

    let column = Column::with_children(entries)
        .spacing(ENTRY_SPACING)
        .padding(Padding {
            top: TOP_PADDING,
            ..Padding::ZERO
        })
        .width(Length::Fill);

    container(
        scrollable(column)
            .width(Length::Fill)
            .height(Length::Fill),
    )
    .width(Length::Fixed(props.width))
    .height(Length::Fill)
    .clip(true)
    .style(move |_| container::Style {
        background: Some(palette.rooms_background.into()),
        ..container::Style::default()
    })
    .into()
}
