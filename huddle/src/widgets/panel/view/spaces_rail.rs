use iced::widget::{Column, container, scrollable};
use iced::{Element, Length, Padding, alignment};

use crate::components::primitive::space_cell::{self, SpaceCellProps};
use crate::layout::RAIL_WIDTH;
use crate::theme::ThemeProps;
use crate::widgets::panel::event::PanelIntent;
use crate::widgets::panel::model::{PanelViewModel, SPACES_COUNT, space_label};

const CELL_SPACING: f32 = 16.0;
const TOP_PADDING: f32 = 20.0;

/// Props for the vertical spaces rail.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SpacesRailProps<'a> {
    pub(crate) vm: PanelViewModel,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render the fixed-width rail of space cells.
pub(crate) fn view(props: SpacesRailProps<'_>) -> Element<'_, PanelIntent> {
    let palette = *props.theme.theme.palette();

    let cells = (0..SPACES_COUNT).map(|index| {
        space_cell::view(SpaceCellProps {
            label: space_label(index),
            is_active: index == props.vm.active_space,
            theme: props.theme,
        })
        .map(move |_| PanelIntent::SpacePressed(index))
    });

    let column = Column::with_children(cells)
        .spacing(CELL_SPACING)
        .padding(Padding {
            top: TOP_PADDING,
            ..Padding::ZERO
        })
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center);

    container(
        scrollable(column)
            .width(Length::Fill)
            .height(Length::Fill),
    )
    .width(Length::Fixed(RAIL_WIDTH))
    .height(Length::Fill)
    .style(move |_| container::Style {
        background: Some(palette.rail_background.into()),
        ..container::Style::default()
    })
    .into()
}
