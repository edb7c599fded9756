use iced::widget::{button, container, text};
use iced::{Border, Element, Length, alignment};

use crate::theme::ThemeProps;

const SPACE_CELL_SIZE: f32 = 50.0;
const SPACE_CELL_RADIUS: f32 = 12.0;
const SPACE_CELL_LABEL_SIZE: f32 = 16.0;

/// UI events emitted by a space cell.
#[derive(Debug, Clone)]
pub(crate) enum SpaceCellEvent {
    Pressed,
}

/// Props for rendering one square space cell on the rail.
#[derive(Debug, Clone)]
pub(crate) struct SpaceCellProps<'a> {
    pub(crate) label: String,
    pub(crate) is_active: bool,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render a rounded square cell with a centered label.
pub(crate) fn view<'a>(
    props: SpaceCellProps<'a>,
) -> Element<'a, SpaceCellEvent> {
    let palette = *props.theme.theme.palette();
    let fill = if props.is_active {
        palette.space_cell_active
    } else {
        palette.space_cell
    };

    let label = container(
        text(props.label)
            .size(SPACE_CELL_LABEL_SIZE)
            .color(palette.foreground)
            .wrapping(text::Wrapping::None),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center);

    button(label)
        .on_press(SpaceCellEvent::Pressed)
        .padding(0)
        .width(Length::Fixed(SPACE_CELL_SIZE))
        .height(Length::Fixed(SPACE_CELL_SIZE))
        .style(move |_, _| button::Style {
            background: Some(fill.into()),
            text_color: palette.foreground,
            border: Border {
                radius: SPACE_CELL_RADIUS.into(),
                ..Border::default()
            },
            ..button::Style::default()
        })
        .into()
}
