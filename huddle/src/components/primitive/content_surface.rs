use iced::widget::{Column, column, container, mouse_area, scrollable, text};
use iced::{Element, Font, Length, font, mouse};

use crate::theme::ThemeProps;

const ROW_COUNT: usize = 10;
const ROW_LABEL: &str = "room entries";
const ROW_TEXT_SIZE: f32 = 34.0;
const ROW_PADDING: f32 = 16.0;
const HEADER_TEXT_SIZE: f32 = 22.0;
const HEADER_PADDING: f32 = 16.0;

/// UI events emitted by the content surface.
#[derive(Debug, Clone)]
pub(crate) enum ContentSurfaceEvent {
    PointerPressed,
}

/// Props for the main content pane.
#[derive(Debug, Clone)]
pub(crate) struct ContentSurfaceProps<'a> {
    /// Title of the selected room, shown as a header when present.
    pub(crate) header: Option<String>,
    pub(crate) is_dragging: bool,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render the full-bleed content pane that the reveal drag moves.
///
/// Callers move the pane by translating it, never by narrowing its slot.
pub(crate) fn view<'a>(
    props: ContentSurfaceProps<'a>,
) -> Element<'a, ContentSurfaceEvent> {
    let palette = *props.theme.theme.palette();

    let rows = (0..ROW_COUNT).map(|_| {
        container(
            text(ROW_LABEL)
                .size(ROW_TEXT_SIZE)
                .color(palette.foreground)
                .wrapping(text::Wrapping::None),
        )
        .padding(ROW_PADDING)
        .width(Length::Fill)
        .into()
    });
    let list = scrollable(Column::with_children(rows).width(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill);

    let mut content = column![].width(Length::Fill).height(Length::Fill);
    if let Some(title) = props.header {
        content = content.push(
            container(
                text(title)
                    .size(HEADER_TEXT_SIZE)
                    .font(Font {
                        weight: font::Weight::Bold,
                        ..Font::DEFAULT
                    })
                    .color(palette.foreground)
                    .wrapping(text::Wrapping::None),
            )
            .padding(HEADER_PADDING)
            .width(Length::Fill),
        );
    }
    content = content.push(list);

    let surface = container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .clip(true)
        .style(move |_| container::Style {
            background: Some(palette.content_background.into()),
            ..container::Style::default()
        });

    let interaction = if props.is_dragging {
        mouse::Interaction::Grabbing
    } else {
        mouse::Interaction::Grab
    };

    mouse_area(surface)
        .on_press(ContentSurfaceEvent::PointerPressed)
        .interaction(interaction)
        .into()
}
