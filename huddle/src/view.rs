use iced::widget::{container, float, row, stack};
use iced::{Element, Length, Theme};

use super::{App, AppEvent};
use crate::components::primitive::content_surface::{
    self, ContentSurfaceProps,
};
use crate::layout;
use crate::theme::ThemeProps;
use crate::widgets::panel::view::{rooms_list, spaces_rail};
use crate::widgets::panel::{PanelEvent, PanelViewModel, room_title};
use crate::widgets::reveal::{RevealEvent, RevealIntent, RevealViewModel};

/// Compose the panel underneath the sliding content surface.
pub(super) fn view(app: &App) -> Element<'_, AppEvent, Theme, iced::Renderer> {
    let theme_props = ThemeProps::new(&app.theme);
    let reveal_vm = app.widgets.reveal.vm();
    let panel_vm = app.widgets.panel.vm();

    let panel = view_panel(panel_vm, reveal_vm.panel_width, theme_props);
    let stage = view_stage(panel_vm, reveal_vm, theme_props);

    stack![panel, stage]
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Render the spaces rail and, when there is room, the rooms list.
fn view_panel<'a>(
    vm: PanelViewModel,
    panel_width: f32,
    theme_props: ThemeProps<'a>,
) -> Element<'a, AppEvent, Theme, iced::Renderer> {
    let rail = spaces_rail::view(spaces_rail::SpacesRailProps {
        vm,
        theme: theme_props,
    });

    let rooms_width = layout::rooms_list_width(panel_width);
    let content = if rooms_width > 0.0 {
        let rooms = rooms_list::view(rooms_list::RoomsListProps {
            vm,
            width: rooms_width,
            theme: theme_props,
        });
        row![rail, rooms].height(Length::Fill).into()
    } else {
        rail
    };
    let content = content
        .map(|intent| AppEvent::Panel(PanelEvent::Intent(intent)));

    container(content)
        .width(Length::Fixed(panel_width))
        .height(Length::Fill)
        .clip(true)
        .into()
}

/// Render the content surface slid right by the rendered offset.
///
/// The surface is laid out at the full window size and translated, so it
/// moves as a whole instead of shrinking. The uncovered strip on the left
/// stays transparent and the panel below receives its taps.
fn view_stage<'a>(
    panel_vm: PanelViewModel,
    reveal_vm: RevealViewModel,
    theme_props: ThemeProps<'a>,
) -> Element<'a, AppEvent, Theme, iced::Renderer> {
    let content = content_surface::view(ContentSurfaceProps {
        header: panel_vm.selected_room.map(room_title),
        is_dragging: reveal_vm.is_dragging,
        theme: theme_props,
    })
    .map(|_| {
        AppEvent::Reveal(RevealEvent::Intent(RevealIntent::PointerPressed))
    });

    let offset = reveal_vm.rendered_offset;
    float(content)
        .translate(move |bounds, _viewport| {
            layout::slide_translation(bounds, offset)
        })
        .into()
}
