use iced::Task;

use super::event::{PanelEffect, PanelEvent, PanelIntent};
use super::state::PanelState;

/// Reduce a panel intent into state updates and effect events.
pub(crate) fn reduce(
    state: &mut PanelState,
    event: PanelIntent,
) -> Task<PanelEvent> {
    match apply(state, event) {
        Some(effect) => Task::done(PanelEvent::Effect(effect)),
        None => Task::none(),
    }
}

fn apply(state: &mut PanelState, event: PanelIntent) -> Option<PanelEffect> {
    match event {
        PanelIntent::SpacePressed(index) => {
            if !state.select_space(index) {
                log::warn!("space index {index} out of range");
            }
            None
        },
        PanelIntent::RoomPressed(index) => {
            if !state.select_room(index) {
                log::warn!("room index {index} out of range");
                return None;
            }
            Some(PanelEffect::ClosePanel)
        },
    }
}

#[cfg(test)]
mod tests {
    use super::apply;
    use crate::widgets::panel::state::PanelState;
    use crate::widgets::panel::{PanelEffect, PanelIntent, PanelWidget};

    #[test]
    fn given_new_panel_when_built_then_first_space_is_active() {
        let vm = PanelWidget::new().vm();
        assert_eq!(vm.active_space, 0);
        assert_eq!(vm.selected_room, None);
    }

    #[test]
    fn given_space_press_when_reduced_then_active_space_changes() {
        let mut widget = PanelWidget::new();
        let _task = widget.reduce(PanelIntent::SpacePressed(7));
        assert_eq!(widget.vm().active_space, 7);
    }

    #[test]
    fn given_room_press_when_reduced_then_room_is_selected() {
        let mut widget = PanelWidget::new();
        let _task = widget.reduce(PanelIntent::RoomPressed(3));
        assert_eq!(widget.vm().selected_room, Some(3));
    }

    #[test]
    fn given_room_press_when_applied_then_panel_close_is_requested() {
        let mut state = PanelState::default();
        let effect = apply(&mut state, PanelIntent::RoomPressed(0));
        assert!(matches!(effect, Some(PanelEffect::ClosePanel)));
    }

    #[test]
    fn given_space_press_when_applied_then_panel_stays_put() {
        let mut state = PanelState::default();
        assert!(apply(&mut state, PanelIntent::SpacePressed(4)).is_none());
    }

    #[test]
    fn given_out_of_range_indices_when_reduced_then_selection_is_kept() {
        let mut state = PanelState::default();
        let _ = apply(&mut state, PanelIntent::RoomPressed(2));

        assert!(apply(&mut state, PanelIntent::RoomPressed(30)).is_none());
        assert!(apply(&mut state, PanelIntent::SpacePressed(20)).is_none());
        assert_eq!(state.selected_room(), Some(2));
        assert_eq!(state.active_space(), 0);
    }
}
