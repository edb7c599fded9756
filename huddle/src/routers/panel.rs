use iced::Task;

use crate::app::{App, AppEvent};
use crate::widgets::panel::{PanelEffect, PanelEvent, PanelIntent};
use crate::widgets::reveal::{RevealEvent, RevealIntent};

/// Route a panel event through widget reduction or app orchestration.
pub(crate) fn route(app: &mut App, event: PanelEvent) -> Task<AppEvent> {
    match event {
        PanelEvent::Intent(event) => route_intent(app, event),
        PanelEvent::Effect(effect) => route_effect(effect),
    }
}

fn route_intent(app: &mut App, event: PanelIntent) -> Task<AppEvent> {
    app.widgets.panel.reduce(event).map(AppEvent::Panel)
}

fn route_effect(effect: PanelEffect) -> Task<AppEvent> {
    match effect {
        PanelEffect::ClosePanel => {
            Task::done(AppEvent::Reveal(RevealEvent::Intent(
                RevealIntent::Close,
            )))
        },
    }
}
