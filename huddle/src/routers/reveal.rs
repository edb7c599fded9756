use std::time::Instant;

use iced::Task;

use crate::app::{App, AppEvent};
use crate::widgets::reveal::{
    RevealCtx, RevealEffect, RevealEvent, RevealIntent,
};

/// Route a reveal event through widget reduction or app orchestration.
pub(crate) fn route(app: &mut App, event: RevealEvent) -> Task<AppEvent> {
    match event {
        RevealEvent::Intent(event) => route_intent(app, event),
        RevealEvent::Effect(effect) => route_effect(effect),
    }
}

fn route_intent(app: &mut App, event: RevealIntent) -> Task<AppEvent> {
    let ctx = RevealCtx {
        now: Instant::now(),
    };
    app.widgets
        .reveal
        .reduce(event, &ctx)
        .map(AppEvent::Reveal)
}

fn route_effect(effect: RevealEffect) -> Task<AppEvent> {
    match effect {
        RevealEffect::Committed { commit, is_open } => {
            log::info!("reveal committed: {commit:?}, panel open: {is_open}");
            Task::none()
        },
    }
}
