#[path = "subscription.rs"]
mod subscription;
#[path = "update.rs"]
mod update;
#[path = "view.rs"]
mod view;

use iced::{Element, Size, Subscription, Task, Theme};

use crate::layout;
use crate::settings::{self, SettingsData};
use crate::state::State;
use crate::theme::AppTheme;
use crate::widgets::panel::{PanelEvent, PanelWidget};
use crate::widgets::reveal::{RevealEvent, RevealWidget};

pub(crate) const DEFAULT_WINDOW_WIDTH: f32 = 1024.0;
pub(crate) const DEFAULT_WINDOW_HEIGHT: f32 = 768.0;
pub(crate) const MIN_WINDOW_WIDTH: f32 = 360.0;
pub(crate) const MIN_WINDOW_HEIGHT: f32 = 480.0;

/// App-wide events that drive the root update loop.
#[derive(Debug, Clone)]
pub(crate) enum AppEvent {
    // Reveal widget
    Reveal(RevealEvent),
    // Panel widget
    Panel(PanelEvent),
    // Direct operations
    Keyboard(iced::keyboard::Event),
    Window(iced::window::Event),
}

/// Container for all widget instances.
pub(crate) struct Widgets {
    pub(crate) reveal: RevealWidget,
    pub(crate) panel: PanelWidget,
}

/// Root application state.
pub(crate) struct App {
    pub(crate) theme: AppTheme,
    pub(crate) settings: SettingsData,
    pub(crate) state: State,
    pub(crate) widgets: Widgets,
}

impl App {
    /// Initialize the application and return the first task.
    pub(crate) fn new() -> (Self, Task<AppEvent>) {
        let settings = settings::load_or_default();
        let window_size = Size {
            width: DEFAULT_WINDOW_WIDTH,
            height: DEFAULT_WINDOW_HEIGHT,
        };
        let panel_width =
            layout::panel_width(settings.panel_mode(), window_size.width);

        log::info!(
            "starting with panel mode {:?}, panel width {panel_width}",
            settings.panel_mode()
        );

        let widgets = Widgets {
            reveal: RevealWidget::new(
                panel_width,
                settings.reveal_config(),
                settings.drag_min_distance(),
            ),
            panel: PanelWidget::new(),
        };

        let app = App {
            theme: AppTheme::default(),
            settings,
            state: State::new(window_size),
            widgets,
        };

        (app, Task::none())
    }

    /// Return the window title.
    pub(crate) fn title(&self) -> String {
        String::from("Huddle")
    }

    /// Return the current iced theme.
    pub(crate) fn theme(&self) -> Theme {
        self.theme.iced_theme()
    }

    /// Return active subscriptions.
    pub(crate) fn subscription(&self) -> Subscription<AppEvent> {
        subscription::subscription(self)
    }

    /// Handle an incoming event.
    pub(crate) fn update(&mut self, event: AppEvent) -> Task<AppEvent> {
        update::update(self, event)
    }

    /// Render the root view.
    pub(crate) fn view(&self) -> Element<'_, AppEvent, Theme, iced::Renderer> {
        view::view(self)
    }
}
