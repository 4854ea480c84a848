#[path = "subscription.rs"]
mod subscription;
#[path = "update.rs"]
mod update;
#[path = "view.rs"]
pub(crate) mod view;

use iced::{Element, Point, Size, Subscription, Task, Theme, window};

use crate::layout::{MIN_SHELL_WIDTH, ShellLayout};
use crate::outside_click::{DetectorId, PointerDown};
use crate::router::Router;
use crate::settings::{self, MerchantProfile};
use crate::shared::ui::theme::{ColorPalette, ThemeManager};
use crate::state::State;
use crate::widgets::Widgets;
use crate::widgets::dashboard::DashboardIntent;
use crate::widgets::header::HeaderEvent;
use crate::widgets::modals::ModalsIntent;
use crate::widgets::side_nav::SideNavEvent;

pub(crate) const DEFAULT_WINDOW_WIDTH: f32 = 1280.0;
pub(crate) const DEFAULT_WINDOW_HEIGHT: f32 = 800.0;
pub(crate) const MIN_WINDOW_WIDTH: f32 = MIN_SHELL_WIDTH;
pub(crate) const MIN_WINDOW_HEIGHT: f32 = 640.0;

/// App-wide events that drive the root update loop.
#[derive(Debug, Clone)]
pub(crate) enum AppEvent {
    // Side navigation widget
    SideNav(SideNavEvent),
    // Header widget
    Header(HeaderEvent),
    // Modals widget
    Modals(ModalsIntent),
    // Dashboard page
    Dashboard(DashboardIntent),
    // Cross-widget flows
    ToggleMinimize,
    NavigateTo(String),
    Logout,
    // Direct operations
    CursorMoved(Point),
    PointerDown {
        detector: DetectorId,
        pointer: PointerDown,
    },
    Window(window::Event),
}

/// Root application state.
pub(crate) struct App {
    pub(crate) state: State,
    pub(crate) shell: ShellLayout,
    pub(crate) router: Router,
    pub(crate) profile: MerchantProfile,
    pub(crate) theme_manager: ThemeManager,
    pub(crate) widgets: Widgets,
}

impl App {
    /// Initialize the application and return the first task.
    pub(crate) fn new() -> (Self, Task<AppEvent>) {
        let settings = settings::load_initial_settings();

        let mut theme_manager = ThemeManager::new();
        theme_manager.set_custom_palette(
            ColorPalette::default().with_accent(&settings.accent_color),
        );

        log::info!("opening dashboard at {}", settings.landing_route);

        let app = App {
            state: State::new(Size::new(
                DEFAULT_WINDOW_WIDTH,
                DEFAULT_WINDOW_HEIGHT,
            )),
            shell: ShellLayout::new(),
            router: Router::new(&settings.landing_route),
            widgets: Widgets::new(&settings),
            profile: settings.profile,
            theme_manager,
        };

        (app, Task::none())
    }

    pub(crate) fn title(&self) -> String {
        String::from("PharmConnect")
    }

    pub(crate) fn theme(&self) -> Theme {
        self.theme_manager.iced_theme()
    }

    pub(crate) fn subscription(&self) -> Subscription<AppEvent> {
        subscription::subscription(self)
    }

    pub(crate) fn update(&mut self, event: AppEvent) -> Task<AppEvent> {
        update::update(self, event)
    }

    pub(crate) fn view(&self) -> Element<'_, AppEvent> {
        view::view(self)
    }
}
