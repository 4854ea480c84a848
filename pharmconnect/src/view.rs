use iced::widget::{
    Space, Stack, column, container, mouse_area, opaque, scrollable, text,
};
use iced::{Color, Element, Length, Padding, alignment};

use super::{App, AppEvent};
use crate::layout::{HEADER_HEIGHT, account_menu_bounds};
use crate::router::Page;
use crate::shared::ui::theme::ThemeProps;
use crate::widgets::dashboard::DashboardIntent;
use crate::widgets::dashboard::view::{overview, product_table};
use crate::widgets::header::HeaderEvent;
use crate::widgets::header::view::{account_menu, header_bar};
use crate::widgets::modals::view::{notifications_panel, profile_panel};
use crate::widgets::modals::{ModalPanel, ModalsIntent};
use crate::widgets::side_nav::SideNavEvent;
use crate::widgets::side_nav::view::menu_rail;

const PAGE_PADDING: f32 = 24.0;
const PAGE_SECTION_SPACING: f32 = 32.0;
const BACKDROP_ALPHA: f32 = 0.4;

/// Render the root application view.
pub(super) fn view(app: &App) -> Element<'_, AppEvent> {
    let theme_props = ThemeProps::new(app.theme_manager.current());
    let insets = app.shell.insets();

    let content = container(view_page(app, theme_props)).padding(Padding {
        top: insets.content_top,
        left: insets.content_left,
        ..Padding::ZERO
    });

    let header = container(
        header_bar::view(header_bar::HeaderBarProps {
            vm: app.widgets.header.vm(&app.profile),
            theme: theme_props,
        })
        .map(|intent| AppEvent::Header(HeaderEvent::Intent(intent))),
    )
    .width(Length::Fill)
    .height(Length::Fixed(HEADER_HEIGHT))
    .padding(Padding {
        left: insets.header_left,
        ..Padding::ZERO
    });

    let rail = menu_rail::view(menu_rail::MenuRailProps {
        vm: app
            .widgets
            .side_nav
            .vm(app.shell.mode(), app.router.active_route()),
        theme: theme_props,
    })
    .map(|intent| AppEvent::SideNav(SideNavEvent::Intent(intent)));

    let mut layers: Vec<Element<'_, AppEvent>> =
        vec![content.into(), header.into(), rail];

    if app.widgets.header.is_account_menu_open() {
        let bounds = account_menu_bounds(app.state.window_size);
        layers.push(
            container(
                account_menu::view(account_menu::AccountMenuProps {
                    theme: theme_props,
                })
                .map(|intent| AppEvent::Header(HeaderEvent::Intent(intent))),
            )
            .padding(Padding {
                top: bounds.y,
                left: bounds.x,
                ..Padding::ZERO
            })
            .into(),
        );
    }

    if let Some(modal) = view_modal(app, theme_props) {
        layers.push(modal);
    }

    let background = theme_props.theme.iced_palette().background;
    let root = container(
        Stack::with_children(layers)
            .width(Length::Fill)
            .height(Length::Fill),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .style(move |_| container::Style {
        background: Some(background.into()),
        ..Default::default()
    });

    mouse_area(root).on_move(AppEvent::CursorMoved).into()
}

fn view_page<'a>(
    app: &'a App,
    theme_props: ThemeProps<'a>,
) -> Element<'a, AppEvent> {
    let page: Element<'a, AppEvent> = match app.router.page() {
        Page::Dashboard => {
            let vm = app.widgets.dashboard.vm();
            let page: Element<'a, DashboardIntent> = column![
                overview::view(overview::OverviewProps {
                    period: vm.period,
                    stats: vm.stats,
                    theme: theme_props,
                }),
                product_table::view(product_table::ProductTableProps {
                    products: vm.products,
                    query: vm.product_query,
                    theme: theme_props,
                }),
            ]
            .spacing(PAGE_SECTION_SPACING)
            .width(Length::Fill)
            .into();
            page.map(AppEvent::Dashboard)
        },
        Page::Unrouted(path) => view_unrouted(path, theme_props),
    };

    scrollable(container(page).padding(PAGE_PADDING).width(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn view_unrouted<'a>(
    path: String,
    theme_props: ThemeProps<'a>,
) -> Element<'a, AppEvent> {
    let palette = theme_props.theme.iced_palette();

    column![
        text(path).size(24.0).color(palette.foreground),
        text("This section is not available yet.")
            .size(14.0)
            .color(palette.muted),
    ]
    .spacing(8.0)
    .into()
}

fn view_modal<'a>(
    app: &'a App,
    theme_props: ThemeProps<'a>,
) -> Option<Element<'a, AppEvent>> {
    let panel = match app.widgets.modals.active()? {
        ModalPanel::Notifications { cleared } => notifications_panel::view(
            notifications_panel::NotificationsPanelProps {
                cleared,
                theme: theme_props,
            },
        ),
        ModalPanel::Profile => {
            profile_panel::view(profile_panel::ProfilePanelProps {
                profile: &app.profile,
                theme: theme_props,
            })
        },
    };

    let backdrop_color = Color {
        a: BACKDROP_ALPHA,
        ..theme_props.theme.iced_palette().backdrop
    };
    let backdrop = mouse_area(
        container(Space::new())
            .width(Length::Fill)
            .height(Length::Fill)
            .style(move |_| container::Style {
                background: Some(backdrop_color.into()),
                ..Default::default()
            }),
    )
    .on_press(ModalsIntent::Dismiss);

    let centered = container(opaque(panel))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center);

    let modal: Element<'a, ModalsIntent> =
        Stack::with_children(vec![backdrop.into(), centered.into()])
            .width(Length::Fill)
            .height(Length::Fill)
            .into();

    Some(modal.map(AppEvent::Modals))
}
