// SPDX-License-Identifier: MPL-2.0

use crate::config::Config;
use crate::fl;
use crate::pages;
use cosmic::app::context_drawer;
use cosmic::cosmic_config::{self, CosmicConfigEntry};
use cosmic::iced::{Length, Subscription};
use cosmic::prelude::*;
use cosmic::widget::{self, about::About, icon, menu, nav_bar};
use cosmic_speed_dial::{
    ActionStyle, DialEvent, Orientation, SpeedDialAction, SpeedDialMessage, SpeedDialState,
};
use std::collections::HashMap;
use std::time::{Duration, Instant};

const REPOSITORY: &str = env!("CARGO_PKG_REPOSITORY");
const APP_ICON: &[u8] = include_bytes!("../resources/icons/hicolor/scalable/apps/icon.svg");

/// Interval between animation frames while the dial is in motion.
const TICK_INTERVAL: Duration = Duration::from_millis(16);

/// How many dial events the demo page keeps around.
const EVENT_LOG_LIMIT: usize = 20;

/// The application model stores app-specific state used to describe its interface and
/// drive its logic.
pub struct AppModel {
    /// Application state which is managed by the COSMIC runtime.
    core: cosmic::Core,
    /// Display a context drawer with the designated page if defined.
    context_page: ContextPage,
    /// The about page for this app.
    about: About,
    /// Contains items assigned to the nav bar panel.
    nav: nav_bar::Model,
    /// Key bindings for the application's menu bar.
    key_binds: HashMap<menu::KeyBind, MenuAction>,
    /// Configuration data that persists between application runs.
    pub config: Config,
    /// Cosmic config context for saving
    config_context: Option<cosmic_config::Config>,

    // === Demo state ===
    /// State of the speed dial under demonstration
    pub dial: SpeedDialState,
    /// Mirror of the external open/close signal driven from the demo page
    pub external_open: bool,
    /// Dial events as they fired, most recent first
    pub event_log: Vec<LogEntry>,
    /// Counter for numbering log entries
    event_counter: u32,
    /// Orientation names for the settings dropdown
    pub orientation_labels: Vec<String>,
}

/// One reported dial event in the demo page's log.
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub id: u32,
    pub text: String,
}

/// Messages emitted by the application and its widgets.
#[derive(Debug, Clone)]
pub enum Message {
    // Navigation & UI
    LaunchUrl(String),
    ToggleContextPage(ContextPage),
    UpdateConfig(Config),

    // Speed dial demo
    Dial(SpeedDialMessage),
    ExternalOpenToggled(bool),
    ClearLog,

    // Settings
    OrientationSelected(usize),
    AnimationSpeedChanged(u32),
    CloseManuallyToggled(bool),
    DirectPressToggled(bool),
    ActionCountChanged(u32),
}

/// Create a COSMIC application from the app model
impl cosmic::Application for AppModel {
    /// The async executor that will be used to run your application's commands.
    type Executor = cosmic::executor::Default;

    /// Data that your application receives to its init method.
    type Flags = ();

    /// Messages which the application and its widgets will emit.
    type Message = Message;

    /// Unique identifier in RDNN (reverse domain name notation) format.
    const APP_ID: &'static str = "io.github.cosmic_utils.SpeedDialDemo";

    fn core(&self) -> &cosmic::Core {
        &self.core
    }

    fn core_mut(&mut self) -> &mut cosmic::Core {
        &mut self.core
    }

    /// Initializes the application with any given flags and startup commands.
    fn init(
        core: cosmic::Core,
        _flags: Self::Flags,
    ) -> (Self, Task<cosmic::Action<Self::Message>>) {
        // Create a nav bar with two pages: Demo and Settings
        let mut nav = nav_bar::Model::default();

        nav.insert()
            .text(fl!("demo"))
            .data::<Page>(Page::Demo)
            .icon(icon::from_name("input-dialpad-symbolic"))
            .activate();

        nav.insert()
            .text(fl!("settings"))
            .data::<Page>(Page::Settings)
            .icon(icon::from_name("preferences-system-symbolic"));

        // Create the about widget
        let about = About::default()
            .name(fl!("app-title"))
            .icon(widget::icon::from_svg_bytes(APP_ICON))
            .version(env!("CARGO_PKG_VERSION"))
            .links([(fl!("repository"), REPOSITORY)])
            .license(env!("CARGO_PKG_LICENSE"));

        // Load configuration
        let config_context = cosmic_config::Config::new(Self::APP_ID, Config::VERSION).ok();
        let config = config_context
            .as_ref()
            .map(|context| match Config::get_entry(context) {
                Ok(config) => config,
                Err((_errors, config)) => config,
            })
            .unwrap_or_default();

        // Construct the app model with the runtime's core.
        let mut app = AppModel {
            core,
            context_page: ContextPage::default(),
            about,
            nav,
            key_binds: HashMap::new(),
            config,
            config_context,
            dial: SpeedDialState::default(),
            external_open: false,
            event_log: Vec::new(),
            event_counter: 0,
            orientation_labels: vec![fl!("orientation-up"), fl!("orientation-down")],
        };

        app.apply_config();

        // Create a startup command that sets the window title.
        let command = app.update_title();

        (app, command)
    }

    /// Elements to pack at the start of the header bar.
    fn header_start(&self) -> Vec<Element<'_, Self::Message>> {
        let menu_bar = menu::bar(vec![menu::Tree::with_children(
            menu::root(fl!("view")).apply(Element::from),
            menu::items(
                &self.key_binds,
                vec![menu::Item::Button(fl!("about"), None, MenuAction::About)],
            ),
        )]);

        vec![menu_bar.into()]
    }

    /// Enables the COSMIC application to create a nav bar with this model.
    fn nav_model(&self) -> Option<&nav_bar::Model> {
        Some(&self.nav)
    }

    /// Display a context drawer if the context page is requested.
    fn context_drawer(&self) -> Option<context_drawer::ContextDrawer<'_, Self::Message>> {
        if !self.core.window.show_context {
            return None;
        }

        Some(match &self.context_page {
            ContextPage::About => context_drawer::about(
                &self.about,
                |url| Message::LaunchUrl(url.to_string()),
                Message::ToggleContextPage(ContextPage::About),
            ),
        })
    }

    /// Describes the interface based on the current state of the application model.
    fn view(&self) -> Element<'_, Self::Message> {
        let space_s = cosmic::theme::spacing().space_s;
        let space_m = cosmic::theme::spacing().space_m;

        let page_content: Element<_> = match self.nav.active_data::<Page>().unwrap_or(&Page::Demo)
        {
            Page::Demo => pages::demo::view(self, space_s, space_m),
            Page::Settings => pages::settings::view(self, space_s, space_m),
        };

        widget::container(page_content)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    /// Register subscriptions for this application.
    fn subscription(&self) -> Subscription<Self::Message> {
        // Watch for application configuration changes.
        let config_watch = self
            .core()
            .watch_config::<Config>(Self::APP_ID)
            .map(|update| Message::UpdateConfig(update.config));

        if self.dial.is_animating() {
            // Deliver animation frames only while the dial is in motion.
            let ticks = cosmic::iced::time::every(TICK_INTERVAL)
                .map(|instant| Message::Dial(SpeedDialMessage::Tick(instant)));
            Subscription::batch(vec![config_watch, ticks])
        } else {
            config_watch
        }
    }

    /// Handles messages emitted by the application and its widgets.
    fn update(&mut self, message: Self::Message) -> Task<cosmic::Action<Self::Message>> {
        match message {
            Message::ToggleContextPage(context_page) => {
                if self.context_page == context_page {
                    self.core.window.show_context = !self.core.window.show_context;
                } else {
                    self.context_page = context_page;
                    self.core.window.show_context = true;
                }
            }

            Message::UpdateConfig(config) => {
                self.config = config;
                self.apply_config();
            }

            Message::LaunchUrl(url) => match open::that_detached(&url) {
                Ok(()) => {}
                Err(err) => {
                    eprintln!("failed to open {url:?}: {err}");
                }
            },

            Message::Dial(dial_message) => {
                for event in self.dial.update(dial_message) {
                    self.record(event);
                }
                // Keep the external-signal toggler in sync with taps.
                self.external_open = self.dial.is_open();
            }

            Message::ExternalOpenToggled(open) => {
                self.external_open = open;
                if let Some(event) = self.dial.sync_open(open, Instant::now()) {
                    self.record(event);
                }
            }

            Message::ClearLog => {
                self.event_log.clear();
            }

            Message::OrientationSelected(index) => {
                self.config.orientation = if index == 0 {
                    Orientation::Up
                } else {
                    Orientation::Down
                };
                self.save_config();
            }

            Message::AnimationSpeedChanged(speed) => {
                self.config.animation_speed = u64::from(speed);
                self.dial.set_animation_speed(self.config.animation_speed);
                self.save_config();
            }

            Message::CloseManuallyToggled(close_manually) => {
                self.config.close_manually = close_manually;
                self.dial.set_close_manually(close_manually);
                self.save_config();
            }

            Message::DirectPressToggled(direct_press) => {
                self.config.direct_press = direct_press;
                self.dial.set_has_press_action(direct_press);
                self.save_config();
            }

            Message::ActionCountChanged(count) => {
                self.config.action_count = count;
                self.dial.set_actions(sample_actions(count));
                self.external_open = self.dial.is_open();
                self.save_config();
            }
        }
        Task::none()
    }

    fn on_nav_select(&mut self, id: nav_bar::Id) -> Task<cosmic::Action<Self::Message>> {
        self.nav.activate(id);
        self.update_title()
    }
}

impl AppModel {
    /// Updates the header and window titles.
    pub fn update_title(&mut self) -> Task<cosmic::Action<Message>> {
        let mut window_title = fl!("app-title");

        if let Some(page) = self.nav.text(self.nav.active()) {
            window_title.push_str(" — ");
            window_title.push_str(page);
        }

        if let Some(id) = self.core.main_window_id() {
            self.set_window_title(window_title, id)
        } else {
            Task::none()
        }
    }

    /// Applies the persisted configuration to the dial state.
    fn apply_config(&mut self) {
        self.dial.set_animation_speed(self.config.animation_speed);
        self.dial.set_close_manually(self.config.close_manually);
        self.dial.set_has_press_action(self.config.direct_press);
        self.dial.set_actions(sample_actions(self.config.action_count));
        self.external_open = self.dial.is_open();
    }

    /// Persists the configuration.
    fn save_config(&mut self) {
        if let Some(ref context) = self.config_context {
            if let Err(e) = self.config.write_entry(context) {
                eprintln!("Failed to save config: {}", e);
            }
        }
    }

    /// Prepends a dial event to the demo page's log.
    fn record(&mut self, event: DialEvent) {
        let text = match event {
            DialEvent::Opened => fl!("event-opened"),
            DialEvent::Closed => fl!("event-closed"),
            DialEvent::Pressed => fl!("event-pressed"),
            DialEvent::ActionActivated(index) => {
                format!("{} {}", fl!("event-action"), index + 1)
            }
        };

        self.event_counter += 1;
        self.event_log.insert(
            0,
            LogEntry {
                id: self.event_counter,
                text,
            },
        );
        self.event_log.truncate(EVENT_LOG_LIMIT);
    }
}

/// Builds the demo's sample action list, cycling a small pool of icons.
pub fn sample_actions(count: u32) -> Vec<SpeedDialAction> {
    let pool = [
        ("document-new-symbolic", fl!("action-new-document"), None),
        ("folder-new-symbolic", fl!("action-new-folder"), None),
        ("camera-photo-symbolic", fl!("action-capture"), None),
        (
            "mail-send-symbolic",
            fl!("action-share"),
            Some(ActionStyle::Suggested),
        ),
        (
            "user-trash-symbolic",
            fl!("action-delete"),
            Some(ActionStyle::Destructive),
        ),
    ];

    (0..count as usize)
        .map(|i| {
            let (icon_name, label, style) = &pool[i % pool.len()];
            let mut action = SpeedDialAction::labeled(*icon_name, label.clone());
            if let Some(style) = style {
                action = action.style(*style);
            }
            action
        })
        .collect()
}

/// The page to display in the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Demo,
    Settings,
}

/// The context page to display in the context drawer.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub enum ContextPage {
    #[default]
    About,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MenuAction {
    About,
}

impl menu::action::MenuAction for MenuAction {
    type Message = Message;

    fn message(&self) -> Self::Message {
        match self {
            MenuAction::About => Message::ToggleContextPage(ContextPage::About),
        }
    }
}
