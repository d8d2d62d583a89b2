//! `KeyGate` - Desktop login and registration demo
//!
//! Built with Rust and the iced GUI framework on top of `keygate-core`.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod message;
mod model;
mod style;
mod view;

use iced::{Element, Task};
use keygate_core::{Account, CredentialStore, FileSlot, RegistrationError, StoreEvent};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use message::{LoginMessage, Message, RegisterMessage, Tab};
use model::{AppSettings, LoginForm, RegistrationForm};

/// Shown when a submit arrives before the account store is open.
const STORE_NOT_READY: &str = "Accounts are still loading";

fn main() -> iced::Result {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "keygate=debug,keygate_core=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting KeyGate");

    iced::application(KeyGate::new, KeyGate::update, KeyGate::view)
        .title("KeyGate")
        .run()
}

/// Main application state.
#[derive(Default)]
struct KeyGate {
    /// Selected form tab.
    tab: Tab,
    /// Login form state.
    login_form: LoginForm,
    /// Registration form state.
    registration_form: RegistrationForm,
    /// Account store, opened once settings are known.
    store: Option<CredentialStore<FileSlot>>,
    /// Logged-in account, if any.
    current_account: Option<Account>,
    /// Loaded settings.
    settings: AppSettings,
}

impl KeyGate {
    /// Create new application instance.
    fn new() -> (Self, Task<Message>) {
        let app = Self::default();
        style::widgets::palette::set_theme(app.settings.theme_mode);
        (app, Task::perform(load_settings(), Message::SettingsLoaded))
    }

    /// Update state based on message.
    #[allow(clippy::needless_pass_by_value)]
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::SettingsLoaded(result) => {
                match result {
                    Ok(settings) => {
                        info!("Settings loaded: theme={:?}", settings.theme_mode);
                        self.settings = settings;
                    }
                    Err(e) => {
                        warn!("Failed to load settings, using defaults: {}", e);
                    }
                }
                style::widgets::palette::set_theme(self.settings.theme_mode);
                self.open_store();
            }
            Message::SelectTab(tab) => {
                self.tab = tab;
            }
            Message::Login(msg) => self.update_login(msg),
            Message::Register(msg) => return self.update_register(msg),
            Message::LogOut => {
                if let Some(account) = self.current_account.take() {
                    info!("Logged out {}", account.username);
                }
                self.login_form = LoginForm::new();
                self.tab = Tab::Login;
            }
            Message::ReturnToLogin => {
                self.tab = Tab::Login;
            }
        }
        Task::none()
    }

    /// Open the account store in the configured data directory.
    fn open_store(&mut self) {
        let slot = FileSlot::in_dir(self.settings.users_dir());
        info!("Opening accounts at {}", slot.path().display());
        let store = CredentialStore::open(slot);
        info!("{} accounts available", store.accounts().count());
        self.store = Some(store);
    }

    fn update_login(&mut self, msg: LoginMessage) {
        let form = &mut self.login_form;
        match msg {
            LoginMessage::UsernameChanged(value) => form.username = value,
            LoginMessage::PasswordChanged(value) => form.password = value,
            LoginMessage::Submit => {
                if !form.is_complete() {
                    return;
                }
                let Some(store) = &self.store else {
                    form.error = Some(STORE_NOT_READY.to_string());
                    return;
                };
                match store.login(&form.username, &form.password) {
                    Ok(account) => {
                        info!("Logged in {}", account.username);
                        form.error = None;
                        self.current_account = Some(account);
                    }
                    Err(e) => {
                        info!("Login rejected for {}", form.username);
                        form.error = Some(e.to_string());
                    }
                }
            }
        }
    }

    fn update_register(&mut self, msg: RegisterMessage) -> Task<Message> {
        let form = &mut self.registration_form;
        match msg {
            RegisterMessage::UsernameChanged(value) => form.username = value,
            RegisterMessage::PasswordChanged(value) => form.set_password(value),
            RegisterMessage::ConfirmPasswordChanged(value) => form.confirm_password = value,
            RegisterMessage::Submit => {
                if !form.is_complete() {
                    return Task::none();
                }
                let Some(store) = self.store.as_mut() else {
                    form.status = model::RegistrationStatus::Rejected(STORE_NOT_READY.to_string());
                    return Task::none();
                };

                let result =
                    store.register(&form.username, &form.password, &form.confirm_password);
                if let Err(RegistrationError::Persistence(e)) = &result {
                    warn!("Failed to save account {}: {}", form.username, e);
                }
                form.apply_result(&result);

                let delay = self.settings.return_to_login_delay();
                let tasks = store.take_events().into_iter().map(|event| match event {
                    StoreEvent::ReturnToLogin { username } => {
                        info!("Registered {}, returning to login", username);
                        Task::perform(tokio::time::sleep(delay), |()| Message::ReturnToLogin)
                    }
                });
                return Task::batch(tasks);
            }
        }
        Task::none()
    }

    /// Render current state.
    fn view(&self) -> Element<'_, Message> {
        let ready = self.store.is_some();

        let content = if let Some(account) = &self.current_account {
            view::view_welcome(account)
        } else {
            let form = match self.tab {
                Tab::Login => view::view_login(&self.login_form, ready),
                Tab::Register => view::view_register(&self.registration_form, ready),
            };
            iced::widget::column![view::view_tabs(self.tab), form]
                .spacing(20)
                .into()
        };

        view::view_page(content)
    }
}

/// Load application settings from file.
async fn load_settings() -> Result<AppSettings, String> {
    AppSettings::load(&AppSettings::default_path())
        .await
        .map_err(|e| format!("{e:#}"))
}
