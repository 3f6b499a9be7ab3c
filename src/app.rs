//! The iced application: state, messages and dispatch to the screens

use crate::config::Config;
use crate::confirm::{Confirmation, Pending};
use crate::error::FormError;
use crate::form::{
    AdminDraft, AdminField, Draft, Modal, ProductDraft, ProductField, SettingsDraft,
    SettingsField,
};
use crate::model::{Role, Status};
use crate::router::{Route, Screen, SettingsTab};
use crate::ui;
use crate::view::{AdminQuery, CanteenFilter, Choice, PriceBracket, ProductQuery, SortKey};
use crate::workspace::Workspace;
use iced::widget::{Column, container, row};
use iced::{Element, Length, Task};

#[derive(Debug, Clone)]
pub enum Message {
    Loaded(Workspace),
    Navigate(Screen),
    DismissStatus,

    ProductSearchChanged(String),
    ProductCanteenSelected(CanteenFilter),
    ProductPriceSelected(PriceBracket),
    ProductSortToggled(SortKey),
    ProductCreate,
    ProductEdit(u32),
    ProductFieldChanged(ProductField),
    ProductSubmit,
    ProductCancel,
    ProductDelete(u32),

    AdminSearchChanged(String),
    AdminRoleSelected(Choice<Role>),
    AdminStatusSelected(Choice<Status>),
    AdminCreate,
    AdminEdit(u32),
    AdminFieldChanged(AdminField),
    AdminSubmit,
    AdminCancel,
    AdminDelete(u32),

    SettingsTabSelected(SettingsTab),
    SettingsFieldChanged(SettingsField),
    SettingsSave,
    SettingsReset,
    BackupRequested,
    RestoreRequested,

    Confirm,
    Decline,
}

pub struct App {
    config: Config,
    workspace: Option<Workspace>,
    route: Route,

    product_query: ProductQuery,
    product_modal: Modal<ProductDraft>,
    product_error: Option<FormError>,

    admin_query: AdminQuery,
    admin_modal: Modal<AdminDraft>,
    admin_error: Option<FormError>,

    settings_tab: SettingsTab,
    settings_draft: Option<SettingsDraft>,
    settings_error: Option<FormError>,

    confirmation: Confirmation,
    status: Option<String>,
}

impl App {
    pub fn new(config: Config) -> (Self, Task<Message>) {
        let store = config.store();
        let app = App {
            route: config.start_route.clone(),
            config,
            workspace: None,
            product_query: ProductQuery::default(),
            product_modal: Modal::Closed,
            product_error: None,
            admin_query: AdminQuery::default(),
            admin_modal: Modal::Closed,
            admin_error: None,
            settings_tab: SettingsTab::default(),
            settings_draft: None,
            settings_error: None,
            confirmation: Confirmation::default(),
            status: None,
        };

        (app, Task::perform(Workspace::load_async(store), Message::Loaded))
    }

    pub fn title(&self) -> String {
        match &self.workspace {
            Some(workspace) => workspace.settings().app_name.clone(),
            None => self.config.app_name.application.clone(),
        }
    }

    pub fn workspace(&self) -> Option<&Workspace> {
        self.workspace.as_ref()
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn pending(&self) -> Option<Pending> {
        self.confirmation.pending()
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Loaded(workspace) => {
                self.settings_draft = Some(SettingsDraft::from(workspace.settings()));
                self.workspace = Some(workspace);
            }

            Message::Navigate(screen) => {
                self.route = Route::Screen(screen);
                self.status = None;
            }

            Message::DismissStatus => self.status = None,

            Message::ProductSearchChanged(search) => self.product_query.search = search,
            Message::ProductCanteenSelected(filter) => self.product_query.canteen = filter,
            Message::ProductPriceSelected(bracket) => self.product_query.price = bracket,
            Message::ProductSortToggled(key) => self.product_query.toggle_sort(key),

            Message::ProductCreate => {
                if let Some(workspace) = &self.workspace {
                    self.product_modal = Modal::Create(ProductDraft::blank(workspace.canteens()));
                    self.product_error = None;
                }
            }

            Message::ProductEdit(id) => {
                let draft = self.workspace.as_ref().and_then(|workspace| {
                    workspace
                        .product(id)
                        .map(|product| ProductDraft::from_product(product, workspace.canteens()))
                });
                if let Some(draft) = draft {
                    self.product_modal = Modal::Edit { id, draft };
                    self.product_error = None;
                }
            }

            Message::ProductFieldChanged(field) => {
                if let Some(draft) = self.product_modal.draft_mut() {
                    draft.edit(field);
                }
            }

            Message::ProductSubmit => match self.product_modal.submit() {
                Ok(Some(submission)) => {
                    self.product_error = None;
                    if let Some(workspace) = &mut self.workspace {
                        workspace.apply_product(submission);
                    }
                }
                Ok(None) => {}
                Err(err) => {
                    tracing::debug!(error = %err, "product form rejected");
                    self.product_error = Some(err);
                }
            },

            Message::ProductCancel => {
                self.product_modal.cancel();
                self.product_error = None;
            }

            Message::ProductDelete(id) => self.confirmation.request(Pending::DeleteProduct(id)),

            Message::AdminSearchChanged(search) => self.admin_query.search = search,
            Message::AdminRoleSelected(role) => self.admin_query.role = role,
            Message::AdminStatusSelected(status) => self.admin_query.status = status,

            Message::AdminCreate => {
                self.admin_modal = Modal::Create(AdminDraft::default());
                self.admin_error = None;
            }

            Message::AdminEdit(id) => {
                let draft = self
                    .workspace
                    .as_ref()
                    .and_then(|workspace| workspace.admin(id))
                    .map(AdminDraft::from_admin);
                if let Some(draft) = draft {
                    self.admin_modal = Modal::Edit { id, draft };
                    self.admin_error = None;
                }
            }

            Message::AdminFieldChanged(field) => {
                if let Some(draft) = self.admin_modal.draft_mut() {
                    draft.edit(field);
                }
            }

            Message::AdminSubmit => match self.admin_modal.submit() {
                Ok(Some(submission)) => {
                    self.admin_error = None;
                    if let Some(workspace) = &mut self.workspace {
                        workspace.apply_admin(submission);
                    }
                }
                Ok(None) => {}
                Err(err) => {
                    tracing::debug!(error = %err, "admin form rejected");
                    self.admin_error = Some(err);
                }
            },

            Message::AdminCancel => {
                self.admin_modal.cancel();
                self.admin_error = None;
            }

            Message::AdminDelete(id) => self.confirmation.request(Pending::DeleteAdmin(id)),

            Message::SettingsTabSelected(tab) => self.settings_tab = tab,

            Message::SettingsFieldChanged(field) => {
                if let Some(draft) = &mut self.settings_draft {
                    draft.edit(field);
                }
            }

            Message::SettingsSave => self.save_settings(),

            Message::SettingsReset => {
                if let Some(workspace) = &self.workspace {
                    self.settings_draft = Some(SettingsDraft::from(workspace.settings()));
                    self.settings_error = None;
                }
            }

            Message::BackupRequested => {
                tracing::info!("backup requested");
                self.status = Some("Backup database dimulai...".to_string());
            }

            Message::RestoreRequested => self.confirmation.request(Pending::RestoreDatabase),

            Message::Confirm => {
                if let Some(action) = self.confirmation.confirm() {
                    self.run(action);
                }
            }

            Message::Decline => self.confirmation.decline(),
        }

        Task::none()
    }

    fn save_settings(&mut self) {
        let (Some(draft), Some(workspace)) = (&self.settings_draft, &mut self.workspace) else {
            return;
        };

        match draft.validate(false) {
            Ok(settings) => {
                self.settings_error = None;
                self.status = Some(if workspace.replace_settings(settings) {
                    "Pengaturan berhasil disimpan!".to_string()
                } else {
                    "Gagal menyimpan pengaturan!".to_string()
                });
            }
            Err(err) => self.settings_error = Some(err),
        }
    }

    fn run(&mut self, action: Pending) {
        match action {
            Pending::DeleteProduct(id) => {
                if let Some(workspace) = &mut self.workspace {
                    workspace.remove_product(id);
                }
            }
            Pending::DeleteAdmin(id) => {
                if let Some(workspace) = &mut self.workspace {
                    workspace.remove_admin(id);
                }
            }
            Pending::RestoreDatabase => {
                tracing::info!("restore requested");
                self.status = Some("Proses restore dimulai...".to_string());
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let screen = match (&self.route, &self.workspace) {
            (Route::Unmatched(tag), _) => ui::not_found(tag),
            (Route::Screen(_), None) => ui::loading(),
            (Route::Screen(screen), Some(workspace)) => match screen {
                Screen::Dashboard => ui::dashboard::view(workspace),
                Screen::Products => ui::products::view(
                    workspace,
                    &self.product_query,
                    &self.product_modal,
                    self.product_error.as_ref(),
                ),
                Screen::Canteens => ui::canteens::view(workspace),
                Screen::Admins => ui::admins::view(
                    workspace,
                    &self.admin_query,
                    &self.admin_modal,
                    self.admin_error.as_ref(),
                ),
                Screen::Settings => ui::settings::view(
                    workspace,
                    self.settings_tab,
                    self.settings_draft.as_ref(),
                    self.settings_error.as_ref(),
                ),
            },
        };

        let mut main = Column::new().spacing(12).padding(24).width(Length::Fill);
        if self
            .workspace
            .as_ref()
            .is_some_and(|workspace| workspace.settings().maintenance_mode)
        {
            main = main.push(ui::banner("Mode maintenance aktif"));
        }
        if let Some(pending) = self.confirmation.pending() {
            main = main.push(ui::confirm_bar(pending));
        }
        if let Some(status) = &self.status {
            main = main.push(ui::status_bar(status));
        }
        main = main.push(screen);

        let school = self
            .workspace
            .as_ref()
            .map(|workspace| workspace.settings().school_name.as_str())
            .unwrap_or("");

        container(row![ui::sidebar::view(self.route.screen(), school), main].spacing(0))
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded() -> (tempfile::TempDir, App) {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            data_dir: Some(dir.path().to_path_buf()),
            ..Config::default()
        };
        let (mut app, _) = App::new(config);
        let workspace = Workspace::load(app.config.store());
        let _ = app.update(Message::Loaded(workspace));
        (dir, app)
    }

    #[test]
    fn starts_unloaded_on_the_configured_route() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            data_dir: Some(dir.path().to_path_buf()),
            start_route: Route::Screen(Screen::Admins),
            ..Config::default()
        };
        let (app, _) = App::new(config);
        assert!(app.workspace().is_none());
        assert_eq!(app.route(), &Route::Screen(Screen::Admins));
    }

    #[test]
    fn product_delete_waits_for_confirmation() {
        let (_dir, mut app) = loaded();
        let _ = app.update(Message::ProductDelete(1));
        assert_eq!(app.workspace().unwrap().products().len(), 14);
        assert_eq!(app.pending(), Some(Pending::DeleteProduct(1)));

        let _ = app.update(Message::Decline);
        assert_eq!(app.workspace().unwrap().products().len(), 14);

        let _ = app.update(Message::ProductDelete(1));
        let _ = app.update(Message::Confirm);
        assert_eq!(app.workspace().unwrap().products().len(), 13);
        assert_eq!(app.pending(), None);
    }

    #[test]
    fn rejected_product_form_keeps_modal_open() {
        let (_dir, mut app) = loaded();
        let _ = app.update(Message::ProductCreate);
        let _ = app.update(Message::ProductFieldChanged(ProductField::Name("Kerupuk".into())));
        let _ = app.update(Message::ProductSubmit);

        assert!(app.product_modal.is_open());
        assert_eq!(
            app.product_error,
            Some(FormError::MissingField("Deskripsi"))
        );
        assert_eq!(app.workspace().unwrap().products().len(), 14);
    }

    #[test]
    fn admin_created_through_the_form() {
        let (_dir, mut app) = loaded();
        let _ = app.update(Message::AdminCreate);
        for field in [
            AdminField::Name("Rani".into()),
            AdminField::Email("rani@smktelkom.sch.id".into()),
            AdminField::Password("rahasia".into()),
        ] {
            let _ = app.update(Message::AdminFieldChanged(field));
        }
        let _ = app.update(Message::AdminSubmit);

        assert!(!app.admin_modal.is_open());
        let admins = app.workspace().unwrap().admins();
        assert_eq!(admins.len(), 5);
        assert_eq!(admins[4].id, 5);
    }

    #[test]
    fn settings_save_updates_threshold_and_status() {
        let (_dir, mut app) = loaded();
        let _ = app.update(Message::SettingsFieldChanged(
            SettingsField::LowStockThreshold("20".into()),
        ));
        let _ = app.update(Message::SettingsSave);

        assert_eq!(app.workspace().unwrap().threshold(), 20);
        assert_eq!(app.status(), Some("Pengaturan berhasil disimpan!"));
    }

    #[test]
    fn restore_is_confirmed_before_reporting() {
        let (_dir, mut app) = loaded();
        let _ = app.update(Message::RestoreRequested);
        assert_eq!(app.status(), None);

        let _ = app.update(Message::Confirm);
        assert_eq!(app.status(), Some("Proses restore dimulai..."));
    }
}
