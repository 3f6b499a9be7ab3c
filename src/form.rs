//! Edit buffers for the product, administrator and settings forms
//!
//! A [`Modal`] is `Closed`, open on a blank draft for creation, or open on a
//! draft copied from an existing record. Drafts keep raw text for numeric
//! inputs; parsing happens on submit.

use crate::collection::{AdminForm, ProductForm};
use crate::error::FormError;
use crate::model::{Admin, BackupFrequency, Canteen, Product, Role, Status, SystemSettings};

/// What a successful submit asks the workspace to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission<F> {
    Create(F),
    Update(u32, F),
}

/// Something a modal can edit and validate
pub trait Draft {
    type Output;

    /// Parse and check the buffer. `creating` is true for a new record.
    fn validate(&self, creating: bool) -> Result<Self::Output, FormError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal<D> {
    Closed,
    Create(D),
    Edit {
        id: u32,
        draft: D,
    },
}

impl<D> Default for Modal<D> {
    fn default() -> Self {
        Modal::Closed
    }
}

impl<D> Modal<D> {
    pub fn is_open(&self) -> bool {
        !matches!(self, Modal::Closed)
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, Modal::Edit { .. })
    }

    pub fn draft(&self) -> Option<&D> {
        match self {
            Modal::Closed => None,
            Modal::Create(draft) | Modal::Edit { draft, .. } => Some(draft),
        }
    }

    pub fn draft_mut(&mut self) -> Option<&mut D> {
        match self {
            Modal::Closed => None,
            Modal::Create(draft) | Modal::Edit { draft, .. } => Some(draft),
        }
    }

    /// Discard the buffer.
    pub fn cancel(&mut self) {
        *self = Modal::Closed;
    }
}

impl<D: Draft> Modal<D> {
    /// Validate the buffer and close.
    ///
    /// On error the modal stays open with the draft untouched. Submitting a
    /// closed modal yields `Ok(None)`.
    pub fn submit(&mut self) -> Result<Option<Submission<D::Output>>, FormError> {
        let submission = match self {
            Modal::Closed => return Ok(None),
            Modal::Create(draft) => Submission::Create(draft.validate(true)?),
            Modal::Edit { id, draft } => Submission::Update(*id, draft.validate(false)?),
        };
        *self = Modal::Closed;
        Ok(Some(submission))
    }
}

fn required(field: &'static str, value: &str) -> Result<String, FormError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(FormError::MissingField(field));
    }
    Ok(trimmed.to_string())
}

fn number<N: std::str::FromStr>(field: &'static str, value: &str) -> Result<N, FormError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(FormError::MissingField(field));
    }
    trimmed.parse().map_err(|_| FormError::InvalidNumber {
        field,
        value: trimmed.to_string(),
    })
}

/// Product edit buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductDraft {
    pub name: String,
    pub canteen_id: u32,
    pub price: String,
    pub stock: String,
    pub description: String,
    pub image_url: String,
    canteens: &'static [Canteen],
}

impl ProductDraft {
    /// A blank draft assigned to the first canteen.
    pub fn blank(canteens: &'static [Canteen]) -> Self {
        Self {
            name: String::new(),
            canteen_id: canteens.first().map_or(1, |c| c.id),
            price: "0".to_string(),
            stock: "0".to_string(),
            description: String::new(),
            image_url: String::new(),
            canteens,
        }
    }

    pub fn from_product(product: &Product, canteens: &'static [Canteen]) -> Self {
        Self {
            name: product.name.clone(),
            canteen_id: product.canteen_id,
            price: product.price.to_string(),
            stock: product.stock.to_string(),
            description: product.description.clone(),
            image_url: product.image_url.clone().unwrap_or_default(),
            canteens,
        }
    }

    pub fn canteens(&self) -> &'static [Canteen] {
        self.canteens
    }

    pub fn canteen(&self) -> Option<&'static Canteen> {
        self.canteens.iter().find(|c| c.id == self.canteen_id)
    }
}

impl Draft for ProductDraft {
    type Output = ProductForm;

    fn validate(&self, _creating: bool) -> Result<ProductForm, FormError> {
        let name = required("Nama produk", &self.name)?;
        if self.canteen().is_none() {
            return Err(FormError::UnknownCanteen(self.canteen_id));
        }
        let price = number("Harga", &self.price)?;
        let stock = number("Stok", &self.stock)?;
        let description = required("Deskripsi", &self.description)?;
        let image_url = Some(self.image_url.trim())
            .filter(|url| !url.is_empty())
            .map(str::to_string);

        Ok(ProductForm {
            canteen_id: self.canteen_id,
            name,
            price,
            stock,
            description,
            image_url,
        })
    }
}

/// Administrator edit buffer
///
/// The password is only checked for presence on creation and is never kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminDraft {
    pub name: String,
    pub email: String,
    pub role: Role,
    pub status: Status,
    pub password: String,
    pub show_password: bool,
}

impl Default for AdminDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            role: Role::Operator,
            status: Status::Active,
            password: String::new(),
            show_password: false,
        }
    }
}

impl AdminDraft {
    /// Copy an account into a buffer with an empty password.
    pub fn from_admin(admin: &Admin) -> Self {
        Self {
            name: admin.name.clone(),
            email: admin.email.clone(),
            role: admin.role,
            status: admin.status,
            ..Self::default()
        }
    }
}

fn valid_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !email.chars().any(char::is_whitespace)
        }
        None => false,
    }
}

impl Draft for AdminDraft {
    type Output = AdminForm;

    fn validate(&self, creating: bool) -> Result<AdminForm, FormError> {
        let name = required("Nama lengkap", &self.name)?;
        let email = required("Email", &self.email)?;
        if !valid_email(&email) {
            return Err(FormError::InvalidEmail(email));
        }
        if creating && self.password.is_empty() {
            return Err(FormError::MissingPassword);
        }

        Ok(AdminForm {
            name,
            email,
            role: self.role,
            status: self.status,
        })
    }
}

/// Smallest accepted low-stock threshold
pub const MIN_LOW_STOCK_THRESHOLD: u32 = 1;

/// Settings edit buffer. Saving replaces the whole settings record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsDraft {
    pub app_name: String,
    pub school_name: String,
    pub low_stock_threshold: String,
    pub currency: String,
    pub timezone: String,
    pub backup_frequency: BackupFrequency,
    pub email_notifications: bool,
    pub maintenance_mode: bool,
}

impl From<&SystemSettings> for SettingsDraft {
    fn from(settings: &SystemSettings) -> Self {
        Self {
            app_name: settings.app_name.clone(),
            school_name: settings.school_name.clone(),
            low_stock_threshold: settings.low_stock_threshold.to_string(),
            currency: settings.currency.clone(),
            timezone: settings.timezone.clone(),
            backup_frequency: settings.backup_frequency,
            email_notifications: settings.email_notifications,
            maintenance_mode: settings.maintenance_mode,
        }
    }
}

impl Draft for SettingsDraft {
    type Output = SystemSettings;

    fn validate(&self, _creating: bool) -> Result<SystemSettings, FormError> {
        let low_stock_threshold = number("Batas stok rendah", &self.low_stock_threshold)?;
        if low_stock_threshold < MIN_LOW_STOCK_THRESHOLD {
            return Err(FormError::ThresholdTooLow {
                minimum: MIN_LOW_STOCK_THRESHOLD,
            });
        }

        Ok(SystemSettings {
            app_name: required("Nama aplikasi", &self.app_name)?,
            school_name: required("Nama sekolah", &self.school_name)?,
            low_stock_threshold,
            currency: required("Mata uang", &self.currency)?,
            timezone: required("Zona waktu", &self.timezone)?,
            backup_frequency: self.backup_frequency,
            email_notifications: self.email_notifications,
            maintenance_mode: self.maintenance_mode,
        })
    }
}

/// A single input change on the product form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductField {
    Name(String),
    Canteen(u32),
    Price(String),
    Stock(String),
    Description(String),
    ImageUrl(String),
}

impl ProductDraft {
    pub fn edit(&mut self, field: ProductField) {
        match field {
            ProductField::Name(value) => self.name = value,
            ProductField::Canteen(id) => self.canteen_id = id,
            ProductField::Price(value) => self.price = value,
            ProductField::Stock(value) => self.stock = value,
            ProductField::Description(value) => self.description = value,
            ProductField::ImageUrl(value) => self.image_url = value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdminField {
    Name(String),
    Email(String),
    Role(Role),
    Status(Status),
    Password(String),
    TogglePassword,
}

impl AdminDraft {
    pub fn edit(&mut self, field: AdminField) {
        match field {
            AdminField::Name(value) => self.name = value,
            AdminField::Email(value) => self.email = value,
            AdminField::Role(role) => self.role = role,
            AdminField::Status(status) => self.status = status,
            AdminField::Password(value) => self.password = value,
            AdminField::TogglePassword => self.show_password = !self.show_password,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsField {
    AppName(String),
    SchoolName(String),
    LowStockThreshold(String),
    Currency(String),
    Timezone(String),
    BackupFrequency(BackupFrequency),
    ToggleEmailNotifications,
    ToggleMaintenanceMode,
}

impl SettingsDraft {
    pub fn edit(&mut self, field: SettingsField) {
        match field {
            SettingsField::AppName(value) => self.app_name = value,
            SettingsField::SchoolName(value) => self.school_name = value,
            SettingsField::LowStockThreshold(value) => self.low_stock_threshold = value,
            SettingsField::Currency(value) => self.currency = value,
            SettingsField::Timezone(value) => self.timezone = value,
            SettingsField::BackupFrequency(frequency) => self.backup_frequency = frequency,
            SettingsField::ToggleEmailNotifications => {
                self.email_notifications = !self.email_notifications
            }
            SettingsField::ToggleMaintenanceMode => self.maintenance_mode = !self.maintenance_mode,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::{self, CANTEENS};

    fn filled_product() -> ProductDraft {
        let mut draft = ProductDraft::blank(&CANTEENS);
        draft.name = "  Kerupuk ".into();
        draft.price = "2000".into();
        draft.stock = "50".into();
        draft.description = "Kerupuk udang".into();
        draft
    }

    #[test]
    fn create_submit_yields_trimmed_form_and_closes() {
        let mut modal = Modal::Create(filled_product());

        let submission = modal.submit().unwrap().unwrap();
        let Submission::Create(form) = submission else {
            panic!("expected a create submission");
        };
        assert_eq!(form.name, "Kerupuk");
        assert_eq!((form.price, form.stock, form.canteen_id), (2000, 50, 1));
        assert_eq!(form.image_url, None);
        assert!(!modal.is_open());
    }

    #[test]
    fn invalid_number_is_rejected_and_modal_stays_open() {
        let mut draft = filled_product();
        draft.price = "12rb".into();
        let mut modal = Modal::Create(draft.clone());

        assert_eq!(
            modal.submit(),
            Err(FormError::InvalidNumber {
                field: "Harga",
                value: "12rb".into()
            })
        );
        assert_eq!(modal.draft(), Some(&draft));
    }

    #[test]
    fn negative_stock_is_rejected() {
        let mut draft = filled_product();
        draft.stock = "-4".into();
        assert!(matches!(
            draft.validate(true),
            Err(FormError::InvalidNumber { field: "Stok", .. })
        ));
    }

    #[test]
    fn blank_required_field_is_reported() {
        let mut draft = filled_product();
        draft.description = "   ".into();
        assert_eq!(
            draft.validate(true),
            Err(FormError::MissingField("Deskripsi"))
        );
    }

    #[test]
    fn unknown_canteen_is_rejected() {
        let mut draft = filled_product();
        draft.canteen_id = 42;
        assert_eq!(draft.validate(true), Err(FormError::UnknownCanteen(42)));
    }

    #[test]
    fn edit_prepopulates_and_submits_update() {
        let products = seed::products();
        let mut modal = Modal::Edit {
            id: 3,
            draft: ProductDraft::from_product(&products[2], &CANTEENS),
        };
        assert_eq!(modal.draft().unwrap().price, "12000");

        match modal.submit().unwrap() {
            Some(Submission::Update(3, form)) => assert_eq!(form.name, "Salad Buah Segar"),
            other => panic!("unexpected submission {other:?}"),
        }
    }

    #[test]
    fn cancel_discards_the_draft() {
        let mut modal = Modal::Create(filled_product());
        modal.cancel();
        assert_eq!(modal, Modal::Closed);
        assert_eq!(modal.submit(), Ok(None));
    }

    #[test]
    fn admin_edit_clears_password_and_does_not_require_one() {
        let admins = seed::admins();
        let draft = AdminDraft::from_admin(&admins[0]);
        assert!(draft.password.is_empty());
        assert!(draft.validate(false).is_ok());
        assert_eq!(draft.validate(true), Err(FormError::MissingPassword));
    }

    #[test]
    fn admin_email_needs_both_halves() {
        let mut draft = AdminDraft {
            name: "Rani".into(),
            password: "rahasia".into(),
            ..AdminDraft::default()
        };
        for bad in ["rani", "@smktelkom.sch.id", "rani@", "ra ni@x.id", "a@b@c"] {
            draft.email = bad.into();
            assert!(
                matches!(draft.validate(true), Err(FormError::InvalidEmail(_))),
                "{bad}"
            );
        }
        draft.email = "rani@smktelkom.sch.id".into();
        assert_eq!(draft.validate(true).unwrap().role, Role::Operator);
    }

    #[test]
    fn settings_threshold_must_be_positive() {
        let mut draft = SettingsDraft::from(&SystemSettings::default());
        draft.low_stock_threshold = "0".into();
        assert_eq!(
            draft.validate(false),
            Err(FormError::ThresholdTooLow { minimum: 1 })
        );

        draft.low_stock_threshold = "25".into();
        draft.maintenance_mode = true;
        let settings = draft.validate(false).unwrap();
        assert_eq!(settings.low_stock_threshold, 25);
        assert!(settings.maintenance_mode);
    }

    #[test]
    fn field_edits_land_in_the_draft() {
        let mut draft = AdminDraft::default();
        draft.edit(AdminField::Role(Role::SuperAdmin));
        draft.edit(AdminField::TogglePassword);
        assert_eq!(draft.role, Role::SuperAdmin);
        assert!(draft.show_password);

        let mut settings = SettingsDraft::from(&SystemSettings::default());
        settings.edit(SettingsField::ToggleEmailNotifications);
        assert_ne!(
            settings.email_notifications,
            SystemSettings::default().email_notifications
        );
    }
}
