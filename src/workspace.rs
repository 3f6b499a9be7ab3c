//! The top-level state object
//!
//! A [`Workspace`] owns the product and administrator collections, the
//! settings record and the canteen reference set. Every mutation goes through
//! it and is mirrored to its store slot before returning.

use crate::collection::{AdminForm, Collection, ProductForm};
use crate::form::Submission;
use crate::model::{Admin, Canteen, Product, SystemSettings};
use crate::seed;
use kantin_store::LocalStore;

pub const PRODUCTS_KEY: &str = "smk-telkom-products";
pub const ADMINS_KEY: &str = "smk-telkom-admins";
pub const SETTINGS_KEY: &str = "smk-telkom-settings";

#[derive(Debug, Clone)]
pub struct Workspace {
    store: LocalStore,
    products: Collection<Product>,
    admins: Collection<Admin>,
    settings: SystemSettings,
    canteens: &'static [Canteen],
}

impl Workspace {
    /// Read every slot, seeding the ones that are absent or unreadable.
    pub fn load(store: LocalStore) -> Self {
        let products = store.read(PRODUCTS_KEY, seed::products());
        let admins = store.read(ADMINS_KEY, seed::admins());
        let settings = store.read(SETTINGS_KEY, SystemSettings::default());
        tracing::info!(
            path = %store.path().display(),
            products = products.len(),
            admins = admins.len(),
            "workspace loaded"
        );

        Self {
            store,
            products: products.into(),
            admins: admins.into(),
            settings,
            canteens: &seed::CANTEENS,
        }
    }

    /// [`Workspace::load`] on the blocking pool.
    pub async fn load_async(store: LocalStore) -> Self {
        let fallback = store.clone();
        match tokio::task::spawn_blocking(move || Self::load(store)).await {
            Ok(workspace) => workspace,
            Err(err) => {
                tracing::error!(error = %err, "background load failed, starting from seed data");
                Self::seeded(fallback)
            }
        }
    }

    /// Seed data without touching disk.
    pub fn seeded(store: LocalStore) -> Self {
        Self {
            store,
            products: seed::products().into(),
            admins: seed::admins().into(),
            settings: SystemSettings::default(),
            canteens: &seed::CANTEENS,
        }
    }

    pub fn store(&self) -> &LocalStore {
        &self.store
    }

    pub fn products(&self) -> &[Product] {
        self.products.as_slice()
    }

    pub fn product(&self, id: u32) -> Option<&Product> {
        self.products.get(id)
    }

    pub fn admins(&self) -> &[Admin] {
        self.admins.as_slice()
    }

    pub fn admin(&self, id: u32) -> Option<&Admin> {
        self.admins.get(id)
    }

    pub fn settings(&self) -> &SystemSettings {
        &self.settings
    }

    pub fn canteens(&self) -> &'static [Canteen] {
        self.canteens
    }

    pub fn canteen(&self, id: u32) -> Option<&'static Canteen> {
        self.canteens.iter().find(|canteen| canteen.id == id)
    }

    /// Current low-stock threshold
    pub fn threshold(&self) -> u32 {
        self.settings.low_stock_threshold
    }

    pub fn add_product(&mut self, form: ProductForm) -> u32 {
        let id = self.products.add(form);
        tracing::info!(id, "product created");
        self.persist_products();
        id
    }

    pub fn update_product(&mut self, id: u32, form: ProductForm) -> bool {
        let found = self.products.update(id, form);
        if found {
            tracing::info!(id, "product updated");
            self.persist_products();
        } else {
            tracing::debug!(id, "update of unknown product ignored");
        }
        found
    }

    pub fn remove_product(&mut self, id: u32) -> bool {
        let found = self.products.remove(id);
        if found {
            tracing::info!(id, "product deleted");
            self.persist_products();
        }
        found
    }

    /// Run a product form submission. Returns the affected id.
    pub fn apply_product(&mut self, submission: Submission<ProductForm>) -> Option<u32> {
        match submission {
            Submission::Create(form) => Some(self.add_product(form)),
            Submission::Update(id, form) => self.update_product(id, form).then_some(id),
        }
    }

    pub fn add_admin(&mut self, form: AdminForm) -> u32 {
        let id = self.admins.add(form);
        tracing::info!(id, "admin created");
        self.persist_admins();
        id
    }

    pub fn update_admin(&mut self, id: u32, form: AdminForm) -> bool {
        let found = self.admins.update(id, form);
        if found {
            tracing::info!(id, "admin updated");
            self.persist_admins();
        } else {
            tracing::debug!(id, "update of unknown admin ignored");
        }
        found
    }

    pub fn remove_admin(&mut self, id: u32) -> bool {
        let found = self.admins.remove(id);
        if found {
            tracing::info!(id, "admin deleted");
            self.persist_admins();
        }
        found
    }

    pub fn apply_admin(&mut self, submission: Submission<AdminForm>) -> Option<u32> {
        match submission {
            Submission::Create(form) => Some(self.add_admin(form)),
            Submission::Update(id, form) => self.update_admin(id, form).then_some(id),
        }
    }

    /// Replace the whole settings record. Returns whether it reached disk.
    pub fn replace_settings(&mut self, settings: SystemSettings) -> bool {
        self.settings = settings;
        tracing::info!(
            threshold = self.settings.low_stock_threshold,
            maintenance = self.settings.maintenance_mode,
            "settings saved"
        );
        self.store.write(SETTINGS_KEY, &self.settings)
    }

    fn persist_products(&self) {
        self.store.write(PRODUCTS_KEY, self.products.as_slice());
    }

    fn persist_admins(&self) {
        self.store.write(ADMINS_KEY, self.admins.as_slice());
    }
}
