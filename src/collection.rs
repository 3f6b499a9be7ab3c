//! Ordered record collections with locally generated identifiers

use crate::model::{Admin, Product};
use chrono::Utc;

/// A record that lives in a [`Collection`]
///
/// `Form` carries the editable fields: `create` builds a record from them and
/// `apply` overwrites them on an existing record, leaving everything else
/// (identifier, creation time) alone.
pub trait Record {
    type Form;

    fn id(&self) -> u32;

    fn create(id: u32, form: Self::Form) -> Self;

    fn apply(&mut self, form: Self::Form);
}

/// Editable product fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductForm {
    pub canteen_id: u32,
    pub name: String,
    pub price: u64,
    pub stock: u32,
    pub description: String,
    pub image_url: Option<String>,
}

impl Record for Product {
    type Form = ProductForm;

    fn id(&self) -> u32 {
        self.id
    }

    fn create(id: u32, form: ProductForm) -> Self {
        Product {
            id,
            canteen_id: form.canteen_id,
            name: form.name,
            price: form.price,
            stock: form.stock,
            description: form.description,
            image_url: form.image_url,
        }
    }

    fn apply(&mut self, form: ProductForm) {
        self.canteen_id = form.canteen_id;
        self.name = form.name;
        self.price = form.price;
        self.stock = form.stock;
        self.description = form.description;
        self.image_url = form.image_url;
    }
}

/// Editable administrator fields. Passwords are never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminForm {
    pub name: String,
    pub email: String,
    pub role: crate::model::Role,
    pub status: crate::model::Status,
}

impl Record for Admin {
    type Form = AdminForm;

    fn id(&self) -> u32 {
        self.id
    }

    fn create(id: u32, form: AdminForm) -> Self {
        Admin {
            id,
            name: form.name,
            email: form.email,
            role: form.role,
            status: form.status,
            last_login: None,
            created_at: Utc::now(),
        }
    }

    fn apply(&mut self, form: AdminForm) {
        self.name = form.name;
        self.email = form.email;
        self.role = form.role;
        self.status = form.status;
    }
}

/// An ordered collection. Every operation is total: unknown ids are no-ops.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collection<T> {
    items: Vec<T>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> From<Vec<T>> for Collection<T> {
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T: Record> Collection<T> {
    /// Identifier the next `add` will assign: one past the largest in use.
    ///
    /// When the largest id is `u32::MAX` the lowest unused id is taken instead.
    pub fn next_id(&self) -> u32 {
        let largest = self.items.iter().map(|item| item.id()).max().unwrap_or(0);
        largest.checked_add(1).unwrap_or_else(|| {
            tracing::warn!(largest, "identifier space exhausted at the top, reusing a gap");
            self.lowest_free_id()
        })
    }

    fn lowest_free_id(&self) -> u32 {
        let mut ids: Vec<u32> = self.items.iter().map(|item| item.id()).collect();
        ids.sort_unstable();
        ids.dedup();
        let mut candidate = 1;
        for id in ids {
            if id > candidate {
                break;
            }
            if id == candidate {
                candidate = candidate.saturating_add(1);
            }
        }
        candidate
    }

    /// Append a new record and return its identifier.
    pub fn add(&mut self, form: T::Form) -> u32 {
        let id = self.next_id();
        self.items.push(T::create(id, form));
        id
    }

    /// Overwrite the editable fields of `id`. Returns whether it existed.
    pub fn update(&mut self, id: u32, form: T::Form) -> bool {
        match self.items.iter_mut().find(|item| item.id() == id) {
            Some(item) => {
                item.apply(form);
                true
            }
            None => false,
        }
    }

    /// Drop the record `id`. Returns whether it existed.
    pub fn remove(&mut self, id: u32) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id() != id);
        self.items.len() != before
    }

    pub fn get(&self, id: u32) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }
}

impl<T> Collection<T> {
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Role, Status};
    use crate::seed;

    fn kerupuk() -> ProductForm {
        ProductForm {
            canteen_id: 1,
            name: "Kerupuk".into(),
            price: 2000,
            stock: 50,
            description: "Kerupuk udang".into(),
            image_url: None,
        }
    }

    #[test]
    fn add_assigns_one_past_the_maximum() {
        let mut products = Collection::from(seed::products());
        assert_eq!(products.add(kerupuk()), 15);
        assert_eq!(products.as_slice().last().unwrap().name, "Kerupuk");
    }

    #[test]
    fn empty_collection_starts_at_one() {
        let mut products = Collection::<Product>::default();
        assert_eq!(products.add(kerupuk()), 1);
    }

    #[test]
    fn ids_are_not_reused_while_a_larger_one_exists() {
        let mut products = Collection::from(seed::products());
        assert!(products.remove(7));
        assert_eq!(products.add(kerupuk()), 15);
        assert!(products.get(7).is_none());
    }

    #[test]
    fn update_overwrites_fields_in_place() {
        let mut products = Collection::from(seed::products());
        let mut form = kerupuk();
        form.stock = 3;

        assert!(products.update(2, form));
        let updated = products.get(2).unwrap();
        assert_eq!(updated.name, "Kerupuk");
        assert_eq!(updated.stock, 3);
        assert_eq!(products.as_slice()[1].id, 2);
    }

    #[test]
    fn update_of_unknown_id_is_a_no_op() {
        let mut products = Collection::from(seed::products());
        let before = products.clone();

        assert!(!products.update(99, kerupuk()));
        assert_eq!(products, before);
    }

    #[test]
    fn admin_update_keeps_creation_time() {
        let mut admins = Collection::from(seed::admins());
        let created = admins.get(2).unwrap().created_at;
        let form = AdminForm {
            name: "Budi S.".into(),
            email: "budi@smktelkom.sch.id".into(),
            role: Role::Operator,
            status: Status::Inactive,
        };

        assert!(admins.update(2, form));
        let admin = admins.get(2).unwrap();
        assert_eq!(admin.created_at, created);
        assert_eq!(admin.role, Role::Operator);
        assert!(admin.last_login.is_some());
    }

    #[test]
    fn created_admin_is_stamped_now() {
        let mut admins = Collection::from(seed::admins());
        let before = Utc::now();
        let id = admins.add(AdminForm {
            name: "Rani".into(),
            email: "rani@smktelkom.sch.id".into(),
            role: Role::Admin,
            status: Status::Active,
        });

        let admin = admins.get(id).unwrap();
        assert_eq!(id, 5);
        assert!(admin.created_at >= before);
        assert_eq!(admin.last_login, None);
    }

    #[test]
    fn id_ceiling_falls_back_to_lowest_gap() {
        let mut products = Collection::from(seed::products());
        products.add(kerupuk());
        products.items.last_mut().unwrap().id = u32::MAX;
        assert!(products.remove(3));

        assert_eq!(products.next_id(), 3);
        assert_eq!(products.add(kerupuk()), 3);
        assert_eq!(products.next_id(), 15);
    }
}
