//! Filtered, ordered and aggregated projections of the collections
//!
//! Everything here is a pure function of borrowed inputs and is recomputed on
//! every render.

use crate::model::{Admin, Canteen, Product, Role, Status};
use std::cmp::Ordering;
use std::fmt;

/// Result of running a query over a collection
///
/// `Unloaded` means there was no collection to look at yet. `NoMatches`
/// means the collection was there and nothing passed the filter. `Rows`
/// is never empty.
#[derive(Debug, Clone, PartialEq)]
pub enum Listing<'a, T> {
    Unloaded,
    NoMatches,
    Rows(Vec<&'a T>),
}

impl<'a, T> Listing<'a, T> {
    fn from_rows(rows: Vec<&'a T>) -> Self {
        if rows.is_empty() {
            Listing::NoMatches
        } else {
            Listing::Rows(rows)
        }
    }

    pub fn rows(&self) -> &[&'a T] {
        match self {
            Listing::Rows(rows) => rows,
            Listing::Unloaded | Listing::NoMatches => &[],
        }
    }

    pub fn len(&self) -> usize {
        self.rows().len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows().is_empty()
    }
}

/// Prices below this are `Low`.
pub const LOW_PRICE_CEILING: u64 = 10_000;
/// Prices at or above this are `High`.
pub const HIGH_PRICE_FLOOR: u64 = 20_000;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PriceBracket {
    #[default]
    All,
    Low,
    Medium,
    High,
}

impl PriceBracket {
    pub const ALL: [PriceBracket; 4] = [
        PriceBracket::All,
        PriceBracket::Low,
        PriceBracket::Medium,
        PriceBracket::High,
    ];

    pub fn contains(self, price: u64) -> bool {
        match self {
            PriceBracket::All => true,
            PriceBracket::Low => price < LOW_PRICE_CEILING,
            PriceBracket::Medium => (LOW_PRICE_CEILING..HIGH_PRICE_FLOOR).contains(&price),
            PriceBracket::High => price >= HIGH_PRICE_FLOOR,
        }
    }
}

impl fmt::Display for PriceBracket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PriceBracket::All => "Semua Harga",
            PriceBracket::Low => "< Rp 10.000",
            PriceBracket::Medium => "Rp 10.000 - 19.999",
            PriceBracket::High => ">= Rp 20.000",
        })
    }
}

/// Either every canteen or one of them, by id
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CanteenFilter {
    #[default]
    All,
    Only(u32),
}

impl CanteenFilter {
    pub fn matches(self, canteen_id: u32) -> bool {
        match self {
            CanteenFilter::All => true,
            CanteenFilter::Only(id) => id == canteen_id,
        }
    }
}

/// `All` or one specific value of a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice<T> {
    All,
    Only(T),
}

impl<T> Default for Choice<T> {
    fn default() -> Self {
        Choice::All
    }
}

impl<T: PartialEq> Choice<T> {
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Choice::All => true,
            Choice::Only(wanted) => wanted == value,
        }
    }
}

impl<T: fmt::Display> fmt::Display for Choice<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Choice::All => f.write_str("Semua"),
            Choice::Only(value) => value.fmt(f),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    #[default]
    Name,
    Price,
    Stock,
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SortKey::Name => "Nama",
            SortKey::Price => "Harga",
            SortKey::Stock => "Stok",
        })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn flipped(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }
}

/// Case-folded comparison with the raw text as tie-breaker.
fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Search, filter and sort parameters of the product screen
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductQuery {
    pub search: String,
    pub canteen: CanteenFilter,
    pub price: PriceBracket,
    pub sort_by: SortKey,
    pub order: SortOrder,
}

impl ProductQuery {
    /// Select `key`. Re-selecting the active key flips the direction, a new
    /// key starts ascending.
    pub fn toggle_sort(&mut self, key: SortKey) {
        if self.sort_by == key {
            self.order = self.order.flipped();
        } else {
            self.sort_by = key;
            self.order = SortOrder::Ascending;
        }
    }

    pub fn matches(&self, product: &Product) -> bool {
        let needle = self.search.to_lowercase();
        product.name.to_lowercase().contains(&needle)
            && self.canteen.matches(product.canteen_id)
            && self.price.contains(product.price)
    }

    fn compare(&self, a: &Product, b: &Product) -> Ordering {
        let ordering = match self.sort_by {
            SortKey::Name => compare_names(&a.name, &b.name),
            SortKey::Price => a.price.cmp(&b.price),
            SortKey::Stock => a.stock.cmp(&b.stock),
        };
        match self.order {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    }

    /// Filter and sort `products`. The sort is stable in both directions.
    pub fn run<'a>(&self, products: Option<&'a [Product]>) -> Listing<'a, Product> {
        let Some(products) = products else {
            return Listing::Unloaded;
        };

        let mut rows: Vec<&Product> = products.iter().filter(|p| self.matches(p)).collect();
        rows.sort_by(|a, b| self.compare(a, b));
        Listing::from_rows(rows)
    }
}

/// Search and filter parameters of the administrator screen
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdminQuery {
    pub search: String,
    pub role: Choice<Role>,
    pub status: Choice<Status>,
}

impl AdminQuery {
    pub fn matches(&self, admin: &Admin) -> bool {
        let needle = self.search.to_lowercase();
        let found = admin.name.to_lowercase().contains(&needle)
            || admin.email.to_lowercase().contains(&needle);
        found && self.role.matches(&admin.role) && self.status.matches(&admin.status)
    }

    /// Filter `admins`, keeping collection order.
    pub fn run<'a>(&self, admins: Option<&'a [Admin]>) -> Listing<'a, Admin> {
        let Some(admins) = admins else {
            return Listing::Unloaded;
        };

        Listing::from_rows(admins.iter().filter(|a| self.matches(a)).collect())
    }
}

/// How a stock figure compares to the low-stock threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockLevel {
    Out,
    Low,
    Healthy,
}

impl StockLevel {
    pub fn classify(stock: u32, threshold: u32) -> Self {
        if stock == 0 {
            StockLevel::Out
        } else if stock <= threshold {
            StockLevel::Low
        } else {
            StockLevel::Healthy
        }
    }
}

pub fn is_low_stock(product: &Product, threshold: u32) -> bool {
    product.stock <= threshold
}

pub fn low_stock_count(products: &[Product], threshold: u32) -> usize {
    products
        .iter()
        .filter(|p| is_low_stock(p, threshold))
        .count()
}

pub fn total_stock(products: &[Product]) -> u64 {
    products
        .iter()
        .fold(0, |total: u64, p| total.saturating_add(u64::from(p.stock)))
}

/// Summed value of all stock, saturating at `u64::MAX`.
pub fn inventory_value(products: &[Product]) -> u64 {
    products
        .iter()
        .fold(0, |total: u64, p| total.saturating_add(p.inventory_value()))
}

/// Mean price, or `0.0` for an empty slice.
pub fn average_price(products: &[Product]) -> f64 {
    if products.is_empty() {
        return 0.0;
    }
    let sum: u128 = products.iter().map(|p| u128::from(p.price)).sum();
    sum as f64 / products.len() as f64
}

/// Headline figures over a product set
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InventorySummary {
    pub product_count: usize,
    pub total_stock: u64,
    pub low_stock_count: usize,
    pub average_price: f64,
    pub inventory_value: u64,
}

impl InventorySummary {
    pub fn of(products: &[Product], threshold: u32) -> Self {
        Self {
            product_count: products.len(),
            total_stock: total_stock(products),
            low_stock_count: low_stock_count(products, threshold),
            average_price: average_price(products),
            inventory_value: inventory_value(products),
        }
    }
}

/// Per-canteen figures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanteenRollup<'a> {
    pub canteen: &'a Canteen,
    pub product_count: usize,
    pub total_stock: u64,
    pub inventory_value: u64,
    pub low_stock_count: usize,
}

/// One rollup per canteen, in reference order. Canteens without products
/// get zeroes.
pub fn canteen_rollups<'a>(
    canteens: &'a [Canteen],
    products: &[Product],
    threshold: u32,
) -> Vec<CanteenRollup<'a>> {
    canteens
        .iter()
        .map(|canteen| {
            let owned = products.iter().filter(|p| p.canteen_id == canteen.id);
            let mut rollup = CanteenRollup {
                canteen,
                product_count: 0,
                total_stock: 0,
                inventory_value: 0,
                low_stock_count: 0,
            };
            for product in owned {
                rollup.product_count += 1;
                rollup.total_stock = rollup.total_stock.saturating_add(u64::from(product.stock));
                rollup.inventory_value =
                    rollup.inventory_value.saturating_add(product.inventory_value());
                if is_low_stock(product, threshold) {
                    rollup.low_stock_count += 1;
                }
            }
            rollup
        })
        .collect()
}

/// Headline figures over the administrator accounts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AdminSummary {
    pub total: usize,
    pub super_admins: usize,
    pub active: usize,
    pub inactive: usize,
}

impl AdminSummary {
    pub fn of(admins: &[Admin]) -> Self {
        admins.iter().fold(
            AdminSummary {
                total: admins.len(),
                ..AdminSummary::default()
            },
            |mut summary, admin| {
                if admin.role == Role::SuperAdmin {
                    summary.super_admins += 1;
                }
                match admin.status {
                    Status::Active => summary.active += 1,
                    Status::Inactive => summary.inactive += 1,
                }
                summary
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    fn with_stock(stocks: &[u32]) -> Vec<Product> {
        stocks
            .iter()
            .enumerate()
            .map(|(i, &stock)| Product {
                id: i as u32 + 1,
                canteen_id: 1,
                name: format!("P{i}"),
                price: 1000,
                stock,
                description: String::new(),
                image_url: None,
            })
            .collect()
    }

    #[test]
    fn low_bracket_over_seeds() {
        let products = seed::products();
        let query = ProductQuery {
            price: PriceBracket::Low,
            ..ProductQuery::default()
        };
        let mut prices: Vec<u64> = query
            .run(Some(products.as_slice()))
            .rows()
            .iter()
            .map(|p| p.price)
            .collect();
        prices.sort_unstable();
        assert_eq!(prices, vec![3000, 5000, 7000, 8000, 9000]);
    }

    #[test]
    fn bracket_edges() {
        assert!(PriceBracket::Low.contains(9_999));
        assert!(!PriceBracket::Low.contains(10_000));
        assert!(PriceBracket::Medium.contains(10_000));
        assert!(PriceBracket::Medium.contains(19_999));
        assert!(!PriceBracket::Medium.contains(20_000));
        assert!(PriceBracket::High.contains(20_000));
        assert!(PriceBracket::All.contains(0));
    }

    #[test]
    fn search_is_case_insensitive_and_combines_with_canteen() {
        let products = seed::products();
        let query = ProductQuery {
            search: "NASI".into(),
            canteen: CanteenFilter::Only(3),
            ..ProductQuery::default()
        };
        let names: Vec<_> = query
            .run(Some(products.as_slice()))
            .rows()
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, vec!["Nasi Goreng Spesial"]);
    }

    #[test]
    fn name_sort_ignores_case() {
        let mut products = with_stock(&[1, 1, 1]);
        products[0].name = "bakso".into();
        products[1].name = "Arem-arem".into();
        products[2].name = "Cilok".into();

        let listing = ProductQuery::default().run(Some(products.as_slice()));
        let names: Vec<_> = listing.rows().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Arem-arem", "bakso", "Cilok"]);
    }

    #[test]
    fn sort_is_stable_in_both_directions() {
        let products = with_stock(&[5, 1, 5, 1]);
        let mut query = ProductQuery {
            sort_by: SortKey::Stock,
            ..ProductQuery::default()
        };

        let ids: Vec<_> = query
            .run(Some(products.as_slice()))
            .rows()
            .iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec![2, 4, 1, 3]);

        query.order = SortOrder::Descending;
        let ids: Vec<_> = query
            .run(Some(products.as_slice()))
            .rows()
            .iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec![1, 3, 2, 4]);
    }

    #[test]
    fn rerunning_a_query_is_idempotent() {
        let products = seed::products();
        let query = ProductQuery {
            sort_by: SortKey::Price,
            order: SortOrder::Descending,
            ..ProductQuery::default()
        };
        assert_eq!(query.run(Some(products.as_slice())), query.run(Some(products.as_slice())));
    }

    #[test]
    fn toggle_sort_flips_then_resets() {
        let mut query = ProductQuery::default();
        query.toggle_sort(SortKey::Name);
        assert_eq!(query.order, SortOrder::Descending);
        query.toggle_sort(SortKey::Price);
        assert_eq!((query.sort_by, query.order), (SortKey::Price, SortOrder::Ascending));
    }

    #[test]
    fn listing_distinguishes_unloaded_from_no_matches() {
        let admins = seed::admins();
        let query = AdminQuery {
            search: "zzz-nobody".into(),
            ..AdminQuery::default()
        };
        assert_eq!(query.run(Some(admins.as_slice())), Listing::NoMatches);
        assert_eq!(query.run(None), Listing::Unloaded);
        assert!(query.run(Some(admins.as_slice())).is_empty());
    }

    #[test]
    fn admin_filter_matches_email_role_and_status() {
        let admins = seed::admins();
        let query = AdminQuery {
            search: "SMKTELKOM".into(),
            role: Choice::Only(Role::Operator),
            status: Choice::Only(Status::Inactive),
        };
        let ids: Vec<_> = query.run(Some(admins.as_slice())).rows().iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![4]);
    }

    #[test]
    fn low_stock_counts_inclusive_threshold() {
        let products = with_stock(&[0, 10, 11, 3]);
        assert_eq!(low_stock_count(&products, 10), 3);
        assert_eq!(low_stock_count(&products, 0), 1);
        assert_eq!(low_stock_count(&seed::products(), 10), 0);
    }

    #[test]
    fn average_of_nothing_is_zero() {
        assert_eq!(average_price(&[]), 0.0);
        let summary = InventorySummary::of(&[], 10);
        assert_eq!(summary.average_price, 0.0);
        assert_eq!(summary.product_count, 0);
    }

    #[test]
    fn seeded_summary() {
        let summary = InventorySummary::of(&seed::products(), 10);
        assert_eq!(summary.product_count, 14);
        assert_eq!(summary.total_stock, 408);
        assert_eq!(summary.average_price, 153_000.0 / 14.0);
    }

    #[test]
    fn rollups_cover_every_canteen() {
        let products = seed::products();
        let rollups = canteen_rollups(&seed::CANTEENS, &products, 10);
        assert_eq!(rollups.len(), 7);

        let telkom = &rollups[0];
        assert_eq!(telkom.canteen.id, 1);
        assert_eq!(telkom.product_count, 2);
        assert_eq!(telkom.total_stock, 75);
        assert_eq!(telkom.inventory_value, 15000 * 25 + 3000 * 50);

        let empty = canteen_rollups(&seed::CANTEENS, &[], 10);
        assert!(empty.iter().all(|r| r.product_count == 0 && r.inventory_value == 0));
    }

    #[test]
    fn stock_levels() {
        assert_eq!(StockLevel::classify(0, 10), StockLevel::Out);
        assert_eq!(StockLevel::classify(10, 10), StockLevel::Low);
        assert_eq!(StockLevel::classify(11, 10), StockLevel::Healthy);
    }

    #[test]
    fn admin_summary_of_seeds() {
        let summary = AdminSummary::of(&seed::admins());
        assert_eq!(
            summary,
            AdminSummary {
                total: 4,
                super_admins: 1,
                active: 3,
                inactive: 1,
            }
        );
    }

    #[test]
    fn extreme_figures_saturate_instead_of_overflowing() {
        use crate::collection::Collection;
        use crate::form::{Draft, ProductDraft};

        let mut draft = ProductDraft::blank(&seed::CANTEENS);
        draft.name = "Paket Katering".into();
        draft.price = u64::MAX.to_string();
        draft.stock = u32::MAX.to_string();
        draft.description = "Pesanan besar".into();
        let form = draft.validate(true).unwrap();

        let mut products = Collection::from(seed::products());
        let id = products.add(form.clone());
        products.add(form);
        let products = products.as_slice();

        assert_eq!(products.iter().find(|p| p.id == id).unwrap().inventory_value(), u64::MAX);

        let summary = InventorySummary::of(products, 10);
        assert_eq!(summary.inventory_value, u64::MAX);
        assert!(summary.average_price > 0.0);

        let rollups = canteen_rollups(&seed::CANTEENS, products, 10);
        assert_eq!(rollups[0].inventory_value, u64::MAX);
        assert_eq!(rollups[0].product_count, 4);
    }
}
