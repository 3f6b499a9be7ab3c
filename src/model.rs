//! Domain records
//!
//! Serialized field names follow the layout the dashboard has always used in
//! local storage, so existing slots keep loading.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A canteen location. Static reference data, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Canteen {
    pub id: u32,
    pub name: &'static str,
    pub caretaker: &'static str,
    pub location: &'static str,
}

impl fmt::Display for Canteen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// A sellable item owned by exactly one canteen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: u32,
    #[serde(rename = "kantin_id")]
    pub canteen_id: u32,
    #[serde(rename = "nama_produk")]
    pub name: String,
    /// Price in the smallest currency unit.
    #[serde(rename = "harga")]
    pub price: u64,
    #[serde(rename = "stok")]
    pub stock: u32,
    #[serde(rename = "deskripsi")]
    pub description: String,
    #[serde(rename = "gambar", default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl Product {
    /// Value of the units on hand, saturating at `u64::MAX`.
    pub fn inventory_value(&self) -> u64 {
        self.price.saturating_mul(u64::from(self.stock))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    SuperAdmin,
    Admin,
    Operator,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::SuperAdmin, Role::Admin, Role::Operator];

    /// What the role is meant for. Informational only; nothing is gated on it.
    pub fn description(self) -> &'static str {
        match self {
            Role::SuperAdmin => "Akses penuh ke semua fitur sistem",
            Role::Admin => "Akses ke manajemen produk dan kantin",
            Role::Operator => "Akses terbatas untuk operasional harian",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Role::SuperAdmin => "Super Admin",
            Role::Admin => "Admin",
            Role::Operator => "Operator",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Active,
    Inactive,
}

impl Status {
    pub const ALL: [Status; 2] = [Status::Active, Status::Inactive];
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Status::Active => "Aktif",
            Status::Inactive => "Nonaktif",
        })
    }
}

/// An operator account record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Admin {
    pub id: u32,
    #[serde(rename = "nama")]
    pub name: String,
    pub email: String,
    pub role: Role,
    pub status: Status,
    /// Display only. Nothing in the dashboard records logins.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_login: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackupFrequency {
    Daily,
    Weekly,
    Monthly,
}

impl BackupFrequency {
    pub const ALL: [BackupFrequency; 3] = [
        BackupFrequency::Daily,
        BackupFrequency::Weekly,
        BackupFrequency::Monthly,
    ];
}

impl fmt::Display for BackupFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BackupFrequency::Daily => "Harian",
            BackupFrequency::Weekly => "Mingguan",
            BackupFrequency::Monthly => "Bulanan",
        })
    }
}

/// The singleton settings record. Saves replace it whole.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemSettings {
    pub app_name: String,
    pub school_name: String,
    pub low_stock_threshold: u32,
    pub currency: String,
    pub timezone: String,
    pub backup_frequency: BackupFrequency,
    pub email_notifications: bool,
    pub maintenance_mode: bool,
}

impl Default for SystemSettings {
    fn default() -> Self {
        Self {
            app_name: "SMK Telkom - Manajemen Kantin".to_string(),
            school_name: "SMK Telkom Jakarta".to_string(),
            low_stock_threshold: 10,
            currency: "IDR".to_string(),
            timezone: "Asia/Jakarta".to_string(),
            backup_frequency: BackupFrequency::Daily,
            email_notifications: true,
            maintenance_mode: false,
        }
    }
}
