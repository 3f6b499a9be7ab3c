//! Reference canteens and the first-run contents of each slot

use crate::model::{Admin, Canteen, Product, Role, Status};
use chrono::{DateTime, Utc};

pub static CANTEENS: [Canteen; 7] = [
    Canteen {
        id: 1,
        name: "Kantin Telkom",
        caretaker: "Bu Sari",
        location: "Lantai 1, Gedung Utama",
    },
    Canteen {
        id: 2,
        name: "Kantin Sehat",
        caretaker: "Pak Budi",
        location: "Lantai 2, Gedung Utama",
    },
    Canteen {
        id: 3,
        name: "Kantin Express",
        caretaker: "Bu Rina",
        location: "Gedung Praktik",
    },
    Canteen {
        id: 4,
        name: "Kantin Nusantara",
        caretaker: "Pak Joko",
        location: "Dekat Lapangan",
    },
    Canteen {
        id: 5,
        name: "Kantin Modern",
        caretaker: "Bu Lisa",
        location: "Lantai 3, Gedung Utama",
    },
    Canteen {
        id: 6,
        name: "Kantin Tradisional",
        caretaker: "Bu Ani",
        location: "Samping Masjid",
    },
    Canteen {
        id: 7,
        name: "Kantin Digital",
        caretaker: "Pak Rudi",
        location: "Lab Komputer",
    },
];

const PEXELS: &str = "https://images.pexels.com/photos";

fn product(
    id: u32,
    canteen_id: u32,
    name: &str,
    price: u64,
    stock: u32,
    description: &str,
    photo: u32,
) -> Product {
    Product {
        id,
        canteen_id,
        name: name.to_string(),
        price,
        stock,
        description: description.to_string(),
        image_url: Some(format!(
            "{PEXELS}/{photo}/pexels-photo-{photo}.jpeg?auto=compress&cs=tinysrgb&w=400"
        )),
    }
}

pub fn products() -> Vec<Product> {
    vec![
        product(1, 1, "Nasi Gudeg Jogja", 15000, 25, "Nasi gudeg khas Jogja dengan ayam dan telur", 1633578),
        product(2, 1, "Es Teh Manis", 3000, 50, "Minuman segar es teh manis", 1154425),
        product(3, 2, "Salad Buah Segar", 12000, 20, "Salad buah segar dengan berbagai macam buah", 1092730),
        product(4, 2, "Jus Alpukat", 8000, 30, "Jus alpukat segar tanpa gula tambahan", 1446318),
        product(5, 3, "Mie Ayam Bakso", 10000, 35, "Mie ayam dengan bakso dan pangsit", 958545),
        product(6, 3, "Nasi Goreng Spesial", 13000, 20, "Nasi goreng dengan telur, ayam, dan kerupuk", 2456435),
        product(7, 4, "Rendang Daging", 18000, 15, "Rendang daging sapi khas Padang dengan nasi", 4393021),
        product(8, 4, "Gado-gado Jakarta", 11000, 25, "Gado-gado dengan bumbu kacang khas Jakarta", 1640772),
        product(9, 5, "Chicken Katsu", 16000, 18, "Ayam katsu crispy dengan saus teriyaki", 2338407),
        product(10, 5, "Boba Milk Tea", 12000, 40, "Minuman boba milk tea dengan berbagai varian rasa", 3682235),
        product(11, 6, "Soto Ayam", 9000, 30, "Soto ayam tradisional dengan nasi dan kerupuk", 1765289),
        product(12, 6, "Klepon", 5000, 45, "Kue klepon tradisional dengan gula merah", 3677542),
        product(13, 7, "Pizza Mini", 14000, 20, "Pizza mini dengan topping keju dan sosis", 2147491),
        product(14, 7, "Kopi Susu Digital", 7000, 35, "Kopi susu premium dengan foam art", 1684151),
    ]
}

fn at(timestamp: &str) -> DateTime<Utc> {
    timestamp.parse().unwrap_or_default()
}

fn admin(
    id: u32,
    name: &str,
    email: &str,
    role: Role,
    status: Status,
    last_login: &str,
    created_at: &str,
) -> Admin {
    Admin {
        id,
        name: name.to_string(),
        email: email.to_string(),
        role,
        status,
        last_login: Some(at(last_login)),
        created_at: at(created_at),
    }
}

pub fn admins() -> Vec<Admin> {
    vec![
        admin(
            1,
            "Administrator Utama",
            "admin@smktelkom.sch.id",
            Role::SuperAdmin,
            Status::Active,
            "2024-01-15T09:30:00Z",
            "2024-01-01T08:00:00Z",
        ),
        admin(
            2,
            "Budi Santoso",
            "budi.santoso@smktelkom.sch.id",
            Role::Admin,
            Status::Active,
            "2024-01-14T14:20:00Z",
            "2024-01-02T10:15:00Z",
        ),
        admin(
            3,
            "Sari Dewi",
            "sari.dewi@smktelkom.sch.id",
            Role::Operator,
            Status::Active,
            "2024-01-13T16:45:00Z",
            "2024-01-03T11:30:00Z",
        ),
        admin(
            4,
            "Andi Wijaya",
            "andi.wijaya@smktelkom.sch.id",
            Role::Operator,
            Status::Inactive,
            "2024-01-10T13:15:00Z",
            "2024-01-05T09:45:00Z",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn seeded_ids_are_unique() {
        let ids: HashSet<_> = products().iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), 14);
        let ids: HashSet<_> = CANTEENS.iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), 7);
    }

    #[test]
    fn every_seeded_product_names_a_known_canteen() {
        for p in products() {
            assert!(CANTEENS.iter().any(|c| c.id == p.canteen_id), "{}", p.name);
        }
    }

    #[test]
    fn seeded_timestamps_parse() {
        for a in admins() {
            assert_ne!(a.created_at, DateTime::<Utc>::default(), "{}", a.name);
            assert!(a.last_login.unwrap() > a.created_at);
        }
    }
}
