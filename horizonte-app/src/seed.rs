use chrono::{Datelike, NaiveDate};

use horizonte_assist::{MockChatAssistant, MockCopyGenerator};
use horizonte_booking::customers::CustomerDirectory;
use horizonte_booking::ledger::BookingLedger;
use horizonte_booking::models::{Booking, BookingStatus, Customer};
use horizonte_catalog::{CatalogStore, Review, TransportType, TravelPackage};

use crate::Agency;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("static seed date")
}

/// The demo data set the agency ships with
pub fn seed_packages() -> Vec<TravelPackage> {
    vec![
        TravelPackage {
            id: "1".to_string(),
            title: "Paraíso em Fernando de Noronha".to_string(),
            location: "Fernando de Noronha, BR".to_string(),
            price: 4500,
            duration: "5 Dias".to_string(),
            description: "Mergulhe nas águas cristalinas do Sancho. Inclui passeio de barco, \
                          trilhas e hospedagem em pousada de charme."
                .to_string(),
            rating: 4.9,
            featured: true,
            available_dates: vec![date(2023, 11, 15), date(2023, 12, 10), date(2024, 1, 20)],
            transport_types: vec![TransportType::Air, TransportType::Cruise],
            included_items: vec![
                "Aéreo".to_string(),
                "Hotel".to_string(),
                "Café da manhã".to_string(),
                "Passeios".to_string(),
                "Guia de Turismo Credenciado".to_string(),
            ],
            excluded_items: vec!["Jantar".to_string(), "Bebidas e sobremesas".to_string()],
            reviews: vec![
                Review {
                    id: "r1".to_string(),
                    user_name: "Ana Costa".to_string(),
                    rating: 5,
                    comment: "Lugar mágico! A pousada era incrível.".to_string(),
                    date: date(2023, 9, 10),
                },
                Review {
                    id: "r2".to_string(),
                    user_name: "Pedro Santos".to_string(),
                    rating: 4,
                    comment: "Passeios ótimos, mas o preço da alimentação na ilha é alto."
                        .to_string(),
                    date: date(2023, 8, 15),
                },
            ],
        },
        TravelPackage {
            id: "2".to_string(),
            title: "Inverno Europeu em Gramado".to_string(),
            location: "Gramado, RS".to_string(),
            price: 2800,
            duration: "4 Dias".to_string(),
            description: "Curta o frio da serra gaúcha com muito chocolate, vinhos e passeios \
                          românticos pelo Lago Negro."
                .to_string(),
            rating: 4.7,
            featured: true,
            available_dates: vec![date(2024, 6, 20)],
            transport_types: vec![TransportType::Air, TransportType::Road],
            included_items: vec![
                "Aéreo".to_string(),
                "Transporte em ônibus de turismo".to_string(),
                "Hotel".to_string(),
                "Café da manhã".to_string(),
                "Ingressos".to_string(),
            ],
            excluded_items: vec![
                "Almoço".to_string(),
                "Jantar".to_string(),
                "Bebidas e sobremesas".to_string(),
            ],
            reviews: vec![Review {
                id: "r3".to_string(),
                user_name: "Mariana Lima".to_string(),
                rating: 5,
                comment: "Tudo perfeito. O fondue incluso valeu muito a pena.".to_string(),
                date: date(2023, 7, 20),
            }],
        },
    ]
}

/// Seed customers. Maria's birthday lands on `today` so the dashboard's
/// birthday card has something to show in demos.
pub fn seed_customers(today: NaiveDate) -> Vec<Customer> {
    let maria_birthday =
        NaiveDate::from_ymd_opt(1987, today.month(), today.day()).unwrap_or(today);

    vec![
        Customer {
            id: "c1".to_string(),
            name: "João Silva".to_string(),
            email: "joao@email.com".to_string(),
            phone: "(11) 99999-9999".to_string(),
            birth_date: date(1985, 5, 20),
            joined_at: date(2023, 1, 10),
        },
        Customer {
            id: "c2".to_string(),
            name: "Maria Oliveira".to_string(),
            email: "maria@email.com".to_string(),
            phone: "(21) 98888-8888".to_string(),
            birth_date: maria_birthday,
            joined_at: date(2023, 3, 15),
        },
        Customer {
            id: "c3".to_string(),
            name: "Carlos Souza".to_string(),
            email: "carlos@email.com".to_string(),
            phone: "(31) 97777-7777".to_string(),
            birth_date: date(1992, 12, 10),
            joined_at: date(2023, 5, 20),
        },
        Customer {
            id: "c4".to_string(),
            name: "Ana Costa".to_string(),
            email: "ana@email.com".to_string(),
            phone: "(11) 91234-5678".to_string(),
            birth_date: date(1990, 11, 25),
            joined_at: date(2023, 8, 5),
        },
    ]
}

pub fn seed_bookings() -> Vec<Booking> {
    vec![
        Booking {
            id: "101".to_string(),
            customer_name: "João Silva".to_string(),
            email: "joao@email.com".to_string(),
            phone: "(11) 99999-9999".to_string(),
            travelers: 2,
            package_id: "1".to_string(),
            package_name: "Paraíso em Fernando de Noronha".to_string(),
            date: date(2023, 10, 15),
            status: BookingStatus::Confirmed,
            amount: 9000,
        },
        Booking {
            id: "102".to_string(),
            customer_name: "Maria Oliveira".to_string(),
            email: "maria@email.com".to_string(),
            phone: "(21) 98888-8888".to_string(),
            travelers: 1,
            package_id: "2".to_string(),
            package_name: "Inverno Europeu em Gramado".to_string(),
            date: date(2023, 10, 16),
            status: BookingStatus::Pending,
            amount: 2800,
        },
    ]
}

/// A fully seeded agency backed by the mock collaborators
pub fn seeded_agency(today: NaiveDate) -> Agency {
    Agency::with_stores(
        CatalogStore::with_packages(seed_packages()),
        BookingLedger::with_bookings(seed_bookings()),
        CustomerDirectory::with_customers(seed_customers(today)),
        Box::new(MockCopyGenerator::new()),
        Box::new(MockChatAssistant::new()),
    )
}
