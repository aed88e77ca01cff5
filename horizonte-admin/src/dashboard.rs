use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use horizonte_booking::customers::normalize_email;
use horizonte_booking::ledger::{BookingLedger, StatusCounts};
use horizonte_booking::models::{Booking, Customer};

/// One point of the revenue chart: a year-month and its booked amount
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RevenuePoint {
    pub year: i32,
    pub month: u32,
    pub amount: i64,
}

/// A traveler's trip history with lifetime totals
#[derive(Debug, Clone, Serialize)]
pub struct CustomerHistory<'a> {
    pub bookings: Vec<&'a Booking>,
    pub trip_count: usize,
    pub lifetime_amount: i64,
}

/// Customers whose birthday (month and day) is today
pub fn birthdays_today(customers: &[Customer], today: NaiveDate) -> Vec<&Customer> {
    customers
        .iter()
        .filter(|c| c.birth_date.month() == today.month() && c.birth_date.day() == today.day())
        .collect()
}

/// Customers celebrating a birthday some day this month
pub fn birthdays_in_month(customers: &[Customer], today: NaiveDate) -> Vec<&Customer> {
    customers
        .iter()
        .filter(|c| c.birth_date.month() == today.month())
        .collect()
}

/// Booked amounts grouped by year-month, chronological
pub fn revenue_by_month(bookings: &[Booking]) -> Vec<RevenuePoint> {
    let mut points: Vec<RevenuePoint> = Vec::new();

    for booking in bookings {
        let (year, month) = (booking.date.year(), booking.date.month());
        match points.iter_mut().find(|p| p.year == year && p.month == month) {
            Some(point) => point.amount += booking.amount,
            None => points.push(RevenuePoint {
                year,
                month,
                amount: booking.amount,
            }),
        }
    }

    points.sort_by_key(|p| (p.year, p.month));
    points
}

/// Booking counts per status for the overview cards
pub fn status_breakdown(ledger: &BookingLedger) -> StatusCounts {
    ledger.status_counts()
}

/// All bookings made from one email, with totals for the profile cards
pub fn customer_history<'a>(bookings: &'a [Booking], email: &str) -> CustomerHistory<'a> {
    let email = normalize_email(email);
    let bookings: Vec<&Booking> = bookings
        .iter()
        .filter(|b| normalize_email(&b.email) == email)
        .collect();

    let trip_count = bookings.len();
    let lifetime_amount = bookings.iter().map(|b| b.amount).sum();

    CustomerHistory {
        bookings,
        trip_count,
        lifetime_amount,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use horizonte_booking::models::BookingStatus;

    fn customer(name: &str, email: &str, birth: (i32, u32, u32)) -> Customer {
        Customer {
            id: name.to_lowercase(),
            name: name.to_string(),
            email: email.to_string(),
            phone: "(11) 99999-9999".to_string(),
            birth_date: NaiveDate::from_ymd_opt(birth.0, birth.1, birth.2).unwrap(),
            joined_at: NaiveDate::from_ymd_opt(2023, 1, 10).unwrap(),
        }
    }

    fn booking(email: &str, date: (i32, u32, u32), amount: i64) -> Booking {
        Booking {
            id: format!("{email}-{amount}"),
            customer_name: "Test".to_string(),
            email: email.to_string(),
            phone: "(11) 99999-9999".to_string(),
            travelers: 2,
            package_id: "1".to_string(),
            package_name: "Paraíso em Fernando de Noronha".to_string(),
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            status: BookingStatus::Pending,
            amount,
        }
    }

    #[test]
    fn test_birthdays() {
        let customers = vec![
            customer("Maria", "maria@email.com", (1988, 10, 20)),
            customer("Carlos", "carlos@email.com", (1992, 10, 3)),
            customer("Ana", "ana@email.com", (1990, 11, 25)),
        ];
        let today = NaiveDate::from_ymd_opt(2023, 10, 20).unwrap();

        let today_list = birthdays_today(&customers, today);
        assert_eq!(today_list.len(), 1);
        assert_eq!(today_list[0].name, "Maria");

        let month_list = birthdays_in_month(&customers, today);
        assert_eq!(month_list.len(), 2);
    }

    #[test]
    fn test_revenue_by_month_groups_and_sorts() {
        let bookings = vec![
            booking("a@email.com", (2023, 11, 15), 9000),
            booking("b@email.com", (2023, 10, 16), 2800),
            booking("c@email.com", (2023, 11, 20), 4500),
        ];

        let points = revenue_by_month(&bookings);
        assert_eq!(
            points,
            vec![
                RevenuePoint {
                    year: 2023,
                    month: 10,
                    amount: 2800
                },
                RevenuePoint {
                    year: 2023,
                    month: 11,
                    amount: 13500
                },
            ]
        );
    }

    #[test]
    fn test_customer_history_matches_normalized_email() {
        let bookings = vec![
            booking("joao@email.com", (2023, 10, 15), 9000),
            booking("JOAO@email.com", (2023, 12, 1), 4500),
            booking("maria@email.com", (2023, 10, 16), 2800),
        ];

        let history = customer_history(&bookings, " Joao@Email.com");
        assert_eq!(history.trip_count, 2);
        assert_eq!(history.lifetime_amount, 13500);

        let none = customer_history(&bookings, "ana@email.com");
        assert_eq!(none.trip_count, 0);
        assert_eq!(none.lifetime_amount, 0);
    }
}
