pub mod dashboard;

pub use dashboard::{
    birthdays_in_month, birthdays_today, customer_history, revenue_by_month, status_breakdown,
    CustomerHistory, RevenuePoint,
};
