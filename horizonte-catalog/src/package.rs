use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Transport modes a package can bundle
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransportType {
    Air,
    Road,
    Cruise,
    Rail,
}

/// A traveler review attached to a package. Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Review {
    pub id: String,
    pub user_name: String,
    pub rating: u8,
    pub comment: String,
    pub date: NaiveDate,
}

/// A purchasable travel offering. The `rating` field is derived: it always
/// equals the aggregator's output over `reviews` (or the seeded default when
/// no reviews exist) and is only rewritten through review submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TravelPackage {
    pub id: String,
    pub title: String,
    pub location: String,
    pub price: i32,
    pub duration: String,
    pub description: String,
    pub rating: f64,
    pub featured: bool,
    /// Departure dates on sale. Empty means any future date is accepted.
    pub available_dates: Vec<NaiveDate>,
    pub transport_types: Vec<TransportType>,
    pub included_items: Vec<String>,
    pub excluded_items: Vec<String>,
    /// Newest first
    pub reviews: Vec<Review>,
}

/// Fields for creating a package
#[derive(Debug, Clone, Deserialize)]
pub struct NewPackage {
    pub title: String,
    pub location: String,
    pub price: i32,
    pub duration: String,
    pub description: String,
    pub rating: f64,
    pub featured: bool,
    pub available_dates: Vec<NaiveDate>,
    pub transport_types: Vec<TransportType>,
    pub included_items: Vec<String>,
    pub excluded_items: Vec<String>,
}

/// Partial update for a package. Rating and reviews are deliberately
/// absent: those only change through review submission.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PackageUpdate {
    pub title: Option<String>,
    pub location: Option<String>,
    pub price: Option<i32>,
    pub duration: Option<String>,
    pub description: Option<String>,
    pub featured: Option<bool>,
    pub available_dates: Option<Vec<NaiveDate>>,
    pub transport_types: Option<Vec<TransportType>>,
    pub included_items: Option<Vec<String>>,
    pub excluded_items: Option<Vec<String>>,
}

/// Fields a traveler supplies when reviewing a package
#[derive(Debug, Clone, Deserialize)]
pub struct NewReview {
    pub user_name: String,
    pub rating: u8,
    pub comment: String,
}
