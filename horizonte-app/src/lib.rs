pub mod agency;
pub mod seed;

pub use agency::{Agency, AgencyError, PlacedBooking};

/// Install the global tracing subscriber. Call once from a binary or a
/// demo; library code only emits events.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}
