pub mod countdown;
pub mod error;
pub mod proposals;
pub mod quotes;
pub mod resolver;
pub mod routes;
pub mod shares;
pub mod validation;

pub use error::ApiError;
pub use resolver::{PlanSource, RecipientResolver, Resolution};
pub use routes::Route;

/// Current wall-clock time as epoch milliseconds, the unit every stored
/// timestamp uses.
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
