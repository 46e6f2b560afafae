pub mod models;
mod tally;

pub use models::*;
pub use tally::SeasonTally;
