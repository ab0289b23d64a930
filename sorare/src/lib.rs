//! Typed client for the Sorare GraphQL API: the authenticated user's card
//! inventory, the open market, and the sell/buy mutations.
mod error;
mod http;
mod operation;
mod schema;

pub use error::Error;
pub use http::Client;
pub use operation::Operation;
pub use schema::{BoughtCard, Card, ListedPlayer, Listing, Player, PlayerName, SoldCard, Team};

pub type Result<T> = std::result::Result<T, Error>;

use env_logger::{Builder, Env};

/// Loads variables from a `.env` file if one exists and initializes the
/// logger with a default filter of `info`.
pub fn setup_env() {
    dotenvy::dotenv().ok();
    Builder::from_env(Env::default().default_filter_or("info")).init();
}
