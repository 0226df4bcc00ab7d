pub mod config;
pub mod error;
pub mod state;
pub mod store;

pub mod prelude {
    pub use super::{
        config::Config,
        error::{Error, Result},
        state::AppState,
        store::ReceiptStore,
    };
}
