//! Stateful storefront session: catalog, persisted cart, checkout and the
//! transient UI signals around them.
//!
//! Timers behind toasts and modals run as tokio tasks, so the mutating
//! methods of [`Storefront`] and [`UiState`] must be called from within a
//! tokio runtime.

pub mod cart_store;
pub mod catalog_store;
pub mod checkout;
pub mod error;
pub mod notify;
pub mod storage;
pub mod storefront;
pub mod ui;

pub use cart_store::{CartStore, CART_KEY};
pub use catalog_store::{CatalogStatus, CatalogStore};
pub use checkout::{OrderComposer, OrderConfirmation};
pub use error::{OrderError, StorageError, StoreError};
pub use notify::Transient;
pub use storage::{CartStorage, FileStorage, MemoryStorage};
pub use storefront::{Storefront, Timings};
pub use ui::{AddedToCart, UiState, ViewToggles};
