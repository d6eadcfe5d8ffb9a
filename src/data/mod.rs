pub mod export;
pub mod gear;
pub mod item;
pub mod store;
pub mod validate;

pub use gear::{build_stats, GearInputs};
pub use item::{Item, ITEM_SLOTS, STAT_KEYS};
pub use store::{ItemCatalog, StoreError, DEFAULT_ITEMS_PATH};
