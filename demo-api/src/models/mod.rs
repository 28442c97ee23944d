pub mod item;

pub use item::{CreateItemRequest, Item, ITEMS, NAME_MAX_LEN};
