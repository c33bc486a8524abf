//! Boxes and the collection holding them.

mod collection;
mod money_box;

pub use collection::BoxCollection;
pub use money_box::MoneyBox;
