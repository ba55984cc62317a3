//! Reusable UI widgets
//!
//! Widgets render plain values and know nothing about the store.

pub mod page_header;
pub mod pokemon_list;
pub mod spinner;

pub use page_header::PageHeaderWidget;
pub use pokemon_list::{PokemonListWidget, ReferenceListWidget};
pub use spinner::SpinnerWidget;
