//! Domain types
//!
//! This module contains the catalog entities exchanged with PokeAPI:
//! - Reference records from a page listing
//! - Resolved detail records

pub mod pokemon;

pub use pokemon::{Pokemon, PokemonPage, PokemonUrl, Sprites};
