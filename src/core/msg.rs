use std::sync::Arc;

use strum::IntoStaticStr;

use crate::domain::{Pokemon, PokemonUrl};

/// Action events. Each kind is handled by exactly one reducer in [`crate::core::update`].
#[derive(Debug, Clone, PartialEq, IntoStaticStr)]
pub enum Msg {
    NextPage,
    PrevPage,
    SetPokemonUrls(Arc<[PokemonUrl]>),
    SetPokemons(Arc<[Pokemon]>),
    SetLoading(bool),
    SetTotalPage(u32),

    // Legacy counter, unrelated to pagination
    IncreaseCounter(i64),
    DecreaseCounter(i64),
}

impl Msg {
    pub fn name(&self) -> &'static str {
        self.into()
    }

    /// Helper to exclude frequent messages during debugging
    pub fn is_frequent(&self) -> bool {
        matches!(self, Msg::SetLoading(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_msg_name() {
        assert_eq!(Msg::NextPage.name(), "NextPage");
        assert_eq!(Msg::SetTotalPage(3).name(), "SetTotalPage");
        assert_eq!(Msg::SetPokemons(Arc::from(Vec::new())).name(), "SetPokemons");
    }

    #[test]
    fn test_msg_frequent_detection() {
        assert!(Msg::SetLoading(true).is_frequent());
        assert!(!Msg::NextPage.is_frequent());
    }

    #[test]
    fn test_msg_equality() {
        assert_eq!(Msg::NextPage, Msg::NextPage);
        assert_ne!(Msg::NextPage, Msg::PrevPage);
        assert_ne!(Msg::IncreaseCounter(1), Msg::IncreaseCounter(2));
    }
}
