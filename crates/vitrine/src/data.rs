//! Data structures shared between the collection store and the Yew front-end.

use serde::{Deserialize, Serialize};

use crate::content::DEFAULT_CONTENT;

/// A collectible shown in the collection and gallery views.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct Nft {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl Nft {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            image_url: None,
        }
    }

    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }
}

/// The three independent pieces of collection UI state.
///
/// `active_nfts` is meant to be a selection out of `nfts`, but nothing checks that: either list
/// can be replaced without looking at the other.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CollectionState<T> {
    pub content: String,
    pub nfts: Vec<T>,
    pub active_nfts: Vec<T>,
}

impl<T> CollectionState<T> {
    /// Content set to [`DEFAULT_CONTENT`], both lists empty.
    pub fn new() -> Self {
        Self {
            content: DEFAULT_CONTENT.to_string(),
            nfts: Vec::new(),
            active_nfts: Vec::new(),
        }
    }

    /// Replaces the one field named by `action`, leaving the other two as they were.
    pub fn apply(&mut self, action: CollectionAction<T>) {
        match action {
            CollectionAction::SetContent(content) => self.content = content,
            CollectionAction::SetNfts(nfts) => self.nfts = nfts,
            CollectionAction::SetActiveNfts(active_nfts) => self.active_nfts = active_nfts,
        }
    }
}

impl<T> Default for CollectionState<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// A request to replace one field of a [`CollectionState`].
#[derive(Debug, Clone, PartialEq)]
pub enum CollectionAction<T> {
    SetContent(String),
    SetNfts(Vec<T>),
    SetActiveNfts(Vec<T>),
}

impl<T> CollectionAction<T> {
    /// Short name of the field being replaced, for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            CollectionAction::SetContent(_) => "content",
            CollectionAction::SetNfts(_) => "nfts",
            CollectionAction::SetActiveNfts(_) => "active_nfts",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_state_is_default_content_and_empty_lists() {
        let state = CollectionState::<Nft>::default();
        assert_eq!(state.content, "collection");
        assert!(state.nfts.is_empty());
        assert!(state.active_nfts.is_empty());
    }

    #[test]
    fn set_nfts_leaves_active_untouched() {
        let mut state = CollectionState::new();
        state.apply(CollectionAction::SetActiveNfts(vec!["kept"]));
        state.apply(CollectionAction::SetNfts(vec!["a", "b"]));

        assert_eq!(state.nfts, vec!["a", "b"]);
        assert_eq!(state.active_nfts, vec!["kept"]);
        assert_eq!(state.content, "collection");
    }

    #[test]
    fn setters_replace_wholesale() {
        let mut state = CollectionState::new();
        state.apply(CollectionAction::SetNfts(vec![1, 2, 3]));
        state.apply(CollectionAction::SetNfts(vec![4]));
        assert_eq!(state.nfts, vec![4]);

        state.apply(CollectionAction::SetNfts(Vec::new()));
        assert!(state.nfts.is_empty());
    }

    #[test]
    fn active_list_is_not_checked_against_nfts() {
        let mut state = CollectionState::new();
        state.apply(CollectionAction::SetNfts(vec!["nft1"]));
        state.apply(CollectionAction::SetActiveNfts(vec!["elsewhere"]));
        assert_eq!(state.active_nfts, vec!["elsewhere"]);
    }

    #[test]
    fn snapshot_uses_camel_case_field_names() {
        let mut state = CollectionState::new();
        state.apply(CollectionAction::SetContent("gallery".to_string()));
        state.apply(CollectionAction::SetActiveNfts(vec![
            Nft::new("1", "Genesis").with_image("https://img.example/1.png"),
        ]));

        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["content"], "gallery");
        assert_eq!(json["nfts"], serde_json::json!([]));
        assert_eq!(json["activeNfts"][0]["imageUrl"], "https://img.example/1.png");

        let back: CollectionState<Nft> = serde_json::from_value(json).unwrap();
        assert_eq!(back, state);
    }

    #[test]
    fn nft_without_image_omits_field() {
        let json = serde_json::to_string(&Nft::new("7", "Plain")).unwrap();
        assert_eq!(json, r#"{"id":"7","name":"Plain"}"#);
    }

    #[test]
    fn action_kind_names_field() {
        assert_eq!(CollectionAction::<u8>::SetContent(String::new()).kind(), "content");
        assert_eq!(CollectionAction::<u8>::SetNfts(vec![]).kind(), "nfts");
        assert_eq!(CollectionAction::<u8>::SetActiveNfts(vec![]).kind(), "active_nfts");
    }
}
