use std::rc::Rc;

use vitrine::data::{CollectionAction, CollectionState, Nft};
use vitrine::{debug, info};
use yew::prelude::*;

/// Everything a descendant of [`CollectionProvider`] can read or replace.
#[derive(Clone, PartialEq)]
pub struct CollectionContext {
    pub content: String,
    pub set_content: Callback<String>,
    pub nfts: Vec<Nft>,
    pub set_nfts: Callback<Vec<Nft>>,
    pub active_nfts: Vec<Nft>,
    pub set_active_nfts: Callback<Vec<Nft>>,
}

#[derive(Debug, Clone, Default, PartialEq)]
struct ProviderState(CollectionState<Nft>);

impl Reducible for ProviderState {
    type Action = CollectionAction<Nft>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        debug!(field = action.kind(), "collection context replaced");
        let mut next = Rc::unwrap_or_clone(self);
        next.0.apply(action);
        Rc::new(next)
    }
}

#[derive(Properties, PartialEq)]
pub struct CollectionProviderProps {
    pub children: Children,
}

#[function_component(CollectionProvider)]
pub fn collection_provider(props: &CollectionProviderProps) -> Html {
    let state = use_reducer(ProviderState::default);

    use_effect_with((), |_| {
        info!("collection provider mounted");
    });

    let set_content = {
        let state = state.dispatcher();
        Callback::from(move |content: String| {
            state.dispatch(CollectionAction::SetContent(content));
        })
    };

    let set_nfts = {
        let state = state.dispatcher();
        Callback::from(move |nfts: Vec<Nft>| {
            state.dispatch(CollectionAction::SetNfts(nfts));
        })
    };

    let set_active_nfts = {
        let state = state.dispatcher();
        Callback::from(move |active_nfts: Vec<Nft>| {
            state.dispatch(CollectionAction::SetActiveNfts(active_nfts));
        })
    };

    let context = CollectionContext {
        content: state.0.content.clone(),
        set_content,
        nfts: state.0.nfts.clone(),
        set_nfts,
        active_nfts: state.0.active_nfts.clone(),
        set_active_nfts,
    };

    html! {
        <ContextProvider<CollectionContext> context={context}>
            {props.children.clone()}
        </ContextProvider<CollectionContext>>
    }
}

#[hook]
pub fn use_collection() -> CollectionContext {
    use_context::<CollectionContext>()
        .expect("use_collection must be used within a CollectionProvider")
}
