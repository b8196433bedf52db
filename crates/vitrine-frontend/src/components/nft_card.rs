use vitrine::data::Nft;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct NftCardProps {
    pub nft: Nft,
    #[prop_or_default]
    pub active: bool,
    pub on_select: Callback<Nft>,
}

#[function_component(NftCard)]
pub fn nft_card(props: &NftCardProps) -> Html {
    let onclick = {
        let nft = props.nft.clone();
        let on_select = props.on_select.clone();
        Callback::from(move |_: MouseEvent| on_select.emit(nft.clone()))
    };

    html! {
        <button
            class={classes!(
                "flex", "flex-col", "items-start", "p-3", "rounded-lg", "border", "text-left", "cursor-pointer",
                if props.active {
                    "border-blue-500 ring-2 ring-blue-300 dark:ring-blue-700"
                } else {
                    "border-gray-200 dark:border-gray-700 hover:border-gray-400"
                }
            )}
            {onclick}
        >
            {
                if let Some(url) = &props.nft.image_url {
                    html! { <img class="w-full h-32 object-cover rounded mb-2" src={url.clone()} alt={props.nft.name.clone()} /> }
                } else {
                    html! { <div class="w-full h-32 rounded mb-2 bg-gray-100 dark:bg-gray-800"></div> }
                }
            }
            <span class="font-medium">{ &props.nft.name }</span>
            <span class="text-xs text-gray-500">{ format!("#{}", props.nft.id) }</span>
        </button>
    }
}
