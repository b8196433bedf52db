use yew::prelude::*;

use crate::providers::use_collection;

/// Large view of the active items only.
#[function_component(Gallery)]
pub fn gallery() -> Html {
    let collection = use_collection();

    if collection.active_nfts.is_empty() {
        return html! {
            <p class="text-gray-500">{ "Pick items in the collection to show them here." }</p>
        };
    }

    html! {
        <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
            { for collection.active_nfts.iter().map(|nft| html! {
                <figure key={nft.id.clone()} class="rounded-lg overflow-hidden border border-gray-200 dark:border-gray-700">
                    {
                        match &nft.image_url {
                            Some(url) => html! { <img class="w-full h-72 object-cover" src={url.clone()} alt={nft.name.clone()} /> },
                            None => html! { <div class="w-full h-72 bg-gray-100 dark:bg-gray-800"></div> },
                        }
                    }
                    <figcaption class="p-3 font-medium">{ &nft.name }</figcaption>
                </figure>
            }) }
        </div>
    }
}
