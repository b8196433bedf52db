use vitrine::data::Nft;
use yew::prelude::*;

use crate::components::NftCard;
use crate::providers::use_collection;

/// Items offered by the "Load sample" button.
pub fn sample_nfts() -> Vec<Nft> {
    vec![
        Nft::new("1", "Genesis Block").with_image("https://picsum.photos/seed/vitrine-1/300"),
        Nft::new("2", "Quiet Harbour").with_image("https://picsum.photos/seed/vitrine-2/300"),
        Nft::new("3", "Night Market").with_image("https://picsum.photos/seed/vitrine-3/300"),
        Nft::new("4", "Untitled"),
    ]
}

/// `active` with `nft` removed if present, appended otherwise.
pub fn toggled(active: &[Nft], nft: &Nft) -> Vec<Nft> {
    if active.contains(nft) {
        active.iter().filter(|a| *a != nft).cloned().collect()
    } else {
        let mut next = active.to_vec();
        next.push(nft.clone());
        next
    }
}

#[function_component(NftGrid)]
pub fn nft_grid() -> Html {
    let collection = use_collection();

    let load_sample = {
        let set_nfts = collection.set_nfts.clone();
        Callback::from(move |_: MouseEvent| set_nfts.emit(sample_nfts()))
    };

    let on_select = {
        let active_nfts = collection.active_nfts.clone();
        let set_active_nfts = collection.set_active_nfts.clone();
        Callback::from(move |nft: Nft| set_active_nfts.emit(toggled(&active_nfts, &nft)))
    };

    html! {
        <div>
            <div class="flex items-center justify-between mb-4">
                <h2 class="text-xl font-semibold">{ format!("Collection ({})", collection.nfts.len()) }</h2>
                <button
                    class="bg-blue-600 text-white px-4 py-2 rounded hover:bg-blue-700 cursor-pointer"
                    onclick={load_sample}
                >
                    { "Load sample" }
                </button>
            </div>
            {
                if collection.nfts.is_empty() {
                    html! { <p class="text-gray-500">{ "No items yet." }</p> }
                } else {
                    html! {
                        <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                            { for collection.nfts.iter().map(|nft| html! {
                                <NftCard
                                    key={nft.id.clone()}
                                    nft={nft.clone()}
                                    active={collection.active_nfts.contains(nft)}
                                    on_select={on_select.clone()}
                                />
                            }) }
                        </div>
                    }
                }
            }
        </div>
    }
}
