use yew::prelude::*;

use crate::providers::use_collection;

#[function_component(ActiveTray)]
pub fn active_tray() -> Html {
    let collection = use_collection();

    let clear = {
        let set_active_nfts = collection.set_active_nfts.clone();
        Callback::from(move |_: MouseEvent| set_active_nfts.emit(Vec::new()))
    };

    html! {
        <div class="mt-8 p-4 border border-gray-200 dark:border-gray-700 rounded">
            <div class="flex items-center justify-between mb-2">
                <h3 class="font-semibold">{ format!("Active ({})", collection.active_nfts.len()) }</h3>
                <button
                    class="text-sm text-red-600 hover:underline disabled:opacity-50 cursor-pointer"
                    onclick={clear}
                    disabled={collection.active_nfts.is_empty()}
                >
                    { "Clear" }
                </button>
            </div>
            <ul class="flex flex-wrap gap-2">
                { for collection.active_nfts.iter().map(|nft| html! {
                    <li key={nft.id.clone()} class="px-2 py-1 text-sm rounded bg-blue-100 dark:bg-blue-900">{ &nft.name }</li>
                }) }
            </ul>
        </div>
    }
}
