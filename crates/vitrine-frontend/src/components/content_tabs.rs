use yew::prelude::*;

use crate::providers::use_collection;

const TABS: [&str; 2] = ["collection", "gallery"];

/// Switches the context content between views, and shows the process-wide content cell next to it.
///
/// The two values are not linked. "Pin" copies the context value into the global cell once.
#[function_component(ContentTabs)]
pub fn content_tabs() -> Html {
    let collection = use_collection();
    let global_content = use_state(vitrine::get_content);

    let pin = {
        let content = collection.content.clone();
        let global_content = global_content.clone();
        Callback::from(move |_: MouseEvent| {
            vitrine::set_content(content.clone());
            global_content.set(vitrine::get_content());
        })
    };

    let reset = {
        let global_content = global_content.clone();
        Callback::from(move |_: MouseEvent| {
            vitrine::reset_content();
            global_content.set(vitrine::get_content());
        })
    };

    html! {
        <div class="flex items-center justify-between mb-6">
            <nav class="flex space-x-2">
                { for TABS.iter().map(|tab| {
                    let onclick = {
                        let set_content = collection.set_content.clone();
                        let tab = tab.to_string();
                        Callback::from(move |_: MouseEvent| set_content.emit(tab.clone()))
                    };
                    html! {
                        <button
                            key={*tab}
                            class={classes!(
                                "px-4", "py-2", "rounded", "capitalize", "cursor-pointer",
                                if collection.content == *tab {
                                    "bg-blue-600 text-white"
                                } else {
                                    "bg-gray-100 dark:bg-gray-800 hover:bg-gray-200"
                                }
                            )}
                            {onclick}
                        >
                            { *tab }
                        </button>
                    }
                }) }
            </nav>
            <div class="flex items-center space-x-2 text-sm text-gray-600 dark:text-gray-400">
                <span>{ format!("Global: {}", *global_content) }</span>
                <button class="underline cursor-pointer" onclick={pin}>{ "Pin" }</button>
                <button class="underline cursor-pointer" onclick={reset}>{ "Reset" }</button>
            </div>
        </div>
    }
}
