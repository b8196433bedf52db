mod components;
mod providers;
mod views;

use yew::prelude::*;

use components::{ActiveTray, ContentTabs};
use providers::{CollectionProvider, use_collection};

#[function_component(CurrentView)]
fn current_view() -> Html {
    let collection = use_collection();
    views::switch(&collection.content)
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <CollectionProvider>
            <div class="p-8 max-w-5xl mx-auto">
                <h1 class="text-2xl font-bold mb-4">{ "Vitrine" }</h1>
                <ContentTabs />
                <CurrentView />
                <ActiveTray />
            </div>
        </CollectionProvider>
    }
}

fn main() {
    vitrine::log::setup().expect("Failed to setup logging");
    yew::Renderer::<App>::new().render();
}
