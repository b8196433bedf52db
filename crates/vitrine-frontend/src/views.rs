use yew::prelude::*;

use crate::components::{Gallery, NftGrid};

/// Picks the view for the current context content.
pub fn switch(content: &str) -> Html {
    match content {
        "collection" => html! { <NftGrid /> },
        "gallery" => html! { <Gallery /> },
        other => html! { <div class="text-gray-500">{ format!("Nothing to show for \"{other}\"") }</div> },
    }
}
