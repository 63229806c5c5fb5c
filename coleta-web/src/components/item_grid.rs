use leptos::*;

use crate::api::points::Item;
use crate::base::registration::ItemSelection;

/// Catalog grid; clicking an entry toggles its membership in the
/// selection.
#[component]
pub fn ItemGrid(
    items: RwSignal<Vec<Item>>,
    selected: RwSignal<ItemSelection>,
) -> impl IntoView {
    view! {
        <ul class="grid grid-cols-3 gap-4 list-none">
            <For
                each=move || items.get()
                key=|item| item.id
                children=move |item| {
                    let Item {
                        id,
                        title,
                        image_url,
                    } = item;
                    view! {
                        <li
                            class="flex flex-col items-center py-6 px-4 bg-gray-50 rounded cursor-pointer border-2 border-transparent"
                            class=("border-green-500", move || {
                                selected.get().contains(id)
                            })
                            class=("bg-green-50", move || {
                                selected.get().contains(id)
                            })
                            on:click=move |_| {
                                selected.update(|selection| {
                                    selection.toggle(id)
                                })
                            }
                        >
                            <img src=image_url alt=title.clone() class="h-12"/>
                            <span class="mt-3 text-sm text-gray-700">
                                {title.clone()}
                            </span>
                        </li>
                    }
                }
            />
        </ul>
    }
}
