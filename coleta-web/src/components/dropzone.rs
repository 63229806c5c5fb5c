use leptos::*;
use web_sys::{File, HtmlInputElement};

/// Optional image upload. The chosen file rides along the registration
/// request as the `image` part.
#[component]
pub fn Dropzone(selected_file: RwSignal<Option<File>>) -> impl IntoView {
    let label = move || {
        selected_file
            .get()
            .map(|file| file.name())
            .unwrap_or_else(|| "Imagem do estabelecimento".to_string())
    };

    view! {
        <label
            for="image"
            class="flex items-center justify-center h-32 mb-8 bg-gray-100 text-gray-600 rounded border-2 border-dashed border-green-400 cursor-pointer"
        >
            {label}
        </label>
        <input
            type="file"
            id="image"
            accept="image/*"
            class="hidden"
            on:change=move |ev| {
                let input: HtmlInputElement = event_target(&ev);
                let file = input.files().and_then(|files| files.get(0));
                selected_file.set(file);
            }
        />
    }
}
