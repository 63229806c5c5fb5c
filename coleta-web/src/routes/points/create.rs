use leptos::ev::SubmitEvent;
use leptos::logging::error;
use leptos::*;
use leptos_router::use_navigate;
use wasm_bindgen_futures::spawn_local;
use web_sys::File;

use crate::api::error::ApiError;
use crate::api::ibge::{fetch_cities, fetch_ufs, City, Uf};
use crate::api::points::{fetch_items, register_point, Item};
use crate::base::location::request_current_position;
use crate::base::registration::{Field, ItemSelection};
use crate::components::icons::ArrowLeftIcon;
use crate::components::{Dropzone, ItemGrid, MapPicker};
use crate::{LatLng, PointPayload, RegistrationFields};

#[component]
pub fn CreatePoint() -> impl IntoView {
    let items = create_rw_signal(Vec::<Item>::new());
    let ufs = create_rw_signal(Vec::<Uf>::new());
    let cities = create_rw_signal(Vec::<City>::new());

    let user_position = create_rw_signal(LatLng::default());

    let selected_uf = create_rw_signal(String::new());
    let selected_city = create_rw_signal(String::new());
    let selected_position = create_rw_signal(LatLng::default());

    let selected_file = create_rw_signal(None::<File>);

    let registration = create_rw_signal(RegistrationFields::default());
    let selected_items = create_rw_signal(ItemSelection::default());

    request_current_position(move |position| user_position.set(position));

    spawn_local(async move {
        match fetch_items().await {
            Ok(catalog) => items.set(catalog),
            Err(err) => error!("Error fetching items: {}", err),
        }
    });

    spawn_local(async move {
        match fetch_ufs().await {
            Ok(list) => ufs.set(list),
            Err(err) => error!("Error fetching states: {}", err),
        }
    });

    // refetch whenever the selection changes, the initial empty
    // placeholder included; the resolved list replaces the previous
    // state's cities wholesale
    create_effect(move |_| {
        let uf = selected_uf.get();
        spawn_local(async move {
            match fetch_cities(&uf).await {
                Ok(list) => cities.set(list),
                Err(err) => {
                    error!("Error fetching cities for {:?}: {}", uf, err)
                }
            }
        });
    });

    let navigate = use_navigate();
    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let payload = PointPayload {
            registration: registration.get_untracked(),
            uf: selected_uf.get_untracked(),
            city: selected_city.get_untracked(),
            position: selected_position.get_untracked(),
            items: selected_items.get_untracked(),
        };
        let image = selected_file.get_untracked();

        let navigate = navigate.clone();
        spawn_local(async move {
            match register_point(&payload, image.as_ref()).await {
                Ok(()) => {
                    show_alert("Ponto de coleta cadastrado com sucesso!");
                    navigate("/", Default::default());
                }
                Err(err) => show_alert(&submit_error_message(err)),
            }
        });
    };

    view! {
        <div class="max-w-3xl mx-auto py-8">
            <header class="flex items-center justify-between mb-12">
                <span class="text-3xl font-bold text-gray-800">"Coleta"</span>
                <a
                    href="/"
                    class="flex items-center text-green-600 font-bold hover:text-green-700"
                >
                    <ArrowLeftIcon/>
                    "Voltar para home"
                </a>
            </header>

            <form
                class="bg-white rounded shadow p-10"
                on:submit=handle_submit
            >
                <h1 class="mb-10 text-4xl font-bold text-gray-800">
                    "Cadastro do ponto de coleta"
                </h1>

                <Dropzone selected_file/>

                <fieldset class="mb-12">
                    <legend class="mb-6 text-2xl font-bold text-gray-800">
                        "Dados"
                    </legend>
                    <div class="flex flex-col mb-6">
                        <label for="name" class="mb-2 text-gray-700">
                            "Nome da entidade:"
                        </label>
                        <input
                            type="text"
                            name="name"
                            id="name"
                            class="py-3 px-4 bg-gray-100 rounded border border-gray-200"
                            on:input=move |ev| {
                                registration.update(|fields| {
                                    fields.set(
                                        Field::Name,
                                        event_target_value(&ev),
                                    )
                                })
                            }
                        />
                    </div>
                    <div class="flex space-x-6">
                        <div class="flex flex-col flex-1">
                            <label for="email" class="mb-2 text-gray-700">
                                "E-mail:"
                            </label>
                            <input
                                type="email"
                                name="email"
                                id="email"
                                class="py-3 px-4 bg-gray-100 rounded border border-gray-200"
                                on:input=move |ev| {
                                    registration.update(|fields| {
                                        fields.set(
                                            Field::Email,
                                            event_target_value(&ev),
                                        )
                                    })
                                }
                            />
                        </div>
                        <div class="flex flex-col flex-1">
                            <label for="whatsapp" class="mb-2 text-gray-700">
                                "WhatsApp:"
                            </label>
                            <input
                                type="text"
                                name="whatsapp"
                                id="whatsapp"
                                class="py-3 px-4 bg-gray-100 rounded border border-gray-200"
                                on:input=move |ev| {
                                    registration.update(|fields| {
                                        fields.set(
                                            Field::Whatsapp,
                                            event_target_value(&ev),
                                        )
                                    })
                                }
                            />
                        </div>
                    </div>
                </fieldset>

                <fieldset class="mb-12">
                    <legend class="mb-2 text-2xl font-bold text-gray-800">
                        "Endereço"
                    </legend>
                    <span class="block mb-6 text-sm text-gray-500">
                        "Selecione o endereço no mapa"
                    </span>

                    <MapPicker center=user_position marker=selected_position/>

                    <div class="flex space-x-6">
                        <div class="flex flex-col flex-1">
                            <label for="uf" class="mb-2 text-gray-700">
                                "Estado (UF):"
                            </label>
                            <select
                                name="uf"
                                id="uf"
                                class="py-3 px-4 bg-gray-100 rounded border border-gray-200"
                                prop:value=move || selected_uf.get()
                                on:change=move |ev| {
                                    selected_uf.set(event_target_value(&ev))
                                }
                            >
                                <option value="0">"Selecione uma UF"</option>
                                <For
                                    each=move || ufs.get()
                                    key=|uf| uf.abbr.clone()
                                    children=move |uf| {
                                        let Uf { abbr, name } = uf;
                                        view! {
                                            <option value=abbr>{name}</option>
                                        }
                                    }
                                />
                            </select>
                        </div>
                        <div class="flex flex-col flex-1">
                            <label for="city" class="mb-2 text-gray-700">
                                "Cidade:"
                            </label>
                            <select
                                name="city"
                                id="city"
                                class="py-3 px-4 bg-gray-100 rounded border border-gray-200"
                                prop:value=move || selected_city.get()
                                on:change=move |ev| {
                                    selected_city.set(event_target_value(&ev))
                                }
                            >
                                <option value="0">
                                    "Selecione uma cidade"
                                </option>
                                <For
                                    each=move || cities.get()
                                    key=|city| city.name.clone()
                                    children=move |city| {
                                        let City { name } = city;
                                        view! {
                                            <option value=name.clone()>
                                                {name}
                                            </option>
                                        }
                                    }
                                />
                            </select>
                        </div>
                    </div>
                </fieldset>

                <fieldset class="mb-12">
                    <legend class="mb-2 text-2xl font-bold text-gray-800">
                        "Itens de coleta"
                    </legend>
                    <span class="block mb-6 text-sm text-gray-500">
                        "Selecione um ou mais itens abaixo"
                    </span>
                    <ItemGrid items selected=selected_items/>
                </fieldset>

                <button
                    type="submit"
                    class="py-4 px-10 bg-green-500 text-white font-bold rounded hover:bg-green-600 transition duration-300 ease-in-out"
                >
                    "Cadastrar ponto de coleta"
                </button>
            </form>
        </div>
    }
}

fn show_alert(message: &str) {
    if let Some(window) = web_sys::window() {
        _ = window.alert_with_message(message);
    }
}

// a failed submit alerts the `message` carried by the error response; any
// other failure shape alerts its own description
fn submit_error_message(err: ApiError) -> String {
    match err {
        ApiError::Server { message, .. } => message,
        other => other.to_string(),
    }
}
