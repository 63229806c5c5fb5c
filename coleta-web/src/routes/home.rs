use leptos::*;

#[component]
pub fn Home() -> impl IntoView {
    view! {
        <div class="flex flex-col min-h-screen py-8">
            <header class="mb-16">
                <span class="text-3xl font-bold text-gray-800">"Coleta"</span>
            </header>
            <main class="max-w-xl">
                <h1 class="mb-6 text-5xl font-bold text-gray-800 leading-tight">
                    "Seu marketplace de coleta de resíduos."
                </h1>
                <p class="mb-10 text-2xl text-gray-600">
                    "Ajudamos pessoas a encontrarem pontos de coleta de forma eficiente."
                </p>
                <a
                    href="/criar-ponto"
                    class="inline-block py-4 px-10 bg-green-500 text-white font-bold rounded hover:bg-green-600 transition duration-300 ease-in-out"
                >
                    "Cadastre um ponto de coleta"
                </a>
            </main>
        </div>
    }
}
