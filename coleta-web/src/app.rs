use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use crate::routes::home::Home;
use crate::routes::points::CreatePoint;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="coleta" href="/pkg/tailwind.css"/>
        <Link rel="shortcut icon" type_="image/ico" href="/favicon.ico"/>
        <div class="my-0 mx-auto px-8 max-w-7xl text-left">
            <Router>
                <main>
                    <Routes>
                        <Route path="/" view=|| view! { <Home/> }/>
                        <Route
                            path="/criar-ponto"
                            view=|| view! { <CreatePoint/> }
                        />
                    </Routes>
                </main>
            </Router>
        </div>
    }
}
