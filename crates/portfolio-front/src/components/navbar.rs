use crate::routes::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(Navbar)]
pub fn navbar() -> Html {
    html! {
        <nav class="navbar">
            <div class="navbar-brand">
                <Link<Route> to={Route::Home}>
                    <h1>{"Portfolio"}</h1>
                </Link<Route>>
            </div>
            <div class="navbar-menu">
                <Link<Route> to={Route::Experience} classes="nav-link">
                    {"Experience"}
                </Link<Route>>
                <Link<Route> to={Route::Certificates} classes="nav-link">
                    {"Certificates"}
                </Link<Route>>
            </div>
        </nav>
    }
}
