use crate::routes::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class="container">
            <h1>{"Hi, I'm Brian."}</h1>
            <p>{"Projects I've built and certificates I've earned."}</p>

            <div class="dashboard-cards">
                <Link<Route> to={Route::Experience}>
                    <div class="dashboard-card">
                        <h3>{"Experience"}</h3>
                        <p>{"Games, labs and web apps, with live previews and recordings"}</p>
                    </div>
                </Link<Route>>

                <Link<Route> to={Route::Certificates}>
                    <div class="dashboard-card">
                        <h3>{"Certificates"}</h3>
                        <p>{"Security and cloud certifications"}</p>
                    </div>
                </Link<Route>>
            </div>
        </div>
    }
}
