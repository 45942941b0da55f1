use yew_router::Routable;

#[derive(Clone, Debug, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,

    #[at("/experience")]
    Experience,

    #[at("/certificates")]
    Certificates,

    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// The page actually shown for a route. Unknown paths land on Home.
    pub fn page(self) -> Route {
        match self {
            Route::NotFound => Route::Home,
            other => other,
        }
    }
}
