use log::{info, Level};
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod registration {
    pub mod store;
    pub mod submit;
    pub mod types;
    pub mod validate;
}
mod components {
    pub mod about_host;
    pub mod confirmation;
    pub mod gradient_button;
    pub mod modal;
    pub mod register_form;
    pub mod testimonials;
}
mod pages {
    pub mod landing;
}

use pages::landing::Landing;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering landing page");
            html! { <Landing /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
