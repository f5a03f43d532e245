use yew::prelude::*;
use yew_router::prelude::*;

mod components;
pub mod api_client;
pub mod chart;
pub mod common;
pub mod hooks;
pub mod settings;
pub mod submit;

use crate::common::toast::ToastProvider;
use crate::components::histogram::HistogramView;

#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/histogram")]
    Histogram,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    log::debug!("Routing to: {:?}", routes);
    match routes {
        Route::Home | Route::Histogram => {
            log::trace!("Rendering Histogram page");
            html! { <HistogramView /> }
        }
        Route::NotFound => {
            log::warn!("404 - Route not found");
            html! {
                <div class="container mx-auto px-4 py-8">
                    <h1 class="text-2xl font-bold">{"404 Not Found"}</h1>
                    <Link<Route> to={Route::Histogram} classes={classes!("link", "link-primary")}>{"Back to histograms"}</Link<Route>>
                </div>
            }
        }
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <ToastProvider>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ToastProvider>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    console_error_panic_hook::set_once();

    // Initialize settings first
    settings::init_settings();

    // Initialize logger with settings
    let settings = settings::get_settings();
    wasm_logger::init(wasm_logger::Config::new(settings.log_level));

    log::info!("=== Histoview Frontend Starting ===");
    log::info!("Application settings: {:?}", settings);
    log::debug!("API base URL: '{}'", settings.api_base_url);
    log::debug!("Debug mode: {}", settings.debug_mode);

    log::trace!("Initializing Yew renderer");
    yew::Renderer::<App>::new().render();
    log::info!("Application initialized successfully");
}
