use yew::prelude::*;

mod components;
pub mod api_client;
pub mod settings;

use components::PredictionForm;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <main class="min-h-screen bg-base-200 flex flex-col items-center justify-center p-3">
            <div class="text-center max-w-2xl mb-6">
                <h1 class="text-5xl font-bold">{"Discover Your Toy's True Value!"}</h1>
                <p class="text-xl text-gray-500 mt-2">
                    {"Whether you're buying, selling, or simply curious, predict your toy's worth in just a few clicks!"}
                </p>
            </div>
            <PredictionForm />
        </main>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    // Initialize settings first
    settings::init_settings();

    // Initialize logger with settings
    let settings = settings::get_settings();
    wasm_logger::init(wasm_logger::Config::new(settings.log_level));

    log::info!("=== Toy Price Predictor Starting ===");
    log::info!("Application settings: {:?}", settings);
    log::debug!("Prediction endpoint: {}", settings.prediction_endpoint);

    // Chart defaults must exist before the first chart is drawn
    if common::register_chart_defaults() {
        log::debug!("Chart defaults registered");
    }

    log::trace!("Initializing Yew renderer");
    yew::Renderer::<App>::new().render();
    log::info!("Application initialized successfully");
}
