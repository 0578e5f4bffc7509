use dioxus::prelude::*;

mod components;
mod config;
mod state;
mod views;

use config::AppConfig;
use views::{Dashboard, Home, Login, NotFound, ProfileView, ProjectDetail, SettingsView, TaskView};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
    #[route("/login")]
    Login {},
    #[route("/dashboard")]
    Dashboard {},
    #[route("/project/:project_id")]
    ProjectDetail { project_id: String },
    #[route("/project/:project_id/task/:task_id")]
    TaskView { project_id: String, task_id: String },
    #[route("/profile")]
    ProfileView {},
    #[route("/settings")]
    SettingsView {},
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");
const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";

fn main() {
    let (config, load_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    // The logger can only be set once, so the load error is reported after it exists.
    if let Err(e) = dioxus::logger::init(config.log_level()) {
        eprintln!("Failed to initialise logger: {e}");
    }
    if let Some(e) = load_error {
        tracing::warn!("Falling back to default configuration: {e:#}");
    }
    tracing::info!(brand = %config.app.brand, "starting");

    LaunchBuilder::new().with_context(config).launch(App);
}

/// Root component: provides the shared auth identity and toast queue, then renders the router.
#[component]
fn App() -> Element {
    state::provide_app_state();

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Script { src: TAILWIND_CDN }

        Router::<Route> {}
        components::Toaster {}
    }
}
