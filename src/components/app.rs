use yew::prelude::*;

use crate::config::{PlannerConfig, CONFIG};

use super::RoutePlanner;

/// Page shell: logo header plus the planner. No state, no logic.
#[function_component(App)]
pub fn app() -> Html {
    let config = PlannerConfig::from(&*CONFIG);

    html! {
        <div class="page">
            <header class="page-header">
                <img class="page-logo" src="assets/logo.svg" alt="Route Planner logo" />
            </header>
            <RoutePlanner config={config} />
        </div>
    }
}
