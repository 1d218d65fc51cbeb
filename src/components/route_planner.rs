use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::config::PlannerConfig;
use crate::hooks::use_maps_library;
use crate::models::PlaceSelection;
use crate::services::DirectionsService;
use crate::state::{PlaceRole, PlannerState};
use crate::utils::gmaps_ffi;

use super::{MapCanvas, PlaceInput};

#[derive(Properties, PartialEq)]
pub struct RoutePlannerProps {
    /// Credential and map defaults, supplied by the page shell
    pub config: PlannerConfig,
}

/// The whole functional surface: autocomplete inputs for origin, stops and
/// destination, the calculate control, the map canvas and the results panel.
#[function_component(RoutePlanner)]
pub fn route_planner(props: &RoutePlannerProps) -> Html {
    let state = use_state(PlannerState::default);
    let maps_ready = use_maps_library(props.config.maps_api_key.clone());

    // One callback factory per input role; geometry-less selections are
    // dropped with a log line and no state change.
    let select_place = {
        let state = state.clone();
        move |role: PlaceRole| {
            let state = state.clone();
            Callback::from(move |place: PlaceSelection| {
                let mut next = (*state).clone();
                if next.select_place(role, &place) {
                    state.set(next);
                } else {
                    log::error!("❌ Place geometry not available");
                }
            })
        }
    };

    let on_add_stop = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*state).clone();
            next.add_stop();
            state.set(next);
        })
    };

    let on_calculate = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*state).clone();
            let Some(request) = next.begin_calculation() else {
                log::error!("❌ Origin or destination is not set");
                return;
            };
            state.set(next);

            // No cancellation: overlapping clicks race and the response
            // processed last wins.
            let state = state.clone();
            spawn_local(async move {
                let outcome = DirectionsService::new().route(&request).await;

                let mut done = (*state).clone();
                match outcome {
                    Ok((result, raw)) => {
                        gmaps_ffi::render_route(&raw);
                        done.complete_calculation(Ok(result));
                    }
                    Err(e) => done.complete_calculation(Err(e)),
                }
                state.set(done);
            });
        })
    };

    if !maps_ready {
        return html! {
            <div class="planner-loading">{"Loading map..."}</div>
        };
    }

    let stop_count = state.stops.len();

    html! {
        <div class="planner">
            <div class="planner-heading">
                <h1>
                    {"Let's calculate "}
                    <span class="planner-heading-strong">{"distance"}</span>
                    {" from Google maps"}
                </h1>
            </div>
            <div class="planner-body">
                <div class="planner-form">
                    <PlaceInput
                        input_id="origin-input"
                        label="Origin"
                        placeholder="Origin"
                        icon="◎"
                        on_place={select_place(PlaceRole::Origin)}
                    />
                    {
                        for (0..stop_count).map(|index| html! {
                            <PlaceInput
                                key={index}
                                input_id={format!("stop-input-{}", index)}
                                label={format!("Stop {}", index + 1)}
                                placeholder={format!("Stop {}", index + 1)}
                                on_place={select_place(PlaceRole::Stop(index))}
                            />
                        })
                    }
                    <div class="add-stop-row">
                        <button class="btn-add-stop" onclick={on_add_stop}>
                            {"+ Add another stop"}
                        </button>
                    </div>
                    <PlaceInput
                        input_id="destination-input"
                        label="Destination"
                        placeholder="Destination"
                        icon="➤"
                        on_place={select_place(PlaceRole::Destination)}
                    />
                    {
                        if let Some(distance) = &state.distance {
                            html! {
                                <div class="distance-panel">
                                    <div class="distance-card">
                                        <h2>{"Distance"}</h2>
                                        <span class="distance-value">{distance.clone()}</span>
                                    </div>
                                    <p class="distance-note">
                                        {format!("The distance between the selected points is {}.", distance)}
                                    </p>
                                </div>
                            }
                        } else {
                            html! {}
                        }
                    }
                </div>
                <div class="planner-actions">
                    <button class="btn-calculate" onclick={on_calculate}>
                        { if state.loading { "Loading..." } else { "Calculate" } }
                    </button>
                </div>
                <div class="planner-map">
                    <MapCanvas map={props.config.map.clone()} />
                </div>
            </div>
        </div>
    }
}
