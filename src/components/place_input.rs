use wasm_bindgen::prelude::*;
use yew::prelude::*;

use crate::models::PlaceSelection;
use crate::utils::gmaps_ffi;

#[derive(Properties, PartialEq)]
pub struct PlaceInputProps {
    /// DOM id the autocomplete widget binds to. Must be unique per input.
    pub input_id: String,
    pub label: String,
    pub placeholder: String,
    #[prop_or_default]
    pub icon: Option<String>,
    /// Fired on every place-changed event, including ones without geometry
    pub on_place: Callback<PlaceSelection>,
}

/// One labelled text input wired to a Places autocomplete widget
#[function_component(PlaceInput)]
pub fn place_input(props: &PlaceInputProps) -> Html {
    {
        let input_id = props.input_id.clone();
        let on_place = props.on_place.clone();

        use_effect_with(input_id.clone(), move |_| {
            let callback = Closure::wrap(Box::new(move |payload: JsValue| {
                match serde_wasm_bindgen::from_value::<PlaceSelection>(payload) {
                    Ok(place) => on_place.emit(place),
                    Err(e) => log::error!("❌ Unreadable place payload: {}", e),
                }
            }) as Box<dyn FnMut(JsValue)>);

            gmaps_ffi::bind_autocomplete(&input_id, &callback);
            // The widget keeps calling into this closure for the lifetime of
            // the page, so it must stay alive.
            callback.forget();

            || ()
        });
    }

    html! {
        <div class="place-field">
            <label class="place-label" for={props.input_id.clone()}>
                {props.label.clone()}
            </label>
            <div class="place-input-wrap">
                {
                    if let Some(icon) = &props.icon {
                        html! { <span class="place-icon">{icon.clone()}</span> }
                    } else {
                        html! {}
                    }
                }
                <input
                    id={props.input_id.clone()}
                    type="text"
                    class="place-input"
                    placeholder={props.placeholder.clone()}
                />
            </div>
        </div>
    }
}
