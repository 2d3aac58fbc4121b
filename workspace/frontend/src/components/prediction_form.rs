use std::cell::RefCell;
use std::rc::Rc;

use common::{FieldKey, InputView, PredictionFormController, PredictionService, ResultPanel};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::price_chart::PriceChart;
use crate::api_client::PredictionClient;

/// The toy price form: seven inputs, a submit button, the error panel and the
/// result panel. State lives in a [`PredictionFormController`]; this component
/// only forwards events to it and re-renders.
#[function_component(PredictionForm)]
pub fn prediction_form() -> Html {
    let controller = use_mut_ref(PredictionFormController::new);
    let trigger = use_force_update();

    // Results arriving after the form is gone must not be applied.
    {
        let controller = controller.clone();
        use_effect_with((), move |_| {
            move || {
                log::debug!("Prediction form unmounted");
                controller.borrow_mut().unmount();
            }
        });
    }

    let on_submit = {
        let controller = controller.clone();
        let trigger = trigger.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let Some((ticket, snapshot)) = controller.borrow_mut().begin_submit() else {
                log::debug!("Submit ignored while a prediction is in flight");
                return;
            };
            trigger.force_update();

            let controller = controller.clone();
            let trigger = trigger.clone();
            wasm_bindgen_futures::spawn_local(async move {
                log::info!("Requesting toy price prediction");
                let client = PredictionClient::from_settings();
                let result = client.predict(&snapshot).await;

                if controller.borrow_mut().settle(ticket, result) {
                    trigger.force_update();
                }
            });
        })
    };

    let view = controller.borrow().view();

    html! {
        <div class="flex flex-col lg:flex-row items-center justify-center gap-12 p-6">
            <form onsubmit={on_submit} class="card bg-base-100 shadow-lg w-full max-w-2xl p-6">
                {if let Some(error) = &view.error_panel {
                    html! {
                        <div class="alert alert-error mb-4">
                            <i class="fas fa-exclamation-circle"></i>
                            <span>{error}</span>
                        </div>
                    }
                } else {
                    html! {}
                }}

                <div class="flex flex-col gap-y-4 m-3 p-2">
                    { for view.inputs.iter().map(|input| field_input(input, &controller, &trigger)) }
                </div>

                <button
                    type="submit"
                    class="btn btn-primary w-full mt-2"
                    disabled={view.submit.disabled}
                >
                    {if view.submit.disabled {
                        html! { <><span class="loading loading-spinner loading-sm"></span>{" "}{view.submit.label}</> }
                    } else {
                        html! { {view.submit.label} }
                    }}
                </button>
            </form>

            {if let Some(panel) = &view.result_panel {
                result_panel(panel)
            } else {
                html! {}
            }}
        </div>
    }
}

fn field_input(
    input: &InputView,
    controller: &Rc<RefCell<PredictionFormController>>,
    trigger: &UseForceUpdateHandle,
) -> Html {
    let key: FieldKey = input.key;
    let oninput = {
        let controller = controller.clone();
        let trigger = trigger.clone();
        Callback::from(move |e: InputEvent| {
            let value = e.target_unchecked_into::<HtmlInputElement>().value();
            log::trace!("Field {} changed", key);
            controller.borrow_mut().update_field(key, value);
            trigger.force_update();
        })
    };

    html! {
        <div class="form-control" key={key.name()}>
            <label class="label" for={key.name()}>
                <span class="label-text">{&input.label}</span>
            </label>
            <input
                id={key.name()}
                type={input.kind.html_type()}
                name={key.name()}
                value={input.value.clone()}
                placeholder={input.placeholder.clone()}
                class="input input-bordered w-full"
                {oninput}
            />
        </div>
    }
}

fn result_panel(panel: &ResultPanel) -> Html {
    html! {
        <div class="card bg-base-100 shadow-lg p-3 w-full max-w-xl text-center text-2xl">
            <p>{"Your predicted toy price is:"}</p>
            <p class="font-bold text-success">{&panel.price_text}</p>
            <PriceChart series={panel.chart.clone()} />
        </div>
    }
}
