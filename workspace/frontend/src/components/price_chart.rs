use common::{chart_defaults, ChartSeries};
use plotly::common::{Line, Marker};
use plotly::layout::{Axis, RangeMode};
use plotly::{Bar, Layout};
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;
use yew::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly)]
    fn newPlot(div_id: &str, data: JsValue, layout: JsValue, config: JsValue);
}

const CHART_DIV_ID: &str = "predicted-price-chart";

#[derive(Properties, PartialEq)]
pub struct PriceChartProps {
    pub series: ChartSeries,
}

/// Single-bar Plotly chart of the predicted price. Redrawn whenever the
/// series changes.
#[function_component(PriceChart)]
pub fn price_chart(props: &PriceChartProps) -> Html {
    let container_ref = use_node_ref();

    use_effect_with((container_ref.clone(), props.series.clone()), |(container_ref, series)| {
        if let Some(element) = container_ref.cast::<HtmlElement>() {
            element.set_id(CHART_DIV_ID);
            if let Err(e) = draw(series) {
                log::error!("Failed to draw price chart: {:?}", e);
            }
        }
        || ()
    });

    html! {
        <div ref={container_ref} class="w-full h-64 mt-4"></div>
    }
}

fn draw(series: &ChartSeries) -> Result<(), JsValue> {
    let defaults = chart_defaults();

    let trace = Bar::new(vec![series.category_label], series.values.to_vec())
        .name(series.dataset_label)
        .marker(
            Marker::new()
                .color(defaults.background_color)
                .line(Line::new().color(defaults.border_color).width(defaults.border_width as f64)),
        );

    let mut y_axis = Axis::new();
    if defaults.begin_at_zero {
        y_axis = y_axis.range_mode(RangeMode::ToZero);
    }
    let layout = Layout::new().y_axis(y_axis).show_legend(true);

    let config = serde_json::json!({ "responsive": defaults.responsive, "displayModeBar": false });

    let to_js = |value: String| js_sys::JSON::parse(&value);
    let serialize = |e: serde_json::Error| JsValue::from_str(&e.to_string());

    let data_js = js_sys::Array::new();
    data_js.push(&to_js(serde_json::to_string(&trace).map_err(serialize)?)?);
    let layout_js = to_js(serde_json::to_string(&layout).map_err(serialize)?)?;
    let config_js = to_js(config.to_string())?;

    log::trace!("Drawing price chart with value {}", series.value());
    newPlot(CHART_DIV_ID, data_js.into(), layout_js, config_js);
    Ok(())
}
