use crate::models::measurement::Tariff;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct RateDisplayProps {
    pub tariff: Option<Tariff>,
}

/// Header badge of the current tariff period.
#[function_component(RateDisplay)]
pub fn rate_display(props: &RateDisplayProps) -> Html {
    let tariff = props.tariff.unwrap_or(Tariff::Unknown);
    let icon = match tariff {
        Tariff::Day => "☀️",
        Tariff::Night => "🌙",
        Tariff::Unknown => return html! {},
    };

    html! {
        <div class={classes!("rate-display", tariff.css_class())} title={tariff.label()}>
            <span class="rate-icon">{icon}</span>
            <span class="rate-label">{tariff.label()}</span>
        </div>
    }
}
