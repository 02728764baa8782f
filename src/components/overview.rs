use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct OverviewProps {
    pub label: AttrValue,
    /// Formatted value, `None` while unknown
    pub value: Option<AttrValue>,
    #[prop_or_default]
    pub color_class: Option<&'static str>,
    #[prop_or(false)]
    pub loading: bool,
}

#[function_component(Overview)]
pub fn overview(props: &OverviewProps) -> Html {
    html! {
        <div class="overview">
            <p class="overview-label">{&props.label}</p>
            if props.loading {
                <div class="spinner"></div>
            } else if let Some(value) = &props.value {
                <p class={classes!("overview-value", props.color_class)}>{value}</p>
            } else {
                <p class="overview-value empty">{"-"}</p>
            }
        </div>
    }
}
