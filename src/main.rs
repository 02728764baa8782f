use yew::prelude::*;

use conso_dashboard::components::{BarGraph, Menu, Overview, RateDisplay};
use conso_dashboard::hooks::{use_dashboard, use_hash_sync};
use conso_dashboard::models::DashboardAction;

#[function_component(App)]
fn app() -> Html {
    let dashboard = use_dashboard();
    use_hash_sync(&dashboard);

    let on_action = {
        let dispatcher = dashboard.dispatcher();
        Callback::from(move |action: DashboardAction| dispatcher.dispatch(action))
    };
    let on_resize = {
        let dispatcher = dashboard.dispatcher();
        Callback::from(move |width: u32| dispatcher.dispatch(DashboardAction::Resized(width)))
    };

    let graph = dashboard.graph();

    html! {
        <div class="app-container">
            <header class="app-header">
                <h1>{"Consumption"}</h1>
                <RateDisplay tariff={dashboard.tariff()} />
            </header>

            <main class="app-main">
                <Menu
                    view={dashboard.view()}
                    auto_update={dashboard.menu().is_updated()}
                    {on_action}
                />

                <section class="overview-section">
                    <Overview
                        label={graph.overview_label().to_string()}
                        value={graph.overview_text().map(AttrValue::from)}
                        color_class={graph.overview_class()}
                        loading={graph.is_loading()}
                    />
                </section>

                <section class="graph-section">
                    <BarGraph graph={graph.clone()} {on_resize} />
                </section>
            </main>

            <style>
                {include_str!("style.css")}
            </style>
        </div>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
