use crate::config::Config;
use crate::models::graph::{Graph, GraduationKind};
use crate::utils::debounce::watch_width;
use web_sys::HtmlElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct BarGraphProps {
    pub graph: Graph,
    /// Emits the container width after mount and after each resize
    pub on_resize: Callback<u32>,
}

/// Bar chart with its axis graduations. Bars are laid out right to left so
/// the most recent sample sits against the right edge.
#[function_component(BarGraph)]
pub fn bar_graph(props: &BarGraphProps) -> Html {
    let container_ref = use_node_ref();

    {
        let on_resize = props.on_resize.clone();

        use_effect_with(container_ref.clone(), move |container_ref| {
            let listener = container_ref
                .cast::<HtmlElement>()
                .and_then(|container| watch_width(container, on_resize, Config::RESIZE_DEBOUNCE_MS));

            move || drop(listener)
        });
    }

    let graph = &props.graph;
    let style = graph.style();
    let bar_width = format!("width: {:.1}px; margin-left: {}px;", graph.rect_width(), Config::RECT_MARGIN_PX);

    let bars = graph.bars().map(|bar| {
        let class = classes!(
            "bar",
            if bar.is_defined() { style.color_class(bar.tier) } else { "undefined" },
            bar.animated.then_some("animated"),
        );
        let title = match bar.value {
            Some(value) if bar.legend.is_empty() => graph.format(value),
            Some(value) => format!("{}: {}", bar.legend, graph.format(value)),
            None if bar.legend.is_empty() => "No data".to_string(),
            None => format!("{}: no data", bar.legend),
        };
        let height = if bar.is_defined() { bar.height } else { 100.0 };

        html! {
            <div
                key={bar.id}
                {class}
                {title}
                style={format!("{bar_width} height: {height:.2}%;")}
            />
        }
    });

    let graduations = graph.graduations().iter().map(|graduation| {
        let class = match graduation.kind {
            GraduationKind::Relative(_) => "graduation",
            GraduationKind::Absolute(_) => "graduation threshold",
        };
        html! {
            <div {class} style={format!("bottom: {:.2}%;", graduation.bottom)}>
                <span class="graduation-label">{&graduation.label}</span>
            </div>
        }
    });

    html! {
        <div
            ref={container_ref}
            class={classes!("graph", style.kind.css_class(), graph.is_loading().then_some("loading"))}
        >
            <div class="graduations">{ for graduations }</div>
            <div class="bars">{ for bars }</div>
        </div>
    }
}
