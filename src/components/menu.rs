use crate::models::dashboard::DashboardAction;
use crate::models::view_state::{Mode, ViewState};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct MenuProps {
    pub view: ViewState,
    pub auto_update: bool,
    pub on_action: Callback<DashboardAction>,
}

/// Mode tabs, unit switch, period navigation and the auto-update toggle.
#[function_component(Menu)]
pub fn menu(props: &MenuProps) -> Html {
    let send = |action: DashboardAction| {
        let on_action = props.on_action.clone();
        Callback::from(move |_: MouseEvent| on_action.emit(action.clone()))
    };

    let modes = Mode::all().iter().map(|mode| {
        let class = classes!("menu-mode", (props.view.mode == *mode).then_some("active"));
        html! {
            <li key={mode.code()}>
                <button {class} onclick={send(DashboardAction::SetMode(*mode))}>
                    {mode.label()}
                </button>
            </li>
        }
    });

    let unit = props.view.unit;
    let (update_label, update_class) = if props.auto_update {
        ("Pause updates", "menu-update on")
    } else {
        ("Resume updates", "menu-update off")
    };

    html! {
        <nav class="menu">
            <ul class="menu-modes">{ for modes }</ul>
            <div class="menu-controls">
                <button
                    class="menu-nav"
                    aria-label="Previous period"
                    onclick={send(DashboardAction::Previous)}
                >
                    {"‹"}
                </button>
                <button
                    class="menu-nav"
                    aria-label="Next period"
                    disabled={props.view.date.is_none()}
                    onclick={send(DashboardAction::Next)}
                >
                    {"›"}
                </button>
                <button
                    class={classes!("menu-unit", unit.hash_code())}
                    title={format!("Show {}", unit.toggled().label().to_lowercase())}
                    onclick={send(DashboardAction::ToggleUnit)}
                >
                    {unit.label()}
                </button>
                if props.view.is_live() {
                    <button class={update_class} onclick={send(DashboardAction::ToggleAutoUpdate)}>
                        {update_label}
                    </button>
                }
            </div>
        </nav>
    }
}
