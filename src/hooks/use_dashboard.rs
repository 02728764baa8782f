use crate::config::Config;
use crate::hooks::use_hash::read_hash;
use crate::models::dashboard::{Dashboard, DashboardAction, RequestPlan};
use crate::models::error::AppError;
use crate::models::measurement::{Sample, Tariff};
use crate::services::api::SensorApi;
use crate::utils::time::Clock;
use chrono::Utc;
use gloo_timers::future::TimeoutFuture;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

impl Reducible for Dashboard {
    type Action = DashboardAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        if next.apply(action) { Rc::new(next) } else { self }
    }
}

type SharedApi = Rc<Result<SensorApi, AppError>>;

/// Runs the dashboard: clock sync and hash restore on mount, one series load
/// per graph generation, then fixed-delay polling of the live window.
#[hook]
pub fn use_dashboard() -> UseReducerHandle<Dashboard> {
    let dashboard = use_reducer(Dashboard::default);
    let api: SharedApi = use_memo((), |_| SensorApi::new());

    // Initialization
    {
        let api = api.clone();
        let dispatcher = dashboard.dispatcher();

        use_effect_with((), move |_| {
            let client = match api.as_ref() {
                Ok(client) => Some(client),
                Err(e) => {
                    gloo::console::error!(format!("Sensor API unavailable: {e}"));
                    None
                }
            };
            if let Some(client) = client {
                let rate_dispatcher = dispatcher.clone();
                client.subscribe(Rc::new(move |rate: Tariff| {
                    rate_dispatcher.dispatch(DashboardAction::RateChanged(rate));
                }));
            }

            spawn_local(async move {
                let clock = match api.as_ref() {
                    Ok(client) => match client.server_time().await {
                        Ok(seconds) => Clock::from_server_time(seconds, Utc::now()),
                        Err(e) => {
                            gloo::console::warn!(format!("Server time unavailable, using local clock: {e}"));
                            Clock::default()
                        }
                    },
                    Err(_) => Clock::default(),
                };
                dispatcher.dispatch(DashboardAction::Initialize {
                    clock,
                    view: read_hash(),
                });
            });

            || ()
        });
    }

    // Series load, once per generation
    {
        let api = api.clone();
        let dispatcher = dashboard.dispatcher();
        let plan = dashboard.request().cloned();

        use_effect_with(dashboard.generation(), move |_| {
            let aborted = Rc::new(Cell::new(false));
            let aborted_check = aborted.clone();

            if let Some(plan) = plan {
                spawn_local(async move {
                    if let Ok(client) = api.as_ref() {
                        load_series(client, &plan, &dispatcher, &aborted_check).await;
                    } else {
                        dispatcher.dispatch(DashboardAction::LoadFailed {
                            generation: plan.generation,
                        });
                    }
                });
            }

            move || {
                aborted.set(true);
            }
        });
    }

    // Live polling
    {
        let trigger = use_state(|| 0u32);
        let api = api.clone();
        let dispatcher = dashboard.dispatcher();
        let poll = dashboard.poll_plan(dashboard.clock().now());

        use_effect_with(*trigger, move |_| {
            let aborted = Rc::new(Cell::new(false));
            let aborted_check = aborted.clone();

            spawn_local(async move {
                if let (Some(poll), Ok(client)) = (poll, api.as_ref()) {
                    // A failed poll dispatches nothing so the next one covers its window
                    match poll_series(client, &poll).await {
                        Ok(samples) if !aborted_check.get() => {
                            dispatcher.dispatch(DashboardAction::Appended {
                                generation: poll.generation,
                                samples,
                                until: poll.end,
                            });
                        }
                        Err(e) => gloo::console::warn!(format!("Live poll failed: {e}")),
                        _ => {}
                    }
                }

                // Fixed delay after each poll
                if Config::ENABLE_AUTO_REFRESH && !aborted_check.get() {
                    TimeoutFuture::new(Config::POLLING_INTERVAL_MS).await;
                    if !aborted_check.get() {
                        trigger.set(*trigger + 1);
                    }
                }
            });

            move || {
                aborted.set(true);
            }
        });
    }

    dashboard
}

async fn poll_series(client: &SensorApi, poll: &RequestPlan) -> Result<Vec<Sample>, AppError> {
    let sensor_id = client.sensor_id().await?;
    client.try_fetch_samples(&poll.path(sensor_id)).await
}

async fn load_series(
    client: &SensorApi,
    plan: &RequestPlan,
    dispatcher: &UseReducerDispatcher<Dashboard>,
    aborted: &Cell<bool>,
) {
    let generation = plan.generation;

    let sensor_id = match client.sensor_id().await {
        Ok(id) => id,
        Err(e) => {
            gloo::console::error!(format!("Cannot load series: {e}"));
            dispatcher.dispatch(DashboardAction::LoadFailed { generation });
            return;
        }
    };

    if plan.wants_threshold() {
        match client.provider_info().await {
            Ok(info) if !aborted.get() => dispatcher.dispatch(DashboardAction::Threshold {
                generation,
                value: info.threshold,
            }),
            Err(e) => gloo::console::warn!(format!("Provider info unavailable: {e}")),
            _ => {}
        }
    }

    let samples = client.fetch_samples(&plan.path(sensor_id)).await;

    // Rate is known once the series envelope has been read
    let base_price = if plan.wants_base_price() {
        let tariff = client.last_rate().unwrap_or(Tariff::Day);
        match client.convert(tariff).await {
            Ok(conversion) => conversion.constant,
            Err(e) => {
                gloo::console::warn!(format!("Base price unavailable: {e}"));
                0.0
            }
        }
    } else {
        0.0
    };

    if aborted.get() {
        gloo::console::log!(format!("Dropping stale series of generation {generation}"));
        return;
    }
    dispatcher.dispatch(DashboardAction::Loaded {
        generation,
        samples,
        base_price,
    });
}
