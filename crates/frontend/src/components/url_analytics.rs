use super::{LoadingSpinner, Modal};
use crate::auth::use_auth;
use crate::hooks::use_cancellation;
use crate::services::{api_wrapper::with_auth_error_handling, use_services};
use chrono::{Local, NaiveDate};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use zaplink_core::{AnalyticsRange, RequestSequence};
use zaplink_core::analytics::{
    AnalyticsView, HourBucket, Slice, display_date, format_api_date, parse_picker_date,
};

const LOAD_ERROR: &str = "Failed to load analytics data. Please try again later.";

#[derive(Properties, PartialEq)]
pub struct AnalyticsModalProps {
    pub short_id: AttrValue,
    pub on_close: Callback<()>,
}

#[derive(Clone, PartialEq)]
enum AnalyticsState {
    Loading,
    Ready(AnalyticsView),
    Failed(String),
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Click statistics for one link on a chosen day
#[function_component(AnalyticsModal)]
pub fn analytics_modal(props: &AnalyticsModalProps) -> Html {
    let services = use_services();
    let auth = use_auth();
    let cancel = use_cancellation();

    let date = use_state(today);
    let range = use_state(|| None::<AnalyticsRange>);
    let state = use_state(|| AnalyticsState::Loading);
    let date_error = use_state(|| None::<String>);
    let requests = use_memo((), |()| RequestSequence::new());

    {
        let state = state.clone();
        let client = services.client.clone();
        use_effect_with(
            (props.short_id.clone(), *date, *range),
            move |(short_id, date, range)| {
                let short_id = short_id.clone();
                let api_date = format_api_date(*date);
                let range = *range;
                let ticket = requests.start();
                state.set(AnalyticsState::Loading);

                spawn_local(async move {
                    let result = with_auth_error_handling(
                        &auth,
                        client.analytics(&short_id, &api_date, range),
                    )
                    .await;
                    // A newer date or range may have been picked meanwhile
                    if cancel.is_cancelled() || !requests.is_current(ticket) {
                        return;
                    }
                    match result {
                        Ok(analytics) => {
                            state.set(AnalyticsState::Ready(AnalyticsView::from(&analytics)));
                        }
                        Err(e) => {
                            tracing::error!("Failed to load analytics for {short_id}: {e}");
                            state.set(AnalyticsState::Failed(LOAD_ERROR.to_string()));
                        }
                    }
                });
                || ()
            },
        );
    }

    let on_date = {
        let date = date.clone();
        let date_error = date_error.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            match parse_picker_date(&input.value(), today()) {
                Ok(picked) => {
                    date_error.set(None);
                    date.set(picked);
                }
                Err(e) => date_error.set(Some(e.to_string())),
            }
        })
    };

    let range_buttons = AnalyticsRange::ALL.into_iter().map(|option| {
        let active = *range == Some(option);
        let onclick = {
            let range = range.clone();
            Callback::from(move |_: MouseEvent| {
                range.set(if active { None } else { Some(option) });
            })
        };
        html! {
            <button
                type="button"
                class={classes!(
                    "px-3", "py-1", "text-sm", "rounded", "border",
                    if active { "bg-blue-600 text-white border-blue-600" } else { "border-gray-300 hover:bg-gray-100 dark:hover:bg-gray-700" }
                )}
                {onclick}
            >
                { option.label() }
            </button>
        }
    });

    html! {
        <Modal title="URL Analytics" on_close={props.on_close.clone()} wide=true>
            <div class="flex flex-wrap items-center justify-between gap-3 mb-4">
                <div>
                    <p class="text-sm text-gray-500">{"Showing data for"}</p>
                    <p class="font-medium">{ display_date(*date) }</p>
                </div>
                <div class="flex items-center gap-2">
                    <input
                        type="date"
                        class="px-2 py-1 border border-gray-300 dark:border-gray-600 rounded bg-white dark:bg-gray-700"
                        value={format_api_date(*date)}
                        max={format_api_date(today())}
                        onchange={on_date}
                    />
                    { for range_buttons }
                </div>
            </div>

            if let Some(message) = &*date_error {
                <p class="mb-3 text-sm text-red-600">{ message.clone() }</p>
            }

            {
                match &*state {
                    AnalyticsState::Loading => html! { <LoadingSpinner text="Loading analytics..." /> },
                    AnalyticsState::Failed(message) => html! {
                        <p class="text-red-600">{ message.clone() }</p>
                    },
                    AnalyticsState::Ready(view) => analytics_body(view),
                }
            }
        </Modal>
    }
}

fn analytics_body(view: &AnalyticsView) -> Html {
    html! {
        <div class="space-y-6">
            <div class="p-4 rounded bg-blue-50 dark:bg-gray-700 text-center">
                <p class="text-sm text-gray-500 dark:text-gray-300">{"Total Clicks"}</p>
                <p class="text-3xl font-bold text-blue-600">{ view.total_clicks }</p>
            </div>

            if view.is_empty() {
                <p class="text-center text-gray-500">{"No clicks recorded for this day."}</p>
            } else {
                <section>
                    <h4 class="font-medium mb-2">{"Clicks by Hour"}</h4>
                    <div class="flex items-end gap-0.5 h-40">
                        { for view.hourly.iter().map(|bucket| hour_bar(bucket, view.peak_hour_clicks)) }
                    </div>
                </section>
                <div class="grid gap-6 md:grid-cols-3">
                    { breakdown("Devices", &view.devices) }
                    { breakdown("Browsers", &view.browsers) }
                    { breakdown("Countries", &view.countries) }
                </div>
            }
        </div>
    }
}

#[allow(clippy::cast_precision_loss)]
fn hour_bar(bucket: &HourBucket, peak: u64) -> Html {
    let height = bucket.clicks as f64 / peak as f64 * 100.0;
    html! {
        <div class="flex-1 flex flex-col items-center justify-end h-full" title={format!("{}: {} clicks", bucket.label, bucket.clicks)}>
            <div
                class="w-full rounded-t bg-blue-500"
                style={format!("height: {height:.1}%; background-color: rgba(54, 162, 235, 0.7);")}
            />
            <span class="text-[10px] text-gray-500 mt-1">{ bucket.hour }</span>
        </div>
    }
}

fn breakdown(title: &'static str, slices: &[Slice]) -> Html {
    html! {
        <section>
            <h4 class="font-medium mb-2">{ title }</h4>
            if slices.is_empty() {
                <p class="text-sm text-gray-500">{"No data"}</p>
            } else {
                <ul class="space-y-2">
                    { for slices.iter().map(|slice| html! {
                        <li key={slice.label.clone()}>
                            <div class="flex justify-between text-sm">
                                <span>{ slice.label.clone() }</span>
                                <span class="text-gray-500">{ format!("{} ({:.1}%)", slice.count, slice.percent) }</span>
                            </div>
                            <div class="h-2 rounded bg-gray-200 dark:bg-gray-600">
                                <div
                                    class="h-2 rounded"
                                    style={format!("width: {:.1}%; background-color: {};", slice.percent, slice.color)}
                                />
                            </div>
                        </li>
                    }) }
                </ul>
            }
        </section>
    }
}
