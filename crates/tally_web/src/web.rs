use leptos::prelude::*;
use tally::{Fps, Variant};

use crate::ui_model::variant_from_query;

mod frame_loop;
mod widget;

use widget::CounterWidget;

pub fn start() {
    mount_to_body(|| view! { <App /> });
}

fn initial_variant() -> Variant {
    web_sys::window()
        .and_then(|w| w.location().search().ok())
        .and_then(|s| variant_from_query(&s))
        .unwrap_or_default()
}

#[component]
fn App() -> impl IntoView {
    let (variant, set_variant) = signal(initial_variant());

    view! {
        <main class="app">
            <nav class="variant-picker">
                <label>
                    <span>"Style"</span>
                    <select
                        prop:value=move || variant.get().name
                        on:change=move |ev| {
                            let v = event_target_value(&ev);
                            if let Some(next) = Variant::by_name(&v) {
                                set_variant.set(next);
                            }
                        }
                    >
                        {Variant::all()
                            .into_iter()
                            .map(|v| view! { <option value=v.name>{v.name}</option> })
                            .collect_view()}
                    </select>
                </label>
            </nav>

            // Switching variant remounts the widget; its cleanup cancels any pending frame.
            {move || {
                let v = variant.get();
                view! {
                    <CounterWidget
                        variant=v
                        initial_target=100
                        initial_fps=Fps::default()
                    />
                }
            }}
        </main>
    }
}
