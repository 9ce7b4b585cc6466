use leptos::prelude::*;
use tally::format::format_count;
use tally::speed::{SpeedInput, MAX_FPS, MIN_FPS};
use tally::variant::HaltControl;
use tally::{Counter, Fps, Frame, TargetInput, Variant};

use super::frame_loop::FrameLoop;
use crate::ui_model::{controls, display_class, speed_input_type, RunButton};

fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}

#[component]
pub(super) fn CounterWidget(variant: Variant, initial_target: u64, initial_fps: Fps) -> impl IntoView {
    let labels = variant.labels;
    let number_style = variant.number_style;
    let halt = variant.halt;
    let speed_type = speed_input_type(variant.speed);
    let variant = StoredValue::new(variant);

    let counter = RwSignal::new(Counter::new());
    let target = RwSignal::new(TargetInput::new(initial_target));
    let speed = RwSignal::new(SpeedInput::new(initial_fps));
    let settings_open = RwSignal::new(false);
    let status = RwSignal::new(String::new());
    let frames = StoredValue::new_local(FrameLoop::new());

    let ui = Memo::new(move |_| {
        counter.with(|c| target.with(|t| variant.with_value(|v| controls(c, t, v))))
    });

    let do_start = move || {
        let now = now_ms();
        let goal = target.with_untracked(TargetInput::value);
        let fps = speed.with_untracked(SpeedInput::fps);
        let mut res = Ok(());
        counter.update(|c| res = c.start(goal, fps, now));
        if let Err(e) = res {
            status.set(e.to_string());
            return;
        }
        status.set(String::new());

        let started = frames.with_value(|f| {
            f.start(move |ts| {
                // Waiting frames leave the signal untouched so nothing re-renders.
                counter
                    .try_maybe_update(|c| {
                        let frame = c.on_frame(ts);
                        (!matches!(frame, Frame::Waiting), frame)
                    })
                    .is_some_and(Frame::wants_next_frame)
            })
        });
        if let Err(e) = started {
            web_sys::console::warn_2(&"tally: frame loop failed to start".into(), &e);
            counter.update(Counter::pause);
            status.set("animation unavailable".to_string());
        }
    };

    let do_halt = move || {
        frames.with_value(FrameLoop::cancel);
        match halt {
            HaltControl::Pause => counter.update(Counter::pause),
            HaltControl::Stop => counter.update(Counter::stop),
        }
    };

    let do_reset = move || {
        frames.with_value(FrameLoop::cancel);
        counter.update(Counter::reset);
        status.set(String::new());
    };

    on_cleanup(move || {
        frames.try_with_value(FrameLoop::cancel);
    });

    view! {
        <section class="counter-widget">
            <h1 class="counter-title">{labels.title}</h1>

            <div class="counter-stage">
                <div class=move || display_class(ui.get().highlighted)>
                    {move || counter.with(|c| format_count(c.count(), number_style))}
                </div>
                <Show when=move || ui.get().show_done>
                    <div class="counter-done">{labels.done}</div>
                </Show>
            </div>

            <div class="counter-controls">
                <div class="target-field">
                    <span class="muted">{labels.count_to}</span>
                    <div class="target-box">
                        <span class="target-sizer">
                            {move || {
                                let shown = target.with(|t| t.display(number_style));
                                if shown.is_empty() { "000".to_string() } else { shown }
                            }}
                        </span>
                        <input
                            type="text"
                            inputmode="numeric"
                            placeholder="100"
                            class="target-input"
                            prop:value=move || target.with(|t| t.display(number_style))
                            disabled=move || !ui.get().target_enabled
                            on:input=move |ev| {
                                let v = event_target_value(&ev);
                                // Always notify so a rejected keystroke is rewritten away.
                                target.update(|t| {
                                    let _ = t.accept(&v);
                                });
                            }
                        />
                    </div>
                </div>

                <div class="button-row">
                    <button
                        class=move || ui.get().run.class()
                        disabled=move || matches!(ui.get().run, RunButton::Start { enabled: false, .. })
                        on:click=move |_| match ui.get_untracked().run {
                            RunButton::Start { .. } => do_start(),
                            RunButton::Halt { .. } => do_halt(),
                        }
                    >
                        <span class="btn-icon">{move || ui.get().run.icon()}</span>
                        <span class="btn-label">{move || ui.get().run.label()}</span>
                    </button>

                    <button
                        class="run-btn reset"
                        disabled=move || !ui.get().reset_enabled
                        on:click=move |_| do_reset()
                    >
                        <span class="btn-icon">"↺"</span>
                        <span class="btn-label">{labels.reset}</span>
                    </button>
                </div>

                <button
                    class="btn ghost settings-toggle"
                    on:click=move |_| settings_open.update(|open| *open = !*open)
                >
                    "⚙ Settings "
                    <span class=move || {
                        if settings_open.get() { "chevron open" } else { "chevron" }
                    }>"▾"</span>
                </button>

                <Show when=move || settings_open.get()>
                    <div class="speed-field">
                        <label class="muted" for="tally-speed">"Speed:"</label>
                        <input
                            id="tally-speed"
                            type=speed_type
                            min=MIN_FPS.to_string()
                            max=MAX_FPS.to_string()
                            class="speed-input"
                            prop:value=move || speed.with(|s| s.text().to_string())
                            disabled=move || !ui.get().speed_enabled
                            on:input=move |ev| {
                                let v = event_target_value(&ev);
                                speed.update(|s| {
                                    s.edit(&v);
                                });
                            }
                        />
                        <span class="muted">{move || format!("{} fps", speed.with(|s| s.fps().get()))}</span>
                    </div>
                </Show>

                <Show when=move || status.with(|s| !s.is_empty())>
                    <p class="status">{move || status.get()}</p>
                </Show>
            </div>
        </section>
    }
}
