//! Control rules for the counter widget that should be available on both wasm
//! and native.
//!
//! The Leptos view reads everything it enables, disables, or labels from
//! [`Controls`], so these rules are unit-tested on the host.

use tally::variant::{HaltControl, SpeedControl};
use tally::{Counter, TargetInput, Variant};

/// The big run button: either starts/resumes or halts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunButton {
    Start { label: &'static str, enabled: bool },
    Halt { label: &'static str, halt: HaltControl },
}

impl RunButton {
    pub fn label(self) -> &'static str {
        match self {
            RunButton::Start { label, .. } | RunButton::Halt { label, .. } => label,
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            RunButton::Start { .. } => "run-btn start",
            RunButton::Halt {
                halt: HaltControl::Pause,
                ..
            } => "run-btn pause",
            RunButton::Halt {
                halt: HaltControl::Stop,
                ..
            } => "run-btn stop",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            RunButton::Start { .. } => "▶",
            RunButton::Halt {
                halt: HaltControl::Pause,
                ..
            } => "⏸",
            RunButton::Halt {
                halt: HaltControl::Stop,
                ..
            } => "⏹",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Controls {
    pub run: RunButton,
    pub reset_enabled: bool,
    pub target_enabled: bool,
    pub speed_enabled: bool,
    pub show_done: bool,
    pub highlighted: bool,
}

pub fn controls(counter: &Counter, target: &TargetInput, variant: &Variant) -> Controls {
    let run = if counter.is_running() {
        RunButton::Halt {
            label: variant.labels.halt,
            halt: variant.halt,
        }
    } else {
        RunButton::Start {
            label: variant.start_label(counter.is_paused()),
            enabled: target.startable(),
        }
    };

    Controls {
        run,
        reset_enabled: counter.can_reset(),
        target_enabled: !counter.target_locked(),
        speed_enabled: !counter.speed_locked(),
        show_done: counter.is_complete(),
        highlighted: counter.highlighted(),
    }
}

pub fn display_class(highlighted: bool) -> &'static str {
    if highlighted {
        "counter-display active"
    } else {
        "counter-display"
    }
}

pub fn speed_input_type(speed: SpeedControl) -> &'static str {
    match speed {
        SpeedControl::NumberInput => "number",
        SpeedControl::Slider => "range",
    }
}

/// Read `variant=` from a location search string (`?variant=plain&x=1`).
pub fn variant_from_query(search: &str) -> Option<Variant> {
    search
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(k, _)| *k == "variant")
        .and_then(|(_, v)| Variant::by_name(v))
}
