//! Presentation variants of the counter widget.
//!
//! The variants share one state machine and differ only in which halt button
//! they show, how speed is edited, how numbers render, and button wording.

use crate::format::NumberStyle;

/// What the secondary run button does while counting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum HaltControl {
    /// Keeps the count; the run button resumes.
    Pause,
    /// Drops the resume point; the run button starts over.
    Stop,
}

/// How the settings panel edits fps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SpeedControl {
    NumberInput,
    Slider,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Labels {
    pub title: &'static str,
    pub count_to: &'static str,
    pub start: &'static str,
    pub resume: &'static str,
    pub halt: &'static str,
    pub reset: &'static str,
    pub done: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variant {
    pub name: &'static str,
    pub halt: HaltControl,
    pub speed: SpeedControl,
    pub number_style: NumberStyle,
    pub labels: Labels,
}

impl Default for Variant {
    fn default() -> Self {
        Self::playful()
    }
}

impl Variant {
    /// Big round kid-friendly buttons.
    pub fn playful() -> Self {
        Self {
            name: "playful",
            halt: HaltControl::Pause,
            speed: SpeedControl::NumberInput,
            number_style: NumberStyle::Grouped,
            labels: Labels {
                title: "🔢 Let's Count!",
                count_to: "Count to:",
                start: "Go!",
                resume: "Go!",
                halt: "Wait",
                reset: "Again",
                done: "🎉 Done!",
            },
        }
    }

    pub fn classic() -> Self {
        Self {
            name: "classic",
            halt: HaltControl::Pause,
            speed: SpeedControl::Slider,
            number_style: NumberStyle::Grouped,
            labels: Labels {
                title: "Counter",
                count_to: "Target",
                start: "Start",
                resume: "Resume",
                halt: "Pause",
                reset: "Reset",
                done: "Done!",
            },
        }
    }

    pub fn plain() -> Self {
        Self {
            name: "plain",
            halt: HaltControl::Stop,
            speed: SpeedControl::NumberInput,
            number_style: NumberStyle::Plain,
            labels: Labels {
                title: "Counter",
                count_to: "Target",
                start: "Start",
                resume: "Start",
                halt: "Stop",
                reset: "Reset",
                done: "Done",
            },
        }
    }

    pub fn all() -> Vec<Variant> {
        vec![Self::playful(), Self::classic(), Self::plain()]
    }

    pub fn by_name(name: &str) -> Option<Variant> {
        let name = name.trim();
        Self::all()
            .into_iter()
            .find(|v| v.name.eq_ignore_ascii_case(name))
    }

    /// Label for the run button when not counting.
    pub fn start_label(&self, paused: bool) -> &'static str {
        if paused {
            self.labels.resume
        } else {
            self.labels.start
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variant_inventory_is_stable() {
        let all = Variant::all();
        assert_eq!(all.len(), 3);

        let mut names: Vec<&'static str> = all.iter().map(|v| v.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 3);

        for v in &all {
            assert_eq!(Variant::by_name(v.name).as_ref(), Some(v));
            assert!(!v.labels.start.trim().is_empty());
            assert!(!v.labels.halt.trim().is_empty());
            assert!(!v.labels.reset.trim().is_empty());
        }
    }

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(Variant::by_name(" Classic ").map(|v| v.name), Some("classic"));
        assert!(Variant::by_name("fancy").is_none());
    }

    #[test]
    fn stop_variant_uses_plain_digits() {
        let v = Variant::plain();
        assert_eq!(v.halt, HaltControl::Stop);
        assert_eq!(v.number_style, NumberStyle::Plain);
        assert_eq!(Variant::classic().start_label(true), "Resume");
    }
}
