//! Counter session state for the terminal host.
//!
//! Holds the same fields the browser widget keeps in signals. The async frame
//! loop lives in `main`; everything here is synchronous and unit-tested.

use tally::format::format_count;
use tally::speed::SpeedInput;
use tally::variant::HaltControl;
use tally::{Counter, Fps, Frame, StartError, TargetInput, Variant};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TermError {
    #[error("{0}")]
    Start(#[from] StartError),
    #[error("invalid target: {0}")]
    Target(#[from] tally::target::TargetError),
    #[error("target can't change while counting or paused")]
    TargetLocked,
    #[error("speed can't change while counting")]
    SpeedLocked,
    #[error("'{0}' is not a speed between 1 and 120")]
    BadFps(String),
    #[error("this variant has no {0} button")]
    NoSuchButton(&'static str),
}

pub struct Session {
    pub counter: Counter,
    pub target: TargetInput,
    pub speed: SpeedInput,
    pub variant: Variant,
    last_drawn: Option<u64>,
}

impl Session {
    pub fn new(target: u64, fps: Fps, variant: Variant) -> Self {
        Self {
            counter: Counter::new(),
            target: TargetInput::new(target),
            speed: SpeedInput::new(fps),
            variant,
            last_drawn: None,
        }
    }

    pub fn start(&mut self, now_ms: f64) -> Result<(), TermError> {
        self.counter
            .start(self.target.value(), self.speed.fps(), now_ms)?;
        self.last_drawn = None;
        Ok(())
    }

    pub fn pause(&mut self) -> Result<(), TermError> {
        match self.variant.halt {
            HaltControl::Pause => {
                self.counter.pause();
                Ok(())
            }
            HaltControl::Stop => Err(TermError::NoSuchButton("pause")),
        }
    }

    pub fn stop(&mut self) -> Result<(), TermError> {
        match self.variant.halt {
            HaltControl::Stop => {
                self.counter.stop();
                Ok(())
            }
            HaltControl::Pause => Err(TermError::NoSuchButton("stop")),
        }
    }

    pub fn reset(&mut self) {
        self.counter.reset();
        self.last_drawn = None;
    }

    pub fn set_target(&mut self, text: &str) -> Result<(), TermError> {
        if self.counter.target_locked() {
            return Err(TermError::TargetLocked);
        }
        self.target.accept(text)?;
        Ok(())
    }

    pub fn set_fps(&mut self, text: &str) -> Result<(), TermError> {
        if self.counter.speed_locked() {
            return Err(TermError::SpeedLocked);
        }
        self.speed.edit(text);
        match text.trim().parse::<u32>().ok().and_then(Fps::new) {
            Some(_) => Ok(()),
            None => Err(TermError::BadFps(text.to_string())),
        }
    }

    /// Advance one frame. Returns the text to draw, if the display changed.
    pub fn frame(&mut self, now_ms: f64) -> (Frame, Option<String>) {
        let frame = self.counter.on_frame(now_ms);
        let count = self.counter.count();
        let text = if self.last_drawn != Some(count) || matches!(frame, Frame::Completed(_)) {
            self.last_drawn = Some(count);
            Some(self.display_line())
        } else {
            None
        };
        (frame, text)
    }

    pub fn display_line(&self) -> String {
        let count = format_count(self.counter.count(), self.variant.number_style);
        if self.counter.is_complete() {
            format!("{count}  {}", self.variant.labels.done)
        } else {
            count
        }
    }

    pub fn status_line(&self) -> String {
        let target = self.target.display(self.variant.number_style);
        let mut line = format!(
            "{} | {} {} | count {} | {} fps",
            self.counter.phase().label(),
            self.variant.labels.count_to,
            if target.is_empty() { "-" } else { target.as_str() },
            format_count(self.counter.count(), self.variant.number_style),
            self.speed.fps().get(),
        );
        if let Some(ms) = self.counter.interval_ms() {
            line.push_str(&format!(" (step every {:.1} ms)", ms));
        }
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(variant: Variant) -> Session {
        Session::new(3, Fps::new(10).unwrap(), variant)
    }

    #[test]
    fn runs_to_done_and_redraws_only_on_change() {
        let mut s = session(Variant::playful());
        s.start(0.0).unwrap();
        assert_eq!(s.frame(16.0).1, Some("0".to_string()));
        assert_eq!(s.frame(32.0).1, None);
        assert_eq!(s.frame(100.0), (Frame::Advanced(1), Some("1".to_string())));
        s.frame(200.0);
        let (frame, text) = s.frame(300.0);
        assert_eq!(frame, Frame::Completed(3));
        assert_eq!(text.as_deref(), Some("3  🎉 Done!"));
    }

    #[test]
    fn locks_follow_phase() {
        let mut s = session(Variant::classic());
        s.start(0.0).unwrap();
        assert!(matches!(s.set_target("5"), Err(TermError::TargetLocked)));
        assert!(matches!(s.set_fps("20"), Err(TermError::SpeedLocked)));

        s.pause().unwrap();
        assert!(matches!(s.set_target("5"), Err(TermError::TargetLocked)));
        s.set_fps("20").unwrap();
        assert_eq!(s.speed.fps().get(), 20);

        s.reset();
        s.set_target("5").unwrap();
        assert_eq!(s.target.value(), Some(5));
    }

    #[test]
    fn halt_buttons_match_variant() {
        let mut s = session(Variant::plain());
        s.start(0.0).unwrap();
        assert!(matches!(s.pause(), Err(TermError::NoSuchButton("pause"))));
        s.stop().unwrap();
        assert!(!s.counter.is_running());

        let mut s = session(Variant::playful());
        assert!(matches!(s.stop(), Err(TermError::NoSuchButton("stop"))));
    }

    #[test]
    fn bad_input_is_reported() {
        let mut s = session(Variant::playful());
        assert!(matches!(s.set_target("12x"), Err(TermError::Target(_))));
        assert_eq!(s.target.value(), Some(3));
        assert!(matches!(s.set_fps("0"), Err(TermError::BadFps(_))));
        assert_eq!(s.speed.fps().get(), 10);

        s.set_target("").unwrap();
        assert!(matches!(
            s.start(0.0),
            Err(TermError::Start(StartError::InvalidTarget))
        ));
    }

    #[test]
    fn status_uses_variant_number_style() {
        let mut s = Session::new(12345, Fps::new(33).unwrap(), Variant::plain());
        assert_eq!(s.status_line(), "idle | Target 12345 | count 0 | 33 fps");
        s.variant = Variant::classic();
        assert_eq!(s.status_line(), "idle | Target 12,345 | count 0 | 33 fps");
    }

    #[test]
    fn status_shows_step_interval_only_while_running() {
        let mut s = Session::new(50, Fps::new(8).unwrap(), Variant::plain());
        s.start(0.0).unwrap();
        assert_eq!(
            s.status_line(),
            "running | Target 50 | count 0 | 8 fps (step every 125.0 ms)"
        );
        s.stop().unwrap();
        assert_eq!(s.status_line(), "idle | Target 50 | count 0 | 8 fps");
    }
}
