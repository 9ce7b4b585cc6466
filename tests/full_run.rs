//! Drive a whole count the way a front-end does: button presses plus a steady
//! stream of display-rate frame callbacks.

use tally::format::format_count;
use tally::speed::SpeedInput;
use tally::{Counter, Frame, NumberStyle, Phase, TargetInput};

const FRAME_MS: f64 = 1000.0 / 60.0;

struct Harness {
    counter: Counter,
    target: TargetInput,
    speed: SpeedInput,
    now: f64,
    rendered: Vec<u64>,
}

impl Harness {
    fn new() -> Self {
        Self {
            counter: Counter::new(),
            target: TargetInput::default(),
            speed: SpeedInput::default(),
            now: 0.0,
            rendered: Vec::new(),
        }
    }

    fn press_start(&mut self) {
        self.counter
            .start(self.target.value(), self.speed.fps(), self.now)
            .unwrap();
    }

    /// Run up to `frames` callbacks; stop early once the loop would not reschedule.
    fn frames(&mut self, frames: usize) -> usize {
        for i in 0..frames {
            self.now += FRAME_MS;
            match self.counter.on_frame(self.now) {
                Frame::Advanced(n) | Frame::Completed(n) if !self.rendered.ends_with(&[n]) => {
                    self.rendered.push(n);
                }
                _ => {}
            }
            if !self.counter.is_running() {
                return i + 1;
            }
        }
        frames
    }
}

#[test]
fn counts_every_integer_exactly_once() {
    let mut h = Harness::new();
    h.target.accept("1,000").unwrap();
    h.speed.edit("120");
    h.press_start();
    h.frames(10_000);

    assert_eq!(h.counter.phase(), Phase::Complete);
    assert_eq!(h.rendered, (1..=1000).collect::<Vec<u64>>());
    assert_eq!(format_count(h.counter.count(), NumberStyle::Grouped), "1,000");
}

#[test]
fn pause_resume_reset_cycle() {
    let mut h = Harness::new();
    h.target.accept("50").unwrap();
    h.speed.edit("30");
    h.press_start();
    h.frames(20);
    let at_pause = h.counter.count();
    assert!(at_pause > 0 && at_pause < 50);

    h.counter.pause();
    assert!(h.counter.target_locked());
    h.now += 60_000.0;
    assert_eq!(h.counter.on_frame(h.now), Frame::Idle);

    // Speed may change while paused; the resumed run uses it.
    h.speed.edit("120");
    h.press_start();
    assert_eq!(h.counter.count(), at_pause);
    h.frames(1000);
    assert_eq!(h.counter.count(), 50);
    assert!(h.counter.is_complete());

    h.counter.reset();
    assert_eq!(h.counter.count(), 0);
    assert!(!h.counter.can_reset());
}

#[test]
fn slow_rate_is_throttled_below_display_rate() {
    let mut h = Harness::new();
    h.target.accept("10").unwrap();
    h.speed.edit("5");
    h.press_start();
    let used = h.frames(10_000);
    // 10 steps at 5 fps is about 2 seconds of 60 Hz frames.
    assert!((115..=125).contains(&used), "frames used = {used}");
}
