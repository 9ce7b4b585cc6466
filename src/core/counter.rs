//! The counting animation as a plain state machine.
//!
//! A front-end owns one [`Counter`], forwards button presses to it, and calls
//! [`Counter::on_frame`] from whatever frame callback it has. The returned
//! [`Frame`] tells the driver whether to schedule another callback.

use crate::pacer::FramePacer;
use crate::speed::Fps;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Running,
    Paused,
    Complete,
}

impl Phase {
    pub fn label(self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::Running => "running",
            Phase::Paused => "paused",
            Phase::Complete => "complete",
        }
    }
}

/// Result of one frame callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frame {
    /// Not running; do not schedule another frame.
    Idle,
    /// Running but no step was due yet.
    Waiting,
    /// The count moved to this value.
    Advanced(u64),
    /// The count reached the target. The loop is over.
    Completed(u64),
}

impl Frame {
    pub fn wants_next_frame(self) -> bool {
        matches!(self, Frame::Waiting | Frame::Advanced(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartError {
    /// Target missing or zero.
    InvalidTarget,
    AlreadyRunning,
}

impl std::fmt::Display for StartError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StartError::InvalidTarget => write!(f, "enter a number above 0 to count to"),
            StartError::AlreadyRunning => write!(f, "already counting"),
        }
    }
}

impl std::error::Error for StartError {}

#[derive(Debug, Clone, Default)]
pub struct Counter {
    count: u64,
    target: u64,
    phase: Phase,
    pacer: Option<FramePacer>,
}

impl Counter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start counting toward `target`, or resume a paused count.
    ///
    /// A paused count below the target resumes where it stopped. Anything else
    /// (idle, complete, or a count already at/over the target) starts from 0.
    pub fn start(&mut self, target: Option<u64>, fps: Fps, now_ms: f64) -> Result<(), StartError> {
        let target = match target {
            Some(t) if t > 0 => t,
            _ => return Err(StartError::InvalidTarget),
        };
        if self.phase == Phase::Running {
            return Err(StartError::AlreadyRunning);
        }

        let resume = self.phase == Phase::Paused && self.count < target;
        if !resume {
            self.count = 0;
        }
        self.target = target;
        self.phase = Phase::Running;
        self.pacer = Some(FramePacer::new(fps, now_ms));
        Ok(())
    }

    pub fn on_frame(&mut self, now_ms: f64) -> Frame {
        if self.phase != Phase::Running {
            return Frame::Idle;
        }
        let Some(pacer) = self.pacer.as_mut() else {
            return Frame::Idle;
        };
        if !pacer.poll(now_ms) {
            return Frame::Waiting;
        }

        self.count += 1;
        if self.count >= self.target {
            self.count = self.target;
            self.phase = Phase::Complete;
            self.pacer = None;
            Frame::Completed(self.count)
        } else {
            Frame::Advanced(self.count)
        }
    }

    /// Halt and keep the count for a later resume.
    pub fn pause(&mut self) {
        if self.phase == Phase::Running {
            self.phase = Phase::Paused;
            self.pacer = None;
        }
    }

    /// Halt without a resume point. The count stays on screen until the next
    /// start, which begins from 0.
    pub fn stop(&mut self) {
        if matches!(self.phase, Phase::Running | Phase::Paused) {
            self.phase = Phase::Idle;
            self.pacer = None;
        }
    }

    pub fn reset(&mut self) {
        self.count = 0;
        self.phase = Phase::Idle;
        self.pacer = None;
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    /// Target of the current or last run (0 before the first start).
    pub fn target(&self) -> u64 {
        self.target
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    pub fn is_paused(&self) -> bool {
        self.phase == Phase::Paused
    }

    pub fn is_complete(&self) -> bool {
        self.phase == Phase::Complete
    }

    /// Display emphasis: on while counting and once done.
    pub fn highlighted(&self) -> bool {
        matches!(self.phase, Phase::Running | Phase::Complete)
    }

    pub fn can_reset(&self) -> bool {
        self.count != 0 || self.is_paused()
    }

    /// The target field is frozen for the whole run, pauses included.
    pub fn target_locked(&self) -> bool {
        matches!(self.phase, Phase::Running | Phase::Paused)
    }

    pub fn speed_locked(&self) -> bool {
        self.is_running()
    }

    /// Step interval of the current run; `None` unless running.
    pub fn interval_ms(&self) -> Option<f64> {
        self.pacer.as_ref().map(FramePacer::interval_ms)
    }
}
