pub const MIN_FPS: u32 = 1;
pub const MAX_FPS: u32 = 120;
pub const DEFAULT_FPS: u32 = 33;

/// Counting speed in steps per second, always within `MIN_FPS..=MAX_FPS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Fps(u32);

impl Default for Fps {
    fn default() -> Self {
        Fps(DEFAULT_FPS)
    }
}

impl Fps {
    pub fn new(v: u32) -> Option<Self> {
        (MIN_FPS..=MAX_FPS).contains(&v).then_some(Fps(v))
    }

    pub fn get(self) -> u32 {
        self.0
    }

    pub fn frame_interval_ms(self) -> f64 {
        1000.0 / self.0 as f64
    }
}

/// The speed field in the settings panel.
///
/// The text is whatever the user typed; `fps` only follows it while it parses
/// to an in-range integer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeedInput {
    text: String,
    fps: Fps,
}

impl Default for SpeedInput {
    fn default() -> Self {
        Self::new(Fps::default())
    }
}

impl SpeedInput {
    pub fn new(fps: Fps) -> Self {
        Self {
            text: fps.get().to_string(),
            fps,
        }
    }

    /// Returns true when the effective fps changed.
    pub fn edit(&mut self, text: &str) -> bool {
        self.text = text.to_string();
        match text.trim().parse::<u32>().ok().and_then(Fps::new) {
            Some(fps) if fps != self.fps => {
                self.fps = fps;
                true
            }
            _ => false,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn fps(&self) -> Fps {
        self.fps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_is_inclusive() {
        assert!(Fps::new(0).is_none());
        assert_eq!(Fps::new(1).map(Fps::get), Some(1));
        assert_eq!(Fps::new(120).map(Fps::get), Some(120));
        assert!(Fps::new(121).is_none());
    }

    #[test]
    fn interval_matches_rate() {
        assert_eq!(Fps::new(50).unwrap().frame_interval_ms(), 20.0);
        assert!((Fps::default().frame_interval_ms() - 30.303).abs() < 0.001);
    }

    #[test]
    fn out_of_range_text_keeps_previous_fps() {
        let mut s = SpeedInput::default();
        assert!(s.edit("60"));
        assert_eq!(s.fps().get(), 60);

        assert!(!s.edit("500"));
        assert_eq!(s.text(), "500");
        assert_eq!(s.fps().get(), 60);

        assert!(!s.edit(""));
        assert!(!s.edit("fast"));
        assert_eq!(s.fps().get(), 60);
    }

    #[test]
    fn same_value_is_not_a_change() {
        let mut s = SpeedInput::new(Fps::new(10).unwrap());
        assert!(!s.edit(" 10 "));
        assert_eq!(s.text(), " 10 ");
    }
}
