// Sprite animation playback

use crate::engine::renderer::SpriteFrame;

/// A named sequence of sprite-sheet frames played at a fixed rate.
///
/// The animation's own clock is the authority for action states: an attack
/// or dash ends when [`SpriteAnim::is_done`] reports a full play-through, not
/// after a separate timer.
#[derive(Debug, Clone)]
pub struct SpriteAnim {
    /// Sprite sheet the frames index into
    sheet: &'static str,
    /// Frame indices in playback order
    frames: Vec<usize>,
    /// Frames per second
    frame_rate: f32,
    /// Time since the last reset
    elapsed: f32,
    /// Whether playback wraps after the last frame (otherwise it holds it)
    looping: bool,
}

impl SpriteAnim {
    pub fn new(sheet: &'static str, frames: Vec<usize>, frame_rate: f32, looping: bool) -> Self {
        Self {
            sheet,
            frames,
            frame_rate,
            elapsed: 0.0,
            looping,
        }
    }

    /// Looping animation over the first `frame_count` frames of a sheet
    pub fn looping(sheet: &'static str, frame_count: usize, frame_rate: f32) -> Self {
        Self::new(sheet, (0..frame_count).collect(), frame_rate, true)
    }

    /// Animation that plays once and holds its last frame
    pub fn one_shot(sheet: &'static str, frame_count: usize, frame_rate: f32) -> Self {
        Self::new(sheet, (0..frame_count).collect(), frame_rate, false)
    }

    /// Animation with no frames (for states that draw nothing)
    pub fn empty() -> Self {
        Self::new("", Vec::new(), 1.0, false)
    }

    /// Advance playback
    pub fn update(&mut self, dt: f32) {
        self.elapsed += dt;
    }

    /// Restart from the first frame
    pub fn reset(&mut self) {
        self.elapsed = 0.0;
    }

    /// True once the full frame sequence has played through
    pub fn is_done(&self) -> bool {
        self.elapsed >= self.duration()
    }

    /// Time for one play-through
    pub fn duration(&self) -> f32 {
        self.frames.len() as f32 / self.frame_rate
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Position in the frame sequence for the current time
    pub fn frame_position(&self) -> usize {
        let count = self.frames.len();
        if count == 0 {
            return 0;
        }

        let played = (self.elapsed * self.frame_rate) as usize;
        if self.looping {
            played % count
        } else {
            played.min(count - 1)
        }
    }

    /// The sprite frame to draw, if the animation has any frames
    pub fn current_frame(&self) -> Option<SpriteFrame> {
        self.frames
            .get(self.frame_position())
            .map(|&index| SpriteFrame {
                sheet: self.sheet,
                index,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration() {
        let anim = SpriteAnim::looping("walk.png", 6, 12.0);
        assert_eq!(anim.duration(), 0.5);
        assert_eq!(anim.frame_count(), 6);
    }

    #[test]
    fn test_update_advances_frames() {
        let mut anim = SpriteAnim::looping("test.png", 4, 8.0); // 0.125s per frame
        assert_eq!(anim.frame_position(), 0);

        anim.update(0.125);
        assert_eq!(anim.frame_position(), 1);

        anim.update(0.25);
        assert_eq!(anim.frame_position(), 3);
    }

    #[test]
    fn test_looping_wraps_and_reports_done() {
        let mut anim = SpriteAnim::looping("test.png", 4, 8.0);
        anim.update(0.375);
        assert!(!anim.is_done());

        anim.update(0.125);
        assert!(anim.is_done());
        assert_eq!(anim.frame_position(), 0);
    }

    #[test]
    fn test_one_shot_holds_last_frame() {
        let mut anim = SpriteAnim::one_shot("test.png", 3, 10.0);
        anim.update(1.0);
        assert!(anim.is_done());
        assert_eq!(anim.frame_position(), 2);
    }

    #[test]
    fn test_reset_restarts() {
        let mut anim = SpriteAnim::one_shot("test.png", 3, 10.0);
        anim.update(1.0);
        anim.reset();
        assert_eq!(anim.elapsed(), 0.0);
        assert_eq!(anim.frame_position(), 0);
        assert!(!anim.is_done());
    }

    #[test]
    fn test_custom_frame_sequence() {
        let mut anim = SpriteAnim::new("sheet.png", vec![4, 7, 9], 4.0, true);
        assert_eq!(
            anim.current_frame(),
            Some(SpriteFrame {
                sheet: "sheet.png",
                index: 4
            })
        );
        anim.update(0.5);
        assert_eq!(anim.current_frame().map(|f| f.index), Some(9));
    }

    #[test]
    fn test_empty_animation() {
        let anim = SpriteAnim::empty();
        assert!(anim.is_done());
        assert_eq!(anim.current_frame(), None);
    }
}
