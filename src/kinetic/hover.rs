//! Hover pop animation: keyframes, timing, scheduling, and overlap policy.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A cubic-bezier easing curve, `cubic-bezier(x1, y1, x2, y2)` in CSS.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CubicBezier {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl CubicBezier {
    /// Sharp start, gentle settle.
    pub const POP: CubicBezier = CubicBezier {
        x1: 0.2,
        y1: 0.9,
        x2: 0.2,
        y2: 1.0,
    };

    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Control-point x values must stay in [0, 1] for CSS to accept the curve.
    pub fn is_valid(&self) -> bool {
        (0.0..=1.0).contains(&self.x1) && (0.0..=1.0).contains(&self.x2)
    }

    pub fn to_css(&self) -> String {
        format!(
            "cubic-bezier({},{},{},{})",
            self.x1, self.y1, self.x2, self.y2
        )
    }
}

impl Default for CubicBezier {
    fn default() -> Self {
        Self::POP
    }
}

impl fmt::Display for CubicBezier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

/// One transform keyframe.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Keyframe {
    pub translate_z_px: f64,
    pub scale: f64,
}

impl Keyframe {
    pub const REST: Keyframe = Keyframe {
        translate_z_px: 0.0,
        scale: 1.0,
    };

    pub fn to_css(&self) -> String {
        format!(
            "translateZ({}px) scale({})",
            fmt_num(self.translate_z_px),
            fmt_num(self.scale)
        )
    }
}

/// What a trigger does to a unit whose previous animation is still running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OverlapPolicy {
    /// Start another animation on top of the running one.
    Overlap,
    /// Cancel the running animation and replay from the new trigger.
    #[default]
    Restart,
    /// Drop triggers while any unit is still animating.
    IgnoreWhileActive,
}

impl OverlapPolicy {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "overlap" => Some(Self::Overlap),
            "restart" => Some(Self::Restart),
            "ignore" | "ignore-while-active" => Some(Self::IgnoreWhileActive),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Overlap => "overlap",
            Self::Restart => "restart",
            Self::IgnoreWhileActive => "ignore",
        }
    }
}

/// The one-shot pop played on every unit when the pointer enters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HoverAnimation {
    pub duration_ms: u32,
    /// Start offset increment per unit index.
    pub stagger_ms: u32,
    /// Peak depth of the pop.
    pub lift_px: f64,
    /// Peak scale of the pop.
    pub scale: f64,
    pub easing: CubicBezier,
}

impl Default for HoverAnimation {
    fn default() -> Self {
        Self {
            duration_ms: 480,
            stagger_ms: 18,
            lift_px: 24.0,
            scale: 1.08,
            easing: CubicBezier::POP,
        }
    }
}

impl HoverAnimation {
    /// Rest, peak, rest.
    pub fn keyframes(&self) -> [Keyframe; 3] {
        [
            Keyframe::REST,
            Keyframe {
                translate_z_px: self.lift_px,
                scale: self.scale,
            },
            Keyframe::REST,
        ]
    }

    pub fn easing(&self) -> CubicBezier {
        self.easing
    }

    pub fn offset_ms(&self, index: usize) -> u64 {
        index as u64 * u64::from(self.stagger_ms)
    }

    /// Wall-clock length of one trigger over `unit_count` units.
    pub fn total_ms(&self, unit_count: usize) -> u64 {
        match unit_count {
            0 => 0,
            k => self.offset_ms(k - 1) + u64::from(self.duration_ms),
        }
    }

    /// One animation per unit, offsets `0, stagger, 2·stagger, …` from `now_ms`.
    pub fn schedule(&self, unit_count: usize, now_ms: u64) -> Vec<ScheduledAnimation> {
        (0..unit_count)
            .map(|i| {
                let start_ms = now_ms + self.offset_ms(i);
                ScheduledAnimation {
                    unit_index: i,
                    start_ms,
                    end_ms: start_ms + u64::from(self.duration_ms),
                    keyframes: self.keyframes(),
                    easing: self.easing,
                }
            })
            .collect()
    }
}

/// A concrete animation instance for one unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledAnimation {
    pub unit_index: usize,
    pub start_ms: u64,
    pub end_ms: u64,
    pub keyframes: [Keyframe; 3],
    pub easing: CubicBezier,
}

impl ScheduledAnimation {
    pub fn duration_ms(&self) -> u64 {
        self.end_ms - self.start_ms
    }
}

/// Per-unit hover state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnitState {
    #[default]
    AtRest,
    Animating { start_ms: u64, end_ms: u64 },
}

impl UnitState {
    pub fn is_animating(&self) -> bool {
        matches!(self, UnitState::Animating { .. })
    }
}

/// Format without a trailing `.0` so CSS reads `24px`, not `24.0px`.
pub(crate) fn fmt_num(v: f64) -> String {
    if v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{}", v as i64)
    } else {
        format!("{v}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kinetic::{KineticText, TextBlock};

    fn text(policy: OverlapPolicy) -> KineticText {
        KineticText::new(TextBlock::new("abcd", 50), HoverAnimation::default(), policy)
    }

    #[test]
    fn schedule_offsets_and_duration() {
        let anim = HoverAnimation::default();
        let scheduled = anim.schedule(5, 0);
        let offsets: Vec<u64> = scheduled.iter().map(|a| a.start_ms).collect();
        assert_eq!(offsets, vec![0, 18, 36, 54, 72]);
        assert!(scheduled.iter().all(|a| a.duration_ms() == 480));
        assert!(scheduled.iter().all(|a| a.easing == CubicBezier::POP));
    }

    #[test]
    fn keyframes_rest_peak_rest() {
        let frames = HoverAnimation::default().keyframes();
        assert_eq!(frames[0].to_css(), "translateZ(0px) scale(1)");
        assert_eq!(frames[1].to_css(), "translateZ(24px) scale(1.08)");
        assert_eq!(frames[2], frames[0]);
    }

    #[test]
    fn easing_css() {
        assert_eq!(CubicBezier::POP.to_css(), "cubic-bezier(0.2,0.9,0.2,1)");
        assert!(CubicBezier::POP.is_valid());
        assert!(!CubicBezier::new(1.5, 0.0, 0.2, 1.0).is_valid());
    }

    #[test]
    fn total_ms_covers_last_unit() {
        let anim = HoverAnimation::default();
        assert_eq!(anim.total_ms(0), 0);
        assert_eq!(anim.total_ms(1), 480);
        assert_eq!(anim.total_ms(4), 54 + 480);
    }

    #[test]
    fn units_return_to_rest_after_completion() {
        let mut t = text(OverlapPolicy::Restart);
        t.pointer_enter(1000);
        assert!(t.states().iter().all(|s| s.is_animating()));
        t.tick(1000 + 480);
        assert_eq!(t.states()[0], UnitState::AtRest);
        assert!(t.states()[3].is_animating());
        t.tick(1000 + 54 + 480);
        assert!(!t.is_animating());
    }

    #[test]
    fn restart_replaces_in_flight_animation() {
        let mut t = text(OverlapPolicy::Restart);
        t.pointer_enter(0);
        let again = t.pointer_enter(100);
        assert_eq!(again.len(), 4);
        assert_eq!(
            t.states()[0],
            UnitState::Animating {
                start_ms: 100,
                end_ms: 580
            }
        );
    }

    #[test]
    fn overlap_keeps_earlier_start() {
        let mut t = text(OverlapPolicy::Overlap);
        t.pointer_enter(0);
        t.pointer_enter(100);
        assert_eq!(
            t.states()[0],
            UnitState::Animating {
                start_ms: 0,
                end_ms: 580
            }
        );
    }

    #[test]
    fn ignore_while_active_drops_triggers() {
        let mut t = text(OverlapPolicy::IgnoreWhileActive);
        assert_eq!(t.pointer_enter(0).len(), 4);
        assert!(t.pointer_enter(100).is_empty());
        assert_eq!(t.trigger_count(), 2);
        // After everything settles, triggers work again.
        assert_eq!(t.pointer_enter(10_000).len(), 4);
    }

    #[test]
    fn policy_names_round_trip() {
        for p in [
            OverlapPolicy::Overlap,
            OverlapPolicy::Restart,
            OverlapPolicy::IgnoreWhileActive,
        ] {
            assert_eq!(OverlapPolicy::from_name(p.name()), Some(p));
        }
        assert_eq!(OverlapPolicy::from_name("bogus"), None);
    }
}
