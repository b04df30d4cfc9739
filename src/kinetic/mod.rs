//! Kinetic text: per-character decomposition with staggered entrance delays
//! and a hover-triggered pop animation.
//!
//! The data side is pure: [`decompose`] maps a string to an ordered sequence
//! of [`CharacterUnit`]s. Surfaces (anything implementing [`RenderTarget`])
//! only clear themselves and append what `decompose` produced, so the same
//! units drive the in-memory [`surface::Element`], the HTML
//! [`surface::MarkupTarget`] used by codegen, and the hover model in
//! [`hover`].
//!
//! - `hover`: animation definition, scheduling, per-unit state machine
//! - `events`: pointer-enter listener registry with scoped subscriptions
//! - `surface`: rendering targets

pub mod events;
pub mod hover;
pub mod surface;

use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

pub use events::{PointerEvents, Subscription};
pub use hover::{
    CubicBezier, HoverAnimation, Keyframe, OverlapPolicy, ScheduledAnimation, UnitState,
};

/// Substituted for U+0020 so inline-block layout does not collapse spaces.
pub const NBSP: char = '\u{00A0}';

/// One animatable primitive: a single character of decomposed text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterUnit {
    /// The character as it appeared in the source text.
    pub source: char,
    /// The character actually rendered (`NBSP` for a literal space).
    pub glyph: char,
    pub index: usize,
    /// Entrance-delay: `index * stagger_ms`.
    pub delay_ms: u32,
}

impl CharacterUnit {
    fn new(index: usize, source: char, stagger_ms: u32) -> Self {
        let glyph = if source == ' ' { NBSP } else { source };
        let delay_ms = u32::try_from(index)
            .unwrap_or(u32::MAX)
            .saturating_mul(stagger_ms);
        Self {
            source,
            glyph,
            index,
            delay_ms,
        }
    }
}

/// Decompose `text` into one unit per Unicode scalar value, in source order.
///
/// Multi-byte characters are never split. The delay saturates rather than
/// wrapping for absurdly long inputs, which keeps it non-decreasing.
pub fn decompose(text: &str, stagger_ms: u32) -> Vec<CharacterUnit> {
    text.chars()
        .enumerate()
        .map(|(i, ch)| CharacterUnit::new(i, ch, stagger_ms))
        .collect()
}

/// A surface that can host a decomposed text block.
pub trait RenderTarget {
    /// The target's own visible text, as it is right now.
    fn text_content(&self) -> String;

    /// Drop all current content.
    fn clear(&mut self);

    /// Append one unit as an inline-block primitive.
    fn append_unit(&mut self, unit: &CharacterUnit);
}

/// Replace the flat text of `target` with one primitive per character.
///
/// An absent target is a silent no-op. Calling this twice with the same
/// `source_text` yields the same structure, since content is cleared first.
pub fn render<T: RenderTarget + ?Sized>(target: Option<&mut T>, source_text: &str, stagger_ms: u32) {
    let Some(target) = target else {
        tracing::trace!("kinetic render skipped: no target");
        return;
    };
    let units = decompose(source_text, stagger_ms);
    target.clear();
    for unit in &units {
        target.append_unit(unit);
    }
}

/// Captured source text with the units derived from it.
///
/// Immutable once built: the units are computed exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBlock {
    source: String,
    stagger_ms: u32,
    units: Vec<CharacterUnit>,
}

impl TextBlock {
    pub fn new(source: impl Into<String>, stagger_ms: u32) -> Self {
        let source = source.into();
        let units = decompose(&source, stagger_ms);
        Self {
            source,
            stagger_ms,
            units,
        }
    }

    /// Capture a target's visible text before it is mutated.
    pub fn capture<T: RenderTarget + ?Sized>(target: &T, stagger_ms: u32) -> Self {
        Self::new(target.text_content(), stagger_ms)
    }

    /// Capture, then render into the same target. `None` when the target is absent.
    pub fn mount<T: RenderTarget + ?Sized>(target: Option<&mut T>, stagger_ms: u32) -> Option<Self> {
        let target = target?;
        let block = Self::capture(&*target, stagger_ms);
        block.render_into(target);
        Some(block)
    }

    /// Write this block's units into `target`, replacing its content.
    pub fn render_into<T: RenderTarget + ?Sized>(&self, target: &mut T) {
        target.clear();
        for unit in &self.units {
            target.append_unit(unit);
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn stagger_ms(&self) -> u32 {
        self.stagger_ms
    }

    pub fn units(&self) -> &[CharacterUnit] {
        &self.units
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Time until the last unit's entrance starts.
    pub fn entrance_span_ms(&self) -> u32 {
        self.units.last().map(|u| u.delay_ms).unwrap_or(0)
    }
}

/// A mounted text block plus its hover animation state.
///
/// The unit sequence is the one produced at construction; triggers iterate
/// it directly instead of asking the surface what is present.
#[derive(Debug, Clone)]
pub struct KineticText {
    block: TextBlock,
    animation: HoverAnimation,
    policy: OverlapPolicy,
    states: Vec<UnitState>,
    triggers: u64,
}

impl KineticText {
    pub fn new(block: TextBlock, animation: HoverAnimation, policy: OverlapPolicy) -> Self {
        let states = vec![UnitState::AtRest; block.len()];
        Self {
            block,
            animation,
            policy,
            states,
            triggers: 0,
        }
    }

    pub fn block(&self) -> &TextBlock {
        &self.block
    }

    pub fn animation(&self) -> &HoverAnimation {
        &self.animation
    }

    pub fn policy(&self) -> OverlapPolicy {
        self.policy
    }

    pub fn states(&self) -> &[UnitState] {
        &self.states
    }

    /// Number of pointer-enter events seen, including ignored ones.
    pub fn trigger_count(&self) -> u64 {
        self.triggers
    }

    /// Handle a pointer-enter at `now_ms`; returns the animations started.
    pub fn pointer_enter(&mut self, now_ms: u64) -> Vec<ScheduledAnimation> {
        self.triggers += 1;
        self.tick(now_ms);

        if self.policy == OverlapPolicy::IgnoreWhileActive && self.is_animating() {
            tracing::trace!(now_ms, "hover trigger ignored, animation in flight");
            return Vec::new();
        }

        let scheduled = self.animation.schedule(self.block.len(), now_ms);
        for anim in &scheduled {
            let state = &mut self.states[anim.unit_index];
            *state = match (self.policy, *state) {
                (OverlapPolicy::Overlap, UnitState::Animating { start_ms, .. }) => {
                    UnitState::Animating {
                        start_ms: start_ms.min(anim.start_ms),
                        end_ms: anim.end_ms,
                    }
                }
                _ => UnitState::Animating {
                    start_ms: anim.start_ms,
                    end_ms: anim.end_ms,
                },
            };
        }
        scheduled
    }

    /// Return every unit whose animation has completed to rest.
    pub fn tick(&mut self, now_ms: u64) {
        for state in &mut self.states {
            if let UnitState::Animating { end_ms, .. } = *state {
                if now_ms >= end_ms {
                    *state = UnitState::AtRest;
                }
            }
        }
    }

    pub fn is_animating(&self) -> bool {
        self.states.iter().any(|s| s.is_animating())
    }
}

/// Register `text` for pointer-enter events on `events`.
///
/// The listener holds a weak reference: once the text is dropped, events are
/// ignored. Dropping the returned subscription removes the listener.
pub fn attach_hover(text: &Rc<RefCell<KineticText>>, events: &PointerEvents) -> Subscription {
    let weak = Rc::downgrade(text);
    events.on_enter(move |now_ms| {
        if let Some(text) = weak.upgrade() {
            text.borrow_mut().pointer_enter(now_ms);
        }
    })
}

#[cfg(test)]
mod tests {
    use super::surface::Element;
    use super::*;

    #[test]
    fn hi_there_scenario() {
        let units = decompose("Hi there", 50);
        assert_eq!(units.len(), 8);
        let delays: Vec<u32> = units.iter().map(|u| u.delay_ms).collect();
        assert_eq!(delays, vec![0, 50, 100, 150, 200, 250, 300, 350]);
        assert_eq!(units[2].glyph, NBSP);
        assert_eq!(units[2].source, ' ');
        assert_eq!(units[0].glyph, 'H');
    }

    #[test]
    fn decompose_counts_scalar_values_not_bytes() {
        let text = "né🔥 ok";
        let units = decompose(text, 10);
        assert_eq!(units.len(), text.chars().count());
        assert_eq!(units[2].glyph, '🔥');
        assert_eq!(units[3].glyph, NBSP);
        let rebuilt: String = units.iter().map(|u| u.source).collect();
        assert_eq!(rebuilt, text);
    }

    #[test]
    fn only_spaces_are_substituted() {
        let units = decompose("a\tb c", 1);
        assert_eq!(units[1].glyph, '\t');
        assert_eq!(units[3].glyph, NBSP);
    }

    #[test]
    fn delays_are_non_decreasing() {
        let units = decompose("Ayaan Rulhania", 50);
        assert!(units.windows(2).all(|w| w[0].delay_ms <= w[1].delay_ms));
        assert!(units.iter().enumerate().all(|(i, u)| u.index == i));
    }

    #[test]
    fn zero_stagger_keeps_all_delays_at_zero() {
        assert!(decompose("abc", 0).iter().all(|u| u.delay_ms == 0));
    }

    #[test]
    fn empty_text_has_no_units() {
        assert!(decompose("", 50).is_empty());
        let block = TextBlock::new("", 50);
        assert!(block.is_empty());
        assert_eq!(block.entrance_span_ms(), 0);
    }

    #[test]
    fn render_with_absent_target_is_a_no_op() {
        render::<Element>(None, "Hi there", 50);
        assert!(TextBlock::mount::<Element>(None, 50).is_none());
    }

    #[test]
    fn render_is_idempotent() {
        let mut el = Element::with_text("Hi there");
        render(Some(&mut el), "Hi there", 50);
        let first = el.clone();
        render(Some(&mut el), "Hi there", 50);
        assert_eq!(el, first);
        assert_eq!(el.unit_count(), 8);
    }

    #[test]
    fn mount_captures_text_before_mutation() {
        let mut el = Element::with_text("My Works");
        let block = TextBlock::mount(Some(&mut el), 88).unwrap();
        assert_eq!(block.source(), "My Works");
        assert_eq!(el.unit_count(), 8);
        assert_eq!(el.text_content(), "My\u{00A0}Works");
        assert_eq!(block.entrance_span_ms(), 7 * 88);
    }

    #[test]
    fn attach_hover_follows_the_text_lifetime() {
        let events = PointerEvents::new();
        let text = Rc::new(RefCell::new(KineticText::new(
            TextBlock::new("abc", 50),
            HoverAnimation::default(),
            OverlapPolicy::Restart,
        )));
        let _sub = attach_hover(&text, &events);
        events.dispatch_enter(0);
        assert!(text.borrow().is_animating());
        assert_eq!(text.borrow().trigger_count(), 1);

        drop(text);
        assert_eq!(events.dispatch_enter(10), 1);
    }
}
