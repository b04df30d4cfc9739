//! Hover script. Compiles the hover animation and overlap policy into the
//! `attachKinetic(el)` function used by both the page and the component.
//!
//! `attachKinetic` collects the element's `.char` units once, at attach time,
//! and replays the pop over that retained list on every `mouseenter`. It
//! returns a disposer that removes the listener and cancels anything still
//! playing.

use crate::kinetic::OverlapPolicy;
use crate::profile::Timing;

/// Generate the keyframes, timing constants, and `attachKinetic`.
pub fn generate_hover_js(timing: &Timing) -> String {
    let hover = &timing.hover;
    let frames: Vec<String> = hover
        .keyframes()
        .iter()
        .map(|k| format!("  {{ transform: '{}' }},", k.to_css()))
        .collect();

    let mut js = String::with_capacity(1536);
    js.push_str("// ── Kinetic hover ──\n");
    js.push_str("const KINETIC_FRAMES = [\n");
    js.push_str(&frames.join("\n"));
    js.push_str("\n];\n");
    js.push_str(&format!(
        "const KINETIC_TIMING = {{ duration: {}, stagger: {}, easing: '{}' }};\n\n",
        hover.duration_ms,
        hover.stagger_ms,
        hover.easing.to_css()
    ));

    js.push_str(
        "function playKinetic(units) {
  return units.map((unit, i) => unit.animate(KINETIC_FRAMES, {
    duration: KINETIC_TIMING.duration,
    delay: i * KINETIC_TIMING.stagger,
    easing: KINETIC_TIMING.easing,
  }));
}

function attachKinetic(el) {
  if (!el || typeof el.animate !== 'function') return () => {};
  const units = Array.from(el.querySelectorAll('.char'));
  let running = [];
  const onEnter = () => {
",
    );
    js.push_str(overlap_body(timing.overlap));
    js.push_str(
        "  };
  el.addEventListener('mouseenter', onEnter);
  return () => {
    el.removeEventListener('mouseenter', onEnter);
    running.forEach(a => a.cancel());
    running = [];
  };
}
",
    );
    js
}

/// Body of the `mouseenter` handler for each policy.
fn overlap_body(policy: OverlapPolicy) -> &'static str {
    match policy {
        OverlapPolicy::Restart => {
            "    running.forEach(a => a.cancel());
    running = playKinetic(units);
"
        }
        OverlapPolicy::Overlap => {
            "    running = running.filter(a => a.playState === 'running').concat(playKinetic(units));
"
        }
        OverlapPolicy::IgnoreWhileActive => {
            "    if (running.some(a => a.playState === 'running')) return;
    running = playKinetic(units);
"
        }
    }
}

/// JS to attach every `[data-kinetic]` element on the page and dispose of
/// the listeners when the page goes away.
pub fn generate_page_bootstrap_js() -> String {
    "const kineticDisposers = Array.from(document.querySelectorAll('[data-kinetic]')).map(attachKinetic);
window.addEventListener('pagehide', () => {
  kineticDisposers.forEach(dispose => dispose());
}, { once: true });
"
    .to_string()
}

/// The per-unit hover offsets the script will use for `count` units.
pub fn hover_offsets_ms(timing: &Timing, count: usize) -> Vec<u64> {
    (0..count).map(|i| timing.hover.offset_ms(i)).collect()
}
