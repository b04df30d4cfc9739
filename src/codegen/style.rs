//! Page stylesheet. Layout is fixed; timing and presets come from the profile.

use crate::profile::{StylePreset, Timing};

pub(super) fn build_css(timing: &Timing) -> String {
    let entrance = timing.entrance_ms;
    let easing = timing.hover.easing.to_css();
    let presets = build_preset_css();

    format!(
        r#"* {{ margin: 0; padding: 0; box-sizing: border-box; }}
html, body {{ min-height: 100%; background: #0b0b12; color: #e6e6f0;
  font-family: 'Inter', system-ui, -apple-system, sans-serif; line-height: 1.6; }}
a {{ color: inherit; }}

/* ── Background ──────────────────────────────────── */
.animated-background {{
  position: fixed; inset: 0; z-index: -1;
  background: radial-gradient(circle at 20% 20%, rgba(102,126,234,0.18), transparent 45%),
              radial-gradient(circle at 80% 70%, rgba(245,87,108,0.14), transparent 45%);
  animation: drift 18s ease-in-out infinite alternate;
}}
@keyframes drift {{ from {{ transform: translate3d(0,0,0); }} to {{ transform: translate3d(0,-3%,0); }} }}

.container {{ max-width: 1080px; margin: 0 auto; padding: 64px 24px 32px; }}

/* ── Header ──────────────────────────────────────── */
.header {{ text-align: center; margin-bottom: 64px; }}
.profile-image-wrapper {{ position: relative; width: 132px; height: 132px; margin: 0 auto 24px; }}
.profile-image {{ width: 100%; height: 100%; border-radius: 50%; object-fit: cover; position: relative; z-index: 1; }}
.profile-glow {{
  position: absolute; inset: -8px; border-radius: 50%;
  background: conic-gradient(#667eea, #f5576c, #4facfe, #667eea);
  filter: blur(14px); opacity: 0.6;
}}
.tagline {{ font-size: 1.1rem; color: #b9b9d0; margin: 8px 0 16px; }}
.bio {{ max-width: 640px; margin: 0 auto 24px; color: #9a9ab5; }}
.email-link {{ text-decoration: none; padding: 8px 18px; border: 1px solid #2c2c44; border-radius: 999px; }}
.email-link:hover {{ border-color: #667eea; }}
.email-icon {{ margin-right: 8px; }}

/* ── Kinetic titles ──────────────────────────────── */
.menu-title {{ perspective: 600px; font-weight: 800; letter-spacing: -0.02em; }}
.name-title {{ font-size: clamp(2.2rem, 6vw, 3.6rem); }}
.section-title {{ font-size: clamp(1.6rem, 4vw, 2.4rem); margin-bottom: 32px; text-align: center; }}
.menu-title .char {{
  display: inline-block;
  opacity: 0;
  transform-style: preserve-3d;
  animation: char-in {entrance}ms {easing} both;
}}
@keyframes char-in {{
  from {{ opacity: 0; transform: translateY(0.45em); }}
  to   {{ opacity: 1; transform: translateY(0); }}
}}

/* ── Project grid ────────────────────────────────── */
.projects-grid {{ display: grid; grid-template-columns: repeat(auto-fill, minmax(300px, 1fr)); gap: 24px; }}
.project-card {{
  display: block; padding: 24px; border-radius: 16px; text-decoration: none;
  color: #fff;
  animation: card-in 600ms ease-out backwards;
  transition: transform 0.25s, box-shadow 0.25s;
}}
.project-card:hover {{ transform: translateY(-6px); box-shadow: 0 18px 40px rgba(0,0,0,0.35); }}
.card-title {{ font-size: 1.25rem; margin-bottom: 8px; }}
.card-description {{ font-size: 0.95rem; opacity: 0.9; }}
@keyframes card-in {{
  from {{ opacity: 0; transform: translateY(24px); }}
  to   {{ opacity: 1; transform: translateY(0); }}
}}
{presets}
.footer {{ text-align: center; margin-top: 64px; color: #6c6c88; font-size: 0.85rem; }}

@media (prefers-reduced-motion: reduce) {{
  .menu-title .char, .project-card, .animated-background {{ animation: none; }}
  .menu-title .char {{ opacity: 1; }}
}}"#
    )
}

fn build_preset_css() -> String {
    StylePreset::ALL
        .iter()
        .map(|preset| {
            let (from, to) = preset.colors();
            format!(
                ".{} {{ background: linear-gradient(135deg, {from} 0%, {to} 100%); }}\n",
                preset.class_name()
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_uses_entrance_timing() {
        let timing = Timing {
            entrance_ms: 300,
            ..Timing::default()
        };
        let css = build_css(&timing);
        assert!(css.contains("animation: char-in 300ms cubic-bezier(0.2,0.9,0.2,1) both"));
    }

    #[test]
    fn css_defines_every_preset() {
        let css = build_css(&Timing::default());
        for preset in StylePreset::ALL {
            assert!(css.contains(&format!(".{} {{", preset.class_name())));
        }
    }
}
