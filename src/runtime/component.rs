//! `<kinetic-text>` Web Component. The element decomposes its own text into
//! per-character spans on connect, plays the staggered entrance, and wires
//! the hover pop through `attachKinetic`.

use crate::codegen::script::generate_hover_js;
use crate::profile::Timing;

use super::helpers::tag_to_class_name;

/// Tag used when the caller does not pick one.
pub const DEFAULT_TAG: &str = "kinetic-text";

/// Generate a self-contained ES module that exports a Custom Element.
///
/// The source text is captured once, on first connect, so re-renders (for a
/// changed `stagger` attribute) never decompose already-decomposed markup.
pub fn wrap_web_component(timing: &Timing, tag_name: &str) -> String {
    let class_name = tag_to_class_name(tag_name);
    let hover_js = generate_hover_js(timing);
    let default_stagger = timing.name_stagger_ms;
    let entrance = timing.entrance_ms;
    let easing = timing.hover.easing.to_css();

    format!(
        r##"// {tag_name}.js, generated by kinetic-folio v{version}
// Zero-dependency kinetic typography component. Import and use:
//   <script type="module" src="./{tag_name}.js"></script>
//   <{tag_name} stagger="50">Hello there</{tag_name}>

{hover_js}
const KINETIC_STYLE_ID = '{tag_name}-style';
const KINETIC_STYLE = `
{tag_name} {{ display: inline-block; perspective: 600px; }}
{tag_name} .char {{
  display: inline-block;
  transform-style: preserve-3d;
  animation: char-in {entrance}ms {easing} both;
}}
@keyframes char-in {{
  from {{ opacity: 0; transform: translateY(0.45em); }}
  to   {{ opacity: 1; transform: translateY(0); }}
}}
@media (prefers-reduced-motion: reduce) {{
  {tag_name} .char {{ animation: none; }}
}}`;

function injectKineticStyle() {{
  if (document.getElementById(KINETIC_STYLE_ID)) return;
  const style = document.createElement('style');
  style.id = KINETIC_STYLE_ID;
  style.textContent = KINETIC_STYLE;
  document.head.appendChild(style);
}}

function renderKinetic(el, text, stagger) {{
  el.textContent = '';
  Array.from(text).forEach((ch, i) => {{
    const span = document.createElement('span');
    span.className = 'char';
    span.textContent = ch === ' ' ? '\u00a0' : ch;
    span.style.display = 'inline-block';
    span.style.animationDelay = (i * stagger) + 'ms';
    el.appendChild(span);
  }});
}}

class {class_name} extends HTMLElement {{
  static get observedAttributes() {{
    return ['stagger'];
  }}

  constructor() {{
    super();
    this._source = null;
    this._dispose = null;
  }}

  get stagger() {{
    const v = parseInt(this.getAttribute('stagger'), 10);
    return Number.isFinite(v) && v >= 0 ? v : {default_stagger};
  }}

  set stagger(v) {{
    this.setAttribute('stagger', String(v));
  }}

  attributeChangedCallback(name, oldVal, newVal) {{
    if (name === 'stagger' && oldVal !== newVal && this._source !== null) {{
      this._render();
    }}
  }}

  connectedCallback() {{
    injectKineticStyle();
    if (this._source === null) {{
      this._source = this.textContent;
      this.setAttribute('aria-label', this._source);
    }}
    this._render();
  }}

  disconnectedCallback() {{
    if (this._dispose) {{
      this._dispose();
      this._dispose = null;
    }}
  }}

  _render() {{
    if (this._dispose) this._dispose();
    renderKinetic(this, this._source, this.stagger);
    this._dispose = attachKinetic(this);
  }}
}}

if (!customElements.get('{tag_name}')) {{
  customElements.define('{tag_name}', {class_name});
}}
export {{ {class_name} }};
export default {class_name};
"##,
        version = env!("CARGO_PKG_VERSION"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn component_defines_tag_once() {
        let js = wrap_web_component(&Timing::default(), DEFAULT_TAG);
        assert!(js.contains("class KineticText extends HTMLElement"));
        assert!(js.contains("if (!customElements.get('kinetic-text'))"));
        assert!(js.contains("customElements.define('kinetic-text', KineticText);"));
        assert!(js.contains("export default KineticText;"));
    }

    #[test]
    fn component_captures_source_once() {
        let js = wrap_web_component(&Timing::default(), DEFAULT_TAG);
        assert_eq!(js.matches("this._source = this.textContent;").count(), 1);
        assert!(js.contains("if (this._source === null)"));
    }

    #[test]
    fn component_disposes_on_disconnect() {
        let js = wrap_web_component(&Timing::default(), DEFAULT_TAG);
        let disconnect = js.find("disconnectedCallback()").unwrap();
        assert!(js[disconnect..].contains("this._dispose();"));
        assert!(js.contains("this._dispose = attachKinetic(this);"));
    }

    #[test]
    fn component_uses_profile_timing() {
        let timing = Timing {
            name_stagger_ms: 70,
            entrance_ms: 300,
            ..Timing::default()
        };
        let js = wrap_web_component(&timing, "folio-title");
        assert!(js.contains(": 70;"));
        assert!(js.contains("animation: char-in 300ms cubic-bezier(0.2,0.9,0.2,1) both;"));
        assert!(js.contains("class FolioTitle extends HTMLElement"));
        assert!(js.contains("const KINETIC_TIMING = { duration: 480, stagger: 18,"));
    }

    #[test]
    fn component_renders_spaces_as_nbsp() {
        let js = wrap_web_component(&Timing::default(), DEFAULT_TAG);
        assert!(js.contains(r"ch === ' ' ? '\u00a0' : ch"));
    }
}
