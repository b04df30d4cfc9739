//! Print a [`Profile`] back out as `.folio` source.
//!
//! Every setting is written explicitly, so the output lowers back to an
//! equal profile.

use crate::profile::{Profile, Stagger};
use crate::token::quote;

pub fn emit_folio(profile: &Profile) -> String {
    let mut s = String::with_capacity(2048);
    s.push_str(&format!("folio {} {{\n", quote(&profile.name)));

    if let Some(image) = &profile.image {
        prop(&mut s, 1, "image", &quote(image));
    }
    if !profile.tagline.is_empty() {
        prop(&mut s, 1, "tagline", &quote(&profile.tagline));
    }
    if !profile.bio.is_empty() {
        prop(&mut s, 1, "bio", &quote(&profile.bio));
    }
    if let Some(email) = &profile.email {
        prop(&mut s, 1, "email", &quote(email));
    }
    prop(&mut s, 1, "section", &quote(&profile.section_title));
    if !profile.footer.is_empty() {
        prop(&mut s, 1, "footer", &quote(&profile.footer));
    }
    prop(&mut s, 1, "lang", &quote(&profile.lang));

    let t = &profile.timing;
    let section = match t.section_stagger {
        Stagger::Fixed(ms) => ms.to_string(),
        Stagger::Auto => "auto".to_string(),
    };
    s.push_str("\n  kinetic {\n");
    prop(&mut s, 2, "name", &t.name_stagger_ms.to_string());
    prop(&mut s, 2, "section", &section);
    prop(&mut s, 2, "cards", &t.card_stagger_ms.to_string());
    prop(&mut s, 2, "entrance", &t.entrance_ms.to_string());
    s.push_str("  }\n");

    let h = &t.hover;
    let e = &h.easing;
    s.push_str("\n  hover {\n");
    prop(&mut s, 2, "duration", &h.duration_ms.to_string());
    prop(&mut s, 2, "stagger", &h.stagger_ms.to_string());
    prop(&mut s, 2, "lift", &float(h.lift_px));
    prop(&mut s, 2, "scale", &float(h.scale));
    prop(
        &mut s,
        2,
        "ease",
        &format!(
            "cubic({}, {}, {}, {})",
            float(e.x1),
            float(e.y1),
            float(e.x2),
            float(e.y2)
        ),
    );
    prop(&mut s, 2, "overlap", t.overlap.name());
    s.push_str("  }\n");

    for project in &profile.projects {
        s.push_str(&format!("\n  project {} {{\n", quote(&project.title)));
        if !project.description.is_empty() {
            prop(&mut s, 2, "description", &quote(&project.description));
        }
        prop(&mut s, 2, "link", &quote(&project.link));
        prop(&mut s, 2, "style", project.style.class_name());
        s.push_str("  }\n");
    }

    s.push_str("}\n");
    s
}

fn prop(s: &mut String, depth: usize, name: &str, value: &str) {
    s.push_str(&"  ".repeat(depth));
    s.push_str(name);
    s.push_str(": ");
    s.push_str(value);
    s.push('\n');
}

/// Plain decimal with at least one fractional digit, so it lexes as a float.
/// `Display` never switches to exponent notation.
fn float(v: f64) -> String {
    let s = v.to_string();
    if s.contains('.') {
        s
    } else {
        format!("{s}.0")
    }
}
