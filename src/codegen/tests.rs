use super::*;
use crate::error::ErrorKind;
use crate::kinetic::{CubicBezier, OverlapPolicy};
use crate::lexer;
use crate::parser::Parser;
use crate::profile::{Stagger, StylePreset};

fn lower_src(src: &str) -> crate::error::Result<(Profile, Vec<String>)> {
    let tokens = lexer::lex(src)?;
    let mut parser = Parser::new(tokens);
    let file = parser.parse()?;
    lower(&file)
}

fn page(src: &str) -> PageOutput {
    let (profile, warnings) = lower_src(src).expect("lowering failed");
    generate_page(&profile, warnings)
}

#[test]
fn lower_header_properties() {
    let (p, w) = lower_src(
        r#"folio "Ayaan Rulhania" {
            image: "icn.png"
            tagline: "Adding to my Infinite Aura."
            email: "someone@example.com"
            section: "My Works"
            footer: "(c) 2026"
        }"#,
    )
    .unwrap();

    assert_eq!(p.name, "Ayaan Rulhania");
    assert_eq!(p.image.as_deref(), Some("icn.png"));
    assert_eq!(p.email.as_deref(), Some("someone@example.com"));
    assert_eq!(p.section_title, "My Works");
    assert_eq!(p.footer, "(c) 2026");
    assert!(w.is_empty());
}

#[test]
fn lower_settings_override_defaults() {
    let (p, _) = lower_src(
        r#"folio "X" {
            kinetic { name: 40 section: auto cards: 80 entrance: 300 }
            hover { duration: 600 stagger: 20 lift: 30 scale: 1.2 ease: cubic(0.3, 1.0, 0.3, 1.0) overlap: ignore }
        }"#,
    )
    .unwrap();

    let t = p.timing;
    assert_eq!(t.name_stagger_ms, 40);
    assert_eq!(t.section_stagger, Stagger::Auto);
    assert_eq!(t.card_stagger_ms, 80);
    assert_eq!(t.entrance_ms, 300);
    assert_eq!(t.hover.duration_ms, 600);
    assert_eq!(t.hover.stagger_ms, 20);
    assert_eq!(t.hover.lift_px, 30.0);
    assert_eq!(t.hover.scale, 1.2);
    assert_eq!(t.hover.easing, CubicBezier::new(0.3, 1.0, 0.3, 1.0));
    assert_eq!(t.overlap, OverlapPolicy::IgnoreWhileActive);
}

#[test]
fn lower_defaults_match_reference_timing() {
    let (p, _) = lower_src(r#"folio "X" {}"#).unwrap();
    assert_eq!(p.timing.name_stagger_ms, 50);
    assert_eq!(p.timing.section_stagger, Stagger::Fixed(88));
    assert_eq!(p.timing.hover.duration_ms, 480);
    assert_eq!(p.timing.hover.stagger_ms, 18);
    assert_eq!(p.timing.overlap, OverlapPolicy::Restart);
}

#[test]
fn lower_project_presets_cycle_by_default() {
    let (p, _) = lower_src(
        r#"folio "X" {
            project "A" { link: "https://a.example" }
            project "B" { link: "https://b.example" }
            project "C" { link: "https://c.example" style: gradient-1 }
            project "D" { link: "https://d.example" }
            project "E" { link: "https://e.example" }
        }"#,
    )
    .unwrap();

    let styles: Vec<StylePreset> = p.projects.iter().map(|e| e.style).collect();
    assert_eq!(
        styles,
        vec![
            StylePreset::Gradient1,
            StylePreset::Gradient2,
            StylePreset::Gradient1,
            StylePreset::Gradient4,
            StylePreset::Gradient1,
        ]
    );
}

#[test]
fn lower_unknown_preset_is_an_error() {
    let src = r#"folio "X" { project "A" { link: "https://a" style: gradient-7 } }"#;
    let err = lower_src(src).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnknownPreset(ref n) if n == "gradient-7"));
    let span = err.span.expect("preset errors carry a span");
    assert_eq!(&src[span], "style: gradient-7");
}

#[test]
fn lower_project_without_link_is_an_error() {
    let err = lower_src(r#"folio "X" { project "A" { description: "no link" } }"#).unwrap_err();
    assert!(matches!(
        err.kind,
        ErrorKind::MissingField { ref block, ref field } if block == "project 'A'" && field == "link"
    ));
}

#[test]
fn lower_type_mismatch_names_the_property() {
    let err = lower_src(r#"folio "X" { image: 42 }"#).unwrap_err();
    assert!(err.to_string().contains("'image' expects a string, got integer"));

    let err = lower_src(r#"folio "X" { kinetic { name: 1.5 } }"#).unwrap_err();
    assert!(err.to_string().contains("'name' expects whole milliseconds, got float"));
}

#[test]
fn lower_rejects_invalid_easing() {
    let err = lower_src(r#"folio "X" { hover { ease: cubic(1.5, 0.0, 0.2, 1.0) } }"#).unwrap_err();
    assert!(err.to_string().contains("x control points"));

    let err = lower_src(r#"folio "X" { hover { ease: cubic(0.2, 0.9) } }"#).unwrap_err();
    assert!(err.to_string().contains("cubic() takes 4 arguments, got 2"));
}

#[test]
fn lower_warns_on_unknown_and_duplicate_properties() {
    let (_, w) = lower_src(
        r#"folio "X" {
            colour: "red"
            tagline: "a"
            tagline: "b"
            hover { wobble: 3 }
        }"#,
    )
    .unwrap();

    assert!(w.iter().any(|m| m == "unknown folio property 'colour' ignored"));
    assert!(w.iter().any(|m| m.contains("'tagline' set more than once")));
    assert!(w.iter().any(|m| m == "unknown hover setting 'wobble' ignored"));
}

#[test]
fn page_kinetic_titles_are_decomposed() {
    let out = page(r#"folio "Hi there" { section: "My Works" }"#);
    assert_eq!(out.header_html.matches(r#"class="char""#).count(), 8);
    assert!(out.header_html.contains(r#"aria-label="Hi there""#));
    assert!(out.header_html.contains("animation-delay:350ms\">e</span>"));
    assert_eq!(out.grid_html.matches(r#"class="char""#).count(), 8);
    // "My Works" at the default 88ms: last unit at 7 * 88.
    assert!(out.grid_html.contains("animation-delay:616ms\">s</span>"));
    assert_eq!(out.staggers, (50, 88));
}

#[test]
fn page_auto_stagger_syncs_section_with_name() {
    let out = page(r#"folio "Ayaan Rulhania" { section: "My Works" kinetic { section: auto } }"#);
    assert_eq!(out.staggers, (50, 88));

    let out = page(r#"folio "Ab" { section: "Abcd" kinetic { name: 100 section: auto } }"#);
    assert_eq!(out.staggers, (100, 50));
}

#[test]
fn page_cards_keep_input_order() {
    let out = generate_page(&Profile::builtin(), Vec::new());
    let positions: Vec<usize> = out
        .profile
        .projects
        .iter()
        .map(|p| {
            out.grid_html
                .find(&format!("<h3 class=\"card-title\">{}</h3>", p.title))
                .expect("card title present")
        })
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(out.card_count(), 6);
}

#[test]
fn page_cards_open_in_new_context() {
    let out = generate_page(&Profile::builtin(), Vec::new());
    assert_eq!(out.grid_html.matches("target=\"_blank\"").count(), 6);
    assert_eq!(
        out.grid_html.matches("rel=\"noopener noreferrer\"").count(),
        6
    );
    for (i, delay) in [0, 100, 200, 300, 400, 500].iter().enumerate() {
        assert!(
            out.grid_html.contains(&format!("style=\"animation-delay:{delay}ms\"")),
            "card {i} delay missing"
        );
    }
}

#[test]
fn page_header_skips_absent_fields() {
    let out = page(r#"folio "Solo" {}"#);
    assert!(!out.header_html.contains("profile-image"));
    assert!(!out.header_html.contains("email-link"));
    assert!(!out.header_html.contains("class=\"tagline\""));
    assert!(out.footer_html.is_empty());
}

#[test]
fn page_escapes_user_text() {
    let out = page(r#"folio "A <b>" { tagline: "x & y" project "<T>" { link: "https://x.example/?a=1&b=2" } }"#);
    assert!(out.header_html.contains("aria-label=\"A &lt;b&gt;\""));
    assert!(out.header_html.contains("<p class=\"tagline\">x &amp; y</p>"));
    assert!(out.grid_html.contains("<h3 class=\"card-title\">&lt;T&gt;</h3>"));
    assert!(out.grid_html.contains("href=\"https://x.example/?a=1&amp;b=2\""));
}

#[test]
fn page_collects_lowering_and_validation_warnings() {
    let out = page(r#"folio "X" { colour: "red" }"#);
    assert!(out.warnings.iter().any(|w| w.contains("colour")));
    assert!(out.warnings.iter().any(|w| w.contains("no projects")));
}

#[test]
fn emitted_source_lowers_to_the_same_profile() {
    let builtin = Profile::builtin();
    let src = emit_folio(&builtin);
    let (back, warnings) = lower_src(&src).expect("emitted source should compile");
    assert_eq!(back, builtin);
    assert!(warnings.is_empty(), "{warnings:?}");
}

#[test]
fn emitted_source_keeps_auto_and_policy() {
    let mut p = Profile::named("X");
    p.timing.section_stagger = Stagger::Auto;
    p.timing.overlap = OverlapPolicy::Overlap;
    let src = emit_folio(&p);
    assert!(src.contains("section: auto"));
    assert!(src.contains("overlap: overlap"));
    let (back, _) = lower_src(&src).unwrap();
    assert_eq!(back, p);
}

#[test]
fn emitted_floats_never_use_exponents() {
    let mut p = Profile::named("X");
    p.timing.hover.lift_px = 1e16;
    p.timing.hover.scale = 1e-7;
    let src = emit_folio(&p);
    assert!(src.contains("lift: 10000000000000000.0"), "{src}");
    assert!(src.contains("scale: 0.0000001"), "{src}");
    let (back, _) = lower_src(&src).expect("plain decimals lex as floats");
    assert_eq!(back, p);
}
