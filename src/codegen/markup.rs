//! HTML for the header, project grid, and footer.

use crate::kinetic::surface::{escape_html, MarkupTarget};
use crate::kinetic::TextBlock;
use crate::profile::Profile;

/// Kinetic title markup: one inline-block span per character.
///
/// The text is captured from the target before it is decomposed, exactly as
/// a live element would be.
pub fn kinetic_title_html(text: &str, stagger_ms: u32) -> String {
    let mut target = MarkupTarget::new(text);
    TextBlock::mount(Some(&mut target), stagger_ms);
    target.into_html()
}

pub(super) fn build_header(profile: &Profile, stagger_ms: u32) -> String {
    let name = escape_html(&profile.name);
    let mut s = String::with_capacity(1024);

    s.push_str("<header class=\"header\">\n  <div class=\"profile-section\">\n");

    if let Some(image) = &profile.image {
        s.push_str("    <div class=\"profile-image-wrapper\">\n");
        s.push_str(&format!(
            "      <img src=\"{}\" alt=\"{name}\" class=\"profile-image\">\n",
            escape_html(image)
        ));
        s.push_str("      <div class=\"profile-glow\"></div>\n");
        s.push_str("    </div>\n");
    }

    s.push_str(&format!(
        "    <h1 class=\"name-title menu-title\"><span class=\"name-text\" data-kinetic aria-label=\"{name}\">{}</span></h1>\n",
        kinetic_title_html(&profile.name, stagger_ms)
    ));

    if !profile.tagline.is_empty() {
        s.push_str(&format!(
            "    <p class=\"tagline\">{}</p>\n",
            escape_html(&profile.tagline)
        ));
    }
    if !profile.bio.is_empty() {
        s.push_str(&format!(
            "    <p class=\"bio\">{}</p>\n",
            escape_html(&profile.bio)
        ));
    }
    if let Some(email) = &profile.email {
        let email = escape_html(email);
        s.push_str("    <div class=\"email-section\">\n");
        s.push_str(&format!(
            "      <a href=\"mailto:{email}\" class=\"email-link\"><span class=\"email-icon\">✉️</span>{email}</a>\n"
        ));
        s.push_str("    </div>\n");
    }

    s.push_str("  </div>\n</header>");
    s
}

pub(super) fn build_grid(profile: &Profile, stagger_ms: u32) -> String {
    let mut s = String::with_capacity(512 + profile.projects.len() * 512);

    s.push_str("<main class=\"main-content\">\n");
    s.push_str(&format!(
        "  <h2 class=\"section-title menu-title\"><span class=\"title-text\" data-kinetic aria-label=\"{}\">{}</span></h2>\n",
        escape_html(&profile.section_title),
        kinetic_title_html(&profile.section_title, stagger_ms)
    ));

    s.push_str("  <div class=\"projects-grid\">\n");
    for (i, project) in profile.projects.iter().enumerate() {
        s.push_str(&format!(
            "    <a href=\"{href}\" target=\"_blank\" rel=\"noopener noreferrer\" class=\"project-card {preset}\" style=\"animation-delay:{delay}ms\">\n",
            href = escape_html(&project.link),
            preset = project.style.class_name(),
            delay = profile.card_delay_ms(i),
        ));
        s.push_str(&format!(
            "      <h3 class=\"card-title\">{}</h3>\n",
            escape_html(&project.title)
        ));
        s.push_str(&format!(
            "      <p class=\"card-description\">{}</p>\n",
            escape_html(&project.description)
        ));
        s.push_str("    </a>\n");
    }
    s.push_str("  </div>\n</main>");
    s
}

pub(super) fn build_footer(profile: &Profile) -> String {
    if profile.footer.is_empty() {
        return String::new();
    }
    format!(
        "<footer class=\"footer\">\n  <p>{}</p>\n</footer>",
        escape_html(&profile.footer)
    )
}
