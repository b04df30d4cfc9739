use crate::profile::{Profile, Timing};

mod analysis;
mod emit;
mod lower;
mod markup;
pub mod script;
mod style;

#[cfg(test)]
mod tests;

pub use self::analysis::validate;
pub use self::emit::emit_folio;
pub use self::lower::lower;
pub use self::markup::kinetic_title_html;

// ── Public types ───────────────────────────────────────────────────────

/// Full compilation output: page fragments + metadata for the runtime.
#[derive(Debug, Clone)]
pub struct PageOutput {
    /// The lowered profile the page was generated from.
    pub profile: Profile,
    /// Document title.
    pub title: String,
    pub lang: String,
    /// Profile header with the kinetic name title.
    pub header_html: String,
    /// Section title and the project card grid.
    pub grid_html: String,
    /// Empty when the profile has no footer text.
    pub footer_html: String,
    pub css: String,
    /// `attachKinetic` and its keyframes, shared by page and component.
    pub hover_js: String,
    /// Stagger actually applied to each kinetic title (name, section).
    pub staggers: (u32, u32),
    /// Compiler warnings (non-fatal issues the user should know about).
    pub warnings: Vec<String>,
}

impl PageOutput {
    pub fn timing(&self) -> &Timing {
        &self.profile.timing
    }

    pub fn card_count(&self) -> usize {
        self.profile.projects.len()
    }
}

/// Generate every page fragment for `profile`.
///
/// `warnings` are carried through (usually from lowering) and the profile's
/// own validation warnings are appended.
pub fn generate_page(profile: &Profile, mut warnings: Vec<String>) -> PageOutput {
    warnings.extend(validate(profile));

    let name_stagger = profile.timing.name_stagger_ms;
    let section_stagger = profile.section_stagger_ms();
    tracing::debug!(
        name_stagger,
        section_stagger,
        cards = profile.projects.len(),
        "generating page"
    );

    PageOutput {
        profile: profile.clone(),
        title: profile.name.clone(),
        lang: profile.lang.clone(),
        header_html: markup::build_header(profile, name_stagger),
        grid_html: markup::build_grid(profile, section_stagger),
        footer_html: markup::build_footer(profile),
        css: style::build_css(&profile.timing),
        hover_js: script::generate_hover_js(&profile.timing),
        staggers: (name_stagger, section_stagger),
        warnings,
    }
}
