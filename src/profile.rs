//! The portfolio data model: profile header, project grid, timing settings.
//!
//! Everything here is plain data. `.folio` sources lower into a [`Profile`]
//! (see `codegen::lower`), and [`Profile::builtin`] provides the stock
//! six-project portfolio.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::kinetic::{HoverAnimation, OverlapPolicy};

/// Card colour scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StylePreset {
    #[serde(rename = "gradient-1")]
    Gradient1,
    #[serde(rename = "gradient-2")]
    Gradient2,
    #[serde(rename = "gradient-3")]
    Gradient3,
    #[serde(rename = "gradient-4")]
    Gradient4,
}

impl StylePreset {
    pub const ALL: [StylePreset; 4] = [
        StylePreset::Gradient1,
        StylePreset::Gradient2,
        StylePreset::Gradient3,
        StylePreset::Gradient4,
    ];

    /// The CSS class the preset renders as.
    pub fn class_name(&self) -> &'static str {
        match self {
            StylePreset::Gradient1 => "gradient-1",
            StylePreset::Gradient2 => "gradient-2",
            StylePreset::Gradient3 => "gradient-3",
            StylePreset::Gradient4 => "gradient-4",
        }
    }

    /// Start/end colours of the card gradient.
    pub fn colors(&self) -> (&'static str, &'static str) {
        match self {
            StylePreset::Gradient1 => ("#667eea", "#764ba2"),
            StylePreset::Gradient2 => ("#f093fb", "#f5576c"),
            StylePreset::Gradient3 => ("#4facfe", "#00f2fe"),
            StylePreset::Gradient4 => ("#43e97b", "#38f9d7"),
        }
    }
}

impl FromStr for StylePreset {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StylePreset::ALL
            .into_iter()
            .find(|p| p.class_name() == s)
            .ok_or(())
    }
}

impl fmt::Display for StylePreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class_name())
    }
}

/// One external project link shown in the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectEntry {
    pub title: String,
    pub description: String,
    pub link: String,
    pub style: StylePreset,
}

impl ProjectEntry {
    pub fn new(title: &str, description: &str, link: &str, style: StylePreset) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            link: link.to_string(),
            style,
        }
    }
}

/// Per-character stagger of a kinetic title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stagger {
    Fixed(u32),
    /// Chosen so this title's entrance ends with the name's.
    Auto,
}

impl Stagger {
    /// Resolve against a lead title that has `lead_len` characters at `lead_ms`.
    pub fn resolve(&self, lead_len: usize, lead_ms: u32, own_len: usize) -> u32 {
        match *self {
            Stagger::Fixed(ms) => ms,
            Stagger::Auto => synchronized_stagger(lead_len, lead_ms, own_len),
        }
    }
}

/// Stagger for a title of `own_len` chars so its entrance spans the same
/// `lead_len * lead_ms` as the lead title. Rounded to the nearest ms.
pub fn synchronized_stagger(lead_len: usize, lead_ms: u32, own_len: usize) -> u32 {
    if own_len == 0 {
        return lead_ms;
    }
    let total = lead_len as u64 * u64::from(lead_ms);
    let own = own_len as u64;
    let rounded = (total + own / 2) / own;
    u32::try_from(rounded).unwrap_or(u32::MAX)
}

/// Animation timing for the page.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Timing {
    pub name_stagger_ms: u32,
    pub section_stagger: Stagger,
    /// Delay increment between consecutive project cards.
    pub card_stagger_ms: u32,
    /// Length of each unit's entrance animation.
    pub entrance_ms: u32,
    pub hover: HoverAnimation,
    pub overlap: OverlapPolicy,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            name_stagger_ms: 50,
            section_stagger: Stagger::Fixed(88),
            card_stagger_ms: 100,
            entrance_ms: 420,
            hover: HoverAnimation::default(),
            overlap: OverlapPolicy::Restart,
        }
    }
}

/// A complete portfolio page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default = "default_section_title")]
    pub section_title: String,
    #[serde(default)]
    pub footer: String,
    #[serde(default = "default_lang")]
    pub lang: String,
    #[serde(default)]
    pub projects: Vec<ProjectEntry>,
    #[serde(default)]
    pub timing: Timing,
}

fn default_section_title() -> String {
    "My Works".to_string()
}

fn default_lang() -> String {
    "en".to_string()
}

impl Profile {
    /// An empty profile with default settings.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            image: None,
            tagline: String::new(),
            bio: String::new(),
            email: None,
            section_title: default_section_title(),
            footer: String::new(),
            lang: default_lang(),
            projects: Vec::new(),
            timing: Timing::default(),
        }
    }

    /// The stock portfolio with its six projects.
    pub fn builtin() -> Self {
        use StylePreset::*;

        Self {
            image: Some("icn.png".to_string()),
            tagline: "🔥 Adding to my Infinite Aura.".to_string(),
            bio: "A creative developer, poet, and athlete passionate about building innovative \
                  solutions, expressing through words, and excelling on the cricket field. \
                  Exploring the intersection of technology, art, and sports in everything I do."
                .to_string(),
            email: Some("rulhaniachotu@gmail.com".to_string()),
            footer: "© 2026 Ayaan Rulhania. Built with Rust & Modern CSS".to_string(),
            projects: vec![
                ProjectEntry::new(
                    "Atlas AI",
                    "An AI developed for making it more personalized and learning how the mind of \
                     an AI actually works. Simplicity mixed with Professionalism and Creativity, \
                     powered by our latest model, Thor 1.1.",
                    "https://atlas-ai-zeta.vercel.app/",
                    Gradient1,
                ),
                ProjectEntry::new(
                    "Quantum Web Solutions",
                    "A full suite of professional services with slick, elegant UI! Comprehensive \
                     web solutions for modern businesses.",
                    "https://quantumwebsolutions.netlify.app/",
                    Gradient2,
                ),
                ProjectEntry::new(
                    "Arcade Hub",
                    "An interactive gaming platform featuring a collection of engaging arcade \
                     games and entertainment experiences.",
                    "https://arcade-indol-six.vercel.app/",
                    Gradient3,
                ),
                ProjectEntry::new(
                    "GitHub",
                    "Explore my code repositories, contributions, and open-source projects. \
                     Researching AI and Quantum computing.",
                    "https://github.com/ayaan-rulhania",
                    Gradient4,
                ),
                ProjectEntry::new(
                    "AllPoetry",
                    "A collection of my poetry and creative writing. Exploring emotions, \
                     thoughts, and stories through verse and prose.",
                    "https://allpoetry.com/Ayaan_Rulhania",
                    Gradient1,
                ),
                ProjectEntry::new(
                    "Cricket Profile",
                    "My cricket career and statistics at Blazers Cricket Academy. Passionate \
                     about the sport and dedicated to continuous improvement.",
                    "https://cricclubs.com/BlazersCricketAcademy/viewPlayer.do?playerId=5175263&clubId=1004797",
                    Gradient2,
                ),
            ],
            ..Self::named("Ayaan Rulhania")
        }
    }

    /// Stagger actually used for the section title.
    pub fn section_stagger_ms(&self) -> u32 {
        self.timing.section_stagger.resolve(
            self.name.chars().count(),
            self.timing.name_stagger_ms,
            self.section_title.chars().count(),
        )
    }

    /// Entrance delay of the card at `index` in the grid.
    pub fn card_delay_ms(&self, index: usize) -> u64 {
        index as u64 * u64::from(self.timing.card_stagger_ms)
    }

    pub fn from_json(src: &str) -> crate::error::Result<Self> {
        Ok(serde_json::from_str(src)?)
    }

    pub fn to_json(&self) -> crate::error::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
