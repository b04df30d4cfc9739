use std::collections::HashSet;

use crate::profile::{Profile, Stagger};

/// Non-fatal checks over a lowered profile.
pub fn validate(profile: &Profile) -> Vec<String> {
    let mut warnings = Vec::new();

    if profile.name.trim().is_empty() {
        warnings.push("name is empty; the name title has nothing to animate".to_string());
    }
    if profile.section_title.trim().is_empty() {
        warnings.push("section title is empty; it has nothing to animate".to_string());
    }

    if let Some(email) = &profile.email {
        if !email.contains('@') {
            warnings.push(format!("email '{email}' has no '@'"));
        }
    }

    if profile.projects.is_empty() {
        warnings.push("no projects; the grid will be empty".to_string());
    }

    let mut titles = HashSet::new();
    for project in &profile.projects {
        if !titles.insert(project.title.as_str()) {
            warnings.push(format!("duplicate project title '{}'", project.title));
        }
        if !is_web_link(&project.link) {
            warnings.push(format!(
                "project '{}': link '{}' is not an http(s) URL",
                project.title, project.link
            ));
        }
    }

    let timing = &profile.timing;
    if timing.name_stagger_ms == 0 {
        warnings.push("kinetic name stagger is 0; every character enters at once".to_string());
    }
    if timing.section_stagger == Stagger::Fixed(0) {
        warnings.push("section stagger is 0; every character enters at once".to_string());
    }
    if timing.card_stagger_ms == 0 {
        warnings.push("card stagger is 0; every card enters at once".to_string());
    }
    if timing.hover.stagger_ms == 0 {
        warnings.push("hover stagger is 0; every character pops at once".to_string());
    }
    if timing.hover.duration_ms == 0 {
        warnings.push("hover duration is 0; the pop animation is invisible".to_string());
    }

    warnings
}

fn is_web_link(link: &str) -> bool {
    let lower = link.to_ascii_lowercase();
    ["https://", "http://"]
        .iter()
        .any(|scheme| lower.starts_with(scheme) && lower.len() > scheme.len())
}
