//! Lowering turns the untyped AST into a [`Profile`].
//!
//! Unknown property names are warnings (the value is ignored). A known name
//! with the wrong kind of value is an error pointing at the property.

use std::collections::HashSet;

use crate::ast::{FolioFile, ProjectBlock, Property, SettingsBlock, Value};
use crate::error::{FolioError, Result};
use crate::kinetic::{CubicBezier, OverlapPolicy};
use crate::profile::{Profile, ProjectEntry, Stagger, StylePreset, Timing};

/// Lower a parsed file. Returns the profile and any lowering warnings.
pub fn lower(file: &FolioFile) -> Result<(Profile, Vec<String>)> {
    let mut warnings = Vec::new();
    let mut profile = Profile::named(file.name.clone());

    check_duplicates("folio", &file.properties, &mut warnings);
    for prop in &file.properties {
        match prop.name.as_str() {
            "image" => profile.image = Some(expect_str(prop)?),
            "tagline" => profile.tagline = expect_str(prop)?,
            "bio" => profile.bio = expect_str(prop)?,
            "email" => profile.email = Some(expect_str(prop)?),
            "section" => profile.section_title = expect_str(prop)?,
            "footer" => profile.footer = expect_str(prop)?,
            "lang" => profile.lang = expect_str(prop)?,
            other => warnings.push(format!("unknown folio property '{other}' ignored")),
        }
    }

    if let Some(block) = &file.kinetic {
        lower_kinetic(block, &mut profile.timing, &mut warnings)?;
    }
    if let Some(block) = &file.hover {
        lower_hover(block, &mut profile.timing, &mut warnings)?;
    }

    for (index, block) in file.projects.iter().enumerate() {
        profile
            .projects
            .push(lower_project(block, index, &mut warnings)?);
    }

    tracing::debug!(
        name = %profile.name,
        projects = profile.projects.len(),
        warnings = warnings.len(),
        "lowered folio"
    );
    Ok((profile, warnings))
}

fn lower_kinetic(block: &SettingsBlock, timing: &mut Timing, warnings: &mut Vec<String>) -> Result<()> {
    check_duplicates("kinetic", &block.properties, warnings);
    for prop in &block.properties {
        match prop.name.as_str() {
            "name" => timing.name_stagger_ms = expect_ms(prop)?,
            "section" => {
                timing.section_stagger = match &prop.value {
                    Value::Ident(word) if word == "auto" => Stagger::Auto,
                    _ => Stagger::Fixed(expect_ms(prop)?),
                }
            }
            "cards" => timing.card_stagger_ms = expect_ms(prop)?,
            "entrance" => timing.entrance_ms = expect_ms(prop)?,
            other => warnings.push(format!("unknown kinetic setting '{other}' ignored")),
        }
    }
    Ok(())
}

fn lower_hover(block: &SettingsBlock, timing: &mut Timing, warnings: &mut Vec<String>) -> Result<()> {
    check_duplicates("hover", &block.properties, warnings);
    let hover = &mut timing.hover;
    for prop in &block.properties {
        match prop.name.as_str() {
            "duration" => hover.duration_ms = expect_ms(prop)?,
            "stagger" => hover.stagger_ms = expect_ms(prop)?,
            "lift" => hover.lift_px = expect_number(prop)?,
            "scale" => hover.scale = expect_number(prop)?,
            "ease" => hover.easing = expect_easing(prop)?,
            "overlap" => timing.overlap = expect_policy(prop)?,
            other => warnings.push(format!("unknown hover setting '{other}' ignored")),
        }
    }
    Ok(())
}

fn lower_project(block: &ProjectBlock, index: usize, warnings: &mut Vec<String>) -> Result<ProjectEntry> {
    let owner = format!("project '{}'", block.title);
    check_duplicates(&owner, &block.properties, warnings);

    let mut description = String::new();
    let mut link = None;
    // Presets cycle through the grid unless a card picks its own.
    let mut style = StylePreset::ALL[index % StylePreset::ALL.len()];

    for prop in &block.properties {
        match prop.name.as_str() {
            "description" => description = expect_str(prop)?,
            "link" => link = Some(expect_str(prop)?),
            "style" => style = expect_preset(prop)?,
            other => warnings.push(format!("{owner}: unknown property '{other}' ignored")),
        }
    }

    let link = link.ok_or_else(|| FolioError::missing_field(&owner, "link", Some(block.span.clone())))?;

    Ok(ProjectEntry {
        title: block.title.clone(),
        description,
        link,
        style,
    })
}

// ── Value helpers ──────────────────────────────────────────────────────

fn check_duplicates(owner: &str, props: &[Property], warnings: &mut Vec<String>) {
    let mut seen = HashSet::new();
    for prop in props {
        if !seen.insert(prop.name.as_str()) {
            warnings.push(format!(
                "{owner}: '{}' set more than once, last value wins",
                prop.name
            ));
        }
    }
}

fn type_error(prop: &Property, expected: &str) -> FolioError {
    FolioError::at(
        &format!(
            "'{}' expects {expected}, got {}",
            prop.name,
            prop.value.describe()
        ),
        prop.span.clone(),
    )
}

fn expect_str(prop: &Property) -> Result<String> {
    match &prop.value {
        Value::Str(s) => Ok(s.clone()),
        _ => Err(type_error(prop, "a string")),
    }
}

fn expect_number(prop: &Property) -> Result<f64> {
    prop.value
        .as_number()
        .ok_or_else(|| type_error(prop, "a number"))
}

fn expect_ms(prop: &Property) -> Result<u32> {
    match &prop.value {
        Value::Int(v) => u32::try_from(*v).map_err(|_| {
            FolioError::at(
                &format!("'{}' is out of range: {v}ms", prop.name),
                prop.span.clone(),
            )
        }),
        _ => Err(type_error(prop, "whole milliseconds")),
    }
}

fn expect_easing(prop: &Property) -> Result<CubicBezier> {
    let curve = match &prop.value {
        Value::Ident(word) if word == "pop" => CubicBezier::POP,
        Value::Call { name, args } if name == "cubic" => match args.as_slice() {
            [x1, y1, x2, y2] => CubicBezier::new(*x1, *y1, *x2, *y2),
            _ => {
                return Err(FolioError::at(
                    &format!("cubic() takes 4 arguments, got {}", args.len()),
                    prop.span.clone(),
                ))
            }
        },
        _ => return Err(type_error(prop, "'pop' or cubic(x1, y1, x2, y2)")),
    };
    if !curve.is_valid() {
        return Err(FolioError::at(
            "cubic() x control points must lie in 0..1",
            prop.span.clone(),
        ));
    }
    Ok(curve)
}

fn expect_policy(prop: &Property) -> Result<OverlapPolicy> {
    match &prop.value {
        Value::Ident(word) => OverlapPolicy::from_name(word).ok_or_else(|| {
            FolioError::at(
                &format!("unknown overlap policy '{word}' (expected overlap, restart, or ignore)"),
                prop.span.clone(),
            )
        }),
        _ => Err(type_error(prop, "overlap, restart, or ignore")),
    }
}

fn expect_preset(prop: &Property) -> Result<StylePreset> {
    let name = match &prop.value {
        Value::Ident(s) | Value::Str(s) => s,
        _ => return Err(type_error(prop, "a style preset")),
    };
    name.parse()
        .map_err(|()| FolioError::unknown_preset(name, Some(prop.span.clone())))
}
