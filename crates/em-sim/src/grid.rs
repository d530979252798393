//! Spatial snapshot: every employer and individual as a coloured grid cell.

use em_agent::{AgentStore, Employer, Individual};

/// Employer cells are always this grey.
const EMPLOYER_COLOR: &str = "#888888";

/// Years over which a person's colour fades from light to saturated.
const COLOR_FADE_YEARS: f64 = 5.0;

const EMPLOYED_LIGHT: [f64; 3] = [0.5, 0.5, 1.0];
const EMPLOYED_DARK: [f64; 3] = [0.0, 0.0, 1.0];
const UNEMPLOYED_LIGHT: [f64; 3] = [1.0, 0.5, 0.5];
const UNEMPLOYED_DARK: [f64; 3] = [1.0, 0.0, 0.0];

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum EntityKind {
    Employer,
    Person,
}

/// One rendered entity.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridItem {
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind:  EntityKind,
    pub x:     usize,
    pub y:     usize,
    pub color: String,
    pub info:  String,
}

/// Employers first, then individuals in population order.
pub fn render(agents: &AgentStore) -> Vec<GridItem> {
    let employers = agents.employers.iter().map(|e| {
        let (x, y) = agents.locations.grid_position(e.placement);
        GridItem {
            kind:  EntityKind::Employer,
            x,
            y,
            color: EMPLOYER_COLOR.to_string(),
            info:  employer_info(e),
        }
    });
    let people = agents.individuals().map(|p| {
        let (x, y) = agents.locations.grid_position(p.placement);
        GridItem {
            kind:  EntityKind::Person,
            x,
            y,
            color: person_color(p),
            info:  person_info(p),
        }
    });
    employers.chain(people).collect()
}

fn employer_info(e: &Employer) -> String {
    format!("Employer: net ${:.2}", e.total.net)
}

fn person_color(p: &Individual) -> String {
    if p.is_employed() {
        color_blend(EMPLOYED_LIGHT, EMPLOYED_DARK, p.tenure / COLOR_FADE_YEARS)
    } else {
        color_blend(UNEMPLOYED_LIGHT, UNEMPLOYED_DARK, p.idle_years / COLOR_FADE_YEARS)
    }
}

fn person_info(p: &Individual) -> String {
    let traits: Vec<&str> = p.traits.positives().collect();
    let (status, years) = if p.is_employed() {
        ("employed", p.tenure)
    } else {
        ("unemployed", p.idle_years)
    };
    format!(
        "Person: {}\n{:.1} years old\n{} for {:.1} years",
        traits.join(", "),
        p.age,
        status,
        years
    )
}

/// Linear blend of two RGB colours in `[0, 1]`, formatted `#rrggbb`.
/// `blend` is clamped to `[0, 1]`.
pub fn color_blend(from: [f64; 3], to: [f64; 3], blend: f64) -> String {
    let t = blend.clamp(0.0, 1.0);
    let c: Vec<u8> = from
        .iter()
        .zip(&to)
        .map(|(a, b)| ((a * (1.0 - t) + b * t) * 255.0) as u8)
        .collect();
    format!("#{:02x}{:02x}{:02x}", c[0], c[1], c[2])
}
