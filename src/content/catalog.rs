// SPDX-License-Identifier: MPL-2.0
//! Built-in catalog records.
//!
//! One flagship project plus two placeholder slots, and the skill tiles.
//! Asset paths are relative to the crate root and resolved at render time.

use super::{ImageRef, MotionRef, ShowcaseItem, SkillEntry};

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| (*s).to_string()).collect()
}

pub(super) fn showcase_items() -> Vec<ShowcaseItem> {
    // Drawing sheet numbering follows the source document set, which has no
    // sheet 09.
    let drawing_sheets = [
        "sheet-01", "sheet-02", "sheet-03", "sheet-04", "sheet-05", "sheet-06", "sheet-07",
        "sheet-08", "sheet-10",
    ];

    let mut items = vec![ShowcaseItem {
        id: "scissor-jack".to_string(),
        title: "SCISSOR JACK".to_string(),
        subtitle: "CAR LIFTING MECHANISM".to_string(),
        category: "Mechanical Design".to_string(),
        year: "2025".to_string(),
        tags: strings(&["SolidWorks", "Motion Study", "Assembly", "Technical Drawing"]),
        problem: "Design a compact, reliable car-lifting scissor jack that converts rotary \
                  screw motion into powerful vertical lift through a crossed-linkage mechanism."
            .to_string(),
        solution: "A fully modelled scissor jack with lead screw actuation, pivot joints, and \
                   lifting pad, designed for real-world load transfer and ease of manufacture."
            .to_string(),
        primary: ImageRef::new("assets/content/scissor-jack/assembly.png"),
        exploded: Some(ImageRef::new("assets/content/scissor-jack/exploded.png")),
        motion: Some(MotionRef::new(
            "assets/content/scissor-jack/lift-cycle.mp4",
        )),
        drawings: drawing_sheets
            .iter()
            .map(|sheet| {
                ImageRef::new(format!("assets/content/scissor-jack/drawings/{sheet}.jpg"))
            })
            .collect(),
        specs: strings(&[
            "Lead Screw Actuation",
            "Crossed-Linkage Arms",
            "Pivot Joint Design",
            "2-Tonne Capacity",
        ]),
        placeholder: false,
    }];

    for slot in ["coming-soon-01", "coming-soon-02"] {
        items.push(ShowcaseItem {
            id: slot.to_string(),
            title: "COMING SOON".to_string(),
            subtitle: "IN DEVELOPMENT".to_string(),
            category: "Mechanical Design".to_string(),
            year: "2025".to_string(),
            tags: strings(&["SolidWorks"]),
            problem: "New project in development.".to_string(),
            solution: "Details coming soon.".to_string(),
            primary: ImageRef::new("assets/content/placeholder/teaser.jpg"),
            exploded: None,
            motion: None,
            drawings: Vec::new(),
            specs: Vec::new(),
            placeholder: true,
        });
    }

    items
}

pub(super) fn skill_entries() -> Vec<SkillEntry> {
    vec![
        SkillEntry {
            id: "skill-cad-design".to_string(),
            title: "CAD DESIGN".to_string(),
            subtitle: "SOLIDWORKS, FUSION 360".to_string(),
            description: "3D modelling and product development. Parts, assemblies, and full \
                          mechanisms from scratch with precision and intent."
                .to_string(),
            image: ImageRef::new("assets/content/skills/cad-design.jpg"),
        },
        SkillEntry {
            id: "skill-mechanical-systems".to_string(),
            title: "MECHANICAL SYSTEMS".to_string(),
            subtitle: "KINEMATICS, STATICS".to_string(),
            description: "Linkages, mechanisms, and motion transfer. Understanding how forces \
                          move through a structure and designing accordingly."
                .to_string(),
            image: ImageRef::new("assets/content/skills/mechanical-systems.jpg"),
        },
        SkillEntry {
            id: "skill-technical-drawings".to_string(),
            title: "TECHNICAL DRAWINGS".to_string(),
            subtitle: "GD&T, ANSI/ISO".to_string(),
            description: "Manufacturing-ready documentation with proper dimensioning, \
                          tolerances, and geometric specifications that communicate design \
                          intent."
                .to_string(),
            image: ImageRef::new("assets/content/skills/technical-drawings.jpg"),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flagship_item_comes_first() {
        let items = showcase_items();
        assert_eq!(items[0].id, "scissor-jack");
        assert_eq!(items.len(), 3);
    }

    #[test]
    fn drawing_sheets_are_ordered() {
        let items = showcase_items();
        let sheets: Vec<&str> = items[0]
            .drawings
            .iter()
            .map(|d| d.as_str())
            .collect();
        assert_eq!(sheets.len(), 9);
        assert!(sheets[0].ends_with("sheet-01.jpg"));
        assert!(sheets[8].ends_with("sheet-10.jpg"));
        let mut sorted = sheets.clone();
        sorted.sort_unstable();
        assert_eq!(sheets, sorted);
    }

    #[test]
    fn skill_ids_carry_namespace_prefix() {
        for skill in skill_entries() {
            assert!(skill.id.starts_with("skill-"), "id: {}", skill.id);
        }
    }
}
