// SPDX-License-Identifier: MPL-2.0
//! Static showcase content supplied to the engine at startup.
//!
//! Content records are immutable for the process lifetime. The engine never
//! mutates them; it only keys its state by their identifiers. Validation
//! happens once at load time, so downstream code can trust the records.

pub mod catalog;

use crate::error::ContentError;
use std::borrow::Cow;
use std::collections::HashSet;
use std::path::PathBuf;

/// Reference to an image asset shipped with the application.
///
/// Stored as a relative path under the crate's `assets/` tree. Resolution to
/// a filesystem path happens at render time; a missing file degrades to an
/// empty image area, never to an error.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageRef(Cow<'static, str>);

impl ImageRef {
    pub fn new(path: impl Into<Cow<'static, str>>) -> Self {
        Self(path.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn to_path(&self) -> PathBuf {
        PathBuf::from(self.0.as_ref())
    }
}

/// Reference to a motion clip associated with an item.
///
/// Playback is out of scope; the reference is presented as-is in the
/// motion-study tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MotionRef(Cow<'static, str>);

impl MotionRef {
    pub fn new(path: impl Into<Cow<'static, str>>) -> Self {
        Self(path.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// File stem shown as the clip caption.
    #[must_use]
    pub fn caption(&self) -> String {
        PathBuf::from(self.0.as_ref())
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| self.0.to_string())
    }
}

/// A single showcase entry: one design project and its media.
#[derive(Debug, Clone)]
pub struct ShowcaseItem {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub category: String,
    pub year: String,
    pub tags: Vec<String>,
    pub problem: String,
    pub solution: String,
    /// Primary render image; every item has one.
    pub primary: ImageRef,
    /// Optional exploded/sketch view; the primary image stands in when absent.
    pub exploded: Option<ImageRef>,
    /// Optional motion clip reference.
    pub motion: Option<MotionRef>,
    /// Ordered technical drawing sheets; may be empty.
    pub drawings: Vec<ImageRef>,
    pub specs: Vec<String>,
    /// Marked not-yet-available. Placeholder items render inert cards and the
    /// shell never issues expand requests for them.
    pub placeholder: bool,
}

impl ShowcaseItem {
    /// Whether the item accepts interaction (expand, tabs, lightbox).
    #[must_use]
    pub fn is_available(&self) -> bool {
        !self.placeholder
    }

    /// The image shown in the exploded-view tab: the dedicated exploded
    /// render when present, the primary render otherwise.
    #[must_use]
    pub fn exploded_or_primary(&self) -> &ImageRef {
        self.exploded.as_ref().unwrap_or(&self.primary)
    }
}

/// A skill tile: title plus expandable detail copy.
#[derive(Debug, Clone)]
pub struct SkillEntry {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub image: ImageRef,
}

/// The full content catalog handed to the application at startup.
#[derive(Debug, Clone)]
pub struct Catalog {
    items: Vec<ShowcaseItem>,
    skills: Vec<SkillEntry>,
}

/// The built-in records without the validation pass; [`Catalog::load`] is
/// the checked path. The built-in data is covered by tests, so the two only
/// differ when the records are edited carelessly.
impl Default for Catalog {
    fn default() -> Self {
        Self {
            items: catalog::showcase_items(),
            skills: catalog::skill_entries(),
        }
    }
}

impl Catalog {
    /// Builds and validates the built-in catalog.
    pub fn load() -> Result<Self, ContentError> {
        let catalog = Self {
            items: catalog::showcase_items(),
            skills: catalog::skill_entries(),
        };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Builds a catalog from explicit records, validating them.
    /// Used by tests and by any future external content source.
    pub fn from_parts(
        items: Vec<ShowcaseItem>,
        skills: Vec<SkillEntry>,
    ) -> Result<Self, ContentError> {
        let catalog = Self { items, skills };
        catalog.validate()?;
        Ok(catalog)
    }

    #[must_use]
    pub fn items(&self) -> &[ShowcaseItem] {
        &self.items
    }

    #[must_use]
    pub fn skills(&self) -> &[SkillEntry] {
        &self.skills
    }

    /// Looks up a showcase item by identifier.
    #[must_use]
    pub fn item(&self, id: &str) -> Option<&ShowcaseItem> {
        self.items.iter().find(|item| item.id == id)
    }

    fn validate(&self) -> Result<(), ContentError> {
        if self.items.is_empty() {
            return Err(ContentError::EmptyCatalog);
        }

        let mut seen = HashSet::new();
        for item in &self.items {
            if item.id.is_empty() {
                return Err(ContentError::EmptyItemId);
            }
            if !seen.insert(item.id.as_str()) {
                return Err(ContentError::DuplicateItemId(item.id.clone()));
            }
            if item.primary.as_str().is_empty() {
                return Err(ContentError::MissingPrimaryImage(item.id.clone()));
            }
        }

        // Skill ids share the same namespace as item ids in the engine's
        // disclosure map, so they must not collide either.
        for skill in &self.skills {
            if skill.id.is_empty() {
                return Err(ContentError::EmptyItemId);
            }
            if !seen.insert(skill.id.as_str()) {
                return Err(ContentError::DuplicateItemId(skill.id.clone()));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_item(id: &str) -> ShowcaseItem {
        ShowcaseItem {
            id: id.to_string(),
            title: "TEST ITEM".to_string(),
            subtitle: "TEST".to_string(),
            category: "Testing".to_string(),
            year: "2026".to_string(),
            tags: vec![],
            problem: String::new(),
            solution: String::new(),
            primary: ImageRef::new("assets/content/test/primary.png"),
            exploded: None,
            motion: None,
            drawings: vec![],
            specs: vec![],
            placeholder: false,
        }
    }

    #[test]
    fn builtin_catalog_is_valid() {
        let catalog = Catalog::load().expect("builtin catalog must validate");
        assert!(!catalog.items().is_empty());
    }

    #[test]
    fn builtin_catalog_has_flagship_item() {
        let catalog = Catalog::load().expect("builtin catalog must validate");
        let item = catalog.item("scissor-jack").expect("flagship item exists");
        assert!(item.is_available());
        assert_eq!(item.drawings.len(), 9);
        assert!(item.motion.is_some());
        assert!(item.exploded.is_some());
    }

    #[test]
    fn builtin_placeholders_have_no_drawings() {
        let catalog = Catalog::load().expect("builtin catalog must validate");
        for item in catalog.items().iter().filter(|i| i.placeholder) {
            assert!(item.drawings.is_empty());
            assert!(item.motion.is_none());
        }
    }

    #[test]
    fn empty_catalog_is_rejected() {
        let result = Catalog::from_parts(vec![], vec![]);
        assert!(matches!(result, Err(ContentError::EmptyCatalog)));
    }

    #[test]
    fn duplicate_item_ids_are_rejected() {
        let result = Catalog::from_parts(vec![minimal_item("a"), minimal_item("a")], vec![]);
        assert!(matches!(result, Err(ContentError::DuplicateItemId(id)) if id == "a"));
    }

    #[test]
    fn skill_id_colliding_with_item_id_is_rejected() {
        let skill = SkillEntry {
            id: "a".to_string(),
            title: "SKILL".to_string(),
            subtitle: String::new(),
            description: String::new(),
            image: ImageRef::new("assets/content/test/skill.png"),
        };
        let result = Catalog::from_parts(vec![minimal_item("a")], vec![skill]);
        assert!(matches!(result, Err(ContentError::DuplicateItemId(_))));
    }

    #[test]
    fn missing_primary_image_is_rejected() {
        let mut item = minimal_item("a");
        item.primary = ImageRef::new("");
        let result = Catalog::from_parts(vec![item], vec![]);
        assert!(matches!(
            result,
            Err(ContentError::MissingPrimaryImage(id)) if id == "a"
        ));
    }

    #[test]
    fn exploded_or_primary_falls_back() {
        let mut item = minimal_item("a");
        assert_eq!(item.exploded_or_primary(), &item.primary.clone());

        item.exploded = Some(ImageRef::new("assets/content/test/exploded.png"));
        assert_eq!(
            item.exploded_or_primary().as_str(),
            "assets/content/test/exploded.png"
        );
    }

    #[test]
    fn motion_ref_caption_uses_file_stem() {
        let motion = MotionRef::new("assets/content/test/lift-cycle.mp4");
        assert_eq!(motion.caption(), "lift-cycle");
    }
}
