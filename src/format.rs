//! Per-field formatting types and their application to paragraphs.
//!
//! A [`FormatSpec`] is a bag of optional properties. Applying one touches only
//! the properties that are set; everything else keeps whatever the template
//! author chose. Sizes are given in points and converted to the units OOXML
//! stores (half-points for `w:sz`, twentieths of a point for `w:spacing`).

use docx_rs::{
    AlignmentType, Bold, BoldCs, CharacterSpacing, Paragraph, ParagraphChild, RunFonts, Sz, SzCs,
};
use serde::{Deserialize, Serialize};

/// Paragraph text alignment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Left alignment (default)
    #[default]
    Left,
    /// Center alignment
    Center,
    /// Right alignment
    Right,
    /// Justified alignment
    Justify,
}

impl Alignment {
    /// The OOXML `w:jc` value for this alignment ("both" means justified).
    fn as_alignment_type(self) -> AlignmentType {
        match self {
            Alignment::Left => AlignmentType::Left,
            Alignment::Center => AlignmentType::Center,
            Alignment::Right => AlignmentType::Right,
            Alignment::Justify => AlignmentType::Both,
        }
    }
}

/// Formatting applied to a replaced paragraph.
///
/// `None` fields leave the existing run and paragraph properties untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormatSpec {
    /// Paragraph alignment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alignment: Option<Alignment>,

    /// Font size in points
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f32>,

    /// Font family name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_name: Option<String>,

    /// Bold on or off (`Some(false)` disables inherited bold)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bold: Option<bool>,

    /// Letter spacing in points
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub character_spacing: Option<f32>,
}

impl FormatSpec {
    /// Create an empty format that changes nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the paragraph alignment.
    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = Some(alignment);
        self
    }

    /// Set the font size in points.
    pub fn with_font_size(mut self, points: f32) -> Self {
        self.font_size = Some(points);
        self
    }

    /// Set the font family name.
    pub fn with_font_name(mut self, name: impl Into<String>) -> Self {
        self.font_name = Some(name.into());
        self
    }

    /// Set or clear bold.
    pub fn with_bold(mut self, bold: bool) -> Self {
        self.bold = Some(bold);
        self
    }

    /// Set the letter spacing in points.
    pub fn with_character_spacing(mut self, points: f32) -> Self {
        self.character_spacing = Some(points);
        self
    }

    /// Check if any property is set.
    pub fn has_formatting(&self) -> bool {
        self.alignment.is_some()
            || self.font_size.is_some()
            || self.font_name.is_some()
            || self.bold.is_some()
            || self.character_spacing.is_some()
    }
}

/// Font size in points to the half-point units of `w:sz`.
pub(crate) fn points_to_half_points(points: f32) -> usize {
    (points * 2.0).round().max(0.0) as usize
}

/// Letter spacing in points to the twentieths of a point of `w:spacing`.
pub(crate) fn points_to_twentieths(points: f32) -> i32 {
    (points * 20.0).round() as i32
}

/// Apply `format` to the paragraph and every run it currently holds.
///
/// Idempotent: applying the same format twice yields the same properties.
pub fn apply_format(paragraph: &mut Paragraph, format: &FormatSpec) {
    if let Some(alignment) = format.alignment {
        paragraph.property = paragraph
            .property
            .clone()
            .align(alignment.as_alignment_type());
    }

    for child in paragraph.children.iter_mut() {
        if let ParagraphChild::Run(run) = child {
            let property = &mut run.run_property;

            if let Some(points) = format.font_size {
                let half_points = points_to_half_points(points);
                property.sz = Some(Sz::new(half_points));
                property.sz_cs = Some(SzCs::new(half_points));
            }

            if let Some(name) = &format.font_name {
                property.fonts = Some(RunFonts::new().ascii(name.as_str()).hi_ansi(name.as_str()));
            }

            if let Some(bold) = format.bold {
                if bold {
                    property.bold = Some(Bold::new());
                    property.bold_cs = Some(BoldCs::new());
                } else {
                    property.bold = Some(Bold::new().disable());
                    property.bold_cs = Some(BoldCs::new().disable());
                }
            }

            if let Some(points) = format.character_spacing {
                property.character_spacing =
                    Some(CharacterSpacing::new(points_to_twentieths(points)));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docx_rs::{Justification, Run};

    fn two_run_paragraph() -> Paragraph {
        Paragraph::new()
            .add_run(Run::new().add_text("Hello "))
            .add_run(Run::new().add_text("world"))
    }

    #[test]
    fn test_half_point_conversion() {
        assert_eq!(points_to_half_points(24.0), 48);
        assert_eq!(points_to_half_points(12.5), 25);
        assert_eq!(points_to_half_points(0.0), 0);
    }

    #[test]
    fn test_twentieths_conversion() {
        assert_eq!(points_to_twentieths(2.0), 40);
        assert_eq!(points_to_twentieths(0.05), 1);
        assert_eq!(points_to_twentieths(0.0), 0);
    }

    #[test]
    fn test_empty_format_changes_nothing() {
        let mut paragraph = two_run_paragraph();
        let before = paragraph.clone();
        apply_format(&mut paragraph, &FormatSpec::new());
        assert_eq!(
            format!("{:?}", paragraph.children),
            format!("{:?}", before.children)
        );
        assert!(!FormatSpec::new().has_formatting());
    }

    #[test]
    fn test_apply_sets_every_run() {
        let mut paragraph = two_run_paragraph();
        let format = FormatSpec::new()
            .with_alignment(Alignment::Center)
            .with_font_size(24.0)
            .with_bold(true);
        apply_format(&mut paragraph, &format);

        assert_eq!(
            paragraph.property.alignment,
            Some(Justification::new(AlignmentType::Center.to_string()))
        );
        for child in &paragraph.children {
            if let ParagraphChild::Run(run) = child {
                assert_eq!(run.run_property.sz, Some(Sz::new(48)));
                assert_eq!(run.run_property.bold, Some(Bold::new()));
            }
        }
    }

    #[test]
    fn test_justify_maps_to_both() {
        let mut paragraph = two_run_paragraph();
        apply_format(
            &mut paragraph,
            &FormatSpec::new().with_alignment(Alignment::Justify),
        );
        assert_eq!(
            paragraph.property.alignment,
            Some(Justification::new("both"))
        );
    }

    #[test]
    fn test_font_and_spacing() {
        let mut paragraph = Paragraph::new().add_run(Run::new().add_text("x"));
        let format = FormatSpec::new()
            .with_font_name("Poppins")
            .with_character_spacing(2.0);
        apply_format(&mut paragraph, &format);

        if let Some(ParagraphChild::Run(run)) = paragraph.children.first() {
            assert_eq!(
                run.run_property.fonts,
                Some(RunFonts::new().ascii("Poppins").hi_ansi("Poppins"))
            );
            assert_eq!(
                run.run_property.character_spacing,
                Some(CharacterSpacing::new(40))
            );
        } else {
            panic!("paragraph lost its run");
        }
    }

    #[test]
    fn test_serde_roundtrip() {
        let format = FormatSpec::new()
            .with_alignment(Alignment::Center)
            .with_font_size(60.0)
            .with_font_name("Arial")
            .with_bold(true)
            .with_character_spacing(2.0);
        let json = serde_json::to_string(&format).unwrap();
        let back: FormatSpec = serde_json::from_str(&json).unwrap();
        assert_eq!(back, format);
        assert!(json.contains("\"center\""));
    }
}
