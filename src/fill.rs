//! Placeholder matching, replacement, and fill orchestration.
//!
//! A template carries three placeholder paragraphs (name, company, date).
//! Name and date are matched by trimmed-text equality and replaced whole;
//! the company placeholder is matched by containment and substituted in
//! place, keeping the surrounding text. The distinction is deliberate and
//! named ([`MatchMode`]), not an accident of per-field code paths.

use std::path::Path;

use docx_rs::Docx;
use serde::{Deserialize, Serialize};

use crate::document::{load_docx, paragraph_text, paragraphs_mut, save_docx, set_paragraph_text};
use crate::error::Result;
use crate::fonts::{FontCatalog, DEFAULT_FALLBACK_FONT};
use crate::format::{apply_format, Alignment, FormatSpec};

/// Placeholder the name value replaces (trimmed-equality match).
pub const NAME_PLACEHOLDER: &str = "Ally  Farah";

/// Placeholder the company value replaces (substring match).
pub const COMPANY_PLACEHOLDER: &str = "JEBSEN GROUP";

/// Placeholder the date value replaces (trimmed-equality match).
pub const DATE_PLACEHOLDER: &str = "AUGUST 7 – 8 , 2025";

/// How a placeholder pattern is matched against paragraph text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// Trimmed paragraph text equals the pattern; the whole text is replaced.
    Exact,
    /// Paragraph text contains the pattern; only the pattern is replaced,
    /// surrounding text is preserved.
    Substring,
}

/// A placeholder pattern together with its match mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matcher {
    pattern: String,
    mode: MatchMode,
}

impl Matcher {
    /// Create a matcher with an explicit mode.
    pub fn new(pattern: impl Into<String>, mode: MatchMode) -> Self {
        Self {
            pattern: pattern.into(),
            mode,
        }
    }

    /// Trimmed-equality matcher (name and date placeholders).
    pub fn exact(pattern: impl Into<String>) -> Self {
        Self::new(pattern, MatchMode::Exact)
    }

    /// Containment matcher (company placeholder).
    pub fn substring(pattern: impl Into<String>) -> Self {
        Self::new(pattern, MatchMode::Substring)
    }

    /// The placeholder pattern.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// The match mode.
    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    /// Whether `text` matches this placeholder.
    ///
    /// An empty pattern never matches; it would otherwise match every
    /// paragraph in substring mode.
    pub fn matches(&self, text: &str) -> bool {
        if self.pattern.is_empty() {
            return false;
        }
        match self.mode {
            MatchMode::Exact => text.trim() == self.pattern,
            MatchMode::Substring => text.contains(&self.pattern),
        }
    }

    /// The replacement text for a matched paragraph.
    pub fn replacement(&self, text: &str, value: &str) -> String {
        match self.mode {
            MatchMode::Exact => value.to_string(),
            MatchMode::Substring => text.replace(&self.pattern, value),
        }
    }
}

/// Replace every matching top-level paragraph and format the result.
///
/// Returns the number of paragraphs replaced. Matching and replacement run
/// in document order; each replaced paragraph keeps its position but its
/// runs collapse to a single run carrying the new text, to which `format`
/// is then applied.
pub fn find_and_replace(
    docx: &mut Docx,
    matcher: &Matcher,
    value: &str,
    format: &FormatSpec,
) -> usize {
    let mut replaced = 0;
    for (index, paragraph) in paragraphs_mut(docx).enumerate() {
        let text = paragraph_text(paragraph);
        if !matcher.matches(&text) {
            continue;
        }

        set_paragraph_text(paragraph, matcher.replacement(&text, value));
        apply_format(paragraph, format);
        replaced += 1;
        log::info!(
            "replaced {:?} in paragraph {} ({:?} mode)",
            matcher.pattern(),
            index,
            matcher.mode()
        );
    }
    replaced
}

/// One placeholder field: what to look for, what to write, how to format it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldConfig {
    /// Placeholder text to locate
    pub placeholder: String,

    /// How the placeholder is matched
    pub mode: MatchMode,

    /// Replacement value
    pub value: String,

    /// Formatting applied to replaced paragraphs
    #[serde(default)]
    pub format: FormatSpec,
}

impl FieldConfig {
    /// Field with a trimmed-equality placeholder.
    pub fn exact(placeholder: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            placeholder: placeholder.into(),
            mode: MatchMode::Exact,
            value: value.into(),
            format: FormatSpec::default(),
        }
    }

    /// Field with a containment placeholder.
    pub fn substring(placeholder: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            placeholder: placeholder.into(),
            mode: MatchMode::Substring,
            value: value.into(),
            format: FormatSpec::default(),
        }
    }

    /// Set the replacement value.
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Set the formatting.
    pub fn with_format(mut self, format: FormatSpec) -> Self {
        self.format = format;
        self
    }

    fn matcher(&self) -> Matcher {
        Matcher::new(self.placeholder.clone(), self.mode)
    }
}

/// Configuration for one fill run over a template.
///
/// The defaults carry the certificate template's literal placeholders and
/// the standard per-field formatting: a large bold centered name, a medium
/// company line, a smaller date line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FillConfig {
    /// Recipient name field
    pub name: FieldConfig,

    /// Company field
    pub company: FieldConfig,

    /// Date field
    pub date: FieldConfig,

    /// Family substituted when a requested font is not in the catalog
    #[serde(default = "default_fallback_font")]
    pub fallback_font: String,
}

fn default_fallback_font() -> String {
    DEFAULT_FALLBACK_FONT.to_string()
}

impl Default for FillConfig {
    fn default() -> Self {
        Self {
            name: FieldConfig::exact(NAME_PLACEHOLDER, "John Doe").with_format(
                FormatSpec::new()
                    .with_alignment(Alignment::Center)
                    .with_font_size(24.0)
                    .with_font_name("Arial")
                    .with_bold(true),
            ),
            company: FieldConfig::substring(COMPANY_PLACEHOLDER, "ACME Corporation").with_format(
                FormatSpec::new()
                    .with_alignment(Alignment::Center)
                    .with_font_size(14.0)
                    .with_font_name("Arial")
                    .with_bold(false),
            ),
            date: FieldConfig::exact(DATE_PLACEHOLDER, "DECEMBER 15 - 16, 2024").with_format(
                FormatSpec::new()
                    .with_alignment(Alignment::Center)
                    .with_font_size(12.0)
                    .with_font_name("Arial")
                    .with_bold(false),
            ),
            fallback_font: default_fallback_font(),
        }
    }
}

impl FillConfig {
    /// Default configuration with the three replacement values overridden.
    pub fn with_values(
        name: impl Into<String>,
        company: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        let mut config = Self::default();
        config.name.value = name.into();
        config.company.value = company.into();
        config.date.value = date.into();
        config
    }

    /// Set the name replacement value.
    pub fn with_name(mut self, value: impl Into<String>) -> Self {
        self.name.value = value.into();
        self
    }

    /// Set the company replacement value.
    pub fn with_company(mut self, value: impl Into<String>) -> Self {
        self.company.value = value.into();
        self
    }

    /// Set the date replacement value.
    pub fn with_date(mut self, value: impl Into<String>) -> Self {
        self.date.value = value.into();
        self
    }

    /// Parse a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Replacement counts per field for one fill run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FillReport {
    /// Name paragraphs replaced
    pub name: usize,
    /// Company paragraphs replaced
    pub company: usize,
    /// Date paragraphs replaced
    pub date: usize,
}

impl FillReport {
    /// Total replacements across all fields.
    pub fn total(&self) -> usize {
        self.name + self.company + self.date
    }

    /// Whether nothing was replaced.
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// Fills a template according to a [`FillConfig`].
///
/// Font names in each field's format pass through the font catalog before
/// application, so unavailable families degrade to the configured fallback
/// rather than producing a document that renders wrong elsewhere.
pub struct TemplateFiller {
    config: FillConfig,
    fonts: FontCatalog,
}

impl TemplateFiller {
    /// Filler over the system font catalog.
    pub fn new(config: FillConfig) -> Self {
        Self {
            config,
            fonts: FontCatalog::system(),
        }
    }

    /// Replace the font catalog, e.g. with one built from fixed names.
    pub fn with_font_catalog(mut self, catalog: FontCatalog) -> Self {
        self.fonts = catalog;
        self
    }

    /// The active configuration.
    pub fn config(&self) -> &FillConfig {
        &self.config
    }

    /// Replace all three placeholders in a loaded document.
    pub fn fill(&self, docx: &mut Docx) -> FillReport {
        FillReport {
            name: self.fill_field(docx, &self.config.name),
            company: self.fill_field(docx, &self.config.company),
            date: self.fill_field(docx, &self.config.date),
        }
    }

    /// Load `input`, fill it, and save the result to `output`.
    ///
    /// The output is written even when nothing matched, so the caller
    /// always gets a document at the promised path; a warning is logged
    /// for the zero-match case.
    pub fn fill_file<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input: P,
        output: Q,
    ) -> Result<FillReport> {
        let mut docx = load_docx(input)?;
        let report = self.fill(&mut docx);
        if report.is_empty() {
            log::warn!("no placeholders found in the template");
        }
        save_docx(docx, output)?;
        Ok(report)
    }

    fn fill_field(&self, docx: &mut Docx, field: &FieldConfig) -> usize {
        let format = self.resolve_fonts(&field.format);
        find_and_replace(docx, &field.matcher(), &field.value, &format)
    }

    /// Copy of `format` with the font name resolved against the catalog.
    fn resolve_fonts(&self, format: &FormatSpec) -> FormatSpec {
        let mut format = format.clone();
        if let Some(name) = &format.font_name {
            format.font_name = Some(self.fonts.resolve_safe(name, &self.config.fallback_font));
        }
        format
    }
}
