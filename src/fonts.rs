//! Font availability checks and safe font resolution.
//!
//! Word stores font names as plain strings, so nothing stops a document from
//! requesting a family the viewer's machine does not have. This module keeps a
//! catalog of known-available families and resolves requested names against it,
//! substituting a fallback (Arial by default) for anything unknown.
//!
//! Two catalogs are available: a builtin list of families that ship with
//! common Windows and macOS installs, and the actual set of installed families
//! enumerated through `fontdb` (behind the `system-fonts` feature). When
//! enumeration is unavailable the system catalog degrades to the builtin list.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Family substituted when a requested font is not in the catalog.
pub const DEFAULT_FALLBACK_FONT: &str = "Arial";

/// Font families commonly present on Windows and macOS installs.
const BUILTIN_FONTS: &[&str] = &[
    "Arial",
    "Arial Black",
    "Arial Narrow",
    "Arial Unicode MS",
    "Calibri",
    "Cambria",
    "Cambria Math",
    "Candara",
    "Comic Sans MS",
    "Consolas",
    "Constantia",
    "Corbel",
    "Courier New",
    "Georgia",
    "Impact",
    "Lucida Console",
    "Lucida Sans Unicode",
    "Microsoft Sans Serif",
    "Palatino Linotype",
    "Segoe UI",
    "Tahoma",
    "Times New Roman",
    "Trebuchet MS",
    "Verdana",
    "Webdings",
    "Wingdings",
    "Helvetica",
    "Times",
    "Courier",
    "Symbol",
    "ZapfDingbats",
    "Bookman Old Style",
    "Century Gothic",
    "Century Schoolbook",
    "Franklin Gothic Medium",
    "Garamond",
    "MS Gothic",
    "MS Mincho",
    "MS PGothic",
    "MS PMincho",
    "MS Reference Sans Serif",
    "MS Reference Specialty",
    "Rockwell",
    "Stencil",
    "Tw Cen MT",
];

/// The builtin list of commonly available font families.
pub fn builtin_fonts() -> &'static [&'static str] {
    BUILTIN_FONTS
}

/// Where a catalog's family names came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogSource {
    /// The builtin list of common families.
    Builtin,
    /// Families enumerated from the running system.
    System,
    /// Names supplied by the caller.
    Custom,
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogSource::Builtin => write!(f, "builtin"),
            CatalogSource::System => write!(f, "system"),
            CatalogSource::Custom => write!(f, "custom"),
        }
    }
}

/// A set of font family names considered available.
///
/// Catalogs are immutable once built. Lookups are exact (case-sensitive),
/// matching how Word treats `w:rFonts` values.
#[derive(Debug, Clone)]
pub struct FontCatalog {
    names: BTreeSet<String>,
    source: CatalogSource,
}

impl FontCatalog {
    /// Catalog backed by the builtin family list.
    pub fn builtin() -> Self {
        Self {
            names: BUILTIN_FONTS.iter().map(|s| s.to_string()).collect(),
            source: CatalogSource::Builtin,
        }
    }

    /// Catalog backed by the families installed on this system.
    ///
    /// Falls back to the builtin list when the `system-fonts` feature is off
    /// or enumeration finds nothing.
    pub fn system() -> Self {
        match system_families() {
            Some(names) => Self {
                names,
                source: CatalogSource::System,
            },
            None => {
                log::warn!("system font enumeration unavailable, using builtin font list");
                Self::builtin()
            }
        }
    }

    /// Catalog from caller-supplied names.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
            source: CatalogSource::Custom,
        }
    }

    /// Whether `name` is in the catalog.
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Number of families in the catalog.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the catalog holds no families.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Where this catalog's names came from.
    pub fn source(&self) -> CatalogSource {
        self.source
    }

    /// Family names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// `requested` if it is in the catalog, otherwise `fallback`.
    pub fn resolve_safe(&self, requested: &str, fallback: &str) -> String {
        if self.contains(requested) {
            requested.to_string()
        } else {
            log::warn!("font '{requested}' may not be available, using fallback '{fallback}'");
            fallback.to_string()
        }
    }
}

#[cfg(feature = "system-fonts")]
fn system_families() -> Option<BTreeSet<String>> {
    let mut db = fontdb::Database::new();
    db.load_system_fonts();

    let mut names = BTreeSet::new();
    for face in db.faces() {
        for (family, _) in &face.families {
            names.insert(family.clone());
        }
    }

    if names.is_empty() {
        None
    } else {
        Some(names)
    }
}

#[cfg(not(feature = "system-fonts"))]
fn system_families() -> Option<BTreeSet<String>> {
    None
}

/// Whether `name` appears in the builtin family list.
pub fn is_available_basic(name: &str) -> bool {
    BUILTIN_FONTS.contains(&name)
}

/// Whether `name` is installed on this system.
///
/// Builds a fresh system catalog on every call; hold a [`FontCatalog`] when
/// checking many names.
pub fn is_available_advanced(name: &str) -> bool {
    FontCatalog::system().contains(name)
}

/// `name` if it is installed, otherwise `fallback`.
pub fn resolve_safe_font(name: &str, fallback: &str) -> String {
    FontCatalog::system().resolve_safe(name, fallback)
}
