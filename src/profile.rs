//! Sample profile fixture rendered by every template preview
//!
//! One fixed, richly structured professional profile shared by all layout
//! renderers. Every list preserves author-declared order when rendered;
//! renderers never sort or mutate the fixture.

use std::path::Path;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::error::ConfigurationError;

/// Built-in sample profile, embedded alongside the catalog
const BUILTIN_PROFILE: &str = include_str!("data/profile.toml");

/// One contact or link entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub label: String,
    pub value: String,
    /// Optional link target; rendered as a plain value when absent
    #[serde(default)]
    pub href: Option<String>,
}

/// One experience entry with its achievement statements
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub company: String,
    pub role: String,
    pub period: String,
    pub achievements: Vec<String>,
}

/// One education entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub institution: String,
    pub degree: String,
    pub period: String,
}

/// The full sample profile consumed by the layout renderers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SampleProfile {
    pub name: String,
    pub title: String,
    pub location: String,
    pub summary: String,
    pub contacts: Vec<Contact>,
    pub links: Vec<Contact>,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub skills: Vec<String>,
    pub tools: Vec<String>,
    pub languages: Vec<String>,
    pub interests: Vec<String>,
    pub certifications: Vec<String>,
}

impl SampleProfile {
    /// Load a profile from TOML text
    pub fn from_str(content: &str) -> Result<Self, ConfigurationError> {
        Ok(toml::from_str(content)?)
    }

    /// Load a profile from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigurationError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Primary contact value shown next to the name in hero bands
    pub fn primary_contact(&self) -> Option<&str> {
        self.contacts.first().map(|c| c.value.as_str())
    }
}

/// The built-in sample profile, initialized once and shared immutably by
/// all renderers.
pub fn builtin() -> &'static SampleProfile {
    static PROFILE: OnceLock<SampleProfile> = OnceLock::new();
    PROFILE.get_or_init(|| {
        SampleProfile::from_str(BUILTIN_PROFILE).expect("built-in profile should be valid")
    })
}
