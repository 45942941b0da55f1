use std::collections::HashSet;

use figment::{
    providers::{Format, Serialized, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::card::{CardEntry, Certificate};
use crate::error::DataError;

const SITE_DATA: &str = include_str!("../data/site.yaml");

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaConfig {
    #[serde(default = "default_streaming_hosts")]
    pub streaming_hosts: Vec<String>,
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            streaming_hosts: default_streaming_hosts(),
        }
    }
}

fn default_streaming_hosts() -> Vec<String> {
    vec![
        "youtube.com".to_string(),
        "youtu.be".to_string(),
        "vimeo.com".to_string(),
    ]
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default)]
    pub media: MediaConfig,

    #[serde(default)]
    pub experience: Vec<CardEntry>,

    #[serde(default)]
    pub certificates: Vec<Certificate>,
}

impl SiteConfig {
    /// Loads the site data bundled with the crate.
    pub fn load() -> Result<Self, DataError> {
        Self::from_yaml(SITE_DATA)
    }

    pub fn from_yaml(source: &str) -> Result<Self, DataError> {
        let config: SiteConfig = Figment::from(Serialized::defaults(SiteConfig::default()))
            .merge(Yaml::string(source))
            .extract()?;

        config.validate()?;

        log::debug!(
            "Site data loaded: {} experience entries, {} certificates",
            config.experience.len(),
            config.certificates.len()
        );

        Ok(config)
    }

    pub fn validate(&self) -> Result<(), DataError> {
        check_entries("experience", self.experience.iter().map(|e| (e.id, e.name.as_str())))?;
        check_entries(
            "certificates",
            self.certificates.iter().map(|c| (c.id, c.name.as_str())),
        )
    }

    pub fn certificate_cards(&self) -> Vec<CardEntry> {
        self.certificates.iter().cloned().map(CardEntry::from).collect()
    }
}

fn check_entries<'a>(
    section: &'static str,
    entries: impl Iterator<Item = (u32, &'a str)>,
) -> Result<(), DataError> {
    let mut seen = HashSet::new();
    for (id, name) in entries {
        if name.trim().is_empty() {
            return Err(DataError::MissingField { id, field: "name" });
        }
        if !seen.insert(id) {
            return Err(DataError::DuplicateId { section, id });
        }
    }
    Ok(())
}
