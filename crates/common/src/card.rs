use serde::{Deserialize, Serialize};

use crate::media::MediaKind;

/// One project or certificate entry as supplied by the site data.
///
/// Optional URLs treat an empty string the same as a missing value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardEntry {
    pub id: u32,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub demo: Option<String>,
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub embed: Option<String>,
    #[serde(default)]
    pub video: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

fn present(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

impl CardEntry {
    pub fn demo_url(&self) -> Option<&str> {
        present(&self.demo)
    }

    pub fn github_url(&self) -> Option<&str> {
        present(&self.github)
    }

    pub fn embed_url(&self) -> Option<&str> {
        present(&self.embed)
    }

    pub fn video_url(&self) -> Option<&str> {
        present(&self.video)
    }

    pub fn image_url(&self) -> Option<&str> {
        present(&self.image)
    }

    /// Resolves which media renderer this card uses. Precedence is
    /// embed, then video, then image.
    pub fn media(&self, streaming_hosts: &[String]) -> MediaKind {
        MediaKind::select(self, streaming_hosts)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certificate {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
}

impl From<Certificate> for CardEntry {
    fn from(cert: Certificate) -> Self {
        let description = if cert.date.trim().is_empty() {
            String::new()
        } else {
            format!("Issued {}", cert.date)
        };

        Self {
            id: cert.id,
            name: cert.name,
            description,
            tags: cert.tags,
            demo: cert.link,
            github: None,
            embed: None,
            video: None,
            image: cert.image,
        }
    }
}
