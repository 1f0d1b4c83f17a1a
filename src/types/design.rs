use serde::{Deserialize, Serialize};

fn default_primary_color() -> String {
    "#ffffff".to_string()
}

fn default_accent_color() -> String {
    "#000000".to_string()
}

fn default_logo_size() -> f64 {
    0.5
}

/// One side of the jersey as the customizer frontend keeps it in memory.
/// The front side never fills `name` and the back side is the only one that
/// does, but both deserialize through the same shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RSideDesign {
    #[serde(default = "default_primary_color")]
    pub primary_color: String,
    #[serde(default = "default_accent_color")]
    pub secondary_color: String,
    #[serde(default = "default_accent_color")]
    pub text_color: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub number: String,
    #[serde(default)]
    pub pattern: String,
    #[serde(default)]
    pub logo_url: Option<String>,
    #[serde(default = "default_logo_size")]
    pub logo_size: f64,
}

impl Default for RSideDesign {
    fn default() -> Self {
        RSideDesign {
            primary_color: default_primary_color(),
            secondary_color: default_accent_color(),
            text_color: default_accent_color(),
            name: String::new(),
            number: String::new(),
            pattern: String::new(),
            logo_url: None,
            logo_size: default_logo_size(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RDesignSave {
    pub name: String,
    pub jersey_type: String,
    #[serde(default)]
    pub front: RSideDesign,
    #[serde(default)]
    pub back: RSideDesign,
}

/// Flat column shape handed to the persistence layer.
pub struct DBDesignCreate {
    pub name: String,
    pub jersey_type: String,
    pub front_primary_color: String,
    pub front_secondary_color: String,
    pub front_text_color: String,
    pub front_number: String,
    pub front_pattern: String,
    pub front_logo: Option<String>,
    pub front_logo_size: f64,
    pub back_primary_color: String,
    pub back_secondary_color: String,
    pub back_text_color: String,
    pub back_name: String,
    pub back_number: String,
    pub back_pattern: String,
    pub back_logo: Option<String>,
    pub back_logo_size: f64,
}

fn logo_reference(logo_url: Option<String>) -> Option<String> {
    logo_url.filter(|url| !url.is_empty())
}

impl From<RDesignSave> for DBDesignCreate {
    fn from(design: RDesignSave) -> Self {
        DBDesignCreate {
            name: design.name,
            jersey_type: design.jersey_type,
            front_primary_color: design.front.primary_color,
            front_secondary_color: design.front.secondary_color,
            front_text_color: design.front.text_color,
            front_number: design.front.number,
            front_pattern: design.front.pattern,
            front_logo: logo_reference(design.front.logo_url),
            front_logo_size: design.front.logo_size,
            back_primary_color: design.back.primary_color,
            back_secondary_color: design.back.secondary_color,
            back_text_color: design.back.text_color,
            back_name: design.back.name,
            back_number: design.back.number,
            back_pattern: design.back.pattern,
            back_logo: logo_reference(design.back.logo_url),
            back_logo_size: design.back.logo_size,
        }
    }
}

#[derive(Serialize, Deserialize)]
pub struct SaveDesignResponse {
    pub status: String,
    pub message: String,
}

impl SaveDesignResponse {
    pub fn success() -> Self {
        SaveDesignResponse {
            status: "success".to_string(),
            message: "Design saved successfully".to_string(),
        }
    }

    pub fn error(message: &str) -> Self {
        SaveDesignResponse {
            status: "error".to_string(),
            message: message.to_string(),
        }
    }
}
