//! Wire types for the QR generation backend.

use serde::{Deserialize, Serialize};

/// Kind of content encoded into a QR code.
///
/// Serialized lowercase, matching the backend's `qr_type` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QrType {
    #[default]
    Url,
    Text,
    Contact,
    Wifi,
    Email,
    Phone,
    Sms,
    Content,
}

impl QrType {
    pub const ALL: [Self; 8] = [
        Self::Url,
        Self::Text,
        Self::Contact,
        Self::Wifi,
        Self::Email,
        Self::Phone,
        Self::Sms,
        Self::Content,
    ];

    /// Wire value, e.g. `"wifi"`.
    pub fn value(self) -> &'static str {
        match self {
            Self::Url => "url",
            Self::Text => "text",
            Self::Contact => "contact",
            Self::Wifi => "wifi",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Sms => "sms",
            Self::Content => "content",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Url => "Website URL",
            Self::Text => "Plain Text",
            Self::Contact => "Contact Info",
            Self::Wifi => "WiFi Network",
            Self::Email => "Email Address",
            Self::Phone => "Phone Number",
            Self::Sms => "SMS Message",
            Self::Content => "Rich Content",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Url => "Link to any website or web page",
            Self::Text => "Any free-form text",
            Self::Contact => "Name, email and phone number",
            Self::Wifi => "Network name, password and security type",
            Self::Email => "Opens a new email to this address",
            Self::Phone => "Dials this number when scanned",
            Self::Sms => "Prefilled text message to a number",
            Self::Content => "Hosted content with title and description",
        }
    }

    /// Input hint shown in the content field for this type.
    pub fn placeholder(self) -> &'static str {
        match self {
            Self::Url => "https://example.com",
            Self::Text => "Enter your text here...",
            Self::Contact => "John Doe, john@example.com, +1234567890",
            Self::Wifi => "NetworkName, Password, WPA",
            Self::Email => "john@example.com",
            Self::Phone => "+1234567890",
            Self::Sms => "+1234567890:Your message here",
            Self::Content => "Enter content...",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.value() == value)
    }
}

/// QR error correction level. Higher levels survive more damage at the cost
/// of a denser symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ErrorCorrection {
    L,
    #[default]
    M,
    Q,
    H,
}

impl ErrorCorrection {
    pub const ALL: [Self; 4] = [Self::L, Self::M, Self::Q, Self::H];

    pub fn value(self) -> &'static str {
        match self {
            Self::L => "L",
            Self::M => "M",
            Self::Q => "Q",
            Self::H => "H",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::L => "Low (7%)",
            Self::M => "Medium (15%)",
            Self::Q => "Quartile (25%)",
            Self::H => "High (30%)",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|l| l.value() == value)
    }
}

/// Request payload for `POST /qr/generate`.
#[derive(Debug, Clone, Serialize)]
pub struct QrCodeRequest {
    pub content: String,
    pub qr_type: QrType,
    /// Symbol scale, 1..=40.
    pub size: u32,
    pub error_correction: ErrorCorrection,
    /// Quiet zone width in modules, 0..=10.
    pub border: u32,
    /// Hex color, `#RRGGBB`.
    pub foreground_color: String,
    /// Hex color, `#RRGGBB`.
    pub background_color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Default for QrCodeRequest {
    fn default() -> Self {
        Self {
            content: String::new(),
            qr_type: QrType::Url,
            size: 10,
            error_correction: ErrorCorrection::M,
            border: 4,
            foreground_color: "#000000".to_owned(),
            background_color: "#FFFFFF".to_owned(),
            logo_url: None,
            title: None,
            description: None,
        }
    }
}

/// Metadata echoed back by the backend alongside a generated code.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct QrCodeMetadata {
    pub content: String,
    pub qr_type: String,
    pub size: u32,
    pub error_correction: String,
}

/// Response of `POST /qr/generate`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QrCodeResponse {
    pub success: bool,
    /// Rendered PNG as a `data:image/png;base64,...` URL.
    #[serde(default)]
    pub qr_code_data: Option<String>,
    #[serde(default)]
    pub qr_id: Option<String>,
    #[serde(default)]
    pub view_url: Option<String>,
    #[serde(default)]
    pub metadata: Option<QrCodeMetadata>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Request payload for `POST /ai/suggestions`.
#[derive(Debug, Clone, Serialize)]
pub struct AiSuggestionRequest {
    pub content: String,
    pub qr_type: QrType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

/// Response of `POST /ai/suggestions`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AiSuggestionResponse {
    #[serde(default)]
    pub suggestions: Vec<String>,
    #[serde(default)]
    pub optimized_content: Option<String>,
    #[serde(default)]
    pub confidence_score: f32,
}
