//! Business layer for the QuickQR client.
//!
//! Holds the configuration, the wire types of the QR generation backend,
//! and the commands/computes that talk to it. Widgets never fetch on their
//! own: they dispatch a command, the command runs an `ehttp` request, and
//! the completion callback publishes the result into a compute cache.

mod analyze;
mod api_status;
mod config;
mod generate;
mod options;
mod qr;
mod route;
mod suggestions;
mod validate_url;
pub mod version_info;

#[cfg(all(test, not(target_arch = "wasm32")))]
mod test_utils;

pub use analyze::{AnalyzeCompute, AnalyzeContentCommand, AnalyzeStatus, ContentAnalysis};
pub use api_status::{AiHealth, AiHealthAvailability, ApiAvailability, ApiStatus};
pub use config::BusinessConfig;
pub use generate::{
    EMPTY_CONTENT_MESSAGE, GenerateQrCommand, GenerateQrCompute, GenerateQrInput, GenerateStatus,
};
pub use options::{
    ErrorCorrectionLevelsCompute, ErrorCorrectionOption, FetchErrorCorrectionLevelsCommand,
    FetchQrTypesCommand, OptionsStatus, QrTypeOption, QrTypesCompute,
};
pub use qr::{
    AiSuggestionRequest, AiSuggestionResponse, ErrorCorrection, QrCodeMetadata, QrCodeRequest,
    QrCodeResponse, QrType,
};
pub use route::Route;
pub use suggestions::{FetchSuggestionsCommand, SuggestionsCompute, SuggestionsStatus};
pub use validate_url::{UrlValidation, UrlValidationCompute, ValidateUrlCommand, ValidationStatus};
