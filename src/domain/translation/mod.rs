pub mod dto;
pub mod error;
pub mod service;
pub mod voice;

pub use dto::{TranslateRequest, TranslateResponse, TranslationRequest};
pub use error::TranslationServiceError;
pub use service::{SpokenTranslation, TranslationService, TranslationServiceApi};
pub use voice::{VoiceIds, VoiceLanguage, VoiceProfile};
