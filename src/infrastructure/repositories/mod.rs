pub mod elevenlabs_tts_repository;
pub mod error;
pub mod openai_translation_repository;
pub mod translation_repository;
pub mod tts_repository;

pub use elevenlabs_tts_repository::ElevenLabsTtsRepository;
pub use error::UpstreamError;
pub use openai_translation_repository::OpenAiTranslationRepository;
pub use translation_repository::TranslationRepository;
pub use tts_repository::TtsRepository;
