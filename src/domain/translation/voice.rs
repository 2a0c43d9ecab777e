use serde::{Deserialize, Serialize};

/// Voice families the TTS provider is configured for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoiceLanguage {
    English,
    Tagalog,
    Russian,
    /// Anything we have no dedicated voice for. Spoken with the English voice.
    Unknown,
}

impl VoiceLanguage {
    /// Classify a free-form language name ("Tagalog", "russian (formal)", ...).
    ///
    /// Matching is a case-insensitive substring check. Tagalog is tested
    /// before Russian, so the first match wins.
    pub fn from_name(name: &str) -> Self {
        let name = name.to_lowercase();

        if name.contains("tagalog") {
            VoiceLanguage::Tagalog
        } else if name.contains("russian") {
            VoiceLanguage::Russian
        } else if name.contains("english") {
            VoiceLanguage::English
        } else {
            VoiceLanguage::Unknown
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            VoiceLanguage::English => "english",
            VoiceLanguage::Tagalog => "tagalog",
            VoiceLanguage::Russian => "russian",
            VoiceLanguage::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for VoiceLanguage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Provider voice identifiers, one per supported language
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoiceIds {
    pub english: String,
    pub tagalog: String,
    pub russian: String,
}

/// A voice picked for one synthesis call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceProfile {
    pub language: VoiceLanguage,
    pub voice_id: String,
}

impl VoiceIds {
    pub fn voice_for(&self, language: VoiceLanguage) -> &str {
        match language {
            VoiceLanguage::Tagalog => &self.tagalog,
            VoiceLanguage::Russian => &self.russian,
            VoiceLanguage::English | VoiceLanguage::Unknown => &self.english,
        }
    }

    /// Resolve a language name to a voice. Never fails: unrecognized
    /// languages get the English voice.
    pub fn resolve(&self, language: &str) -> VoiceProfile {
        let language = VoiceLanguage::from_name(language);
        VoiceProfile {
            language,
            voice_id: self.voice_for(language).to_string(),
        }
    }
}
