use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

use super::CharFilter;

/// Supported Unicode normalization forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum NormalizationForm {
    #[default]
    NFC,
    NFD,
    NFKC,
    NFKD,
}

/// A char filter that performs Unicode normalization.
#[derive(Debug, Clone)]
pub struct UnicodeNormalizationCharFilter {
    form: NormalizationForm,
}

impl UnicodeNormalizationCharFilter {
    pub fn new(form: NormalizationForm) -> Self {
        Self { form }
    }
}

impl CharFilter for UnicodeNormalizationCharFilter {
    fn filter(&self, input: &str) -> String {
        match self.form {
            NormalizationForm::NFC => input.nfc().collect(),
            NormalizationForm::NFD => input.nfd().collect(),
            NormalizationForm::NFKC => input.nfkc().collect(),
            NormalizationForm::NFKD => input.nfkd().collect(),
        }
    }

    fn name(&self) -> &'static str {
        "unicode_normalization"
    }
}
