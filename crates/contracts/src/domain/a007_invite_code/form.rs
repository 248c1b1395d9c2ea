use rand::Rng;
use serde::Serialize;

use crate::shared::form::{any_blank, FormDraft, ValidationError};
use crate::shared::submission::SubmissionKind;

const CODE_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const CODE_LEN: usize = 8;

/// Eight characters drawn uniformly from `A-Z0-9`.
pub fn generate_random_code<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..CODE_LEN)
        .map(|_| CODE_ALPHABET[rng.gen_range(0..CODE_ALPHABET.len())] as char)
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateInviteCodeDraft {
    pub code: String,
    /// Raw text of the number input.
    pub max_uses: String,
    pub expiry_date: String,
}

impl Default for GenerateInviteCodeDraft {
    fn default() -> Self {
        Self {
            code: String::new(),
            max_uses: "100".to_string(),
            expiry_date: String::new(),
        }
    }
}

impl GenerateInviteCodeDraft {
    /// Codes are stored upper-case whatever was typed.
    pub fn set_code(&mut self, input: &str) {
        self.code = input.to_uppercase();
    }

    pub fn fill_random_code<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.code = generate_random_code(rng);
    }

    fn parsed_max_uses(&self) -> Option<u32> {
        self.max_uses.trim().parse::<u32>().ok().filter(|n| *n > 0)
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewInviteCode {
    pub code: String,
    pub max_uses: u32,
    pub expiry_date: Option<String>,
}

impl FormDraft for GenerateInviteCodeDraft {
    type Payload = NewInviteCode;

    const KIND: SubmissionKind = SubmissionKind::GenerateInviteCode;

    fn validate(&self) -> Result<(), ValidationError> {
        if any_blank(&[&self.code, &self.max_uses]) {
            return Err(ValidationError::MissingRequiredFields);
        }
        if self.parsed_max_uses().is_none() {
            return Err(ValidationError::InvalidMaxUses);
        }
        Ok(())
    }

    fn to_payload(&self) -> NewInviteCode {
        NewInviteCode {
            code: self.code.clone(),
            max_uses: self.parsed_max_uses().unwrap_or_default(),
            expiry_date: (!self.expiry_date.is_empty()).then(|| self.expiry_date.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::form::FormState;
    use crate::shared::submission::testing::RecordingSink;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn random_codes_use_the_alphabet() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let code = generate_random_code(&mut rng);
            assert_eq!(code.len(), 8);
            assert!(code
                .chars()
                .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
        }
    }

    #[test]
    fn typed_code_is_upper_cased() {
        let mut draft = GenerateInviteCodeDraft::default();
        draft.set_code("summer25");
        assert_eq!(draft.code, "SUMMER25");
    }

    #[test]
    fn max_uses_must_be_positive() {
        let mut draft = GenerateInviteCodeDraft::default();
        draft.set_code("X");
        for bad in ["0", "-3", "ten"] {
            draft.max_uses = bad.into();
            assert_eq!(draft.validate(), Err(ValidationError::InvalidMaxUses));
        }
        draft.max_uses.clear();
        assert_eq!(draft.validate(), Err(ValidationError::MissingRequiredFields));
    }

    #[test]
    fn submit_parses_max_uses() {
        let sink = RecordingSink::default();
        let mut form = FormState::<GenerateInviteCodeDraft>::new();
        form.open();
        form.edit(|d| {
            d.fill_random_code(&mut StdRng::seed_from_u64(1));
            d.max_uses = "250".into();
        });

        let sent = form.submit(&sink).unwrap();
        assert_eq!(sent.payload["maxUses"], 250);
        assert!(sent.payload["expiryDate"].is_null());
        assert_eq!(form.draft.max_uses, "100");
    }
}
