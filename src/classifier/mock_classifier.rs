use std::io::Read;

use frand::Rand;
use serde::{Deserialize, Serialize};

use super::sentiment::{self, Sentiment};
use crate::error::ClassifierError;

pub const PROCESSED_BY: &str = "Python 3 Supercharged Brain 🐍";

/// Quantos caracteres do prompt aparecem no eco da resposta.
pub const ECHO_CHARS: usize = 20;

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct ClassifierRequest {
    #[serde(default)]
    pub prompt: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Analysis {
    pub sentiment: Sentiment,
    pub complexity: usize,
    pub words: usize,
    pub processed_by: &'static str,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ClassifierResponse {
    Success {
        status: &'static str,
        analysis: Analysis,
        response: String,
    },
    Error {
        error: String,
    },
}

impl From<ClassifierError> for ClassifierResponse {
    fn from(err: ClassifierError) -> Self {
        ClassifierResponse::Error {
            error: err.to_string(),
        }
    }
}

pub struct MockClassifier {
    rng: Rand,
}

impl Default for MockClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl MockClassifier {
    pub fn new() -> MockClassifier {
        MockClassifier { rng: Rand::new() }
    }

    pub fn with_seed(seed: u64) -> MockClassifier {
        MockClassifier {
            rng: Rand::with_seed(seed),
        }
    }

    /// Classifica um prompt e monta a resposta de sucesso.
    pub fn classify(&mut self, prompt: &str) -> ClassifierResponse {
        let sentiment = sentiment::analyze(prompt);

        // carga "simulada": só vai pro log, nunca pra resposta
        let simulated_load = self.rng.gen_range(10..81u64);
        tracing::debug!("mock_classifier: carga simulada {}%", simulated_load);

        let echo: String = prompt.chars().take(ECHO_CHARS).collect();

        ClassifierResponse::Success {
            status: "success",
            analysis: Analysis {
                sentiment,
                complexity: prompt.chars().count(),
                words: sentiment::words(prompt).count(),
                processed_by: PROCESSED_BY,
            },
            response: format!("Processed: '{}...' (Sentiment: {})", echo, sentiment),
        }
    }

    /// Trata a entrada crua do stdin. Nunca falha: erros viram `{"error": ...}`.
    pub fn respond(&mut self, input: &str) -> ClassifierResponse {
        match parse_request(input) {
            Ok(request) => self.classify(&request.prompt),
            Err(err) => {
                tracing::warn!("mock_classifier: {}", err);
                ClassifierResponse::from(err)
            }
        }
    }

    /// Lê todo o `reader` e responde. Falha de leitura também vira erro na resposta.
    pub fn respond_to_reader<T: Read>(&mut self, reader: &mut T) -> ClassifierResponse {
        let mut input = String::new();
        match reader.read_to_string(&mut input) {
            Ok(_) => self.respond(&input),
            Err(err) => ClassifierResponse::from(ClassifierError::from(err)),
        }
    }
}

pub fn parse_request(input: &str) -> Result<ClassifierRequest, ClassifierError> {
    if input.is_empty() {
        return Err(ClassifierError::NoInput);
    }

    Ok(serde_json::from_str(input)?)
}
