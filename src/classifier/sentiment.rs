use std::fmt::Display;

use serde::Serialize;

pub const POSITIVE_WORDS: [&str; 6] = ["good", "great", "awesome", "excellent", "happy", "love"];
pub const NEGATIVE_WORDS: [&str; 6] = ["bad", "terrible", "awful", "sad", "hate", "poor"];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    pub fn label(&self) -> &'static str {
        match self {
            Sentiment::Positive => "POSITIVE",
            Sentiment::Negative => "NEGATIVE",
            Sentiment::Neutral => "NEUTRAL",
        }
    }

    /// Só o sinal do placar importa.
    pub fn from_score(score: i64) -> Sentiment {
        match score {
            s if s > 0 => Sentiment::Positive,
            s if s < 0 => Sentiment::Negative,
            _ => Sentiment::Neutral,
        }
    }
}

impl Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Separadores de palavra: o espaço em branco Unicode mais os separadores
/// ASCII U+001C..U+001F, que quem chama sempre tratou como espaço.
pub fn is_word_separator(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

/// Quebra o texto em palavras, descartando os pedaços vazios.
pub fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split(is_word_separator).filter(|word| !word.is_empty())
}

/// Placar por palavra-chave: +1 por palavra positiva, -1 por negativa.
///
/// Os tokens são separados por espaço em branco e comparados em minúsculas, sem
/// remover pontuação (`"great,"` não conta).
pub fn score(text: &str) -> i64 {
    words(&text.to_lowercase())
        .map(|word| {
            if POSITIVE_WORDS.contains(&word) {
                1
            } else if NEGATIVE_WORDS.contains(&word) {
                -1
            } else {
                0
            }
        })
        .sum()
}

pub fn analyze(text: &str) -> Sentiment {
    Sentiment::from_score(score(text))
}
