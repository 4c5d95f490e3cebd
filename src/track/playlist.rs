use frand::Rand;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::error::PickerError;

pub const VIDEO_URL_BASE: &str = "https://www.youtube.com/watch?v=";
pub const UNKNOWN_TRACK_TITLE: &str = "Unknown Track";

/// Uma entrada da listagem flat do yt-dlp. Só `id` e `title` nos interessam.
///
/// `title` distingue ausente (`None`) de `null` explícito (`Some(None)`): só o
/// ausente cai no título padrão, o `null` segue adiante como `null`.
#[derive(Clone, Deserialize, Debug, Default, PartialEq)]
pub struct PlaylistEntry {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "present_or_null")]
    pub title: Option<Option<String>>,
}

fn present_or_null<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

impl PlaylistEntry {
    /// Converte uma entrada crua da listagem.
    pub fn from_value(value: &Value) -> Result<PlaylistEntry, PickerError> {
        Ok(PlaylistEntry::deserialize(value)?)
    }

    /// URL canônica do vídeo, montada a partir do id
    pub fn video_url(&self) -> Result<String, PickerError> {
        let id = self.id.as_deref().ok_or(PickerError::MissingField("id"))?;
        Ok(format!("{}{}", VIDEO_URL_BASE, id))
    }

    pub fn display_title(&self) -> Option<&str> {
        match &self.title {
            None => Some(UNKNOWN_TRACK_TITLE),
            Some(title) => title.as_deref(),
        }
    }
}

/// Documento devolvido por `--dump-single-json` em modo `--flat-playlist`.
///
/// As entradas ficam cruas: só a sorteada precisa ter o formato certo.
#[derive(Clone, Deserialize, Debug, Default)]
pub struct PlaylistListing {
    #[serde(default)]
    entries: Option<Vec<Value>>,
}

impl PlaylistListing {
    /// Entradas da playlist; ausente e `null` viram lista vazia.
    pub fn entries(&self) -> &[Value] {
        self.entries.as_deref().unwrap_or(&[])
    }
}

/// Escolhe um item de forma uniforme. Lista vazia devolve `None`.
pub fn pick_random<'a, T>(items: &'a [T], rng: &mut Rand) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }

    let index = rng.gen_range(0..items.len() as u64) as usize;
    items.get(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn entry(id: &str, title: Option<&str>) -> PlaylistEntry {
        PlaylistEntry {
            id: Some(id.to_string()),
            title: Some(title.map(str::to_string)),
        }
    }

    #[test]
    fn missing_and_null_entries_are_empty() {
        let listing: PlaylistListing = serde_json::from_str(r#"{"title": "x"}"#).unwrap();
        assert!(listing.entries().is_empty());

        let listing: PlaylistListing = serde_json::from_str(r#"{"entries": null}"#).unwrap();
        assert!(listing.entries().is_empty());
    }

    #[test]
    fn extra_fields_are_ignored() {
        let listing: PlaylistListing = serde_json::from_str(
            r#"{"_type": "playlist", "entries": [{"id": "a1", "title": "Chill", "duration": 180.0, "url": "u"}]}"#,
        )
        .unwrap();
        let parsed = PlaylistEntry::from_value(&listing.entries()[0]).unwrap();
        assert_eq!(parsed, entry("a1", Some("Chill")));
    }

    #[test]
    fn malformed_entries_do_not_break_the_listing() {
        let listing: PlaylistListing =
            serde_json::from_str(r#"{"entries": [{"id": "a", "title": "ok"}, "junk", 3]}"#).unwrap();
        assert_eq!(listing.entries().len(), 3);

        assert!(PlaylistEntry::from_value(&listing.entries()[0]).is_ok());
        assert!(matches!(
            PlaylistEntry::from_value(&listing.entries()[1]),
            Err(PickerError::Json(_))
        ));
    }

    #[test]
    fn video_url_uses_id() {
        assert_eq!(
            entry("dQw4w9WgXcQ", None).video_url().unwrap(),
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ"
        );

        let err = PlaylistEntry::default().video_url().unwrap_err();
        assert!(matches!(err, PickerError::MissingField("id")));
    }

    #[test]
    fn absent_title_falls_back_but_null_is_kept() {
        let absent = PlaylistEntry::from_value(&json!({"id": "a"})).unwrap();
        assert_eq!(absent.display_title(), Some("Unknown Track"));

        let null = PlaylistEntry::from_value(&json!({"id": "a", "title": null})).unwrap();
        assert_eq!(null.title, Some(None));
        assert_eq!(null.display_title(), None);

        assert_eq!(entry("a", Some("Lofi")).display_title(), Some("Lofi"));
    }

    #[test]
    fn pick_random_stays_in_bounds() {
        let items = vec![1, 2, 3, 4, 5];
        let mut rng = Rand::with_seed(7);
        for _ in 0..200 {
            let picked = pick_random(&items, &mut rng).unwrap();
            assert!(items.contains(picked));
        }
    }

    #[test]
    fn pick_random_reaches_every_item() {
        let items = vec!["a", "b", "c"];
        let mut rng = Rand::with_seed(42);
        let mut seen = [false; 3];
        for _ in 0..300 {
            let picked = pick_random(&items, &mut rng).unwrap();
            let idx = items.iter().position(|i| i == picked).unwrap();
            seen[idx] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn pick_random_on_empty_is_none() {
        let items: Vec<u8> = vec![];
        assert!(pick_random(&items, &mut Rand::with_seed(1)).is_none());
    }
}
