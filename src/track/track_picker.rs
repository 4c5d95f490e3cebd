use frand::Rand;
use serde::Serialize;
use serde_json::Value;

use super::playlist::{pick_random, PlaylistEntry};
use crate::{
    config::PickerConfig,
    error::PickerError,
    ytdlp::{CommandRunner, YtDlp},
};

/// Stream de áudio resolvido pra uma entrada da playlist.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedStream {
    pub url: String,
    /// `None` quando a listagem trouxe `"title": null`
    pub title: Option<String>,
    pub original_url: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Error,
}

/// Documento escrito no stdout pelo track picker.
///
/// `Bare` é o formato antigo do erro de playlist vazia, sem o campo `status`;
/// quem consome a resposta ainda depende dele.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PickerResponse {
    Success {
        status: Status,
        url: String,
        title: Option<String>,
        original_url: String,
    },
    Error {
        status: Status,
        error: String,
    },
    Bare {
        error: String,
    },
}

impl From<Result<ResolvedStream, PickerError>> for PickerResponse {
    fn from(result: Result<ResolvedStream, PickerError>) -> Self {
        match result {
            Ok(stream) => PickerResponse::Success {
                status: Status::Success,
                url: stream.url,
                title: stream.title,
                original_url: stream.original_url,
            },
            Err(err @ PickerError::NoEntries) => PickerResponse::Bare {
                error: err.to_string(),
            },
            Err(err) => PickerResponse::Error {
                status: Status::Error,
                error: err.to_string(),
            },
        }
    }
}

/// Pedido opcional lido do stdin: `{"playlist": "<url>"}`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PickerRequest {
    pub playlist: Option<String>,
}

impl PickerRequest {
    /// Interpreta o stdin. Qualquer coisa inválida simplesmente vira "sem override".
    pub fn parse(input: &str) -> PickerRequest {
        let value: Value = match serde_json::from_str(input) {
            Ok(value) => value,
            Err(err) => {
                if !input.trim().is_empty() {
                    tracing::debug!("track_picker: stdin ignorado, JSON inválido: {}", err);
                }
                return PickerRequest::default();
            }
        };

        let playlist = value
            .get("playlist")
            // valor que não é string (número, objeto...) não vira override
            .and_then(Value::as_str)
            .filter(|url| !url.is_empty())
            .map(str::to_string);

        PickerRequest { playlist }
    }
}

pub struct TrackPicker<R: CommandRunner> {
    ytdlp: YtDlp<R>,
    config: PickerConfig,
    rng: Rand,
}

impl<R: CommandRunner> TrackPicker<R> {
    pub fn new(ytdlp: YtDlp<R>, config: PickerConfig) -> TrackPicker<R> {
        TrackPicker {
            ytdlp,
            config,
            rng: Rand::new(),
        }
    }

    /// Mesmo que `new`, mas com sorteio determinístico.
    pub fn with_seed(ytdlp: YtDlp<R>, config: PickerConfig, seed: u64) -> TrackPicker<R> {
        TrackPicker {
            ytdlp,
            config,
            rng: Rand::with_seed(seed),
        }
    }

    pub fn ytdlp(&self) -> &YtDlp<R> {
        &self.ytdlp
    }

    /// Sorteia uma entrada da playlist e resolve a URL direta do áudio dela.
    pub fn pick(&mut self, playlist: Option<&str>) -> Result<ResolvedStream, PickerError> {
        let playlist_url = self.config.playlist_or_default(playlist).to_string();
        tracing::debug!("track_picker: listando playlist {}", playlist_url);

        let listing = self.ytdlp.list_playlist(&playlist_url)?;
        let raw_entry =
            pick_random(listing.entries(), &mut self.rng).ok_or(PickerError::NoEntries)?;
        let entry = PlaylistEntry::from_value(raw_entry)?;

        let video_url = entry.video_url()?;
        tracing::debug!(
            "track_picker: escolhida {:?} ({} entradas)",
            entry.display_title(),
            listing.entries().len()
        );

        let audio_url = self.ytdlp.resolve_audio_url(&video_url)?;

        Ok(ResolvedStream {
            url: audio_url,
            title: entry.display_title().map(str::to_string),
            original_url: video_url,
        })
    }

    /// Igual a `pick`, mas sempre devolve um documento de resposta.
    pub fn respond(&mut self, playlist: Option<&str>) -> PickerResponse {
        let result = self.pick(playlist);
        if let Err(err) = &result {
            tracing::warn!("track_picker: {}", err);
        }
        PickerResponse::from(result)
    }
}
