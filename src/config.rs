use std::env;

/// Playlist usada quando ninguém informa outra (Lofi Girl, uploads estáticos).
pub const DEFAULT_PLAYLIST: &str =
    "https://www.youtube.com/playlist?list=PLofht4PTcKYnaH8w5OlUYcVF9loffXMTE";

pub const YTDLP_ENV: &str = "TRACK_PICKER_YTDLP";
pub const DEFAULT_PLAYLIST_ENV: &str = "TRACK_PICKER_DEFAULT_PLAYLIST";

#[derive(Clone, Debug, PartialEq)]
pub struct PickerConfig {
    /// Caminho explícito pro binário do yt-dlp. `None` = procurar ao lado do executável ou no PATH.
    pub ytdlp: Option<String>,
    pub default_playlist: String,
}

impl Default for PickerConfig {
    fn default() -> Self {
        PickerConfig {
            ytdlp: None,
            default_playlist: DEFAULT_PLAYLIST.to_string(),
        }
    }
}

impl PickerConfig {
    pub fn from_env() -> PickerConfig {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Monta a configuração a partir de uma função de lookup qualquer.
    /// Valores vazios contam como não definidos.
    pub fn from_lookup<F>(lookup: F) -> PickerConfig
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        PickerConfig {
            ytdlp: non_empty(YTDLP_ENV),
            default_playlist: non_empty(DEFAULT_PLAYLIST_ENV)
                .unwrap_or_else(|| DEFAULT_PLAYLIST.to_string()),
        }
    }

    /// Escolhe a playlist efetiva: a do pedido, se houver, senão a padrão.
    pub fn playlist_or_default<'a>(&'a self, requested: Option<&'a str>) -> &'a str {
        match requested {
            Some(url) if !url.is_empty() => url,
            _ => &self.default_playlist,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let config = PickerConfig::from_lookup(|_| None);
        assert_eq!(config, PickerConfig::default());
    }

    #[test]
    fn blank_values_count_as_unset() {
        let config = PickerConfig::from_lookup(lookup_from(&[
            (YTDLP_ENV, ""),
            (DEFAULT_PLAYLIST_ENV, "   "),
        ]));
        assert_eq!(config.ytdlp, None);
        assert_eq!(config.default_playlist, DEFAULT_PLAYLIST);
    }

    #[test]
    fn overrides_are_read() {
        let config = PickerConfig::from_lookup(lookup_from(&[
            (YTDLP_ENV, "/opt/bin/yt-dlp"),
            (DEFAULT_PLAYLIST_ENV, "https://example.com/list"),
        ]));
        assert_eq!(config.ytdlp.as_deref(), Some("/opt/bin/yt-dlp"));
        assert_eq!(config.playlist_or_default(None), "https://example.com/list");
    }

    #[test]
    fn requested_playlist_wins_unless_empty() {
        let config = PickerConfig::default();
        assert_eq!(config.playlist_or_default(Some("https://x/list")), "https://x/list");
        assert_eq!(config.playlist_or_default(Some("")), DEFAULT_PLAYLIST);
    }
}
