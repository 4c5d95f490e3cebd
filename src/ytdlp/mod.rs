use std::{
    env,
    path::{Path, PathBuf},
    process::{Command, Stdio},
};

use crate::{error::PickerError, track::playlist::PlaylistListing};

#[cfg(windows)]
pub const YTDLP_BINARY_NAME: &str = "yt-dlp.exe";
#[cfg(not(windows))]
pub const YTDLP_BINARY_NAME: &str = "yt-dlp";

/// Nome usado quando nada foi encontrado: o sistema resolve pelo PATH.
pub const YTDLP_FALLBACK: &str = "yt-dlp";

/// Resultado capturado de uma execução de processo externo.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    pub success: bool,
}

/// Executa um programa externo de forma síncrona e captura stdout/stderr.
pub trait CommandRunner {
    fn run(&mut self, program: &Path, args: &[&str]) -> Result<CommandOutput, PickerError>;
}

/// Runner de produção, usando `std::process::Command`.
#[derive(Clone, Copy, Debug, Default)]
pub struct ProcessRunner;

impl CommandRunner for ProcessRunner {
    fn run(&mut self, program: &Path, args: &[&str]) -> Result<CommandOutput, PickerError> {
        let output = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|source| PickerError::Spawn {
                program: program.display().to_string(),
                source,
            })?;

        Ok(CommandOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            success: output.status.success(),
        })
    }
}

/// Decide qual binário do yt-dlp usar.
///
/// Ordem: caminho explícito da configuração, depois um `yt-dlp` ao lado do executável,
/// e por último o nome puro (resolvido pelo PATH na hora de spawnar).
pub fn resolve_binary(explicit: Option<&str>, exe_dir: Option<&Path>) -> PathBuf {
    if let Some(explicit) = explicit {
        return PathBuf::from(explicit);
    }

    if let Some(dir) = exe_dir {
        let local_binary = dir.join(YTDLP_BINARY_NAME);
        if local_binary.is_file() {
            return local_binary;
        }
    }

    PathBuf::from(YTDLP_FALLBACK)
}

/// Diretório do executável atual, se puder ser determinado.
pub fn current_exe_dir() -> Option<PathBuf> {
    env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
}

/// Wrapper fino em volta das duas chamadas que fazemos ao yt-dlp.
pub struct YtDlp<R: CommandRunner> {
    binary: PathBuf,
    runner: R,
}

impl<R: CommandRunner> YtDlp<R> {
    pub fn new(binary: PathBuf, runner: R) -> YtDlp<R> {
        YtDlp { binary, runner }
    }

    pub fn binary(&self) -> &Path {
        &self.binary
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Lista as entradas de uma playlist no modo flat (sem resolver cada vídeo).
    pub fn list_playlist(&mut self, playlist_url: &str) -> Result<PlaylistListing, PickerError> {
        let stdout = self.invoke(&[
            "--flat-playlist",
            "--dump-single-json",
            "--no-warnings",
            playlist_url,
        ])?;

        Ok(serde_json::from_str(&stdout)?)
    }

    /// Resolve a URL direta do melhor stream só de áudio de um vídeo.
    pub fn resolve_audio_url(&mut self, video_url: &str) -> Result<String, PickerError> {
        let stdout = self.invoke(&["-g", "-f", "bestaudio", "--no-warnings", video_url])?;
        Ok(stdout.trim().to_string())
    }

    fn invoke(&mut self, args: &[&str]) -> Result<String, PickerError> {
        tracing::debug!("ytdlp: executando {} {:?}", self.binary.display(), args);

        let output = self.runner.run(&self.binary, args)?;
        if !output.success {
            tracing::warn!("ytdlp: processo terminou com erro: {}", output.stderr.trim_end());
            return Err(PickerError::ToolFailed {
                stderr: output.stderr,
            });
        }

        Ok(output.stdout)
    }
}
