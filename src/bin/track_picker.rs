use std::io::{self, IsTerminal, Read};

use inference_helpers::{
    config::PickerConfig,
    logging, output,
    track::track_picker::{PickerRequest, TrackPicker},
    ytdlp::{self, ProcessRunner, YtDlp},
};

/// Lê o pedido opcional do stdin. Terminal interativo ou erro de leitura = sem pedido.
fn read_request() -> PickerRequest {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        return PickerRequest::default();
    }

    let mut input = String::new();
    match stdin.lock().read_to_string(&mut input) {
        Ok(_) => PickerRequest::parse(&input),
        Err(err) => {
            tracing::debug!("track_picker: falha ao ler stdin: {}", err);
            PickerRequest::default()
        }
    }
}

fn main() {
    logging::init();

    let config = PickerConfig::from_env();
    let request = read_request();

    let exe_dir = ytdlp::current_exe_dir();
    let binary = ytdlp::resolve_binary(config.ytdlp.as_deref(), exe_dir.as_deref());
    tracing::debug!("track_picker: usando yt-dlp em {}", binary.display());

    let mut picker = TrackPicker::new(YtDlp::new(binary, ProcessRunner), config);
    let response = picker.respond(request.playlist.as_deref());

    output::emit(&response);
}
