pub mod playlist;
pub mod track_picker;
