//! Default values for config fields, referenced via `#[serde(default = …)]`.

pub(super) fn default_name() -> String {
    "tarefa".to_string()
}

pub(super) fn default_data_dir() -> String {
    "data".to_string()
}

pub(super) fn default_log_level() -> String {
    "info".to_string()
}

pub(super) fn default_locales_dir() -> String {
    "locales".to_string()
}
