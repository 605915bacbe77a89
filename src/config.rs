/// Application-level constants
pub const APP_NAME: &str = "triaje-scope";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Inline message shown while editing a consultation whose motivo/examen
/// read as a non-respiratory presentation.
pub const EDIT_REJECTION_MESSAGE: &str =
    "El motivo o el examen sugieren un cuadro NO respiratorio. Ajusta el texto para continuar.";

/// Message shown when a preliminary diagnosis block is refused.
pub const DIAGNOSIS_REJECTION_MESSAGE: &str =
    "El texto ingresado sugiere un motivo NO respiratorio, por lo que está fuera del alcance del modelo. Ajusta el motivo/examen.";

/// Default `EnvFilter` directive when `RUST_LOG` is unset.
pub fn default_log_filter() -> &'static str {
    "triaje_scope=info,warn"
}

/// Filter used by the CLI with `--verbose`.
pub fn verbose_log_filter() -> &'static str {
    "triaje_scope=debug,info"
}
