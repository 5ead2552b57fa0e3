//! Render failures mapped to process exit codes.
//!
//! | code | meaning                                                  |
//! |------|----------------------------------------------------------|
//! | 0    | frame written                                            |
//! | 2    | bad arguments (reported by clap before `run`)            |
//! | 10   | generator rejected the raster (zero or overflowing size) |
//! | 11   | texture, preset, or PNG file could not be read/written   |
//! | 12   | unusable input: style name, preset contents, texture size|
//! | 13   | JSON report could not be produced                        |

use std::fmt;
use texdeform_core::EngineError;

#[derive(Debug)]
pub enum CliError {
    /// The generator refused its configuration.
    Engine(EngineError),
    /// Filesystem or decode failure, with the offending locator in the message.
    Io(String),
    Input(String),
    Serialization(String),
}

impl CliError {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Engine(_) => 10,
            Self::Io(_) => 11,
            Self::Input(_) => 12,
            Self::Serialization(_) => 13,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Engine(e) => write!(f, "{e}"),
            Self::Io(msg) | Self::Input(msg) | Self::Serialization(msg) => f.write_str(msg),
        }
    }
}

impl From<EngineError> for CliError {
    fn from(e: EngineError) -> Self {
        match e {
            EngineError::Io(_) | EngineError::ImageLoad { .. } => Self::Io(e.to_string()),
            EngineError::UnknownStyle(_)
            | EngineError::InvalidPreset(_)
            | EngineError::NotPowerOfTwo { .. } => Self::Input(e.to_string()),
            EngineError::InvalidDimensions | EngineError::DimensionMismatch { .. } => {
                Self::Engine(e)
            }
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_variant_has_its_own_exit_code() {
        let cases = [
            (CliError::Engine(EngineError::InvalidDimensions), 10),
            (CliError::Io("lava.png: not found".into()), 11),
            (CliError::Input("unknown style".into()), 12),
            (CliError::Serialization("eof".into()), 13),
        ];
        for (err, code) in cases {
            assert_eq!(err.exit_code(), code, "{err}");
        }
    }

    #[test]
    fn texture_failures_exit_as_io() {
        let read = CliError::from(EngineError::Io("preset.json: permission denied".into()));
        assert_eq!(read.exit_code(), 11);
        assert!(read.to_string().contains("permission denied"));

        let decode = CliError::from(EngineError::ImageLoad {
            locator: "lava.png".into(),
            reason: "missing".into(),
        });
        assert_eq!(decode.exit_code(), 11);
        assert!(decode.to_string().contains("lava.png"));
    }

    #[test]
    fn bad_style_preset_or_texture_size_exit_as_input() {
        let errors = [
            EngineError::UnknownStyle("wobble".into()),
            EngineError::InvalidPreset("texture locator must not be empty".into()),
            EngineError::NotPowerOfTwo {
                width: 3,
                height: 4,
            },
        ];
        for e in errors {
            let msg = e.to_string();
            let cli_err = CliError::from(e);
            assert_eq!(cli_err.exit_code(), 12);
            assert_eq!(cli_err.to_string(), msg);
        }
    }

    #[test]
    fn raster_size_errors_stay_engine_errors() {
        let cli_err = CliError::from(EngineError::InvalidDimensions);
        assert!(matches!(
            cli_err,
            CliError::Engine(EngineError::InvalidDimensions)
        ));
    }

    #[test]
    fn malformed_json_is_serialization_error() {
        let bad = serde_json::from_str::<serde_json::Value>("{\"style\":").unwrap_err();
        assert_eq!(CliError::from(bad).exit_code(), 13);
    }
}
