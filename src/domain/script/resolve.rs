//! Resolution of the installation path and startup delay.

use crate::domain::{AppError, PathSelection, PresetTable};

/// Turn a path selection into the concrete path placed in the script.
///
/// Preset keys are looked up by exact match; custom paths are returned
/// verbatim. An unknown key is an error, never a fallback path.
pub fn resolve_path(presets: &PresetTable, selection: &PathSelection) -> Result<String, AppError> {
    match selection {
        PathSelection::Preset { key } => presets
            .get(key)
            .map(|preset| preset.install_path.clone())
            .ok_or_else(|| AppError::UnknownPreset {
                key: key.clone(),
                available: presets.keys().join(", "),
            }),
        PathSelection::Custom { raw_path } => Ok(raw_path.clone()),
    }
}

/// Floor the delay and clamp it at zero. Non-finite values are rejected.
pub fn clamp_delay(value: f64) -> Result<u64, AppError> {
    if !value.is_finite() {
        return Err(AppError::InvalidDelay(value.to_string()));
    }
    let floored = value.floor();
    // `as` saturates for values beyond u64::MAX.
    Ok(if floored <= 0.0 { 0 } else { floored as u64 })
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::domain::Preset;

    #[test]
    fn resolves_each_builtin_preset() {
        let table = PresetTable::builtin();
        for preset in table.iter() {
            let path = resolve_path(&table, &PathSelection::preset(&preset.key)).unwrap();
            assert_eq!(path, preset.install_path);
        }
    }

    #[test]
    fn unknown_preset_is_rejected() {
        let table = PresetTable::builtin();
        let err = resolve_path(&table, &PathSelection::preset("office2007")).unwrap_err();
        match err {
            AppError::UnknownPreset { key, available } => {
                assert_eq!(key, "office2007");
                assert_eq!(available, "m365, office2019, office2016");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn substitute_table_is_honored() {
        let table = PresetTable::new(vec![Preset::new("lab", "Lab", "Z:\\OUTLOOK.EXE")]);
        assert_eq!(resolve_path(&table, &PathSelection::preset("lab")).unwrap(), "Z:\\OUTLOOK.EXE");
        assert!(resolve_path(&table, &PathSelection::preset("m365")).is_err());
    }

    #[test]
    fn custom_path_is_returned_verbatim() {
        let table = PresetTable::builtin();
        for raw in ["", "  padded  ", "C:\\Program Files\\Outlook\\OUTLOOK.EXE", "$env:ProgramFiles"] {
            assert_eq!(resolve_path(&table, &PathSelection::custom(raw)).unwrap(), raw);
        }
    }

    #[test]
    fn clamp_floors_and_clamps() {
        assert_eq!(clamp_delay(12.0).unwrap(), 12);
        assert_eq!(clamp_delay(12.9).unwrap(), 12);
        assert_eq!(clamp_delay(0.0).unwrap(), 0);
        assert_eq!(clamp_delay(-3.0).unwrap(), 0);
        assert_eq!(clamp_delay(-0.5).unwrap(), 0);
        assert_eq!(clamp_delay(1e30).unwrap(), u64::MAX);
    }

    #[test]
    fn clamp_rejects_non_finite_values() {
        assert!(matches!(clamp_delay(f64::NAN), Err(AppError::InvalidDelay(_))));
        assert!(matches!(clamp_delay(f64::INFINITY), Err(AppError::InvalidDelay(_))));
        assert!(matches!(clamp_delay(f64::NEG_INFINITY), Err(AppError::InvalidDelay(_))));
    }

    proptest! {
        #[test]
        fn non_negative_delays_are_floored(value in 0.0f64..1e12) {
            prop_assert_eq!(clamp_delay(value).unwrap(), value.floor() as u64);
        }

        #[test]
        fn negative_delays_clamp_to_zero(value in -1e12f64..0.0) {
            prop_assert_eq!(clamp_delay(value).unwrap(), 0);
        }
    }
}
