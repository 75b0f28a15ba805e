use mailstart::{
    AppError, PathSelection, Preset, PresetTable, ScriptParameters, ScriptRenderer, clamp_delay,
    escape_for_script_string, render,
};

fn params() -> ScriptParameters {
    ScriptParameters {
        recipient_address: "moi@example.com".into(),
        subject_line: "Rappel".into(),
        body_text: "Bonjour".into(),
        startup_delay_seconds: 12.0,
        keep_application_open: true,
        path_selection: PathSelection::preset("m365"),
    }
}

#[test]
fn render_is_deterministic() {
    assert_eq!(render(&params()).unwrap(), render(&params()).unwrap());
}

#[test]
fn render_with_substitute_table() {
    let table = PresetTable::new(vec![Preset::new("lab", "Lab", "Z:\\OUTLOOK.EXE")]);
    let mut input = params();
    input.path_selection = PathSelection::preset("lab");

    let script = ScriptRenderer::new(&table).render(&input).unwrap();
    assert!(script.contains("[string]$OutlookPath = \"Z:\\OUTLOOK.EXE\""));

    assert!(matches!(render(&input), Err(AppError::UnknownPreset { .. })));
}

#[test]
fn infinite_delay_is_rejected_before_rendering() {
    let mut input = params();
    input.startup_delay_seconds = f64::INFINITY;
    assert!(matches!(render(&input), Err(AppError::InvalidDelay(_))));
    assert_eq!(clamp_delay(7.99).unwrap(), 7);
}

#[test]
fn escaping_only_touches_special_characters() {
    assert_eq!(escape_for_script_string("l'été à 5 $"), "l'été à 5 `$");
}
