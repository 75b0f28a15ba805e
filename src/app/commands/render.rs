use crate::app::AppContext;
use crate::app::commands::load_config;
use crate::domain::{AppError, GeneratorConfig, PathSelection, ScriptParameters, ScriptRenderer};
use crate::ports::ConfigStore;

/// Per-invocation overrides of configured values.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    pub recipient: Option<String>,
    pub subject: Option<String>,
    pub body: Option<String>,
    pub startup_delay_seconds: Option<f64>,
    pub keep_open: Option<bool>,
    pub path_selection: Option<PathSelection>,
}

/// Result of a render: the script and the parameters it was built from.
#[derive(Debug, Clone)]
pub struct RenderOutcome {
    pub script: String,
    pub parameters: ScriptParameters,
}

/// Merge configuration and overrides into a complete parameter set.
pub fn build_parameters(config: &GeneratorConfig, options: RenderOptions) -> ScriptParameters {
    ScriptParameters {
        recipient_address: options.recipient.unwrap_or_else(|| config.message.recipient.clone()),
        subject_line: options.subject.unwrap_or_else(|| config.message.subject.clone()),
        body_text: options.body.unwrap_or_else(|| config.message.body.clone()),
        startup_delay_seconds: options
            .startup_delay_seconds
            .unwrap_or(config.outlook.startup_delay_seconds),
        keep_application_open: options.keep_open.unwrap_or(config.outlook.keep_open),
        path_selection: options.path_selection.unwrap_or_else(|| config.path_selection()),
    }
}

/// Execute the render command.
pub fn execute<C: ConfigStore>(
    ctx: &AppContext<C>,
    options: RenderOptions,
) -> Result<RenderOutcome, AppError> {
    let config = load_config(ctx)?;
    let presets = config.preset_table();
    let parameters = build_parameters(&config, options);

    let script = ScriptRenderer::new(&presets).render(&parameters)?;
    Ok(RenderOutcome { script, parameters })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory_config_store::MemoryConfigStore;
    use crate::domain::script::{CLOSE_WINDOW_STATEMENT, KEEP_OPEN_COMMENT};

    #[test]
    fn defaults_render_reference_script() {
        let ctx = AppContext::new(MemoryConfigStore::new());
        let outcome = execute(&ctx, RenderOptions::default()).unwrap();

        assert!(outcome.script.contains("$mail.To = \"votre.adresse@email.com\""));
        assert!(outcome.script.contains("$mail.Subject = \"Rappel automatique\""));
        assert!(outcome.script.contains("    Start-Sleep -Seconds 12\n"));
        assert!(outcome.script.contains("Bonne journée !\n\"@"));
        assert!(outcome.script.contains(KEEP_OPEN_COMMENT));
    }

    #[test]
    fn overrides_take_precedence_over_config() {
        let ctx = AppContext::new(MemoryConfigStore::with_content(
            "[message]\nsubject = \"Config\"\n\n[outlook]\nkeep_open = true\n",
        ));
        let outcome = execute(
            &ctx,
            RenderOptions {
                subject: Some("Flag $1".into()),
                keep_open: Some(false),
                startup_delay_seconds: Some(4.7),
                path_selection: Some(PathSelection::preset("office2016")),
                ..RenderOptions::default()
            },
        )
        .unwrap();

        assert!(outcome.script.contains("$mail.Subject = \"Flag `$1\""));
        assert!(outcome.script.contains(CLOSE_WINDOW_STATEMENT));
        assert!(outcome.script.contains("Start-Sleep -Seconds 4\n"));
        assert!(outcome.script.contains("Program Files (x86)"));
        assert_eq!(outcome.parameters.path_selection, PathSelection::preset("office2016"));
    }

    #[test]
    fn configured_preset_is_resolved_from_extended_table() {
        let ctx = AppContext::new(MemoryConfigStore::with_content(
            "[outlook]\npreset = \"lab\"\n\n[[presets]]\nkey = \"lab\"\nlabel = \"Lab\"\npath = 'Z:\\OUTLOOK.EXE'\n",
        ));
        let outcome = execute(&ctx, RenderOptions::default()).unwrap();
        assert!(outcome.script.contains("[string]$OutlookPath = \"Z:\\OUTLOOK.EXE\""));
    }

    #[test]
    fn unknown_configured_preset_is_an_error() {
        let ctx = AppContext::new(MemoryConfigStore::with_content("[outlook]\npreset = \"nope\"\n"));
        assert!(matches!(
            execute(&ctx, RenderOptions::default()),
            Err(AppError::UnknownPreset { .. })
        ));
    }
}
