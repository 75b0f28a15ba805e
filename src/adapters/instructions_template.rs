//! Embedded installation instructions rendered with minijinja.

use minijinja::{Environment, UndefinedBehavior, context};

use crate::domain::{AppError, PresetTable};

const INSTRUCTIONS_TEMPLATE: &str = include_str!("../assets/instructions.txt.j2");
const TEMPLATE_NAME: &str = "instructions.txt";

/// Values substituted into the instructions template.
#[derive(Debug, Clone)]
pub struct InstructionsContext<'a> {
    pub script_name: &'a str,
    pub keep_open: bool,
    pub presets: &'a PresetTable,
}

/// Render the Task Scheduler installation steps.
pub fn render_instructions(ctx: &InstructionsContext<'_>) -> Result<String, AppError> {
    let mut env = Environment::new();
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    env.set_keep_trailing_newline(true);
    env.add_template(TEMPLATE_NAME, INSTRUCTIONS_TEMPLATE)
        .map_err(|e| AppError::Template(e.to_string()))?;

    let presets: Vec<_> = ctx.presets.iter().collect();
    env.get_template(TEMPLATE_NAME)
        .and_then(|template| {
            template.render(context! {
                script_name => ctx.script_name,
                keep_open => ctx.keep_open,
                presets => presets,
            })
        })
        .map_err(|e| AppError::Template(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_script_name_into_scheduler_arguments() {
        let presets = PresetTable::builtin();
        let text = render_instructions(&InstructionsContext {
            script_name: "Rappel.ps1",
            keep_open: true,
            presets: &presets,
        })
        .unwrap();

        assert!(text.contains("enregistrez-le sous le nom Rappel.ps1"));
        assert!(text.contains("-ExecutionPolicy Bypass -File \"C:\\Users\\<vous>\\Documents\\Rappel.ps1\""));
        assert!(text.contains("Outlook sera ouvert automatiquement"));
    }

    #[test]
    fn lists_presets_and_closing_behavior() {
        let presets = PresetTable::builtin();
        let text = render_instructions(&InstructionsContext {
            script_name: "Outlook-AutoStart.ps1",
            keep_open: false,
            presets: &presets,
        })
        .unwrap();

        assert!(text.contains("Outlook sera fermé après l'envoi"));
        assert!(text.contains("  office2016 - Office 2016/2013 (32 bits): "));
        assert!(text.ends_with('\n'));
    }
}
