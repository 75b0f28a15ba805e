//! Assembly of the PowerShell script from resolved, escaped inputs.
//!
//! The script is an ordered list of sections. Each section is a pure function
//! of [`AssemblyInputs`] returning its lines; sections are separated by one
//! blank line and the whole text carries no trailing newline.

/// Comment emitted instead of the close sequence when Outlook stays open.
pub const KEEP_OPEN_COMMENT: &str =
    "# Outlook reste ouvert pour que vous puissiez continuer à l'utiliser.";

/// Statement that asks the running Outlook window to close.
pub const CLOSE_WINDOW_STATEMENT: &str = "    $outlookProcess.CloseMainWindow() | Out-Null";

/// Inputs of the assembler, already resolved and escaped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssemblyInputs {
    pub install_path: String,
    pub escaped_recipient: String,
    pub escaped_subject: String,
    /// Body with its trailing newline guaranteed; never escaped.
    pub body: String,
    pub delay_seconds: u64,
    pub keep_open: bool,
}

type Section = fn(&AssemblyInputs) -> Vec<String>;

const SECTIONS: [Section; 9] =
    [header, strictness, presence_check, launch, connect, compose, send, closing, completion];

/// Render the complete script text.
pub fn assemble(inputs: &AssemblyInputs) -> String {
    SECTIONS.iter().map(|section| section(inputs).join("\n")).collect::<Vec<_>>().join("\n\n")
}

fn lines(items: &[&str]) -> Vec<String> {
    items.iter().map(|line| line.to_string()).collect()
}

fn header(inputs: &AssemblyInputs) -> Vec<String> {
    vec![
        "# Automatise l'ouverture d'Outlook et l'envoi d'un email au démarrage".to_string(),
        "param(".to_string(),
        format!("    [string]$OutlookPath = \"{}\"", inputs.install_path),
        ")".to_string(),
    ]
}

fn strictness(_: &AssemblyInputs) -> Vec<String> {
    lines(&["$ErrorActionPreference = \"Stop\""])
}

fn presence_check(_: &AssemblyInputs) -> Vec<String> {
    lines(&[
        "Write-Verbose \"Vérification de la présence d'Outlook...\"",
        "if (-not (Test-Path $OutlookPath)) {",
        "    throw \"Outlook n'a pas été trouvé à l'emplacement spécifié : $OutlookPath\"",
        "}",
    ])
}

fn launch(inputs: &AssemblyInputs) -> Vec<String> {
    vec![
        "if (-not (Get-Process -Name OUTLOOK -ErrorAction SilentlyContinue)) {".to_string(),
        "    Write-Verbose \"Lancement d'Outlook...\"".to_string(),
        "    Start-Process -FilePath $OutlookPath".to_string(),
        format!("    Start-Sleep -Seconds {}", inputs.delay_seconds),
        "} else {".to_string(),
        "    Write-Verbose \"Outlook est déjà en cours d'exécution.\"".to_string(),
        "}".to_string(),
    ]
}

fn connect(_: &AssemblyInputs) -> Vec<String> {
    lines(&[
        "Write-Verbose \"Connexion à Outlook...\"",
        "$outlook = New-Object -ComObject Outlook.Application",
        "$namespace = $outlook.GetNamespace(\"MAPI\")",
        "$namespace.Logon()",
    ])
}

fn compose(inputs: &AssemblyInputs) -> Vec<String> {
    vec![
        "Write-Verbose \"Création du message...\"".to_string(),
        "$mail = $outlook.CreateItem(0)".to_string(),
        format!("$mail.To = \"{}\"", inputs.escaped_recipient),
        format!("$mail.Subject = \"{}\"", inputs.escaped_subject),
        format!("$mail.Body = @\"\n{}\"@", inputs.body),
    ]
}

fn send(_: &AssemblyInputs) -> Vec<String> {
    lines(&["Write-Verbose \"Envoi du message...\"", "$mail.Send()"])
}

fn closing(inputs: &AssemblyInputs) -> Vec<String> {
    closing_snippet(inputs.keep_open)
}

fn completion(_: &AssemblyInputs) -> Vec<String> {
    lines(&["Write-Verbose \"Terminé.\""])
}

/// The only branch of the template: keep Outlook open or close its window.
pub fn closing_snippet(keep_open: bool) -> Vec<String> {
    if keep_open {
        return lines(&[KEEP_OPEN_COMMENT]);
    }
    lines(&[
        "Write-Verbose \"Fermeture d'Outlook...\"",
        "$outlookProcess = Get-Process -Name OUTLOOK -ErrorAction SilentlyContinue",
        "if ($outlookProcess) {",
        CLOSE_WINDOW_STATEMENT,
        "}",
    ])
}
