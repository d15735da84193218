/// What the status line is collecting input for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    OpenFile,
    SaveFile,
    InstallPackage,
}

impl PromptKind {
    pub fn label(&self) -> &'static str {
        match self {
            PromptKind::OpenFile => "Open file: ",
            PromptKind::SaveFile => "Save as: ",
            PromptKind::InstallPackage => "Install package: ",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Edit,
    Prompt(PromptKind),
}

impl Mode {
    pub fn display(&self) -> &'static str {
        match self {
            Mode::Edit => "EDIT",
            Mode::Prompt(_) => "PROMPT",
        }
    }
}
