//! Payloads shown by the demo: a workspace picker with a three-step create
//! flow, a settings panel and a debug view of the stack itself.
use screenstack::Screen;

pub const TEMPLATES: [&str; 3] = ["Blank", "Kanban", "Docs"];
pub const NAME_SUGGESTIONS: [&str; 3] = ["Personal", "Team", "Sandbox"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Panel {
    /// Root of the picker. Holds the list as it was when the screen opened;
    /// a changed list means a new screen.
    Workspaces { names: Vec<String> },
    CreateWorkspace,
    ChooseTemplate { name: String },
    Confirm { name: String, template: String },
    StackInspector,
    Settings,
}

impl Panel {
    pub fn id(&self) -> &'static str {
        match self {
            Panel::Workspaces { .. } => "workspaces",
            Panel::CreateWorkspace => "create-workspace",
            Panel::ChooseTemplate { .. } => "choose-template",
            Panel::Confirm { .. } => "confirm",
            Panel::StackInspector => "stack-inspector",
            Panel::Settings => "settings",
        }
    }

    pub fn title(&self) -> String {
        match self {
            Panel::Workspaces { .. } => "Workspaces".to_string(),
            Panel::CreateWorkspace => "New workspace".to_string(),
            Panel::ChooseTemplate { name } => format!("Template for {name}"),
            Panel::Confirm { name, .. } => format!("Create {name}?"),
            Panel::StackInspector => "Stack inspector".to_string(),
            Panel::Settings => "Settings".to_string(),
        }
    }

    pub fn into_screen(self) -> Screen<Panel> {
        Screen::new(self.id(), self.title(), self)
    }
}
