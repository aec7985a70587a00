use crate::flow::panel::{NAME_SUGGESTIONS, TEMPLATES};
use crate::flow::{NavCommand, Panel};
use crate::ui::{Button, Card, Label, Toggle, UiContext, UiResponse, VBox, Widget};
use macroquad::math::{Rect, vec2};
use screenstack::StackSnapshot;

const ROW: f32 = 36.0;

/// App state a panel may read while drawing.
pub struct PanelView<'a> {
    pub snapshot: &'a StackSnapshot,
    pub slides_enabled: bool,
}

/// Draw `panel` into `area` and return whatever navigation it asks for.
pub fn panel_ui(
    ctx: &mut UiContext,
    panel: &Panel,
    view: &PanelView<'_>,
    area: Rect,
) -> Option<NavCommand> {
    Card.ui(ctx, area);
    let mut menu = VBox::new(16.0, 8.0);
    menu.begin(area);

    let command = match panel {
        Panel::Workspaces { names } => workspaces(ctx, &mut menu, names),
        Panel::CreateWorkspace => create_workspace(ctx, &mut menu),
        Panel::ChooseTemplate { name } => choose_template(ctx, &mut menu, name),
        Panel::Confirm { name, template } => confirm(ctx, &mut menu, name, template),
        Panel::StackInspector => stack_inspector(ctx, &mut menu, view.snapshot),
        Panel::Settings => settings(ctx, &mut menu, view.slides_enabled),
    };

    menu.end();
    command
}

fn button(ctx: &mut UiContext, menu: &mut VBox, label: &str) -> bool {
    let area = menu.item(vec2(f32::MAX, ROW));
    Button::new(label).ui(ctx, area) == UiResponse::Clicked
}

fn label(ctx: &mut UiContext, menu: &mut VBox, text: &str, muted: bool) {
    let area = menu.item(vec2(f32::MAX, ctx.font_size + 4.0));
    let mut label = Label::new(text);
    if muted {
        label = label.muted();
    }
    label.ui(ctx, area);
}

fn workspaces(ctx: &mut UiContext, menu: &mut VBox, names: &[String]) -> Option<NavCommand> {
    label(ctx, menu, "Switch workspace", true);
    let mut command = None;
    for name in names {
        if button(ctx, menu, name) {
            command = Some(NavCommand::SelectWorkspace(name.clone()));
        }
    }
    if button(ctx, menu, "+ Create workspace") {
        command = Some(NavCommand::Push(Panel::CreateWorkspace));
    }
    if button(ctx, menu, "Inspect stack") {
        command = Some(NavCommand::Push(Panel::StackInspector));
    }
    if button(ctx, menu, "Settings") {
        command = Some(NavCommand::Push(Panel::Settings));
    }
    command
}

fn create_workspace(ctx: &mut UiContext, menu: &mut VBox) -> Option<NavCommand> {
    label(ctx, menu, "Pick a name", true);
    let mut command = None;
    for name in NAME_SUGGESTIONS {
        if button(ctx, menu, name) {
            command = Some(NavCommand::Push(Panel::ChooseTemplate {
                name: name.to_string(),
            }));
        }
    }
    command
}

fn choose_template(ctx: &mut UiContext, menu: &mut VBox, name: &str) -> Option<NavCommand> {
    label(ctx, menu, &format!("Start {name} from"), true);
    let mut command = None;
    for template in TEMPLATES {
        if button(ctx, menu, template) {
            command = Some(NavCommand::Push(Panel::Confirm {
                name: name.to_string(),
                template: template.to_string(),
            }));
        }
    }
    command
}

fn confirm(ctx: &mut UiContext, menu: &mut VBox, name: &str, template: &str) -> Option<NavCommand> {
    label(ctx, menu, &format!("{name} using the {template} template"), false);
    let mut command = None;
    if button(ctx, menu, "Create") {
        command = Some(NavCommand::CreateWorkspace {
            name: name.to_string(),
            template: template.to_string(),
        });
    }
    if button(ctx, menu, "Start over") {
        command = Some(NavCommand::Reset);
    }
    command
}

/// Read-only view of the stack it is shown in, as pretty JSON.
fn stack_inspector(
    ctx: &mut UiContext,
    menu: &mut VBox,
    snapshot: &StackSnapshot,
) -> Option<NavCommand> {
    match serde_json::to_string_pretty(snapshot) {
        Ok(json) => {
            for line in json.lines() {
                label(ctx, menu, line, true);
            }
        }
        Err(e) => label(ctx, menu, &format!("snapshot unavailable: {e}"), false),
    }
    None
}

fn settings(ctx: &mut UiContext, menu: &mut VBox, slides_enabled: bool) -> Option<NavCommand> {
    let area = menu.item(vec2(f32::MAX, ROW));
    let mut toggle = Toggle::new("Slide transitions").with_state(slides_enabled);
    if toggle.ui(ctx, area) == UiResponse::Clicked {
        return Some(NavCommand::SetSlides(toggle.is_on));
    }
    None
}

/// Shown while the stack is closed.
pub fn launcher(
    ctx: &mut UiContext,
    area: Rect,
    active_workspace: Option<&str>,
    root: &Panel,
) -> Option<NavCommand> {
    let mut menu = VBox::new(20.0, 10.0);
    menu.begin(area);

    let title_area = menu.item(vec2(400.0, 40.0));
    Label::new(format!(
        "Workspace: {}",
        active_workspace.unwrap_or("none selected")
    ))
    .ui(ctx, title_area);

    let mut command = None;
    let open_area = menu.item(vec2(240.0, 44.0));
    if Button::new("Switch workspace").ui(ctx, open_area) == UiResponse::Clicked {
        command = Some(NavCommand::Open(root.clone()));
    }
    let hint_area = menu.item(vec2(400.0, 24.0));
    Label::new("Press O to resume where you left off")
        .muted()
        .ui(ctx, hint_area);

    menu.end();
    command
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::context::FrameInput;
    use macroquad::math::Vec2;

    fn clicked_ctx(x: f32, y: f32) -> UiContext {
        let mut ctx = UiContext::new();
        ctx.begin_frame_with(FrameInput {
            mouse_pos: Vec2::new(x, y),
            clicked: true,
            pressed_keys: Vec::new(),
        });
        ctx
    }

    fn view(snapshot: &StackSnapshot) -> PanelView<'_> {
        PanelView {
            snapshot,
            slides_enabled: true,
        }
    }

    #[test]
    fn workspace_name_click_selects_it() {
        let area = Rect::new(0.0, 0.0, 300.0, 400.0);
        let mut ctx = clicked_ctx(50.0, 60.0);
        let panel = Panel::Workspaces {
            names: vec!["Acme".to_string(), "Side project".to_string()],
        };
        let command = panel_ui(&mut ctx, &panel, &view(&StackSnapshot::default()), area);
        assert_eq!(command, Some(NavCommand::SelectWorkspace("Acme".to_string())));
    }

    #[test]
    fn settings_toggle_reports_new_state() {
        let area = Rect::new(0.0, 0.0, 300.0, 400.0);
        // first row of a 16px padded column, 268 wide
        let switch = Toggle::switch_area(Rect::new(16.0, 16.0, 268.0, ROW));
        let mut ctx = clicked_ctx(switch.x + 5.0, switch.y + 5.0);
        let command = panel_ui(&mut ctx, &Panel::Settings, &view(&StackSnapshot::default()), area);
        assert_eq!(command, Some(NavCommand::SetSlides(false)));
    }

    #[test]
    fn template_click_pushes_confirm() {
        // label row then the first template button
        let area = Rect::new(0.0, 0.0, 300.0, 400.0);
        let first_button_y = 16.0 + 24.0 + 8.0 + 10.0;
        let mut ctx = clicked_ctx(50.0, first_button_y);
        let panel = Panel::ChooseTemplate {
            name: "Team".to_string(),
        };

        let command = panel_ui(&mut ctx, &panel, &view(&StackSnapshot::default()), area);
        assert_eq!(
            command,
            Some(NavCommand::Push(Panel::Confirm {
                name: "Team".to_string(),
                template: "Blank".to_string(),
            }))
        );
    }

    #[test]
    fn inspector_renders_snapshot_without_navigating() {
        let mut ctx = UiContext::new();
        let snapshot = StackSnapshot::default();
        let command = panel_ui(
            &mut ctx,
            &Panel::StackInspector,
            &view(&snapshot),
            Rect::new(0.0, 0.0, 300.0, 400.0),
        );
        assert_eq!(command, None);
        assert!(!ctx.commands().is_empty());
    }
}
