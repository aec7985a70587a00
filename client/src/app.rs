use crate::flow::{NavCommand, Panel, command_for_input};
use crate::transition::SlideTransition;
use crate::ui::{CHROME_HEIGHT, DrawCmd, PanelView, UiContext, chrome, launcher, panel_ui};
use macroquad::math::{Rect, Vec2, vec2};
use screenstack::{NavigationDirection, ScreenStack, StackConfig, StackError, StackEventKind};
use std::sync::mpsc::{self, Receiver};
use tracing::{debug, info, warn};

const SLIDE_SECONDS: f32 = 0.18;

/// Demo application state: one screen stack for the workspace picker plus
/// the workspaces it manages.
pub struct DemoApp {
    pub stack: ScreenStack<Panel>,
    pub workspaces: Vec<String>,
    pub active_workspace: Option<String>,
    pub slide: SlideTransition,
    transitions: Receiver<NavigationDirection>,
}

impl DemoApp {
    pub fn new(config: StackConfig) -> Self {
        let mut stack = ScreenStack::with_config(config);
        let (sender, transitions) = mpsc::channel();
        stack.subscribe(move |event| {
            if event.kind == StackEventKind::Closed {
                return;
            }
            if let Err(e) = sender.send(event.snapshot.direction) {
                warn!(error = %e, "transition receiver dropped");
            }
        });

        DemoApp {
            stack,
            workspaces: vec!["Acme".to_string(), "Side project".to_string()],
            active_workspace: None,
            slide: SlideTransition::new(SLIDE_SECONDS),
            transitions,
        }
    }

    /// Root panel reflecting the current workspace list.
    pub fn workspaces_panel(&self) -> Panel {
        Panel::Workspaces {
            names: self.workspaces.clone(),
        }
    }

    /// Restart the slide for every transition the stack reported since the
    /// last frame; the latest one wins.
    pub fn drain_transitions(&mut self) {
        while let Ok(direction) = self.transitions.try_recv() {
            self.slide.start(direction);
        }
    }

    /// Record this frame's UI and return the single command it raised.
    /// Keyboard and outside clicks win over the chrome, and the chrome over
    /// the panel.
    pub fn frame(&self, ui: &mut UiContext, area: Rect, window: Rect) -> Option<NavCommand> {
        let input = command_for_input(&ui.input, self.stack.is_open(), area);

        if !self.stack.is_open() {
            let root = self.workspaces_panel();
            let launched = launcher(ui, window, self.active_workspace.as_deref(), &root);
            return input.or(launched);
        }

        ui.push_cmd(DrawCmd::Rect {
            rect: window,
            color: ui.theme.backdrop,
        });
        let bar = chrome(ui, &self.stack, area);

        let content = Rect::new(
            area.x,
            area.y + CHROME_HEIGHT,
            area.w,
            area.h - CHROME_HEIGHT,
        );
        let mut panel = None;
        if let Some(screen) = self.stack.current_screen() {
            let snapshot = self.stack.snapshot();
            if !self.slide.is_finished() {
                ui.set_offset(vec2(self.slide.offset_x(area.w), 0.0));
            }
            let view = PanelView {
                snapshot: &snapshot,
                slides_enabled: self.slide.active,
            };
            panel = panel_ui(ui, screen.payload(), &view, content);
            ui.set_offset(Vec2::ZERO);
        }

        input.or(bar).or(panel)
    }

    pub fn apply(&mut self, command: NavCommand) {
        match command {
            NavCommand::Open(panel) => self.stack.open_screen(panel.into_screen()),
            NavCommand::Push(panel) => {
                if let Err(e) = self.stack.push_screen(panel.into_screen()) {
                    warn!(error = %e, "navigation rejected");
                }
            }
            NavCommand::Back => {
                if !self.stack.pop_screen() {
                    debug!("already at root");
                }
            }
            NavCommand::Reset => {
                self.stack.reset();
            }
            NavCommand::Close => self.stack.close(),
            NavCommand::Reopen => match self.stack.reopen() {
                Ok(()) => {}
                Err(StackError::NothingToResume) => {
                    let root = self.workspaces_panel();
                    self.stack.open_screen(root.into_screen());
                }
                Err(e) => warn!(error = %e, "reopen failed"),
            },
            NavCommand::CreateWorkspace { name, template } => {
                info!(%name, %template, "created workspace");
                self.workspaces.push(name.clone());
                self.active_workspace = Some(name);
                // Fresh root so a later reopen shows the new list.
                let root = self.workspaces_panel();
                self.stack.open_screen(root.into_screen());
                self.stack.close();
            }
            NavCommand::SelectWorkspace(name) => {
                info!(%name, "switched workspace");
                self.active_workspace = Some(name);
                self.stack.close();
            }
            NavCommand::SetSlides(on) => {
                debug!(on, "slide transitions");
                self.slide.active = on;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::context::FrameInput;
    use macroquad::prelude::KeyCode;
    use screenstack::ClosePolicy;

    const AREA: Rect = Rect {
        x: 0.0,
        y: 0.0,
        w: 300.0,
        h: 400.0,
    };
    const WINDOW: Rect = Rect {
        x: 0.0,
        y: 0.0,
        w: 640.0,
        h: 480.0,
    };

    fn input(x: f32, y: f32, clicked: bool, keys: &[KeyCode]) -> UiContext {
        let mut ui = UiContext::new();
        ui.begin_frame_with(FrameInput {
            mouse_pos: Vec2::new(x, y),
            clicked,
            pressed_keys: keys.to_vec(),
        });
        ui
    }

    fn texts(ui: &UiContext) -> Vec<String> {
        ui.commands()
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCmd::Text { text, .. } => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    fn current_id(app: &DemoApp) -> Option<&str> {
        app.stack.current_screen().map(|s| s.id().as_str())
    }

    fn walk_create_flow(app: &mut DemoApp) {
        app.apply(NavCommand::Open(app.workspaces_panel()));
        app.apply(NavCommand::Push(Panel::CreateWorkspace));
        app.apply(NavCommand::Push(Panel::ChooseTemplate {
            name: "Team".to_string(),
        }));
        app.apply(NavCommand::Push(Panel::Confirm {
            name: "Team".to_string(),
            template: "Kanban".to_string(),
        }));
    }

    #[test]
    fn create_flow_walks_forward_and_back() {
        let mut app = DemoApp::new(StackConfig::default());
        walk_create_flow(&mut app);
        assert_eq!(current_id(&app), Some("confirm"));
        assert_eq!(app.stack.depth(), 4);

        app.apply(NavCommand::Back);
        assert_eq!(current_id(&app), Some("choose-template"));
        app.apply(NavCommand::Reset);
        assert_eq!(current_id(&app), Some("workspaces"));
        assert_eq!(app.stack.depth(), 1);
    }

    #[test]
    fn finishing_create_flow_closes_with_fresh_root() {
        let mut app = DemoApp::new(StackConfig::default());
        walk_create_flow(&mut app);
        app.apply(NavCommand::CreateWorkspace {
            name: "Team".to_string(),
            template: "Kanban".to_string(),
        });

        assert!(!app.stack.is_open());
        assert_eq!(app.active_workspace.as_deref(), Some("Team"));

        app.apply(NavCommand::Reopen);
        let root = app.stack.current_screen().unwrap();
        match root.payload() {
            Panel::Workspaces { names } => assert!(names.contains(&"Team".to_string())),
            other => panic!("unexpected root: {other:?}"),
        }
        assert!(!app.stack.can_go_back());
    }

    #[test]
    fn reopen_resumes_retained_history() {
        let mut app = DemoApp::new(StackConfig::default());
        walk_create_flow(&mut app);
        app.apply(NavCommand::Close);
        app.apply(NavCommand::Reopen);
        assert_eq!(current_id(&app), Some("confirm"));
    }

    #[test]
    fn reopen_after_clearing_close_starts_at_root() {
        let mut app = DemoApp::new(StackConfig {
            close_policy: ClosePolicy::Clear,
            ..StackConfig::default()
        });
        walk_create_flow(&mut app);
        app.apply(NavCommand::Close);
        app.apply(NavCommand::Reopen);
        assert_eq!(current_id(&app), Some("workspaces"));
        assert_eq!(app.stack.depth(), 1);
    }

    #[test]
    fn push_while_closed_is_ignored() {
        let mut app = DemoApp::new(StackConfig::default());
        app.apply(NavCommand::Push(Panel::CreateWorkspace));
        assert!(!app.stack.is_open());
        assert_eq!(app.stack.depth(), 0);
    }

    #[test]
    fn transitions_follow_last_navigation() {
        let mut app = DemoApp::new(StackConfig::default());
        app.apply(NavCommand::Open(app.workspaces_panel()));
        app.apply(NavCommand::Push(Panel::CreateWorkspace));
        app.drain_transitions();
        assert_eq!(app.slide.offset_x(100.0), 100.0);

        app.apply(NavCommand::Back);
        app.apply(NavCommand::Close);
        app.drain_transitions();
        assert_eq!(app.slide.offset_x(100.0), -100.0);
    }

    #[test]
    fn selecting_a_workspace_names_it_in_the_launcher() {
        let mut app = DemoApp::new(StackConfig::default());
        app.apply(NavCommand::Open(app.workspaces_panel()));

        // first name button, below the chrome and the column heading
        let mut ui = input(50.0, CHROME_HEIGHT + 60.0, true, &[]);
        let command = app.frame(&mut ui, AREA, WINDOW);
        assert_eq!(command, Some(NavCommand::SelectWorkspace("Acme".to_string())));
        app.apply(command.unwrap());

        assert!(!app.stack.is_open());
        assert_eq!(app.active_workspace.as_deref(), Some("Acme"));
        let mut ui = input(0.0, 0.0, false, &[]);
        app.frame(&mut ui, AREA, WINDOW);
        assert!(texts(&ui).contains(&"Workspace: Acme".to_string()));
    }

    #[test]
    fn one_navigation_per_frame() {
        let mut app = DemoApp::new(StackConfig::default());
        walk_create_flow(&mut app);
        app.apply(NavCommand::Back);
        assert_eq!(app.stack.current_index(), Some(2));

        // Backspace together with a click on the chrome back button
        let mut ui = input(10.0, 10.0, true, &[KeyCode::Backspace]);
        let command = app.frame(&mut ui, AREA, WINDOW);
        assert_eq!(command, Some(NavCommand::Back));
        app.apply(command.unwrap());
        assert_eq!(app.stack.current_index(), Some(1));

        // Escape wins over a click inside the panel
        let mut ui = input(50.0, CHROME_HEIGHT + 60.0, true, &[KeyCode::Escape]);
        assert_eq!(app.frame(&mut ui, AREA, WINDOW), Some(NavCommand::Close));
    }

    #[test]
    fn settings_toggle_turns_slides_off() {
        let mut app = DemoApp::new(StackConfig::default());
        app.apply(NavCommand::Open(app.workspaces_panel()));
        app.apply(NavCommand::Push(Panel::Settings));
        assert_eq!(app.stack.current_screen().unwrap().title(), "Settings");

        app.apply(NavCommand::SetSlides(false));
        assert!(!app.slide.active);

        app.apply(NavCommand::Back);
        app.drain_transitions();
        assert_eq!(app.slide.offset_x(100.0), 0.0);
    }
}
