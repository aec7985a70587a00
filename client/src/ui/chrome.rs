use crate::flow::NavCommand;
use crate::ui::{Button, DrawCmd, HBox, Label, UiContext, UiResponse, Widget};
use macroquad::math::{Rect, vec2};
use screenstack::ScreenStack;

pub const CHROME_HEIGHT: f32 = 40.0;
const BUTTON_SIZE: f32 = 32.0;

/// Title bar for the open stack: back button (only when there is somewhere
/// to go back to), current title and close button. Draws nothing while the
/// stack is closed.
pub fn chrome<P>(ctx: &mut UiContext, stack: &ScreenStack<P>, area: Rect) -> Option<NavCommand> {
    let screen = stack.current_screen()?;
    let bar = Rect::new(area.x, area.y, area.w, CHROME_HEIGHT);
    ctx.push_cmd(DrawCmd::Rect {
        rect: bar,
        color: ctx.theme.chrome_bg,
    });

    let mut row = HBox::new(4.0, 8.0);
    row.begin(bar);
    let mut command = None;

    if stack.can_go_back() {
        let back_area = row.item(vec2(60.0, BUTTON_SIZE));
        if Button::new("Back").ui(ctx, back_area) == UiResponse::Clicked {
            command = Some(NavCommand::Back);
        }
    }

    let close_area = row.trailing(vec2(BUTTON_SIZE, BUTTON_SIZE));
    let title_area = row.item(vec2(title_width(&row), BUTTON_SIZE));
    Label::new(screen.title()).ui(ctx, title_area);

    if Button::new("X").ui(ctx, close_area) == UiResponse::Clicked {
        command = Some(NavCommand::Close);
    }
    row.end();

    command
}

/// Space between the cursor and the close button.
fn title_width(row: &HBox) -> f32 {
    (row.remaining() - BUTTON_SIZE).max(0.0)
}
