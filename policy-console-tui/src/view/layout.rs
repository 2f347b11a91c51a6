//! 主布局渲染

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::i18n::t;
use crate::model::App;

use super::components;
use super::theme::{colors, Styles};

/// 渲染主布局
pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();

    // 三层布局：标题栏 + 主内容区 + 底部区域
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),                            // 标题栏
            Constraint::Min(3),                               // 主内容区
            Constraint::Length(components::statusbar::HEIGHT), // 底部区域
        ])
        .split(size);

    render_title_bar(app, frame, main_layout[0]);
    render_screen(app, frame, main_layout[1]);
    components::statusbar::render(app, frame, main_layout[2]);

    // 删除确认浮层（在最上层）
    components::confirm::render(app, frame);
}

/// 渲染标题栏：应用名称、策略名称、只读标记
fn render_title_bar(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let mut title = format!(
        " {} · {}: {}",
        texts.common.app_name, texts.common.policy, app.policy_name
    );
    if app.read_only {
        title.push_str(&format!(" [{}]", texts.common.read_only));
    }

    frame.render_widget(Paragraph::new(title).style(Styles::title_bar()), area);
}

/// 根据当前屏幕渲染内容
fn render_screen(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();

    let block = Block::default()
        .title(format!(" {} ", app.screen.title()))
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if app.screen.is_form() {
            c.border_focused
        } else {
            c.border
        }));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    if let Some(menu) = app.active_menu() {
        components::menu::render(menu, frame, inner_area);
    } else if let Some(list) = app.active_list() {
        components::list::render(list, frame, inner_area);
    } else if let Some(ref form) = app.form {
        components::form::render(form, app.cursor_visible, frame, inner_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FormKind, InputForm, Screen};
    use policy_console_core::{GlobalRule, Rule};
    use ratatui::{backend::TestBackend, Terminal};

    fn render_to_string(app: &App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| render(app, frame)).unwrap();

        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    fn rules_app(read_only: bool) -> App {
        let mut app = App::new("targets", "/repo/.policy-console/policy.json", read_only);
        app.set_rules(vec![
            Rule::new("R1", "git:refs/heads/main", "alice"),
            Rule::new("R2", "git:refs/tags/*", "bob"),
        ]);
        app.screen = Screen::PolicyRules;
        app
    }

    #[test]
    fn choice_menu_lists_entries() {
        let app = App::new("targets", "", false);
        let screen = render_to_string(&app, 70, 14);
        assert!(screen.contains("Policy Console"));
        assert!(screen.contains("▶ ≡ Policy"));
        assert!(screen.contains("View and manage Policy"));
        assert!(screen.contains("◆ Trust"));
        assert!(screen.contains("↑/↓:navigate"));
    }

    #[test]
    fn rule_list_shows_footer_help_and_staging_hint() {
        let mut app = rules_app(false);
        app.set_status("Rule added successfully!");
        let screen = render_to_string(&app, 80, 16);

        assert!(screen.contains("▶ R1"));
        assert!(screen.contains("Pattern: git:refs/heads/main, Key: alice"));
        assert!(screen.contains("Rule added successfully!"));
        assert!(screen.contains("a:add  e:edit  d:delete  u/k:up  j:down  esc:back  q:quit"));
        assert!(screen.contains("Changes are staged in /repo/.policy-console/policy.json"));
    }

    #[test]
    fn read_only_list_hides_mutation_help() {
        let app = rules_app(true);
        let screen = render_to_string(&app, 80, 16);
        assert!(screen.contains("[read-only]"));
        assert!(screen.contains("esc:back  q:quit"));
        assert!(!screen.contains("a:add"));
        assert!(!screen.contains("Changes are staged in"));
    }

    #[test]
    fn global_rules_show_threshold_lines() {
        let mut app = App::new("targets", "", false);
        app.set_global_rules(vec![GlobalRule::threshold(
            "two",
            vec!["git:refs/heads/main".to_string()],
            2,
        )]);
        app.screen = Screen::TrustGlobalRules;
        let screen = render_to_string(&app, 80, 16);
        assert!(screen.contains("Type: threshold"));
        assert!(screen.contains("Namespaces: git:refs/heads/main"));
        assert!(screen.contains("Threshold: 2"));
    }

    #[test]
    fn delete_overlay_is_drawn_on_top() {
        let mut app = rules_app(false);
        app.delete_confirm.open("R2");
        let screen = render_to_string(&app, 80, 16);
        assert!(screen.contains("Delete rule \"R2\"? [y/n]"));
        assert!(screen.contains("Confirm Delete"));
    }

    #[test]
    fn form_shows_prompts_and_placeholders() {
        let mut app = App::new("targets", "", false);
        app.screen = Screen::TrustAddGlobalRule;
        app.form = Some(InputForm::new(FormKind::GlobalRule));
        let screen = render_to_string(&app, 90, 16);
        assert!(screen.contains("Add Global Rule"));
        assert!(screen.contains("Type:"));
        assert!(screen.contains("Enter Rule Type (threshold|block-force-pushes)"));
        assert!(screen.contains("Press Enter to submit, Esc to go back"));
    }

    #[test]
    fn empty_list_has_placeholder_text() {
        let mut app = App::new("targets", "", false);
        app.screen = Screen::PolicyRules;
        let screen = render_to_string(&app, 60, 12);
        assert!(screen.contains("No items."));
    }
}
