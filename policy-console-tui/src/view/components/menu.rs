//! 菜单组件

use ratatui::{
    layout::Rect,
    widgets::{List, ListItem, ListState},
    Frame,
};

use super::entry_item;
use crate::model::MenuState;

/// 渲染菜单
pub fn render(menu: &MenuState, frame: &mut Frame, area: Rect) {
    let items: Vec<ListItem> = menu
        .items
        .iter()
        .enumerate()
        .map(|(i, item)| entry_item(item, Some(item.icon), i == menu.selected))
        .collect();

    let mut state = ListState::default();
    state.select(Some(menu.selected));

    frame.render_stateful_widget(List::new(items), area, &mut state);
}
