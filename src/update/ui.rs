//! Menu bar interaction

use crate::commands::Cmd;
use crate::menu::{self, MENUS};
use crate::messages::UiMsg;
use crate::model::AppModel;

use super::dispatch_command;

pub fn update_ui(model: &mut AppModel, msg: UiMsg) -> Option<Cmd> {
    match msg {
        UiMsg::OpenMenu(index) => {
            if index >= MENUS.len() {
                return None;
            }
            // Clicking the title of the open menu closes it
            model.ui.open_menu = if model.ui.open_menu == Some(index) {
                None
            } else {
                Some(index)
            };
            Some(Cmd::Redraw)
        }
        UiMsg::CloseMenu => {
            model.ui.open_menu.take()?;
            Some(Cmd::Redraw)
        }
        UiMsg::ActivateMenuItem {
            menu: menu_index,
            item: item_index,
        } => {
            model.ui.open_menu = None;
            let command = menu::item(menu_index, item_index).and_then(|i| i.command());
            match command {
                Some(command) => Cmd::join(Some(Cmd::Redraw), dispatch_command(model, command)),
                // Separator or stale index: just close the dropdown
                None => Some(Cmd::Redraw),
            }
        }
    }
}
