//! Help menu

use crate::about::{info_text, INFO_TITLE, MEMBERS_TEXT, MEMBERS_TITLE};
use crate::commands::{Cmd, MessageLevel};
use crate::messages::HelpMsg;
use crate::model::AppModel;

pub fn update_help(model: &mut AppModel, msg: HelpMsg) -> Option<Cmd> {
    let cmd = match msg {
        HelpMsg::ShowInformation => Cmd::message(MessageLevel::Info, INFO_TITLE, info_text()),
        HelpMsg::ShowMembers => Cmd::message(MessageLevel::Info, MEMBERS_TITLE, MEMBERS_TEXT),
        HelpMsg::OpenManual => Cmd::OpenUrl(model.config.manual_url.clone()),
    };
    Some(cmd)
}
