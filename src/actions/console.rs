use crate::state::ViewState;

pub const CLEARED_MESSAGE: &str = "Console cleared.";

pub fn clear_log(state: &mut ViewState) {
    state.log = vec![CLEARED_MESSAGE.to_string()];
}

pub fn print(state: &mut ViewState, text: String) {
    state.push_log(text);
}
