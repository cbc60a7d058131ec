use crate::errors::CommandError;
use crate::model::Theme;
use crate::state::ViewState;

fn on_off(on: bool) -> &'static str {
    if on {
        "on"
    } else {
        "off"
    }
}

pub fn set_flux(state: &mut ViewState, on: bool) {
    state.flux_enabled = on;
    state.push_log(format!("Flux overlay {}", on_off(on)));
}

pub fn set_ascii(state: &mut ViewState, on: bool) {
    state.ascii_enabled = on;
    state.push_log(format!("ASCII overlay {}", on_off(on)));
}

/// User theme change. `hacker` and unknown names are refused with a
/// transcript line and leave the theme untouched.
pub fn set_theme(state: &mut ViewState, name: &str) {
    let theme = match name.parse::<Theme>() {
        Ok(theme) if theme.is_user_selectable() => theme,
        Ok(theme) => {
            state.push_log(CommandError::ReservedTheme(theme.to_string()).to_string());
            return;
        }
        Err(err) => {
            state.push_log(err.to_string());
            return;
        }
    };

    state.themes.select(theme);
    log::debug!(
        "theme -> {} (shadow {})",
        state.theme(),
        state.theme_before_override()
    );
    state.push_log(format!("Theme set to {}", theme));
}
