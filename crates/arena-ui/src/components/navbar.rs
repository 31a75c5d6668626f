//! Top navigation bar: connectivity, global toggles, submit action.

use crate::app::preferences::ThemeMode;
use crate::features::arena::state::Connectivity;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct AppNavbarProps {
    pub connectivity: Connectivity,
    pub matchmaking_enabled: bool,
    pub auto_refresh: bool,
    pub theme: ThemeMode,
    pub on_toggle_auto_refresh: Callback<()>,
    pub on_toggle_matchmaking: Callback<()>,
    pub on_toggle_theme: Callback<()>,
    pub on_submit_bot: Callback<()>,
}

#[function_component(AppNavbar)]
pub(crate) fn app_navbar(props: &AppNavbarProps) -> Html {
    let (status_class, status_label) = match props.connectivity {
        Connectivity::Connected => ("status-dot status-connected", "Connected"),
        Connectivity::Connecting => ("status-dot status-connecting", "Connecting…"),
    };
    let theme_label = match props.theme {
        ThemeMode::Light => "Dark mode",
        ThemeMode::Dark => "Light mode",
    };
    let on_auto_refresh = {
        let cb = props.on_toggle_auto_refresh.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let on_matchmaking = {
        let cb = props.on_toggle_matchmaking.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let on_theme = {
        let cb = props.on_toggle_theme.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let on_submit = {
        let cb = props.on_submit_bot.clone();
        Callback::from(move |_| cb.emit(()))
    };

    html! {
        <nav class="navbar">
            <span class="navbar-brand">{"Bot Arena"}</span>
            <span class={status_class} title={status_label}></span>
            <span class="navbar-status">{status_label}</span>
            <div class="navbar-controls">
                <label class="navbar-toggle">
                    <input
                        type="checkbox"
                        checked={props.auto_refresh}
                        onchange={on_auto_refresh}
                    />
                    {"Auto refresh"}
                </label>
                <label class="navbar-toggle">
                    <input
                        type="checkbox"
                        checked={props.matchmaking_enabled}
                        onchange={on_matchmaking}
                    />
                    {"Matchmaking"}
                </label>
                <button class="btn btn-ghost" onclick={on_theme}>{theme_label}</button>
                <button class="btn btn-primary" onclick={on_submit}>{"Submit bot"}</button>
            </div>
        </nav>
    }
}
