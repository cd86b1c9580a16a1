use yew::prelude::*;

use crate::components::{InteractiveCard, ScreenWrapper};
use crate::hooks::use_auth_state;
use crate::styles;
use shared::game_mode::GameMode;
use shared::screen::AppEvent;

#[derive(Properties, PartialEq)]
pub struct ModeSelectionProps {
    pub on_event: Callback<AppEvent>,
}

fn mode_icon(mode: GameMode) -> &'static str {
    match mode {
        GameMode::Daily => "📅",
        GameMode::LevelUp => "🏆",
        GameMode::Endless => "♾️",
    }
}

#[function_component(ModeSelection)]
pub fn mode_selection(props: &ModeSelectionProps) -> Html {
    let signed_in = use_auth_state();

    let on_dismiss = {
        let on_event = props.on_event.clone();
        Callback::from(move |_| on_event.emit(AppEvent::Back))
    };

    html! {
        <ScreenWrapper {on_dismiss} title="Choose a Game Mode">
            <div class={styles::CARD_GRID}>
                { for GameMode::ALL.iter().map(|&mode| {
                    let config = mode.config();
                    let on_click = {
                        let on_event = props.on_event.clone();
                        Callback::from(move |_| on_event.emit(AppEvent::select_mode(mode, signed_in)))
                    };
                    let badge = (config.requires_auth && !signed_in).then(|| AttrValue::from("Sign in"));
                    html! {
                        <InteractiveCard
                            icon={mode_icon(mode)}
                            title={config.display_name}
                            description={config.description}
                            {badge}
                            {on_click}
                        />
                    }
                }) }
            </div>
        </ScreenWrapper>
    }
}
