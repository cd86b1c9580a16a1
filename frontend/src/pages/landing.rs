use yew::prelude::*;

use crate::styles;
use shared::screen::AppEvent;

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    pub on_event: Callback<AppEvent>,
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    let emit = |event: AppEvent| {
        let on_event = props.on_event.clone();
        Callback::from(move |_: MouseEvent| on_event.emit(event.clone()))
    };

    html! {
        <div class={styles::CONTAINER}>
            <div class={styles::HERO_SECTION}>
                <h1 class={styles::HERO_TITLE}>{"Acronymize"}</h1>
                <p class={styles::HERO_TEXT}>{"A new daily puzzle for word lovers."}</p>
                <div class={styles::HERO_BUTTONS}>
                    <button type="button" class={styles::HERO_CTA_BUTTON} onclick={emit(AppEvent::PlayDaily)}>
                        {"Play Today's Puzzle"}
                    </button>
                    <button type="button" class={styles::BUTTON_SECONDARY} onclick={emit(AppEvent::ExploreModes)}>
                        {"Explore Game Modes"}
                    </button>
                </div>
                <button type="button" class={styles::HERO_LINK} onclick={emit(AppEvent::ShowInstructions)}>
                    {"How to Play"}
                </button>
            </div>
        </div>
    }
}
