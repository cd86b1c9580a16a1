pub mod api;
pub mod components;
pub mod config;
pub mod hooks;
pub mod pages;
pub mod styles;

use std::rc::Rc;
use yew::prelude::*;

use crate::components::Modal;
use crate::pages::{
    category_selection::CategorySelection,
    game::GameScreen,
    instructions::Instructions,
    landing::Landing,
    level_selection::LevelSelection,
    mode_selection::ModeSelection,
};
use shared::screen::{AppEvent, AppState, Screen};

/// Reducer wrapper around the screen state machine.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppStore(pub AppState);

impl Reducible for AppStore {
    type Action = AppEvent;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(AppStore(self.0.clone().transition(action)))
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let store = use_reducer(AppStore::default);
    let on_event = {
        let store = store.clone();
        Callback::from(move |event: AppEvent| store.dispatch(event))
    };
    let state = &store.0;

    let screen = match state.screen {
        Screen::Landing => html! { <Landing on_event={on_event.clone()} /> },
        Screen::Instructions => html! { <Instructions on_event={on_event.clone()} /> },
        Screen::ModeSelection => html! { <ModeSelection on_event={on_event.clone()} /> },
        Screen::CategorySelection => html! {
            <CategorySelection mode={state.active_mode()} on_event={on_event.clone()} />
        },
        Screen::LevelSelection => match &state.category {
            Some(category) => html! {
                <LevelSelection category={category.clone()} on_event={on_event.clone()} />
            },
            None => html! { <CategorySelection mode={state.active_mode()} on_event={on_event.clone()} /> },
        },
        Screen::Game => {
            // A new selection remounts the game with fresh hooks
            let key = format!(
                "{}-{}-{}",
                state.active_mode().config().short_name,
                state.category.as_ref().map(|c| c.slug.as_str()).unwrap_or_default(),
                state.level.unwrap_or_default(),
            );
            html! {
                <GameScreen
                    {key}
                    mode={state.active_mode()}
                    category={state.category.clone()}
                    puzzle={state.puzzle.clone()}
                    level={state.level.unwrap_or(1)}
                    on_event={on_event.clone()}
                />
            }
        }
    };

    let dismiss_login = {
        let on_event = on_event.clone();
        Callback::from(move |_| on_event.emit(AppEvent::DismissLogin))
    };
    let dismiss_click = {
        let dismiss_login = dismiss_login.clone();
        Callback::from(move |_: MouseEvent| dismiss_login.emit(()))
    };

    html! {
        <>
            { screen }
            <Modal is_open={state.show_login} on_close={dismiss_login}>
                <h2 class={classes!(crate::styles::TEXT_H2, "mb-4")}>{"Sign in required"}</h2>
                <p class={classes!(crate::styles::TEXT_BODY, "mb-6")}>
                    {"Level Up keeps track of your progress, so it needs an account. Sign in and come back to play."}
                </p>
                <button type="button" class={crate::styles::BUTTON_PRIMARY_WIDE} onclick={dismiss_click}>
                    {"Got it"}
                </button>
            </Modal>
        </>
    }
}
