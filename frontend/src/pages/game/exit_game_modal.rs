use yew::prelude::*;

use crate::components::Modal;
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct ExitGameModalProps {
    pub is_open: bool,
    pub on_close: Callback<()>,
    pub on_exit: Callback<()>,
}

#[function_component(ExitGameModal)]
pub fn exit_game_modal(props: &ExitGameModalProps) -> Html {
    let on_stay = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let on_leave = {
        let on_exit = props.on_exit.clone();
        Callback::from(move |_: MouseEvent| on_exit.emit(()))
    };

    html! {
        <Modal is_open={props.is_open} on_close={props.on_close.clone()}>
            <h2 class={classes!(styles::TEXT_H2, "text-center", "mb-4")}>{"Leave this game?"}</h2>
            <p class={classes!(styles::TEXT_BODY, "text-center", "mb-8")}>{"Your progress on this puzzle will be lost."}</p>
            <button type="button" class={styles::BUTTON_PRIMARY_WIDE} onclick={on_stay}>{"Keep Playing"}</button>
            <button type="button" class={classes!(styles::BUTTON_DANGER, "w-full")} onclick={on_leave}>{"Exit Game"}</button>
        </Modal>
    }
}
