use yew::prelude::*;
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub is_open: bool,
    // Clicking the backdrop
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub children: Html,
}

#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    if !props.is_open {
        return html! {};
    }

    let on_backdrop = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class={styles::MODAL_OVERLAY}>
            <div class={styles::MODAL_BACKDROP} onclick={on_backdrop}></div>
            <div class={styles::MODAL_CARD}>
                { props.children.clone() }
            </div>
        </div>
    }
}
