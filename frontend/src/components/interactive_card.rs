use yew::prelude::*;
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct InteractiveCardProps {
    pub icon: AttrValue,
    pub title: AttrValue,
    pub description: AttrValue,
    #[prop_or_default]
    pub badge: Option<AttrValue>,
    #[prop_or_default]
    pub locked: bool,
    pub on_click: Callback<()>,
}

/// Selectable card used by the mode and category grids.
#[function_component(InteractiveCard)]
pub fn interactive_card(props: &InteractiveCardProps) -> Html {
    let onclick = {
        let on_click = props.on_click.clone();
        Callback::from(move |_: MouseEvent| on_click.emit(()))
    };

    html! {
        <div class={if props.locked { styles::CARD_LOCKED } else { styles::CARD_HOVER }} {onclick}>
            <div class="flex items-start justify-between mb-3">
                <span class="text-4xl">{props.icon.clone()}</span>
                if let Some(badge) = &props.badge {
                    <span class={styles::BADGE}>{badge.clone()}</span>
                }
            </div>
            <h3 class={styles::CARD_TITLE}>{props.title.clone()}</h3>
            <p class={classes!(styles::CARD_TEXT, "mt-1")}>{props.description.clone()}</p>
        </div>
    }
}
