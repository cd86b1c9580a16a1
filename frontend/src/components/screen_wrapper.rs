use yew::prelude::*;
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct ScreenWrapperProps {
    pub on_dismiss: Callback<()>,
    #[prop_or_default]
    pub title: Option<AttrValue>,
    #[prop_or_default]
    pub children: Html,
}

/// Page chrome shared by every screen but the landing page: a top bar with
/// a back button and the game title.
#[function_component(ScreenWrapper)]
pub fn screen_wrapper(props: &ScreenWrapperProps) -> Html {
    let on_back = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(()))
    };

    html! {
        <div class={styles::CONTAINER}>
            <nav class={styles::NAV}>
                <div class={styles::NAV_CONTENT}>
                    <button type="button" class={styles::BUTTON_ICON} onclick={on_back} aria-label="Back">
                        <svg xmlns="http://www.w3.org/2000/svg" class="h-6 w-6" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M15 19l-7-7 7-7" />
                        </svg>
                    </button>
                    <span class={styles::NAV_BRAND}>{"Acronymize"}</span>
                    <span class="w-10"></span>
                </div>
            </nav>
            <div class={styles::SCREEN}>
                if let Some(title) = &props.title {
                    <h1 class={classes!(styles::TEXT_H1, "text-center", "mb-8")}>{title.clone()}</h1>
                }
                { props.children.clone() }
            </div>
        </div>
    }
}
