use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::ApiClient;
use crate::components::{InteractiveCard, ScreenWrapper};
use crate::hooks::use_mounted;
use crate::styles;
use shared::api::Category;
use shared::game_mode::{GameMode, ScoringType};
use shared::screen::AppEvent;
use shared::GameError;

#[derive(Properties, PartialEq)]
pub struct CategorySelectionProps {
    pub mode: GameMode,
    pub on_event: Callback<AppEvent>,
}

async fn load_categories(client: &ApiClient, mode: GameMode) -> Result<Vec<Category>, GameError> {
    let mut categories = client.categories(Some(mode)).await?;

    // Older backends leave the endless high score off the category list
    if mode.config().scoring_type == ScoringType::HighScore && categories.iter().any(|c| c.high_score.is_none()) {
        match client.high_scores().await {
            Ok(scores) => {
                for category in categories.iter_mut().filter(|c| c.high_score.is_none()) {
                    category.high_score = scores
                        .iter()
                        .find(|s| s.slug == category.slug)
                        .map(|s| s.high_score);
                }
            }
            Err(err) => log::warn!("Failed to load high scores: {}", err),
        }
    }

    Ok(categories)
}

fn badge(mode: GameMode, category: &Category) -> Option<AttrValue> {
    match mode.config().scoring_type {
        ScoringType::HighScore => category.high_score.map(|score| format!("Best: {}", score).into()),
        ScoringType::DailyCompletion => category.badge.clone().map(AttrValue::from),
        ScoringType::GuessCount => None,
    }
}

#[function_component(CategorySelection)]
pub fn category_selection(props: &CategorySelectionProps) -> Html {
    let categories = use_state(Vec::<Category>::new);
    let is_loading = use_state(|| true);
    let error = use_state(|| None::<String>);
    let mounted = use_mounted();

    {
        let categories = categories.clone();
        let is_loading = is_loading.clone();
        let error = error.clone();
        let mode = props.mode;
        use_effect_with(mode, move |_| {
            is_loading.set(true);
            spawn_local(async move {
                let client = ApiClient::new();
                let result = load_categories(&client, mode).await;
                if !mounted.get() {
                    return;
                }
                match result {
                    Ok(list) => {
                        categories.set(list);
                        error.set(None);
                    }
                    Err(err) => {
                        log::error!("Failed to fetch categories: {}", err);
                        error.set(Some(err.user_message()));
                    }
                }
                is_loading.set(false);
            });
            || ()
        });
    }

    let on_dismiss = {
        let on_event = props.on_event.clone();
        Callback::from(move |_| on_event.emit(AppEvent::Back))
    };

    let title = AttrValue::from(format!("{}: Pick a Category", props.mode.config().display_name));

    html! {
        <ScreenWrapper {on_dismiss} {title}>
            if *is_loading {
                <p class={styles::LOADING}>{"Loading categories..."}</p>
            } else if let Some(message) = &*error {
                <div class={styles::ALERT_ERROR}>{message.clone()}</div>
            } else {
                <div class={styles::CARD_GRID}>
                    { for categories.iter().map(|category| {
                        let on_click = {
                            let on_event = props.on_event.clone();
                            let category = category.clone();
                            Callback::from(move |_| on_event.emit(AppEvent::CategorySelected(category.clone())))
                        };
                        html! {
                            <InteractiveCard
                                key={category.slug.clone()}
                                icon={category.icon.clone()}
                                title={category.title.clone()}
                                description={category.description.clone()}
                                badge={badge(props.mode, category)}
                                {on_click}
                            />
                        }
                    }) }
                </div>
            }
        </ScreenWrapper>
    }
}
