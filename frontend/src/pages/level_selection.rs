use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::ApiClient;
use crate::components::ScreenWrapper;
use crate::hooks::use_mounted;
use crate::styles;
use shared::api::Category;
use shared::levels::{LevelCarousel, LevelItem, LevelSeries, LevelStatus};
use shared::screen::AppEvent;

#[derive(Properties, PartialEq)]
pub struct LevelSelectionProps {
    pub category: Category,
    pub on_event: Callback<AppEvent>,
}

fn status_class(status: LevelStatus) -> &'static str {
    match status {
        LevelStatus::Locked => styles::CARD_LOCKED,
        LevelStatus::Ready => styles::CARD_HOVER,
        LevelStatus::Crushed => styles::CARD_CRUSHED,
        LevelStatus::Solid => styles::CARD_SOLID,
        LevelStatus::Failed => styles::CARD_FAILED,
    }
}

/// Fetches the page after the series cursor and appends it. `first` resets
/// the series and moves the carousel to the first unfinished level.
fn load_page(
    client: Rc<ApiClient>,
    slug: String,
    series: Rc<RefCell<LevelSeries>>,
    loading: Rc<Cell<bool>>,
    carousel: UseStateHandle<LevelCarousel>,
    error: UseStateHandle<Option<String>>,
    mounted: Rc<Cell<bool>>,
    refresh: UseForceUpdateHandle,
    first: bool,
) {
    if loading.get() {
        return;
    }
    if first {
        series.borrow_mut().reset();
    } else if !series.borrow().has_more() {
        return;
    }
    loading.set(true);
    refresh.force_update();

    let after_position = series.borrow().cursor();
    spawn_local(async move {
        let result = client.levels(&slug, after_position).await;
        if !mounted.get() {
            return;
        }
        loading.set(false);
        match result {
            Ok(page) => {
                error.set(None);
                let mut levels = series.borrow_mut();
                levels.apply_batch(page);
                if first {
                    let start = LevelCarousel::at(levels.resume_index());
                    // Resuming on the last loaded level needs the next page right away
                    let load_more = start.should_load_more(&levels, false);
                    drop(levels);
                    carousel.set(start);
                    if load_more {
                        load_page(client, slug, series, loading, carousel, error, mounted, refresh, false);
                        return;
                    }
                }
            }
            Err(err) => {
                log::error!("Failed to load levels for {}: {}", slug, err);
                error.set(Some(err.user_message()));
            }
        }
        refresh.force_update();
    });
}

fn level_card(level: &LevelItem, current: bool, onclick: Callback<MouseEvent>) -> Html {
    let scale = if current { "scale-100" } else { "scale-90 opacity-70 hidden sm:block" };
    html! {
        <div class={classes!(status_class(level.status), scale, "w-48", "text-center", "transition-all", "duration-300")} {onclick}>
            <div class={styles::TEXT_SMALL}>{"Level"}</div>
            <div class={styles::TEXT_H1}>{level.position}</div>
            <div class={classes!(styles::CARD_TEXT, "mt-2")}>{format!("Par {}", level.par_score)}</div>
            if let Some(score) = level.score {
                <div class={styles::CARD_TEXT}>{format!("Best {}", score)}</div>
            }
            <div class={classes!(styles::CARD_TITLE, "mt-2")}>{level.status.label()}</div>
            if current {
                if let Some(grid) = &level.attempts_data {
                    <pre class="mt-3 text-sm leading-tight">{grid.clone()}</pre>
                }
            }
        </div>
    }
}

#[function_component(LevelSelection)]
pub fn level_selection(props: &LevelSelectionProps) -> Html {
    let series = use_mut_ref(LevelSeries::new);
    let loading = use_memo((), |_| Rc::new(Cell::new(false)));
    let carousel = use_state(LevelCarousel::default);
    let error = use_state(|| None::<String>);
    let total = use_state(|| None::<u32>);
    let refresh = use_force_update();
    let mounted = use_mounted();
    let client = use_memo((), |_| ApiClient::new());

    let loader = {
        let client = client.clone();
        let slug = props.category.slug.clone();
        let series = series.clone();
        let loading = (*loading).clone();
        let carousel = carousel.clone();
        let error = error.clone();
        let mounted = mounted.clone();
        let refresh = refresh.clone();
        move |first: bool| {
            load_page(
                client.clone(),
                slug.clone(),
                series.clone(),
                loading.clone(),
                carousel.clone(),
                error.clone(),
                mounted.clone(),
                refresh.clone(),
                first,
            )
        }
    };

    {
        let loader = loader.clone();
        let client = client.clone();
        let total = total.clone();
        let mounted = mounted.clone();
        use_effect_with(props.category.slug.clone(), move |slug| {
            loader(true);
            let slug = slug.clone();
            spawn_local(async move {
                match client.puzzle_count(&slug).await {
                    Ok(count) if mounted.get() => total.set(Some(count)),
                    Ok(_) => {}
                    Err(err) => log::warn!("Failed to load puzzle count: {}", err),
                }
            });
            || ()
        });
    }

    let on_prev = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*carousel).clone();
            if next.prev() {
                carousel.set(next);
            }
        })
    };

    let on_next = {
        let carousel = carousel.clone();
        let series = series.clone();
        let loading = loading.clone();
        let loader = loader.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*carousel).clone();
            let len = series.borrow().len();
            let moved = next.next(len);
            // Checked even without a move: the carousel may already sit on the last loaded level
            let load_more = next.should_load_more(&series.borrow(), loading.get());
            if moved {
                carousel.set(next);
            }
            if load_more {
                loader(false);
            }
        })
    };

    let on_select = {
        let client = client.clone();
        let category = props.category.clone();
        let on_event = props.on_event.clone();
        let error = error.clone();
        let mounted = mounted.clone();
        Callback::from(move |level: LevelItem| {
            if !level.status.is_playable() {
                return;
            }
            let client = client.clone();
            let slug = category.slug.clone();
            let on_event = on_event.clone();
            let error = error.clone();
            let mounted = mounted.clone();
            spawn_local(async move {
                let result = client.puzzle(&slug, level.position).await;
                if !mounted.get() {
                    return;
                }
                match result {
                    Ok(puzzle) => on_event.emit(AppEvent::LevelSelected { level: level.position, puzzle }),
                    Err(err) => {
                        log::error!("Failed to load level {}: {}", level.position, err);
                        error.set(Some(err.user_message()));
                    }
                }
            });
        })
    };

    let on_dismiss = {
        let on_event = props.on_event.clone();
        Callback::from(move |_| on_event.emit(AppEvent::Back))
    };

    let title = AttrValue::from(format!("{} {}", props.category.icon, props.category.title));
    let series_ref = series.borrow();
    let (prev, current, next) = carousel.visible(series_ref.levels());

    html! {
        <ScreenWrapper {on_dismiss} {title}>
            if let Some(message) = &*error {
                <div class={classes!(styles::ALERT_ERROR, "mb-6")}>{message.clone()}</div>
            }
            if let Some(current) = current {
                <div class="flex items-center justify-center gap-4">
                    <button type="button" class={styles::BUTTON_ICON} onclick={on_prev.clone()} disabled={prev.is_none()}>{"‹"}</button>
                    if let Some(prev) = prev {
                        { level_card(prev, false, on_prev.clone()) }
                    }
                    {{
                        let level = current.clone();
                        let on_select = on_select.clone();
                        level_card(current, true, Callback::from(move |_: MouseEvent| on_select.emit(level.clone())))
                    }}
                    if let Some(next) = next {
                        { level_card(next, false, on_next.clone()) }
                    }
                    <button type="button" class={styles::BUTTON_ICON} onclick={on_next.clone()} disabled={!carousel.can_advance(&series_ref)}>{"›"}</button>
                </div>
                <p class={classes!(styles::TEXT_SMALL, "text-center", "mt-6")}>
                    { match *total {
                        Some(total) => format!("Level {} of {}", current.position, total),
                        None => format!("Level {}", current.position),
                    } }
                </p>
            } else if loading.get() {
                <p class={styles::LOADING}>{"Loading levels..."}</p>
            } else if error.is_none() {
                <p class={styles::LOADING}>{"No levels available"}</p>
            }
        </ScreenWrapper>
    }
}
