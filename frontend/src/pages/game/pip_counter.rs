use yew::prelude::*;

use crate::styles;
use shared::feedback::{pip_track, PipColor};
use shared::game_mode::GameMode;

#[derive(Properties, PartialEq)]
pub struct PipCounterProps {
    pub mode: GameMode,
    pub guess_count: usize,
    pub par: u32,
}

#[function_component(PipCounter)]
pub fn pip_counter(props: &PipCounterProps) -> Html {
    html! {
        <div class={styles::PIP_ROW}>
            { for pip_track(props.mode, props.guess_count, props.par).into_iter().map(|pip| {
                let color = match (pip.color, pip.filled) {
                    (PipColor::Green, true) => "bg-green-500 border-green-500",
                    (PipColor::Yellow, true) => "bg-yellow-400 border-yellow-400",
                    (PipColor::Red, true) => "bg-red-500 border-red-500",
                    (PipColor::Green, false) => "border-green-500/40",
                    (PipColor::Yellow, false) => "border-yellow-400/40",
                    (PipColor::Red, false) => "border-red-500/40",
                };
                html! {
                    <>
                        <span class={classes!("w-3", "h-3", "rounded-full", "border-2", color)}></span>
                        if pip.par_marker {
                            <span class={styles::TEXT_SMALL}>{"|"}</span>
                        }
                    </>
                }
            }) }
        </div>
    }
}
