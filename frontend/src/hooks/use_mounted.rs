use std::cell::Cell;
use std::rc::Rc;
use yew::prelude::*;

/// Flag cleared when the component unmounts. Async work checks it before
/// touching component state.
#[hook]
pub fn use_mounted() -> Rc<Cell<bool>> {
    let mounted = use_memo((), |_| Rc::new(Cell::new(true)));

    {
        let mounted = mounted.clone();
        use_effect_with((), move |_| {
            mounted.set(true);
            move || mounted.set(false)
        });
    }

    (*mounted).clone()
}
