use yew::prelude::*;

use crate::api::get_auth_token;

#[hook]
pub fn use_auth_token() -> String {
    let token = use_state(|| get_auth_token().unwrap_or_default());

    {
        let token = token.clone();
        use_effect_with((), move |_| {
            token.set(get_auth_token().unwrap_or_default());
            || ()
        });
    }

    (*token).clone()
}

/// Whether the identity provider has left a token in browser storage.
#[hook]
pub fn use_auth_state() -> bool {
    !use_auth_token().is_empty()
}
