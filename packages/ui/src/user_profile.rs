use std::rc::Rc;

use dioxus::prelude::*;
use state::{ProfileLoader, ProfileState, UserId};

use crate::source::use_user_source;

/// Fetches and shows the user record for `user_id`.
///
/// Shows a loading line until the record arrives, then the name as a heading and
/// the email below it. A new `user_id` starts a new fetch; the same id is only
/// fetched once however often the component re-renders.
#[component]
pub fn UserProfile(
    user_id: UserId,
    /// Extra classes for the outer element.
    #[props(default)]
    class: String,
) -> Element {
    // Track the id in a signal so the resource re-runs when the prop changes
    let mut id_signal = use_signal(|| user_id);
    if *id_signal.peek() != user_id {
        id_signal.set(user_id);
    }

    let mut profile = use_signal(ProfileState::default);
    let source = use_user_source();
    let loader = use_hook(move || {
        let loader = Rc::new(ProfileLoader::new(source));
        loader.subscribe(move |state| profile.set(state.clone()));
        loader
    });

    let _fetch = use_resource(move || {
        let loader = loader.clone();
        let id = id_signal();
        async move { loader.load(id).await }
    });

    match profile() {
        ProfileState::Loading => rsx! {
            p { class: "user-profile text-neutral-600 {class}", "Loading..." }
        },
        ProfileState::Loaded(user) => rsx! {
            div {
                class: "user-profile {class}",
                h2 { "{user.name}" }
                p { "{user.email}" }
            }
        },
        ProfileState::Failed(e) => rsx! {
            p { class: "user-profile text-red-600 {class}", "Failed to load user: {e}" }
        },
    }
}
