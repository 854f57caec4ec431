use dioxus::prelude::*;

/// Heading greeting `name`, or the world when no name is given.
#[component]
pub fn Greeting(name: Option<String>) -> Element {
    let text = state::salutation(name.as_deref());
    rsx! {
        h1 { "{text}" }
    }
}
