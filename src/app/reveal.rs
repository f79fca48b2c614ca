use leptos::{html, prelude::*};
use leptos_use::use_element_visibility;

/// Fades its children in the first time they scroll into view.
#[component]
pub fn Reveal(#[prop(optional, into)] class: String, children: Children) -> impl IntoView {
    let target = NodeRef::<html::Div>::new();
    let visible = use_element_visibility(target);
    let (seen, set_seen) = signal(false);

    Effect::new(move |_| {
        if visible.get() {
            set_seen(true);
        }
    });

    view! {
        <div
            node_ref=target
            class=move || {
                let state = if seen() { "reveal revealed" } else { "reveal" };
                format!("{state} {class}")
            }
        >
            {children()}
        </div>
    }
}
