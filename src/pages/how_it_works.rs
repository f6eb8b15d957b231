use gloo_timers::callback::Timeout;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

/// `/how-it-works` is a redirect: it lands on Home and scrolls to the
/// section of the same name once the page has rendered.
#[function_component(HowItWorksRedirect)]
pub fn how_it_works_redirect() -> Html {
    let navigator = use_navigator();

    use_effect_with_deps(
        move |_| {
            if let Some(navigator) = navigator {
                navigator.replace(&Route::Home);
            }
            // One-shot that must outlive this component; the redirect
            // unmounts it before the home page finishes rendering.
            Timeout::new(100, || {
                if let Some(element) = web_sys::window()
                    .and_then(|w| w.document())
                    .and_then(|d| d.get_element_by_id("how-it-works"))
                {
                    let mut options = ScrollIntoViewOptions::new();
                    options.behavior(ScrollBehavior::Smooth);
                    element.scroll_into_view_with_scroll_into_view_options(&options);
                }
            })
            .forget();
            || ()
        },
        (),
    );

    html! {}
}
