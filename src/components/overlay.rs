//! Shared modal plumbing.
//!
//! Every overlay on the site (demo video, scheduling, legal text) locks page
//! scroll while it is open and closes through exactly one callback, whether
//! the user clicks the backdrop, the close button, or presses Escape. The
//! scroll lock is released in the effect destructor, so closing, re-opening,
//! and unmounting with the modal still open all restore scrolling.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::prelude::*;

fn set_body_overflow(value: &str) {
    if let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    {
        let _ = body.style().set_property("overflow", value);
    }
}

/// Suspends page scroll while `open` is true.
#[hook]
pub fn use_body_scroll_lock(open: bool) {
    use_effect_with_deps(
        move |open| {
            if *open {
                set_body_overflow("hidden");
            }
            move || set_body_overflow("auto")
        },
        open,
    );
}

/// Routes the Escape key to the modal's close callback while it is open.
#[hook]
pub fn use_escape_close(open: bool, on_close: Callback<()>) {
    use_effect_with_deps(
        move |(open, on_close)| {
            let open = *open;
            let on_close = on_close.clone();
            let window = web_sys::window();

            let listener = Closure::wrap(Box::new(move |e: KeyboardEvent| {
                if open && e.key() == "Escape" {
                    on_close.emit(());
                }
            }) as Box<dyn FnMut(KeyboardEvent)>);

            if let Some(window) = &window {
                let _ = window.add_event_listener_with_callback(
                    "keydown",
                    listener.as_ref().unchecked_ref(),
                );
            }

            move || {
                if let Some(window) = window {
                    let _ = window.remove_event_listener_with_callback(
                        "keydown",
                        listener.as_ref().unchecked_ref(),
                    );
                }
                drop(listener);
            }
        },
        (open, on_close),
    );
}

#[derive(Properties, PartialEq)]
pub struct ModalShellProps {
    pub open: bool,
    pub on_close: Callback<()>,
    /// Extra class on the content frame, for per-modal sizing.
    #[prop_or_default]
    pub frame_class: &'static str,
    pub children: Children,
}

/// Backdrop, close button, and teardown behavior shared by all modals.
#[function_component(ModalShell)]
pub fn modal_shell(props: &ModalShellProps) -> Html {
    // Hooks run unconditionally, before the closed-state early return.
    use_body_scroll_lock(props.open);
    use_escape_close(props.open, props.on_close.clone());

    if !props.open {
        return html! {};
    }

    let on_backdrop = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let on_button = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_close.emit(());
        })
    };
    let stop_propagation = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class="modal-backdrop" onclick={on_backdrop}>
            <div class={classes!("modal-frame", props.frame_class)} onclick={stop_propagation}>
                <button class="modal-close" aria-label="Close modal" onclick={on_button}>
                    {"✕"}
                </button>
                { for props.children.iter() }
            </div>
            <style>
                {r#"
                .modal-backdrop {
                    position: fixed;
                    inset: 0;
                    z-index: 100;
                    background: rgba(0, 0, 0, 0.8);
                    backdrop-filter: blur(8px);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 1rem;
                }
                .modal-frame {
                    position: relative;
                    width: 100%;
                    max-width: 900px;
                }
                .modal-close {
                    position: absolute;
                    top: -3rem;
                    right: 0;
                    z-index: 10;
                    padding: 0.75rem 1rem;
                    color: #fff;
                    font-size: 1.1rem;
                    border: 1px solid rgba(255, 255, 255, 0.2);
                    border-radius: 50%;
                    background: rgba(255, 255, 255, 0.1);
                    backdrop-filter: blur(8px);
                    cursor: pointer;
                    transition: background 0.3s ease, transform 0.3s ease;
                }
                .modal-close:hover {
                    background: rgba(255, 255, 255, 0.2);
                    transform: rotate(90deg);
                }
                "#}
            </style>
        </div>
    }
}
