use log::{info, Level};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod countdown;
mod vimeo;

mod blog {
    pub mod blocks;
    pub mod posts;
}

mod components {
    pub mod cta;
    pub mod features;
    pub mod hero;
    pub mod how_it_works;
    pub mod legal;
    pub mod overlay;
    pub mod pricing;
    pub mod sale_banner;
    pub mod testimonials;
    pub mod video_modal;
}

mod pages {
    pub mod blog;
    pub mod blog_post;
    pub mod home;
    pub mod how_it_works;
}

use pages::{
    blog::Blog, blog_post::BlogPostPage, home::Home, how_it_works::HowItWorksRedirect,
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/blog")]
    Blog,
    #[at("/blog/:slug")]
    BlogPost { slug: String },
    #[at("/how-it-works")]
    HowItWorks,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::Blog => {
            info!("Rendering Blog page");
            html! { <Blog /> }
        }
        Route::BlogPost { slug } => {
            info!("Rendering blog post {slug}");
            html! { <BlogPostPage slug={slug} /> }
        }
        Route::HowItWorks => {
            info!("Redirecting to the how-it-works section");
            html! { <HowItWorksRedirect /> }
        }
        Route::NotFound => {
            info!("Rendering not-found page");
            html! { <NotFound /> }
        }
    }
}

#[function_component(NotFound)]
fn not_found() -> Html {
    html! {
        <div class="not-found-page">
            <h1>{"Page Not Found"}</h1>
            <Link<Route> to={Route::Home} classes="not-found-link">
                {"Back to Home"}
            </Link<Route>>
            <style>
                {r#"
                .not-found-page {
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 1rem;
                    background: linear-gradient(135deg, #eef4fb, #ffffff);
                }
                .not-found-page h1 {
                    font-size: 2.5rem;
                    color: #111827;
                }
                .not-found-link {
                    color: #0e74ba;
                    font-weight: 600;
                    text-decoration: none;
                }
                "#}
            </style>
        </div>
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().expect("window available");
                let window_clone = window.clone();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_top = window_clone.scroll_y().unwrap_or(0.0);
                    is_scrolled.set(scroll_top > 20.0);
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .ok();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .ok();
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"Storm"}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    <a href="/#features" class="nav-link" onclick={close_menu.clone()}>{"Features"}</a>
                    <a href="/#how-it-works" class="nav-link" onclick={close_menu.clone()}>{"How It Works"}</a>
                    <a href="/#pricing" class="nav-link" onclick={close_menu.clone()}>{"Pricing"}</a>
                    <a href="/#testimonials" class="nav-link" onclick={close_menu.clone()}>{"Testimonials"}</a>
                    <div onclick={close_menu}>
                        <Link<Route> to={Route::Blog} classes="nav-link">
                            {"Blog"}
                        </Link<Route>>
                    </div>
                    <a
                        href={config::APP_URL}
                        target="_blank"
                        rel="noopener noreferrer"
                        class="nav-cta"
                    >
                        {"Get Started"}
                    </a>
                </div>
            </div>
            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    background: transparent;
                    transition: background 0.3s ease, box-shadow 0.3s ease;
                }
                .top-nav.scrolled {
                    background: rgba(255, 255, 255, 0.95);
                    backdrop-filter: blur(8px);
                    box-shadow: 0 8px 24px rgba(0, 0, 0, 0.08);
                }
                .nav-content {
                    max-width: 1200px;
                    margin: 0 auto;
                    height: 74px;
                    padding: 0 2rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .nav-logo {
                    font-size: 1.4rem;
                    font-weight: 700;
                    color: #0e74ba;
                    text-decoration: none;
                }
                .nav-right {
                    display: flex;
                    align-items: center;
                    gap: 2rem;
                }
                .nav-link {
                    color: #374151;
                    font-weight: 500;
                    text-decoration: none;
                    transition: color 0.3s ease;
                }
                .nav-link:hover {
                    color: #0e74ba;
                }
                .nav-cta {
                    padding: 0.5rem 1.5rem;
                    border-radius: 9999px;
                    background: linear-gradient(45deg, #0e74ba, #38bdf8);
                    color: #fff;
                    font-weight: 600;
                    text-decoration: none;
                    box-shadow: 0 8px 24px rgba(14, 116, 186, 0.3);
                }
                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 5px;
                    background: none;
                    border: none;
                    cursor: pointer;
                    padding: 0.5rem;
                }
                .burger-menu span {
                    width: 24px;
                    height: 2px;
                    background: #374151;
                }
                @media (max-width: 768px) {
                    .burger-menu {
                        display: flex;
                    }
                    .nav-right {
                        display: none;
                        position: absolute;
                        top: 74px;
                        left: 0;
                        right: 0;
                        flex-direction: column;
                        padding: 1.5rem;
                        background: rgba(255, 255, 255, 0.98);
                        box-shadow: 0 16px 32px rgba(0, 0, 0, 0.1);
                    }
                    .nav-right.mobile-menu-open {
                        display: flex;
                    }
                }
                "#}
            </style>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
