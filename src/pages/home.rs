use yew::prelude::*;

use crate::components::cta::Cta;
use crate::components::features::Features;
use crate::components::hero::Hero;
use crate::components::how_it_works::HowItWorks;
use crate::components::pricing::Pricing;
use crate::components::sale_banner::SaleBanner;
use crate::components::testimonials::Testimonials;

#[function_component(Home)]
pub fn home() -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    html! {
        <main>
            <SaleBanner />
            <Hero />
            <Features />
            <HowItWorks />
            <Pricing />
            <Testimonials />
            <Cta />
        </main>
    }
}
