use chrono::Utc;
use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::config;

/// Promotional banner with a live countdown to the end of the sale window.
///
/// Campaign copy, code, and dates all come from `config::PROMO`; outside the
/// window the banner renders nothing. The one-second tick is owned by the
/// mount effect and dropped in its destructor, so no timer outlives the
/// banner.
#[function_component(SaleBanner)]
pub fn sale_banner() -> Html {
    let now = use_state(|| Utc::now().timestamp());

    {
        let now = now.clone();
        use_effect_with_deps(
            move |_| {
                let interval = Interval::new(1_000, move || {
                    now.set(Utc::now().timestamp());
                });
                move || drop(interval)
            },
            (),
        );
    }

    let promo = &config::PROMO;
    if !promo.window.is_active(*now) {
        return html! {};
    }
    let left = promo.window.remaining(*now);

    let unit = |value: u64, label: &str| -> Html {
        html! {
            <div class="sale-count-unit">
                <span class="sale-count-value">{ format!("{value:02}") }</span>
                <span class="sale-count-label">{ label.to_string() }</span>
            </div>
        }
    };

    html! {
        <section class="sale-banner">
            <div class="sale-banner-inner">
                <div class="sale-banner-copy">
                    <p class="sale-tagline">{ promo.tagline }</p>
                    <h2>{ promo.headline }</h2>
                    <p class="sale-code-line">
                        {"Use promo code "}
                        <span class="sale-code">{ promo.code }</span>
                        {" at checkout to lock in this limited time offer."}
                    </p>
                </div>
                <div class="sale-banner-side">
                    <div class="sale-countdown">
                        { unit(left.days, "Days") }
                        { unit(left.hours, "Hours") }
                        { unit(left.minutes, "Min") }
                        { unit(left.seconds, "Sec") }
                    </div>
                    <a
                        href={config::APP_URL}
                        target="_blank"
                        rel="noopener noreferrer"
                        class="sale-claim-button"
                    >
                        { format!("Claim {}", promo.code) }
                    </a>
                </div>
            </div>
            <style>
                {r#"
                .sale-banner {
                    position: relative;
                    overflow: hidden;
                    padding: 8rem 2rem 2.5rem;
                    color: #fff;
                    background: linear-gradient(135deg, #0f172a, #3b0764, #0f172a);
                }
                .sale-banner-inner {
                    max-width: 1100px;
                    margin: 0 auto;
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                }
                .sale-tagline {
                    font-size: 0.85rem;
                    text-transform: uppercase;
                    letter-spacing: 0.3em;
                    color: rgba(103, 232, 249, 0.9);
                    margin-bottom: 0.5rem;
                }
                .sale-banner-copy h2 {
                    font-size: 2.2rem;
                    line-height: 1.2;
                    margin: 0 0 0.75rem;
                }
                .sale-code-line {
                    color: rgba(255, 255, 255, 0.8);
                    font-size: 1.1rem;
                }
                .sale-code {
                    font-weight: 700;
                    color: #fff;
                    background: rgba(255, 255, 255, 0.1);
                    padding: 0.2rem 0.5rem;
                    border-radius: 6px;
                    letter-spacing: 0.08em;
                }
                .sale-banner-side {
                    display: flex;
                    flex-wrap: wrap;
                    align-items: center;
                    gap: 1.5rem;
                }
                .sale-countdown {
                    display: flex;
                    gap: 0.75rem;
                }
                .sale-count-unit {
                    min-width: 64px;
                    padding: 0.6rem 0.5rem;
                    text-align: center;
                    border-radius: 10px;
                    background: rgba(255, 255, 255, 0.08);
                    border: 1px solid rgba(103, 232, 249, 0.25);
                }
                .sale-count-value {
                    display: block;
                    font-size: 1.6rem;
                    font-weight: 700;
                    font-variant-numeric: tabular-nums;
                }
                .sale-count-label {
                    display: block;
                    font-size: 0.7rem;
                    text-transform: uppercase;
                    letter-spacing: 0.15em;
                    color: rgba(255, 255, 255, 0.6);
                }
                .sale-claim-button {
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    padding: 0.8rem 3rem;
                    border-radius: 9999px;
                    font-weight: 600;
                    font-size: 1.1rem;
                    color: rgba(255, 255, 255, 0.9);
                    text-decoration: none;
                    border: 1px solid rgba(34, 211, 238, 0.4);
                    background: rgba(6, 182, 212, 0.2);
                    backdrop-filter: blur(8px);
                    transition: all 0.3s ease;
                    white-space: nowrap;
                }
                .sale-claim-button:hover {
                    background: linear-gradient(45deg, #06b6d4, #4f46e5);
                    color: #fff;
                    border-color: transparent;
                }
                @media (min-width: 1024px) {
                    .sale-banner-inner {
                        flex-direction: row;
                        align-items: center;
                        justify-content: space-between;
                    }
                }
                "#}
            </style>
        </section>
    }
}
