use yew::prelude::*;

use crate::components::overlay::ModalShell;
use crate::config;

/// Closing call-to-action. "Schedule Demo" opens the scheduling page in a
/// modal; the embed URL is a fixed constant with nothing derived from
/// application state.
#[function_component(Cta)]
pub fn cta() -> Html {
    let schedule_open = use_state(|| false);

    let open_schedule = {
        let schedule_open = schedule_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            schedule_open.set(true);
        })
    };
    let close_schedule = {
        let schedule_open = schedule_open.clone();
        Callback::from(move |_| schedule_open.set(false))
    };

    html! {
        <section class="cta-section">
            <div class="cta-inner">
                <h2>{"Ready to Transform Your SWPPP Writing?"}</h2>
                <p>
                    {"Join the list of professionals who are already saving time and ensuring compliance with Storm. Signup today to get started."}
                </p>
                <div class="cta-actions">
                    <a
                        href={config::APP_URL}
                        target="_blank"
                        rel="noopener noreferrer"
                        class="cta-primary"
                    >
                        {"Get Started"}
                    </a>
                    <button class="cta-secondary" onclick={open_schedule}>
                        {"Schedule Demo"}
                    </button>
                </div>
                <p class="cta-footnote">{"✓ 14-day money back guarantee    ✓ Cancel anytime"}</p>
            </div>

            <ModalShell open={*schedule_open} on_close={close_schedule} frame_class="schedule-modal-frame">
                <div class="schedule-embed">
                    <iframe src={config::SCHEDULING_URL} title="Schedule a Demo" />
                </div>
            </ModalShell>

            <style>
                {r#"
                .cta-section {
                    position: relative;
                    padding: 6rem 2rem;
                    background: linear-gradient(90deg, rgba(17, 24, 39, 0.95), rgba(14, 116, 186, 0.95)),
                        url('/cta-background.jpg') center / cover;
                    color: #fff;
                    text-align: center;
                }
                .cta-inner {
                    max-width: 56rem;
                    margin: 0 auto;
                }
                .cta-inner h2 {
                    font-size: 2.8rem;
                    margin-bottom: 1.5rem;
                }
                .cta-inner p {
                    font-size: 1.25rem;
                    color: rgba(255, 255, 255, 0.9);
                    margin-bottom: 2rem;
                }
                .cta-actions {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 1rem;
                }
                .cta-primary {
                    padding: 1rem 2rem;
                    border-radius: 9999px;
                    background: #fff;
                    color: #0e74ba;
                    font-weight: 600;
                    font-size: 1.1rem;
                    text-decoration: none;
                    box-shadow: 0 16px 40px rgba(0, 0, 0, 0.25);
                }
                .cta-secondary {
                    padding: 1rem 2rem;
                    border-radius: 9999px;
                    background: transparent;
                    color: #fff;
                    font-weight: 600;
                    font-size: 1.1rem;
                    border: 2px solid #fff;
                    cursor: pointer;
                    transition: background 0.3s ease;
                }
                .cta-secondary:hover {
                    background: rgba(255, 255, 255, 0.1);
                }
                .cta-footnote {
                    margin-top: 1.5rem;
                    font-size: 0.9rem;
                    color: rgba(255, 255, 255, 0.7);
                }
                .schedule-modal-frame {
                    max-width: 900px;
                }
                .schedule-embed {
                    height: min(90vh, 800px);
                    border-radius: 16px;
                    overflow: hidden;
                    background: #fff;
                    box-shadow: 0 24px 64px rgba(0, 0, 0, 0.5);
                }
                .schedule-embed iframe {
                    width: 100%;
                    height: 100%;
                    border: none;
                }
                "#}
            </style>
        </section>
    }
}
