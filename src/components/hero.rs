use yew::prelude::*;

use crate::components::video_modal::VideoModal;
use crate::config;

#[function_component(Hero)]
pub fn hero() -> Html {
    let video_open = use_state(|| false);

    let open_video = {
        let video_open = video_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            video_open.set(true);
        })
    };
    let close_video = {
        let video_open = video_open.clone();
        Callback::from(move |_| video_open.set(false))
    };

    html! {
        <section class="hero-section">
            <div class="hero-background"></div>
            <div class="hero-content">
                <div class="hero-copy">
                    <span class="hero-badge">{"Professional SWPPP Writing"}</span>
                    <h1>
                        {"Write Construction SWPPPs"}
                        <span class="hero-gradient-text">{"Faster & Smarter"}</span>
                    </h1>
                    <p>
                        {"Streamline your Storm Water Pollution Prevention Plan with the only app designed specifically for SWPPP writing. Save time, money, and reduce errors with Storm."}
                    </p>
                    <div class="hero-actions">
                        <a
                            href={config::APP_URL}
                            target="_blank"
                            rel="noopener noreferrer"
                            class="hero-cta-primary"
                        >
                            {"Start Free Trial"}
                        </a>
                        <button class="hero-cta-secondary" onclick={open_video}>
                            {"Watch Demo"}
                        </button>
                    </div>
                </div>
                <div class="hero-visual">
                    <img src="/iStock-1339450550.jpg" alt="Storm app interface" loading="eager" />
                </div>
            </div>
            <VideoModal
                open={*video_open}
                on_close={close_video}
                video_url={config::DEMO_VIDEO_URL}
            />
            <style>
                {r#"
                .hero-section {
                    position: relative;
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    overflow: hidden;
                    background: linear-gradient(135deg, #eef4fb, #ffffff, #eef4fb);
                }
                .hero-background {
                    position: absolute;
                    inset: 0;
                    background-image: url('/iStock-1339450550.jpg');
                    background-size: cover;
                    background-position: center;
                    opacity: 0.2;
                }
                .hero-content {
                    position: relative;
                    z-index: 1;
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 8rem 2rem;
                    display: grid;
                    gap: 3rem;
                    align-items: center;
                }
                .hero-badge {
                    display: inline-block;
                    padding: 0.5rem 1rem;
                    margin-bottom: 1.5rem;
                    border-radius: 9999px;
                    background: rgba(14, 116, 186, 0.1);
                    color: #0e74ba;
                    font-weight: 600;
                }
                .hero-copy h1 {
                    font-size: 3.5rem;
                    line-height: 1.1;
                    margin-bottom: 1.5rem;
                    color: #111827;
                }
                .hero-gradient-text {
                    display: block;
                    background: linear-gradient(45deg, #0e74ba, #38bdf8);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .hero-copy p {
                    font-size: 1.25rem;
                    color: #4b5563;
                    margin-bottom: 2rem;
                    max-width: 40rem;
                }
                .hero-actions {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1rem;
                }
                .hero-cta-primary {
                    padding: 1rem 2rem;
                    border-radius: 9999px;
                    background: linear-gradient(45deg, #0e74ba, #38bdf8);
                    color: #fff;
                    font-weight: 600;
                    font-size: 1.1rem;
                    text-decoration: none;
                    box-shadow: 0 16px 40px rgba(14, 116, 186, 0.3);
                    transition: box-shadow 0.3s ease;
                }
                .hero-cta-primary:hover {
                    box-shadow: 0 20px 48px rgba(14, 116, 186, 0.45);
                }
                .hero-cta-secondary {
                    padding: 1rem 2rem;
                    border-radius: 9999px;
                    background: #fff;
                    color: #0e74ba;
                    font-weight: 600;
                    font-size: 1.1rem;
                    border: 2px solid #0e74ba;
                    cursor: pointer;
                    transition: background 0.3s ease;
                }
                .hero-cta-secondary:hover {
                    background: #eef4fb;
                }
                .hero-visual img {
                    width: 100%;
                    height: auto;
                    border-radius: 24px;
                    box-shadow: 0 24px 64px rgba(0, 0, 0, 0.25);
                }
                @media (min-width: 1024px) {
                    .hero-content {
                        grid-template-columns: 1fr 1fr;
                    }
                }
                @media (max-width: 768px) {
                    .hero-copy h1 {
                        font-size: 2.4rem;
                    }
                }
                "#}
            </style>
        </section>
    }
}
