use yew::prelude::*;

struct Feature {
    title: &'static str,
    description: &'static str,
    icon: &'static str,
}

const FEATURES: [Feature; 6] = [
    Feature {
        title: "Lightning Fast",
        description: "Generate compliant SWPPPs in minutes, not days. Our template and guided process cut writing time by 86% (based on internal survey data).",
        icon: "⚡",
    },
    Feature {
        title: "Built for Your Team",
        description: "Unlimited seats allow you to invite your entire SWPPP writing team. Thanks to Storm's cloud-based system, your team can effortlessly collaborate and review SWPPPs from the office, the field, or at home.",
        icon: "👥",
    },
    Feature {
        title: "Easy Revisions",
        description: "Keep your projects up-to-date without breaking a sweat, with Storm's revisions tracking feature. Revise, certify, and sign all in the app.",
        icon: "🔄",
    },
    Feature {
        title: "Professional Templates",
        description: "Built on the Connections Course SWPPP template, with many other templates in development. Custom templates are available for purchase.",
        icon: "📄",
    },
    Feature {
        title: "Automatic Risk Determination",
        description: "Storm uses your project location to automatically query the R, K, LS, and Receiving Water Risk datasets to determine your project's overall risk level.",
        icon: "⚠️",
    },
    Feature {
        title: "Smart Discharge Mapping",
        description: "Storm's built-in discharge mapping tools allow you to quickly and clearly map your project's discharge points.",
        icon: "🗺️",
    },
];

#[function_component(Features)]
pub fn features() -> Html {
    html! {
        <section id="features" class="features-section">
            <div class="features-inner">
                <div class="features-header">
                    <h2>{"Everything You Need"}</h2>
                    <p>{"Purpose-built tools for every step of the SWPPP writing process."}</p>
                </div>
                <div class="features-grid">
                    {
                        for FEATURES.iter().map(|feature| html! {
                            <div class="feature-card">
                                <span class="feature-icon">{ feature.icon }</span>
                                <h3>{ feature.title }</h3>
                                <p>{ feature.description }</p>
                            </div>
                        })
                    }
                </div>
            </div>
            <style>
                {r#"
                .features-section {
                    padding: 7rem 2rem;
                    background: linear-gradient(to bottom, #ffffff, #f8fafc, #ffffff);
                }
                .features-inner {
                    max-width: 1200px;
                    margin: 0 auto;
                }
                .features-header {
                    text-align: center;
                    margin-bottom: 4rem;
                }
                .features-header h2 {
                    font-size: 3rem;
                    color: #111827;
                    margin-bottom: 1rem;
                }
                .features-header p {
                    font-size: 1.25rem;
                    color: #4b5563;
                }
                .features-grid {
                    display: grid;
                    gap: 2rem;
                    grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
                }
                .feature-card {
                    padding: 2rem;
                    border-radius: 16px;
                    background: #fff;
                    border: 1px solid #e5e7eb;
                    box-shadow: 0 8px 24px rgba(0, 0, 0, 0.04);
                    transition: transform 0.3s ease, box-shadow 0.3s ease;
                }
                .feature-card:hover {
                    transform: translateY(-5px);
                    box-shadow: 0 16px 40px rgba(0, 0, 0, 0.08);
                }
                .feature-icon {
                    font-size: 2rem;
                }
                .feature-card h3 {
                    font-size: 1.4rem;
                    color: #111827;
                    margin: 1rem 0 0.75rem;
                }
                .feature-card p {
                    color: #4b5563;
                    line-height: 1.6;
                }
                "#}
            </style>
        </section>
    }
}
