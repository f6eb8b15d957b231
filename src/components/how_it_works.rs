use yew::prelude::*;

struct Step {
    number: &'static str,
    title: &'static str,
    description: &'static str,
    image: &'static str,
}

const STEPS: [Step; 4] = [
    Step {
        number: "01",
        title: "Create Your Project",
        description: "Start by entering your project name, location, and other basic information.",
        image: "/Storm Laptop Project.jpg",
    },
    Step {
        number: "02",
        title: "Fill in the Details",
        description: "Follow our guided process to write your plan narrative, identify pollutant sources, and describe your BMP strategy.",
        image: "/iStock-1483651249.jpg",
    },
    Step {
        number: "03",
        title: "Export and Review",
        description: "Review your SWPPP for accuracy with our validation tool, and then export as a PDF to submit.",
        image: "/iStock-2219063439.jpg",
    },
    Step {
        number: "04",
        title: "Keep it Current",
        description: "Return to your SWPPP anytime to make updates, log revisions, and export new versions.",
        image: "/iStock-1778043211.jpg",
    },
];

#[function_component(HowItWorks)]
pub fn how_it_works() -> Html {
    html! {
        <section id="how-it-works" class="how-section">
            <div class="how-inner">
                <div class="how-header">
                    <h2>{"How It Works"}</h2>
                    <p>{"Get from project start to completed SWPPP plan in four simple steps."}</p>
                </div>
                <div class="how-steps">
                    {
                        for STEPS.iter().enumerate().map(|(index, step)| {
                            let class = if index % 2 == 0 { "how-step" } else { "how-step reversed" };
                            html! {
                                <div class={class}>
                                    <div class="how-step-copy">
                                        <span class="how-step-number">{ step.number }</span>
                                        <h3>{ step.title }</h3>
                                        <p>{ step.description }</p>
                                    </div>
                                    <div class="how-step-visual">
                                        <img src={step.image} alt={step.title} loading="lazy" />
                                    </div>
                                </div>
                            }
                        })
                    }
                </div>
            </div>
            <style>
                {r#"
                .how-section {
                    padding: 6rem 2rem;
                    background: linear-gradient(135deg, #eef4fb, #ffffff);
                }
                .how-inner {
                    max-width: 1200px;
                    margin: 0 auto;
                }
                .how-header {
                    text-align: center;
                    margin-bottom: 4rem;
                }
                .how-header h2 {
                    font-size: 2.8rem;
                    color: #111827;
                    margin-bottom: 1rem;
                }
                .how-header p {
                    font-size: 1.25rem;
                    color: #4b5563;
                }
                .how-steps {
                    display: flex;
                    flex-direction: column;
                    gap: 6rem;
                }
                .how-step {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 3rem;
                }
                .how-step-copy {
                    flex: 1;
                }
                .how-step-number {
                    font-size: 3.5rem;
                    font-weight: 700;
                    color: rgba(14, 116, 186, 0.2);
                }
                .how-step-copy h3 {
                    font-size: 1.9rem;
                    color: #111827;
                    margin: 0.5rem 0 1rem;
                }
                .how-step-copy p {
                    font-size: 1.1rem;
                    color: #4b5563;
                    line-height: 1.6;
                }
                .how-step-visual {
                    flex: 1;
                    width: 100%;
                }
                .how-step-visual img {
                    width: 100%;
                    height: 320px;
                    object-fit: cover;
                    border-radius: 16px;
                    box-shadow: 0 20px 60px rgba(0, 0, 0, 0.25);
                }
                @media (min-width: 1024px) {
                    .how-step {
                        flex-direction: row;
                    }
                    .how-step.reversed {
                        flex-direction: row-reverse;
                    }
                }
                "#}
            </style>
        </section>
    }
}
