use yew::prelude::*;

struct Testimonial {
    name: &'static str,
    role: &'static str,
    company: &'static str,
    content: &'static str,
    image: &'static str,
    rating: u8,
}

// Only the lead testimonial is displayed for now; the rest stay in the table
// for when the section grows back into a carousel.
const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        name: "John Teravskis, QSD, CPESC",
        role: "Environmental Consultant",
        company: "WGR Southwest, Inc.",
        content: "As the creator of the Connections Course and the Chief Compliance Officer of Storm, I'm so excited to help bring Storm to life. We're now using it in house at WGR Southwest, and it is greatly reducing the average time our staff spends writing SWPPPs.",
        image: "/IMG_2987.jpeg",
        rating: 5,
    },
    Testimonial {
        name: "Michael Chen",
        role: "Project Manager",
        company: "BuildRight Construction",
        content: "The compliance checking feature alone is worth the price. We've never had a plan rejected since switching to Storm.",
        image: "/testimonial-michael.jpg",
        rating: 5,
    },
    Testimonial {
        name: "Emily Rodriguez",
        role: "Environmental Engineer",
        company: "GreenTech Engineering",
        content: "The templates are comprehensive and the AI suggestions are incredibly helpful. This is the future of SWPPP writing.",
        image: "/testimonial-emily.jpg",
        rating: 5,
    },
];

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    html! {
        <section id="testimonials" class="testimonials-section">
            <div class="testimonials-inner">
                <div class="testimonials-header">
                    <h2>{"Trusted by Industry Professionals"}</h2>
                    <p>{"See what environmental consultants, engineers, and project managers are saying about Storm."}</p>
                </div>
                {
                    for TESTIMONIALS.iter().take(1).map(|t| html! {
                        <div class="testimonial-card">
                            <div class="testimonial-stars">
                                { for (0..t.rating).map(|_| html! { <span>{"★"}</span> }) }
                            </div>
                            <p class="testimonial-quote">{ format!("\u{201c}{}\u{201d}", t.content) }</p>
                            <div class="testimonial-author">
                                <img src={t.image} alt={t.name} loading="lazy" />
                                <div>
                                    <div class="testimonial-name">{ t.name }</div>
                                    <div class="testimonial-role">{ t.role }</div>
                                    <div class="testimonial-company">{ t.company }</div>
                                </div>
                            </div>
                        </div>
                    })
                }
            </div>
            <style>
                {r#"
                .testimonials-section {
                    padding: 6rem 2rem;
                    background: #fff;
                }
                .testimonials-inner {
                    max-width: 1100px;
                    margin: 0 auto;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                }
                .testimonials-header {
                    text-align: center;
                    margin-bottom: 3rem;
                }
                .testimonials-header h2 {
                    font-size: 2.8rem;
                    color: #111827;
                    margin-bottom: 1rem;
                }
                .testimonials-header p {
                    font-size: 1.2rem;
                    color: #4b5563;
                    max-width: 48rem;
                }
                .testimonial-card {
                    max-width: 48rem;
                    width: 100%;
                    padding: 2rem;
                    border-radius: 16px;
                    background: linear-gradient(135deg, #eef4fb, #ffffff);
                    box-shadow: 0 12px 32px rgba(0, 0, 0, 0.08);
                }
                .testimonial-stars {
                    color: #facc15;
                    font-size: 1.2rem;
                    margin-bottom: 1rem;
                }
                .testimonial-quote {
                    color: #374151;
                    font-style: italic;
                    line-height: 1.7;
                    margin-bottom: 1.5rem;
                }
                .testimonial-author {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                }
                .testimonial-author img {
                    width: 48px;
                    height: 48px;
                    border-radius: 50%;
                    object-fit: cover;
                }
                .testimonial-name {
                    font-weight: 600;
                    color: #111827;
                }
                .testimonial-role {
                    font-size: 0.9rem;
                    color: #4b5563;
                }
                .testimonial-company {
                    font-size: 0.9rem;
                    color: #0e74ba;
                }
                "#}
            </style>
        </section>
    }
}
