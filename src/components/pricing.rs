use chrono::Utc;
use yew::prelude::*;

use crate::components::legal::{PrivacyPolicyModal, TermsOfServiceModal};
use crate::config;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BillingCycle {
    Monthly,
    Annual,
}

pub struct PricingPlan {
    pub name: &'static str,
    pub price: &'static str,
    pub cadence: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub billing_note: Option<&'static str>,
    pub original_price: Option<&'static str>,
    pub savings_copy: Option<&'static str>,
    pub promo_price: Option<&'static str>,
    pub promo_savings: Option<&'static str>,
    pub badge: Option<&'static str>,
    pub highlight: bool,
}

const SHARED_FEATURES: [&str; 4] = [
    "Unlimited team members",
    "Unlimited revisions and exports",
    "Free subscription to Weekly.io",
    "14-day money-back guarantee",
];

const EXPRESS_FEATURES: [&str; 6] = [
    "1 project",
    "Limited support",
    SHARED_FEATURES[0],
    SHARED_FEATURES[1],
    SHARED_FEATURES[2],
    SHARED_FEATURES[3],
];

const PRO_FEATURES: [&str; 6] = [
    "10 projects",
    "Dedicated support",
    SHARED_FEATURES[0],
    SHARED_FEATURES[1],
    SHARED_FEATURES[2],
    SHARED_FEATURES[3],
];

const BUSINESS_FEATURES: [&str; 6] = [
    "Unlimited projects",
    "Dedicated support",
    SHARED_FEATURES[0],
    SHARED_FEATURES[1],
    SHARED_FEATURES[2],
    SHARED_FEATURES[3],
];

const MONTHLY_PLANS: [PricingPlan; 3] = [
    PricingPlan {
        name: "Express",
        price: "$74.99",
        cadence: "/month",
        description: "Perfect for getting started",
        features: &EXPRESS_FEATURES,
        billing_note: None,
        original_price: None,
        savings_copy: None,
        promo_price: Some("$37.50"),
        promo_savings: Some("$37.49"),
        badge: None,
        highlight: false,
    },
    PricingPlan {
        name: "Pro",
        price: "$199.99",
        cadence: "/month",
        description: "For professionals and small teams",
        features: &PRO_FEATURES,
        billing_note: None,
        original_price: None,
        savings_copy: None,
        promo_price: Some("$100.00"),
        promo_savings: Some("$99.99"),
        badge: None,
        highlight: true,
    },
    PricingPlan {
        name: "Business",
        price: "$999",
        cadence: "/month",
        description: "For growing businesses and teams",
        features: &BUSINESS_FEATURES,
        billing_note: None,
        original_price: None,
        savings_copy: None,
        promo_price: Some("$499.50"),
        promo_savings: Some("$499.50"),
        badge: None,
        highlight: false,
    },
];

const ANNUAL_PLANS: [PricingPlan; 3] = [
    PricingPlan {
        name: "Express",
        price: "$49.99",
        cadence: "/month",
        description: "Perfect for getting started",
        features: &EXPRESS_FEATURES,
        billing_note: Some("billed annually"),
        original_price: Some("$599.88"),
        savings_copy: Some("Save $149.88"),
        promo_price: Some("$24.99"),
        promo_savings: Some("$24.99"),
        badge: Some("25% OFF"),
        highlight: false,
    },
    PricingPlan {
        name: "Pro",
        price: "$129.99",
        cadence: "/month",
        description: "For professionals and small teams",
        features: &PRO_FEATURES,
        billing_note: Some("billed annually"),
        original_price: Some("$1,559.88"),
        savings_copy: Some("Save $660"),
        promo_price: Some("$64.99"),
        promo_savings: Some("$64.99"),
        badge: Some("42.3% OFF"),
        highlight: true,
    },
    PricingPlan {
        name: "Business",
        price: "$449.99",
        cadence: "/month",
        description: "For growing businesses and teams",
        features: &BUSINESS_FEATURES,
        billing_note: Some("billed annually"),
        original_price: Some("$5,399.88"),
        savings_copy: Some("Save $3,000"),
        promo_price: Some("$224.99"),
        promo_savings: Some("$224.99"),
        badge: Some("55.6% OFF"),
        highlight: false,
    },
];

pub fn plans_for(cycle: BillingCycle) -> &'static [PricingPlan] {
    match cycle {
        BillingCycle::Monthly => &MONTHLY_PLANS,
        BillingCycle::Annual => &ANNUAL_PLANS,
    }
}

#[function_component(Pricing)]
pub fn pricing() -> Html {
    let cycle = use_state(|| BillingCycle::Annual);
    let privacy_open = use_state(|| false);
    let terms_open = use_state(|| false);

    let select_cycle = |target: BillingCycle| {
        let cycle = cycle.clone();
        Callback::from(move |_: MouseEvent| cycle.set(target))
    };

    let open_privacy = {
        let privacy_open = privacy_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            privacy_open.set(true);
        })
    };
    let close_privacy = {
        let privacy_open = privacy_open.clone();
        Callback::from(move |_| privacy_open.set(false))
    };
    let open_terms = {
        let terms_open = terms_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            terms_open.set(true);
        })
    };
    let close_terms = {
        let terms_open = terms_open.clone();
        Callback::from(move |_| terms_open.set(false))
    };

    let promo = &config::PROMO;
    // Promo pricing appears only inside the same window the banner counts down.
    let promo_active = promo.window.is_active(Utc::now().timestamp());

    html! {
        <section id="pricing" class="pricing-section">
            <div class="pricing-inner">
                <div class="pricing-header">
                    <p class="pricing-kicker">{"Flexible Pricing"}</p>
                    <h2>{"Choose the plan that fits your workflow"}</h2>
                    <p class="pricing-sub">{"Lock in serious savings with annual plans."}</p>
                </div>

                <div class="cycle-toggle">
                    <button
                        class={classes!("cycle-button", (*cycle == BillingCycle::Monthly).then(|| "active"))}
                        onclick={select_cycle(BillingCycle::Monthly)}
                    >
                        {"Monthly"}
                    </button>
                    <button
                        class={classes!("cycle-button", (*cycle == BillingCycle::Annual).then(|| "active"))}
                        onclick={select_cycle(BillingCycle::Annual)}
                    >
                        {"Annual"}
                    </button>
                </div>

                <div class="plan-grid">
                    {
                        for plans_for(*cycle).iter().map(|plan| {
                            let card_class = if plan.highlight { "plan-card highlight" } else { "plan-card" };
                            html! {
                                <div class={card_class}>
                                    {
                                        if let Some(badge) = plan.badge {
                                            html! { <span class="plan-badge">{ badge }</span> }
                                        } else {
                                            html! {}
                                        }
                                    }
                                    <h3>{ plan.name }</h3>
                                    <p class="plan-description">{ plan.description }</p>
                                    <div class="plan-price">
                                        {
                                            match (promo_active, plan.promo_price) {
                                                (true, Some(promo_price)) => html! {
                                                    <>
                                                        <span class="amount">{ promo_price }</span>
                                                        <span class="cadence">{ plan.cadence }</span>
                                                        <p class="plan-strike">
                                                            <span class="strike">{ plan.price }</span>
                                                            {
                                                                if let Some(savings) = plan.promo_savings {
                                                                    html! { <span class="save">{ format!("Save {savings}/month") }</span> }
                                                                } else {
                                                                    html! {}
                                                                }
                                                            }
                                                        </p>
                                                    </>
                                                },
                                                _ => html! {
                                                    <>
                                                        <span class="amount">{ plan.price }</span>
                                                        <span class="cadence">{ plan.cadence }</span>
                                                        {
                                                            if let (Some(original), Some(savings)) = (plan.original_price, plan.savings_copy) {
                                                                html! {
                                                                    <p class="plan-strike">
                                                                        <span class="strike">{ original }</span>
                                                                        <span class="save">{ savings }</span>
                                                                    </p>
                                                                }
                                                            } else {
                                                                html! {}
                                                            }
                                                        }
                                                    </>
                                                },
                                            }
                                        }
                                        {
                                            if let Some(note) = plan.billing_note {
                                                html! { <p class="plan-note">{ note }</p> }
                                            } else {
                                                html! {}
                                            }
                                        }
                                    </div>
                                    {
                                        if promo_active {
                                            html! {
                                                <div class="plan-promo">
                                                    <p class="plan-promo-kicker">{"Cyber Monday Promo"}</p>
                                                    <span class="plan-promo-code">{ promo.code }</span>
                                                    <span class="plan-promo-percent">{ format!("{}% OFF", promo.percent_off) }</span>
                                                </div>
                                            }
                                        } else {
                                            html! {}
                                        }
                                    }
                                    <ul class="plan-features">
                                        { for plan.features.iter().map(|feature| html! { <li>{ *feature }</li> }) }
                                    </ul>
                                    <a
                                        href={config::APP_URL}
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class={if plan.highlight { "plan-cta highlight" } else { "plan-cta" }}
                                    >
                                        {"Choose Plan"}
                                    </a>
                                </div>
                            }
                        })
                    }
                </div>

                <p class="pricing-footnote">
                    {"* Currently supporting California CGP (traditional and LUP) projects. More permits and other States coming soon."}
                </p>

                <div class="custom-template-card">
                    <p class="pricing-kicker">{"Need something special?"}</p>
                    <h3>{"Custom Template Creation"}</h3>
                    <p>{"Work directly with our team to build a bespoke SWPPP template tailored to your organization."}</p>
                    <a href={format!("mailto:{}?subject=Custom%20Template%20Request", config::CONTACT_EMAIL)} class="contact-button">
                        {"Contact Us"}
                    </a>
                </div>

                <div class="legal-links">
                    <a href="#" onclick={open_terms}>{"Terms of Service"}</a>
                    {" | "}
                    <a href="#" onclick={open_privacy}>{"Privacy Policy"}</a>
                </div>
            </div>

            <PrivacyPolicyModal open={*privacy_open} on_close={close_privacy} />
            <TermsOfServiceModal open={*terms_open} on_close={close_terms} />

            <style>
                {r#"
                .pricing-section {
                    padding: 7rem 2rem;
                    background: #f9fafb;
                }
                .pricing-inner {
                    max-width: 1200px;
                    margin: 0 auto;
                }
                .pricing-header {
                    text-align: center;
                    margin-bottom: 2.5rem;
                }
                .pricing-kicker {
                    font-size: 0.85rem;
                    text-transform: uppercase;
                    letter-spacing: 0.3em;
                    color: #6b7280;
                    margin-bottom: 0.75rem;
                }
                .pricing-header h2 {
                    font-size: 2.8rem;
                    color: #111827;
                    margin-bottom: 1rem;
                }
                .pricing-sub {
                    font-size: 1.15rem;
                    color: #4b5563;
                }
                .cycle-toggle {
                    display: flex;
                    justify-content: center;
                    gap: 0.25rem;
                    width: fit-content;
                    margin: 0 auto 3rem;
                    padding: 0.25rem;
                    border-radius: 9999px;
                    background: #fff;
                    border: 1px solid #e5e7eb;
                    box-shadow: 0 8px 24px rgba(0, 0, 0, 0.05);
                }
                .cycle-button {
                    padding: 0.5rem 1.5rem;
                    border: none;
                    border-radius: 9999px;
                    background: transparent;
                    color: #6b7280;
                    font-weight: 600;
                    font-size: 0.9rem;
                    cursor: pointer;
                    transition: all 0.3s ease;
                }
                .cycle-button.active {
                    background: linear-gradient(45deg, #0e74ba, #38bdf8);
                    color: #fff;
                }
                .plan-grid {
                    display: grid;
                    gap: 2rem;
                    grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
                }
                .plan-card {
                    position: relative;
                    padding: 2rem;
                    border-radius: 24px;
                    background: #fff;
                    border: 1px solid #f3f4f6;
                    box-shadow: 0 16px 48px rgba(0, 0, 0, 0.08);
                }
                .plan-card.highlight {
                    border-color: rgba(14, 116, 186, 0.4);
                    box-shadow: 0 16px 48px rgba(14, 116, 186, 0.2);
                }
                .plan-badge {
                    position: absolute;
                    top: 1.25rem;
                    right: 1.25rem;
                    padding: 0.25rem 0.75rem;
                    border-radius: 9999px;
                    background: #ecfdf5;
                    color: #059669;
                    font-size: 0.8rem;
                    font-weight: 700;
                }
                .plan-card h3 {
                    font-size: 1.6rem;
                    color: #111827;
                }
                .plan-description {
                    color: #6b7280;
                    margin-bottom: 1.5rem;
                }
                .plan-price .amount {
                    font-size: 2.5rem;
                    font-weight: 700;
                    color: #111827;
                }
                .plan-price .cadence {
                    color: #6b7280;
                    margin-left: 0.25rem;
                }
                .plan-strike {
                    font-size: 0.9rem;
                    color: #6b7280;
                    margin-top: 0.5rem;
                }
                .plan-strike .strike {
                    text-decoration: line-through;
                    margin-right: 0.5rem;
                }
                .plan-strike .save {
                    color: #059669;
                    font-weight: 600;
                }
                .plan-note {
                    font-size: 0.9rem;
                    color: #6b7280;
                    margin-top: 0.25rem;
                }
                .plan-promo {
                    margin: 1.5rem 0;
                    padding: 1rem;
                    border-radius: 16px;
                    border: 2px dashed rgba(34, 211, 238, 0.4);
                    background: linear-gradient(90deg, rgba(168, 85, 247, 0.08), rgba(34, 211, 238, 0.08));
                }
                .plan-promo-kicker {
                    font-size: 0.7rem;
                    text-transform: uppercase;
                    letter-spacing: 0.15em;
                    color: #7e22ce;
                    font-weight: 700;
                    margin-bottom: 0.25rem;
                }
                .plan-promo-code {
                    font-size: 1.5rem;
                    font-weight: 700;
                    letter-spacing: 0.08em;
                    background: linear-gradient(90deg, #06b6d4, #6366f1, #a855f7);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .plan-promo-percent {
                    float: right;
                    padding: 0.5rem 0.75rem;
                    border-radius: 12px;
                    background: linear-gradient(135deg, #06b6d4, #4f46e5, #7e22ce);
                    color: #fff;
                    font-weight: 800;
                    font-size: 0.85rem;
                }
                .plan-features {
                    list-style: none;
                    padding: 0;
                    margin: 0 0 2rem;
                }
                .plan-features li {
                    padding: 0.4rem 0 0.4rem 1.75rem;
                    color: #374151;
                    position: relative;
                }
                .plan-features li::before {
                    content: '✓';
                    position: absolute;
                    left: 0;
                    color: #059669;
                    font-weight: 700;
                }
                .plan-cta {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 0.8rem 1.5rem;
                    border-radius: 9999px;
                    background: #111827;
                    color: #fff;
                    font-weight: 600;
                    text-decoration: none;
                    transition: background 0.3s ease;
                }
                .plan-cta:hover {
                    background: #0e74ba;
                }
                .plan-cta.highlight {
                    background: linear-gradient(45deg, #0e74ba, #38bdf8);
                    box-shadow: 0 12px 32px rgba(14, 116, 186, 0.4);
                }
                .pricing-footnote {
                    text-align: center;
                    font-size: 0.9rem;
                    color: #4b5563;
                    margin-top: 2rem;
                }
                .custom-template-card {
                    max-width: 36rem;
                    margin: 3rem auto 0;
                    padding: 2rem;
                    text-align: center;
                    border-radius: 24px;
                    background: #fff;
                    border: 1px solid #f3f4f6;
                    box-shadow: 0 16px 48px rgba(0, 0, 0, 0.08);
                }
                .custom-template-card h3 {
                    font-size: 1.8rem;
                    color: #111827;
                    margin-bottom: 0.5rem;
                }
                .custom-template-card p {
                    color: #4b5563;
                    margin-bottom: 1.5rem;
                }
                .contact-button {
                    display: inline-flex;
                    padding: 0.8rem 2.5rem;
                    border-radius: 9999px;
                    border: 1px solid #0e74ba;
                    color: #0e74ba;
                    font-weight: 600;
                    text-decoration: none;
                    transition: all 0.3s ease;
                }
                .contact-button:hover {
                    background: #0e74ba;
                    color: #fff;
                }
                .legal-links {
                    margin-top: 3rem;
                    text-align: center;
                    color: #6b7280;
                }
                .legal-links a {
                    color: #0e74ba;
                    text-decoration: none;
                }
                .legal-links a:hover {
                    text-decoration: underline;
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_cycles_offer_three_plans() {
        assert_eq!(plans_for(BillingCycle::Monthly).len(), 3);
        assert_eq!(plans_for(BillingCycle::Annual).len(), 3);
    }

    #[test]
    fn annual_plans_carry_savings_copy() {
        for plan in plans_for(BillingCycle::Annual) {
            assert!(plan.billing_note.is_some(), "{} missing note", plan.name);
            assert!(plan.savings_copy.is_some(), "{} missing savings", plan.name);
            assert!(plan.badge.is_some(), "{} missing badge", plan.name);
        }
    }

    #[test]
    fn exactly_one_highlighted_plan_per_cycle() {
        for cycle in [BillingCycle::Monthly, BillingCycle::Annual] {
            let highlighted = plans_for(cycle).iter().filter(|p| p.highlight).count();
            assert_eq!(highlighted, 1);
        }
    }

    #[test]
    fn feature_lists_preserve_shared_tail() {
        for plan in plans_for(BillingCycle::Monthly) {
            assert_eq!(plan.features.len(), 6);
            assert_eq!(plan.features[5], "14-day money-back guarantee");
        }
    }
}
