//! Privacy policy and terms-of-service overlays.
//!
//! Both documents share the same modal chrome and a flat section structure
//! (heading, paragraphs, bullet list), so the text lives in static tables and
//! one component renders either document.

use yew::prelude::*;

use crate::components::overlay::ModalShell;

struct LegalSection {
    heading: &'static str,
    paragraphs: &'static [&'static str],
    bullets: &'static [&'static str],
}

static PRIVACY_SECTIONS: &[LegalSection] = &[
    LegalSection {
        heading: "",
        paragraphs: &[
            "GetStorm.io (\"Storm,\" \"we,\" \"our,\" or \"us\") provides software tools that help engineers, consultants, contractors, and organizations streamline SWPPP writing workflows, generate compliance documents, and manage project documentation. This Privacy Policy explains how we collect, use, disclose, and safeguard your information when you use Storm.io and related services (the \"Service\").",
            "If you do not agree with any part of this Privacy Policy, please discontinue use of the Service.",
        ],
        bullets: &[],
    },
    LegalSection {
        heading: "1. Information We Collect",
        paragraphs: &["We may collect information that you voluntarily provide when using the Service, along with device and usage data collected automatically, including:"],
        bullets: &[
            "Account information: name, email address, phone number, organization name, password.",
            "Form submissions: SWPPP data, project information, files, site documentation.",
            "Payment information: processed through third-party providers. We do not store full payment card details.",
            "Device and usage data: IP address, browser type, operating system, pages viewed, access timestamps.",
            "Cookies and tracking technologies: used to maintain sessions and improve user experience.",
        ],
    },
    LegalSection {
        heading: "2. How We Use Your Information",
        paragraphs: &["We use collected information to provide, maintain, and improve the Storm platform, generate SWPPP documents, process payments, send service-related notices, and comply with legal obligations.", "We do not sell personal information."],
        bullets: &[],
    },
    LegalSection {
        heading: "3. How We Share Information",
        paragraphs: &["We may share information with:"],
        bullets: &[
            "Service providers: hosting platforms, analytics tools, cloud storage, email delivery services, payment processors",
            "Your organization/account owner: if you are added to an organizational account",
            "Legal authorities: when required by law or to protect Storm's rights, security, and users",
            "Business transfers: in the event of a merger, acquisition, or asset sale",
        ],
    },
    LegalSection {
        heading: "4. Data Security",
        paragraphs: &["We implement technical and organizational measures to protect your information, including encryption in transit (TLS), access controls and role-based permissions, and regular security reviews. However, no online system is fully secure, and we cannot guarantee absolute protection."],
        bullets: &[],
    },
    LegalSection {
        heading: "5. Data Retention",
        paragraphs: &["We retain information for as long as your account is active, as required to provide the Service, or as necessary to satisfy legal or business obligations. You may request deletion of your data at any time (see Section 8)."],
        bullets: &[],
    },
    LegalSection {
        heading: "6. Children's Privacy",
        paragraphs: &["Storm is not designed for individuals under 16, and we do not knowingly collect data from minors. If we learn that we have collected data from a minor, we will delete it promptly."],
        bullets: &[],
    },
    LegalSection {
        heading: "7. International Users",
        paragraphs: &["If you access Storm from outside the United States, you understand that your information may be transferred to and processed in the U.S., where privacy laws may differ."],
        bullets: &[],
    },
    LegalSection {
        heading: "8. Your Rights",
        paragraphs: &["Depending on your jurisdiction, you may have the right to:"],
        bullets: &[
            "Access, update, or delete your information",
            "Request a copy of your data",
            "Object to or restrict processing",
            "Withdraw consent (where applicable)",
        ],
    },
    LegalSection {
        heading: "9. Changes to This Policy",
        paragraphs: &["We may update this Privacy Policy periodically. The \"Last Updated\" date reflects the current version. Changes become effective upon posting to the website."],
        bullets: &[],
    },
];

static TERMS_SECTIONS: &[LegalSection] = &[
    LegalSection {
        heading: "",
        paragraphs: &[
            "These Terms of Service (\"Terms\") govern your access to and use of GetStorm.io (\"Storm,\" \"we,\" \"our,\" \"us\") and all related products and services (the \"Service\"). By using the Service, you agree to these Terms.",
            "If you do not agree, do not use the Service.",
        ],
        bullets: &[],
    },
    LegalSection {
        heading: "1. Eligibility",
        paragraphs: &["You must:"],
        bullets: &[
            "Be at least 16 years old,",
            "Have the authority to enter into a binding agreement, and",
            "Use the Service in compliance with all applicable laws and regulations.",
        ],
    },
    LegalSection {
        heading: "2. Accounts & Security",
        paragraphs: &["You are responsible for maintaining accurate account information, keeping your login credentials confidential, and all activity that occurs under your account. You agree to notify us immediately of any unauthorized access or suspicious activity."],
        bullets: &[],
    },
    LegalSection {
        heading: "3. Use of the Service",
        paragraphs: &["You may use Storm only for lawful, authorized purposes. You agree not to:"],
        bullets: &[
            "Upload malicious code or attempt to disrupt or degrade the Service,",
            "Reverse-engineer, decompile, or attempt to access non-public areas of the platform,",
            "Circumvent authentication or security measures,",
            "Use the Service to store unlawful or harmful content, or",
            "Misrepresent your identity or affiliation.",
        ],
    },
    LegalSection {
        heading: "4. Subscriptions, Billing & Refunds",
        paragraphs: &["Certain features require a paid subscription. Fees are billed in advance and subscriptions renew automatically unless canceled prior to the renewal date. Fees are generally non-refundable, except for verified billing errors reported within 30 days of the charge. Refunds will not be issued for partial months of service, unused time, failure to cancel prior to renewal, or accounts terminated for violations of these Terms."],
        bullets: &[],
    },
    LegalSection {
        heading: "5. Content Ownership",
        paragraphs: &["You retain ownership of all SWPPP data, project information, files, and materials you upload (\"User Content\"). You grant Storm a limited license to host, store, process, display, and transmit User Content solely to operate and improve the Service. All software, trademarks, features, designs, and intellectual property remain the property of Storm and its licensors."],
        bullets: &[],
    },
    LegalSection {
        heading: "6. Privacy",
        paragraphs: &["Your use of the Service is governed by our Privacy Policy, which is incorporated by reference into these Terms."],
        bullets: &[],
    },
    LegalSection {
        heading: "7. Service Availability",
        paragraphs: &["We strive for consistent uptime, but we do not guarantee continuous availability, error-free operation, or complete data recovery in all circumstances. We may modify, suspend, or discontinue any part of the Service at any time."],
        bullets: &[],
    },
    LegalSection {
        heading: "8. Termination",
        paragraphs: &["You may stop using the Service at any time. We may suspend or terminate your access if you violate these Terms, if required by law, or as necessary to protect the Service, our users, or our business."],
        bullets: &[],
    },
    LegalSection {
        heading: "9. Disclaimers",
        paragraphs: &["The Service is provided \"as is\" and \"as available\" without warranties of any kind, express or implied, including fitness for a particular purpose, non-infringement, accuracy, reliability, or availability. Use of the Service is at your own risk."],
        bullets: &[],
    },
    LegalSection {
        heading: "10. Limitation of Liability",
        paragraphs: &["To the maximum extent permitted by law, Storm is not liable for indirect, incidental, consequential, special, or punitive damages. Storm's total liability to you for any claim will not exceed the amount paid by you in the 12 months preceding the event giving rise to the claim."],
        bullets: &[],
    },
    LegalSection {
        heading: "11. Indemnification",
        paragraphs: &["You agree to indemnify and hold Storm harmless from any claims, damages, losses, liabilities, and expenses (including attorneys' fees) arising out of your use or misuse of the Service, your violation of these Terms, or your User Content."],
        bullets: &[],
    },
    LegalSection {
        heading: "12. Governing Law",
        paragraphs: &["These Terms are governed by the laws of the State of Michigan, without regard to conflict-of-law principles."],
        bullets: &[],
    },
    LegalSection {
        heading: "13. Changes to the Terms",
        paragraphs: &["We may update these Terms periodically. Updated Terms become effective upon posting. Continued use of the Service after changes are posted constitutes acceptance of the updated Terms."],
        bullets: &[],
    },
];

#[derive(Clone, Copy, PartialEq)]
enum LegalDoc {
    Privacy,
    Terms,
}

impl LegalDoc {
    fn title(self) -> &'static str {
        match self {
            Self::Privacy => "Privacy Policy",
            Self::Terms => "Terms of Service",
        }
    }

    fn sections(self) -> &'static [LegalSection] {
        match self {
            Self::Privacy => PRIVACY_SECTIONS,
            Self::Terms => TERMS_SECTIONS,
        }
    }
}

#[derive(Properties, PartialEq)]
struct LegalModalProps {
    open: bool,
    on_close: Callback<()>,
    doc: LegalDoc,
}

#[function_component(LegalModal)]
fn legal_modal(props: &LegalModalProps) -> Html {
    let sections = props.doc.sections();

    html! {
        <ModalShell open={props.open} on_close={props.on_close.clone()} frame_class="legal-modal-frame">
            <div class="legal-modal">
                <header>
                    <h2>{ props.doc.title() }</h2>
                    <p class="legal-updated">{"Last Updated: November 2025"}</p>
                </header>
                <div class="legal-body">
                    {
                        for sections.iter().map(|section| html! {
                            <>
                                {
                                    if section.heading.is_empty() {
                                        html! {}
                                    } else {
                                        html! { <h3>{ section.heading }</h3> }
                                    }
                                }
                                { for section.paragraphs.iter().map(|p| html! { <p>{ *p }</p> }) }
                                {
                                    if section.bullets.is_empty() {
                                        html! {}
                                    } else {
                                        html! {
                                            <ul>
                                                { for section.bullets.iter().map(|b| html! { <li>{ *b }</li> }) }
                                            </ul>
                                        }
                                    }
                                }
                            </>
                        })
                    }
                </div>
            </div>
            <style>
                {r#"
                .legal-modal-frame {
                    max-width: 760px;
                }
                .legal-modal {
                    background: #fff;
                    border-radius: 16px;
                    max-height: 85vh;
                    display: flex;
                    flex-direction: column;
                    overflow: hidden;
                }
                .legal-modal header {
                    padding: 1.5rem 2rem 1rem;
                    border-bottom: 1px solid #e5e7eb;
                }
                .legal-modal h2 {
                    font-size: 1.8rem;
                    color: #111827;
                    margin: 0 0 0.25rem;
                }
                .legal-updated {
                    font-size: 0.85rem;
                    color: #6b7280;
                }
                .legal-body {
                    padding: 1.5rem 2rem 2rem;
                    overflow-y: auto;
                }
                .legal-body h3 {
                    font-size: 1.1rem;
                    color: #111827;
                    margin: 1.75rem 0 0.75rem;
                }
                .legal-body p {
                    color: #374151;
                    line-height: 1.6;
                    margin-bottom: 1rem;
                }
                .legal-body ul {
                    padding-left: 1.5rem;
                    color: #374151;
                    margin-bottom: 1rem;
                }
                .legal-body li {
                    margin-bottom: 0.5rem;
                    line-height: 1.5;
                }
                "#}
            </style>
        </ModalShell>
    }
}

#[derive(Properties, PartialEq)]
pub struct LegalProps {
    pub open: bool,
    pub on_close: Callback<()>,
}

#[function_component(PrivacyPolicyModal)]
pub fn privacy_policy_modal(props: &LegalProps) -> Html {
    html! { <LegalModal open={props.open} on_close={props.on_close.clone()} doc={LegalDoc::Privacy} /> }
}

#[function_component(TermsOfServiceModal)]
pub fn terms_of_service_modal(props: &LegalProps) -> Html {
    html! { <LegalModal open={props.open} on_close={props.on_close.clone()} doc={LegalDoc::Terms} /> }
}
