use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::carousel::Carousel;
use crate::components::contact_form::ContactSection;
use crate::components::counter::Counter;
use crate::components::faq::FaqList;
use crate::components::hero::Hero;
use crate::components::parallax_banner::ParallaxBanner;
use crate::components::reveal::Reveal;
use crate::components::smooth_scroll::{scroll_to_location_hash, scroll_to_section};
use crate::config::SiteConfig;
use crate::pages::faq::FAQ_ENTRIES;
use crate::Route;

struct Testimonial {
    quote: &'static str,
    name: &'static str,
    role: &'static str,
}

const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "Month-end used to eat my whole weekend. Now I open the review queue, fix three things and I'm done.",
        name: "Maya Okafor",
        role: "Owner, Okafor Ceramics",
    },
    Testimonial {
        quote: "Our accountant asked what we changed. The answer was: we stopped doing it ourselves.",
        name: "Jonas Lindqvist",
        role: "Co-founder, Northpaw",
    },
    Testimonial {
        quote: "Four entities, eleven accounts, one dashboard. I didn't think that was possible at our size.",
        name: "Priya Raman",
        role: "COO, Raman Logistics",
    },
    Testimonial {
        quote: "The categorisation learned our weird supplier names in about a week.",
        name: "Tomás Ferreira",
        role: "Freelance architect",
    },
    Testimonial {
        quote: "Setup took twenty minutes, most of which was finding my bank password.",
        name: "Hannah Weiss",
        role: "Founder, Weiss Studio",
    },
    Testimonial {
        quote: "We caught a duplicate supplier payment the first night it ran. It paid for the year.",
        name: "Daniel Mensah",
        role: "Finance lead, Brightwater Cafés",
    },
    Testimonial {
        quote: "I finally know what our runway is without opening a spreadsheet.",
        name: "Elif Demir",
        role: "CEO, Kitebox",
    },
];

const FEATURES: &[(&str, &str)] = &[
    (
        "Overnight reconciliation",
        "Every connected account is matched against invoices and receipts while you sleep.",
    ),
    (
        "A review queue, not a to-do list",
        "Only the transactions Brightside isn't sure about reach you, each with a suggested fix.",
    ),
    (
        "Accountant-ready exports",
        "Hand over a clean ledger in the format your accountant already uses.",
    ),
];

#[function_component(Home)]
pub fn home() -> Html {
    let config = use_context::<SiteConfig>().unwrap_or_default();

    {
        let offset = config.header.scroll_offset_px;
        use_effect_with_deps(
            move |_| {
                scroll_to_location_hash(offset);
                || ()
            },
            (),
        );
    }

    let to_contact = {
        let offset = config.header.scroll_offset_px;
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            scroll_to_section("contact", offset);
        })
    };

    html! {
        <div class="landing-page">
            <Hero />

            <section class="features" id="features">
                <h2>{"Less bookkeeping, better books"}</h2>
                <div class="features-grid">
                    { for FEATURES.iter().enumerate().map(|(i, (title, body))| html! {
                        <Reveal key={*title} class="feature-item" delay_ms={i as u32 * 120}>
                            <h3>{*title}</h3>
                            <p>{*body}</p>
                        </Reveal>
                    }) }
                </div>
            </section>

            <section class="stats">
                <Counter target={12_400} suffix="+" label="businesses on Brightside" />
                <Counter target={3_200_000} label="transactions reconciled last month" />
                <Counter target={98} suffix="%" label="matched without a human" />
            </section>

            <section class="testimonials" id="testimonials">
                <h2>{"What our customers say"}</h2>
                <Carousel label="Customer testimonials">
                    { for TESTIMONIALS.iter().map(|t| html! {
                        <figure class="testimonial-card">
                            <blockquote>{t.quote}</blockquote>
                            <figcaption>
                                <span class="testimonial-name">{t.name}</span>
                                <span class="testimonial-role">{t.role}</span>
                            </figcaption>
                        </figure>
                    }) }
                </Carousel>
            </section>

            <ParallaxBanner class="cta-banner">
                <h2>{"Month-end, handled."}</h2>
                <p>{"Connect your accounts tonight and wake up to a reconciled ledger."}</p>
                <a href="#contact" class="banner-cta" onclick={to_contact}>
                    {"Book a demo"}
                </a>
            </ParallaxBanner>

            <section class="faq-preview" id="faq">
                <h2>{"Questions, answered"}</h2>
                <FaqList entries={FAQ_ENTRIES} />
                <Link<Route> to={Route::Faq} classes="forward-link">
                    {"See all questions →"}
                </Link<Route>>
            </section>

            <ContactSection />

            <footer class="site-footer">
                <p>{"© Brightside Ledger Ltd."}</p>
            </footer>

            <style>
                {r#"
                .landing-page {
                    background: #121621;
                    color: #fff;
                    overflow-x: hidden;
                }
                .landing-page section {
                    padding: 5rem 2rem;
                }
                .landing-page h2 {
                    text-align: center;
                    font-size: 2.4rem;
                    margin-bottom: 2.5rem;
                }
                .features-grid {
                    max-width: 1100px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
                    gap: 2rem;
                }
                .feature-item {
                    padding: 2rem;
                    border-radius: 16px;
                    background: rgba(255, 255, 255, 0.04);
                    border: 1px solid rgba(245, 185, 66, 0.12);
                }
                .feature-item p { color: #9aa3b5; }
                .stats {
                    display: flex;
                    justify-content: center;
                    gap: 4rem;
                    flex-wrap: wrap;
                    background: rgba(245, 185, 66, 0.06);
                }
                .stat {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    text-align: center;
                }
                .stat-value {
                    font-size: 2.8rem;
                    font-weight: 700;
                    color: #f5b942;
                    font-variant-numeric: tabular-nums;
                }
                .stat-label { color: #9aa3b5; }
                .testimonials {
                    max-width: 1200px;
                    margin: 0 auto;
                }
                .testimonial-card {
                    margin: 0;
                    height: 100%;
                    padding: 2rem;
                    border-radius: 16px;
                    background: rgba(255, 255, 255, 0.05);
                    display: flex;
                    flex-direction: column;
                    justify-content: space-between;
                    box-sizing: border-box;
                }
                .testimonial-card blockquote {
                    margin: 0 0 1.5rem;
                    font-size: 1.1rem;
                    line-height: 1.6;
                }
                .testimonial-card figcaption {
                    display: flex;
                    flex-direction: column;
                }
                .testimonial-name { font-weight: 600; }
                .testimonial-role { color: #9aa3b5; font-size: 0.9rem; }
                .cta-banner p {
                    color: #cfd6e6;
                    margin-bottom: 2rem;
                }
                .banner-cta {
                    display: inline-block;
                    padding: 0.9rem 2rem;
                    border-radius: 999px;
                    border: 1px solid #f5b942;
                    color: #f5b942;
                    text-decoration: none;
                }
                .faq-preview {
                    max-width: 800px;
                    margin: 0 auto;
                    text-align: center;
                }
                .forward-link {
                    display: inline-block;
                    margin-top: 2rem;
                    color: #f5b942;
                    text-decoration: none;
                }
                .site-footer {
                    text-align: center;
                    padding: 2rem;
                    color: #5f687a;
                }
                @media (max-width: 768px) {
                    .landing-page section { padding: 3.5rem 1rem; }
                    .landing-page h2 { font-size: 1.9rem; }
                    .stats { gap: 2rem; }
                }
                "#}
            </style>
        </div>
    }
}
