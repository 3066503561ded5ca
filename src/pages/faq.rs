use yew::prelude::*;

use crate::components::faq::{FaqEntry, FaqList};
use crate::components::parallax_banner::ParallaxBanner;

pub const FAQ_ENTRIES: &[FaqEntry] = &[
    FaqEntry {
        category: "General",
        question: "Who is Brightside for?",
        answer: "Small businesses and freelancers with one to a few dozen bank accounts who would rather spend the evening on their business than on a spreadsheet.",
    },
    FaqEntry {
        category: "General",
        question: "Do I still need an accountant?",
        answer: "Yes, and they'll like you more. Brightside does the categorising and reconciliation; your accountant gets a clean ledger and can focus on advice and filings.",
    },
    FaqEntry {
        category: "Pricing",
        question: "How much does it cost?",
        answer: "Plans start at a flat monthly fee per business entity. There are no per-transaction charges and you can cancel any time from the settings page.",
    },
    FaqEntry {
        category: "Pricing",
        question: "Is there a free trial?",
        answer: "Every plan starts with a 30-day trial. We don't ask for a card until you decide to keep going.",
    },
    FaqEntry {
        category: "Security",
        question: "How are my bank credentials stored?",
        answer: "They aren't. Bank connections go through a regulated open-banking provider and we only ever receive read-only transaction data.",
    },
    FaqEntry {
        category: "Security",
        question: "Can I export my data?",
        answer: "Any time, as CSV or in the import format of the major accounting packages. Closing your account deletes everything after 30 days.",
    },
    FaqEntry {
        category: "Support",
        question: "What if a transaction is categorised wrong?",
        answer: "Fix it once and Brightside learns the rule. Anything it isn't confident about lands in a short review queue instead of being guessed.",
    },
    FaqEntry {
        category: "Support",
        question: "How do I reach a human?",
        answer: "Use the contact form on the home page or reply to any email from us. Weekday messages are answered within one business day.",
    },
];

#[function_component(FaqPage)]
pub fn faq_page() -> Html {
    // Scroll to top on mount
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    html! {
        <div class="faq-page">
            <ParallaxBanner class="faq-hero">
                <h1>{"Frequently Asked Questions"}</h1>
                <p>{"Everything you need to know before handing over the books."}</p>
            </ParallaxBanner>
            <section class="faq-section">
                <FaqList entries={FAQ_ENTRIES} />
            </section>
            <style>
                {r#"
                .faq-page {
                    padding-top: 74px;
                    min-height: 100vh;
                    background: #121621;
                    color: #fff;
                }
                .faq-hero {
                    padding: 5rem 2rem 3rem;
                    margin-bottom: 3rem;
                }
                .faq-hero h1 {
                    font-size: 3rem;
                    margin-bottom: 1rem;
                    background: linear-gradient(45deg, #fff, #f5b942);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .faq-hero p {
                    color: #9aa3b5;
                    font-size: 1.2rem;
                }
                .faq-section {
                    max-width: 800px;
                    margin: 0 auto;
                    padding: 0 2rem 4rem;
                }
                @media (max-width: 768px) {
                    .faq-hero h1 { font-size: 2.2rem; }
                    .faq-section { padding: 0 1rem 3rem; }
                }
                "#}
            </style>
        </div>
    }
}
