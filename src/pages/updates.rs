use yew::prelude::*;

use crate::components::category_filter::{
    categories, filter_by_category, Categorized, CategoryFilter, ALL_CATEGORIES,
};
use crate::components::parallax_banner::ParallaxBanner;
use crate::components::reveal::Reveal;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Update {
    pub category: &'static str,
    pub title: &'static str,
    pub date: &'static str,
    pub summary: &'static str,
}

impl Categorized for Update {
    fn category(&self) -> &'static str {
        self.category
    }
}

pub const UPDATES: &[Update] = &[
    Update {
        category: "Webinars",
        title: "Closing the year without the panic",
        date: "12 Nov",
        summary: "A live walkthrough of year-end in Brightside with time for your questions.",
    },
    Update {
        category: "Guides",
        title: "Splitting one card across two businesses",
        date: "28 Oct",
        summary: "How rules and the review queue keep shared cards from muddying both ledgers.",
    },
    Update {
        category: "Product",
        title: "Receipt matching now reads handwritten totals",
        date: "15 Oct",
        summary: "Photographed receipts with a pen-written total are matched as reliably as printed ones.",
    },
    Update {
        category: "Webinars",
        title: "Bookkeeping for first-time employers",
        date: "2 Oct",
        summary: "Payroll accounts, pension contributions and what your accountant needs from you.",
    },
    Update {
        category: "Guides",
        title: "What to send your accountant each quarter",
        date: "19 Sep",
        summary: "A short checklist, and the export that covers most of it in one click.",
    },
    Update {
        category: "Product",
        title: "Multi-currency accounts",
        date: "5 Sep",
        summary: "Accounts in other currencies reconcile at the rate on the day the money moved.",
    },
];

/// Webinars, guides and product news, filterable by category.
#[function_component(UpdatesPage)]
pub fn updates_page() -> Html {
    let selected = use_state(|| ALL_CATEGORIES);

    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    let on_select = {
        let selected = selected.clone();
        Callback::from(move |category: &'static str| selected.set(category))
    };

    html! {
        <div class="updates-page">
            <ParallaxBanner class="updates-hero">
                <h1>{"Updates"}</h1>
                <p>{"Webinars, guides and what changed in Brightside lately."}</p>
            </ParallaxBanner>
            <section class="updates-section">
                <CategoryFilter categories={categories(UPDATES)} selected={*selected} on_select={on_select} />
                <div class="updates-grid">
                    { for filter_by_category(UPDATES, *selected).into_iter().map(|update| html! {
                        <Reveal key={update.title} class="update-card">
                            <span class="update-meta">{update.category}{" · "}{update.date}</span>
                            <h3>{update.title}</h3>
                            <p>{update.summary}</p>
                        </Reveal>
                    }) }
                </div>
            </section>
            <style>
                {r#"
                .updates-page {
                    padding-top: 74px;
                    min-height: 100vh;
                    background: #121621;
                    color: #fff;
                }
                .updates-hero {
                    padding: 5rem 2rem 3rem;
                    margin-bottom: 3rem;
                }
                .updates-hero h1 { font-size: 3rem; margin-bottom: 1rem; }
                .updates-hero p { color: #9aa3b5; font-size: 1.2rem; }
                .updates-section {
                    max-width: 1100px;
                    margin: 0 auto;
                    padding: 0 2rem 4rem;
                }
                .updates-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fill, minmax(300px, 1fr));
                    gap: 1.5rem;
                }
                .update-card {
                    padding: 1.75rem;
                    border-radius: 16px;
                    background: rgba(255, 255, 255, 0.04);
                    border: 1px solid rgba(245, 185, 66, 0.12);
                }
                .update-meta {
                    color: #f5b942;
                    font-size: 0.85rem;
                    text-transform: uppercase;
                    letter-spacing: 0.05em;
                }
                .update-card p { color: #9aa3b5; }
                @media (max-width: 768px) {
                    .updates-hero h1 { font-size: 2.2rem; }
                    .updates-section { padding: 0 1rem 3rem; }
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_has_updates() {
        for category in categories(UPDATES).into_iter().skip(1) {
            assert!(!filter_by_category(UPDATES, category).is_empty());
        }
    }

    #[test]
    fn filter_keeps_newest_first() {
        let titles: Vec<_> = filter_by_category(UPDATES, "Webinars")
            .iter()
            .map(|update| update.title)
            .collect();
        assert_eq!(
            titles,
            vec!["Closing the year without the panic", "Bookkeeping for first-time employers"]
        );
    }
}
