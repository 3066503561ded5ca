use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::category_filter::{
    categories, filter_by_category, Categorized, CategoryFilter, ALL_CATEGORIES,
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FaqEntry {
    pub category: &'static str,
    pub question: &'static str,
    pub answer: &'static str,
}

impl Categorized for FaqEntry {
    fn category(&self) -> &'static str {
        self.category
    }
}

/// Clicking the open question closes it; clicking any other opens that
/// one and closes the rest.
pub fn toggle(open: Option<&'static str>, clicked: &'static str) -> Option<&'static str> {
    if open == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: AttrValue,
    answer: AttrValue,
    is_open: bool,
    on_toggle: Callback<()>,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let onclick = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(());
        })
    };

    html! {
        <div class={classes!("faq-item", props.is_open.then(|| "open"))}>
            <button class="faq-question" aria-expanded={props.is_open.to_string()} onclick={onclick}>
                <span class="question-text">{props.question.clone()}</span>
                <span class="toggle-icon">{if props.is_open { "−" } else { "+" }}</span>
            </button>
            <div class="faq-answer">
                <p>{props.answer.clone()}</p>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FaqListProps {
    pub entries: &'static [FaqEntry],
    #[prop_or(true)]
    pub show_filters: bool,
}

#[function_component(FaqList)]
pub fn faq_list(props: &FaqListProps) -> Html {
    let selected = use_state(|| ALL_CATEGORIES);
    // At most one answer is open at a time, keyed by its question.
    let open = use_state(|| None::<&'static str>);
    let visible = filter_by_category(props.entries, *selected);

    let filters = if props.show_filters {
        let on_select = {
            let selected = selected.clone();
            Callback::from(move |category: &'static str| selected.set(category))
        };
        html! {
            <CategoryFilter
                categories={categories(props.entries)}
                selected={*selected}
                on_select={on_select}
            />
        }
    } else {
        html! {}
    };

    html! {
        <div class="faq-list">
            {filters}
            {
                if visible.is_empty() {
                    html! { <p class="faq-empty">{"Nothing here yet. Ask us directly below."}</p> }
                } else {
                    html! {
                        <>
                            { for visible.into_iter().map(|entry| {
                                let question = entry.question;
                                let on_toggle = {
                                    let open = open.clone();
                                    Callback::from(move |_: ()| open.set(toggle(*open, question)))
                                };
                                html! {
                                    <FaqItem
                                        key={question}
                                        question={question}
                                        answer={entry.answer}
                                        is_open={*open == Some(question)}
                                        on_toggle={on_toggle}
                                    />
                                }
                            }) }
                        </>
                    }
                }
            }
            <style>
                {r#"
                .faq-item {
                    text-align: left;
                    margin-bottom: 1rem;
                    border-radius: 12px;
                    background: rgba(255, 255, 255, 0.04);
                    border: 1px solid rgba(245, 185, 66, 0.1);
                    overflow: hidden;
                }
                .faq-question {
                    width: 100%;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    padding: 1.25rem 1.5rem;
                    background: none;
                    border: none;
                    color: #fff;
                    font-size: 1.1rem;
                    text-align: left;
                    cursor: pointer;
                }
                .toggle-icon { color: #f5b942; font-size: 1.4rem; }
                .faq-answer {
                    max-height: 0;
                    padding: 0 1.5rem;
                    color: #9aa3b5;
                    overflow: hidden;
                    transition: max-height 0.3s ease, padding 0.3s ease;
                }
                .faq-item.open .faq-answer {
                    max-height: 400px;
                    padding: 0 1.5rem 1.25rem;
                }
                .faq-empty { color: #9aa3b5; }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENTRIES: &[FaqEntry] = &[
        FaqEntry { category: "General", question: "a", answer: "" },
        FaqEntry { category: "Pricing", question: "b", answer: "" },
        FaqEntry { category: "General", question: "c", answer: "" },
        FaqEntry { category: "Security", question: "d", answer: "" },
    ];

    #[test]
    fn faq_categories_keep_first_seen_order() {
        assert_eq!(categories(ENTRIES), vec!["All", "General", "Pricing", "Security"]);
    }

    #[test]
    fn category_filters_in_order() {
        let questions: Vec<_> = filter_by_category(ENTRIES, "General")
            .iter()
            .map(|e| e.question)
            .collect();
        assert_eq!(questions, vec!["a", "c"]);
        assert_eq!(filter_by_category(ENTRIES, ALL_CATEGORIES).len(), ENTRIES.len());
    }

    #[test]
    fn toggle_opens_and_closes() {
        let open = toggle(None, "a");
        assert_eq!(open, Some("a"));
        assert_eq!(toggle(open, "a"), None);
    }

    #[test]
    fn opening_one_closes_the_other() {
        let mut open = None;
        for clicked in ["a", "b", "c", "c", "d", "a"] {
            open = toggle(open, clicked);
            let open_items = ENTRIES
                .iter()
                .filter(|entry| open == Some(entry.question))
                .count();
            assert!(open_items <= 1);
        }
        assert_eq!(open, Some("a"));
    }
}
