use web_sys::MouseEvent;
use yew::prelude::*;

pub const ALL_CATEGORIES: &str = "All";

/// Anything that can be narrowed down with a row of category buttons.
pub trait Categorized {
    fn category(&self) -> &'static str;
}

/// "All" followed by each category in the order it first appears.
pub fn categories<T: Categorized>(items: &[T]) -> Vec<&'static str> {
    let mut out = vec![ALL_CATEGORIES];
    for item in items {
        if !out.contains(&item.category()) {
            out.push(item.category());
        }
    }
    out
}

pub fn filter_by_category<'a, T: Categorized>(items: &'a [T], category: &str) -> Vec<&'a T> {
    items
        .iter()
        .filter(|item| category == ALL_CATEGORIES || item.category() == category)
        .collect()
}

#[derive(Properties, PartialEq)]
pub struct CategoryFilterProps {
    pub categories: Vec<&'static str>,
    pub selected: &'static str,
    pub on_select: Callback<&'static str>,
}

/// A row of category buttons; the selected one is marked `active`.
#[function_component(CategoryFilter)]
pub fn category_filter(props: &CategoryFilterProps) -> Html {
    html! {
        <div class="category-filter">
            { for props.categories.iter().map(|&category| {
                let onclick = {
                    let on_select = props.on_select.clone();
                    Callback::from(move |e: MouseEvent| {
                        e.prevent_default();
                        on_select.emit(category);
                    })
                };
                html! {
                    <button
                        key={category}
                        class={classes!("cat-btn", (props.selected == category).then(|| "active"))}
                        onclick={onclick}
                    >
                        {category}
                    </button>
                }
            }) }
            <style>
                {r#"
                .category-filter {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 0.5rem;
                    margin-bottom: 2rem;
                }
                .cat-btn {
                    padding: 0.4rem 1rem;
                    border-radius: 999px;
                    border: 1px solid rgba(255, 255, 255, 0.15);
                    background: transparent;
                    color: #cfd6e6;
                    cursor: pointer;
                }
                .cat-btn.active {
                    background: #f5b942;
                    border-color: #f5b942;
                    color: #121621;
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Tagged(&'static str, u32);

    impl Categorized for Tagged {
        fn category(&self) -> &'static str {
            self.0
        }
    }

    const ITEMS: &[Tagged] = &[
        Tagged("Webinar", 1),
        Tagged("Guide", 2),
        Tagged("Webinar", 3),
        Tagged("Product", 4),
    ];

    #[test]
    fn categories_keep_first_seen_order() {
        assert_eq!(categories(ITEMS), vec!["All", "Webinar", "Guide", "Product"]);
        assert_eq!(categories::<Tagged>(&[]), vec!["All"]);
    }

    #[test]
    fn all_keeps_everything_in_order() {
        let ids: Vec<_> = filter_by_category(ITEMS, ALL_CATEGORIES).iter().map(|t| t.1).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn category_narrows_the_list() {
        let ids: Vec<_> = filter_by_category(ITEMS, "Webinar").iter().map(|t| t.1).collect();
        assert_eq!(ids, vec![1, 3]);
        assert!(filter_by_category(ITEMS, "Podcast").is_empty());
    }
}
