use leptos::prelude::*;

use verdant::prelude::*;

use crate::state::Storefront;

/// Label of the synthetic control that clears the filter.
pub const ALL_LABEL: &str = "All Trees";

/// One button in the category list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryControl {
    /// Filter applied when clicked.
    pub filter: CategoryFilter,

    /// Button text.
    pub label: String,
}

/// The "All Trees" control followed by one control per category, in fetched order.
pub fn category_controls(categories: &[Category]) -> Vec<CategoryControl> {
    let all = CategoryControl {
        filter: CategoryFilter::All,
        label: ALL_LABEL.to_string(),
    };

    std::iter::once(all)
        .chain(categories.iter().map(|category| CategoryControl {
            filter: CategoryFilter::Category(category.id.clone()),
            label: category.name.clone(),
        }))
        .collect()
}

fn control_class(active: bool) -> &'static str {
    if active {
        "category-button category-button-active"
    } else {
        "category-button"
    }
}

#[component]
fn CategoryButton(control: CategoryControl, storefront: Storefront) -> impl IntoView {
    let control_id = control.filter.control_id().to_string();
    let filter_for_class = control.filter.clone();
    let filter_for_pressed = control.filter.clone();
    let filter_for_click = control.filter;

    view! {
        <li>
            <button
                type="button"
                data-id=control_id
                aria-pressed=move || {
                    storefront
                        .selection
                        .with(|selection| selection.is_active(&filter_for_pressed))
                        .to_string()
                }
                class=move || {
                    control_class(
                        storefront.selection.with(|selection| selection.is_active(&filter_for_class)),
                    )
                }
                on:click=move |_| storefront.select_category(filter_for_click.clone())
            >
                {control.label}
            </button>
        </li>
    }
}

/// Category list component.
#[component]
pub fn CategoryPanel(
    /// Page state.
    storefront: Storefront,
) -> impl IntoView {
    view! {
        <aside class="category-panel">
            <h2 class="panel-title">"Categories"</h2>
            <ul id="category-list" class="category-list">
                {move || {
                    storefront
                        .catalog
                        .with(|catalog| category_controls(catalog.categories()))
                        .into_iter()
                        .map(|control| {
                            view! { <CategoryButton control=control storefront=storefront /> }
                        })
                        .collect_view()
                }}
            </ul>
        </aside>
    }
}
