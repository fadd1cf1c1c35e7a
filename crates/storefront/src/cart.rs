use leptos::prelude::*;

use verdant::prelude::*;

use crate::state::Storefront;

/// Render model for one cart row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CartLine {
    /// Position in the cart; the remove button is bound to it.
    index: usize,

    /// Entry name.
    name: String,

    /// Formatted entry price.
    price: String,
}

/// Rows for the current cart, in insertion order.
pub(crate) fn cart_lines(cart: &Cart, storefront: Storefront) -> Vec<CartLine> {
    cart.iter()
        .enumerate()
        .map(|(index, entry)| CartLine {
            index,
            name: entry.name.clone(),
            price: storefront.display_price(entry.price),
        })
        .collect()
}

fn cart_heading_text(count: usize) -> String {
    format!("Your Cart ({count})")
}

#[component]
fn RemoveLineButton(line_index: usize, item_name: String, storefront: Storefront) -> impl IntoView {
    let remove_button_label = format!("Remove {item_name} from cart");

    view! {
        <button
            type="button"
            aria-label=remove_button_label
            class="remove-btn"
            on:click=move |_| storefront.remove_from_cart(line_index)
        >
            "✕"
        </button>
    }
}

#[component]
fn CartLineRow(line: CartLine, storefront: Storefront) -> impl IntoView {
    view! {
        <li class="cart-line">
            <div>
                <p class="cart-line-name">{line.name.clone()}</p>
                <p class="cart-line-price">{line.price}</p>
            </div>
            <RemoveLineButton line_index=line.index item_name=line.name storefront=storefront />
        </li>
    }
}

#[component]
fn CartSummary(total: String) -> impl IntoView {
    view! {
        <p class="cart-total-row">
            <span>"Total"</span>
            <span id="cart-total">{total}</span>
        </p>
    }
}

fn render_cart_panel_content(storefront: Storefront) -> AnyView {
    let (count, lines) = storefront
        .cart
        .with(|cart| (cart.len(), cart_lines(cart, storefront)));

    let body = if lines.is_empty() {
        view! { <p class="empty-text">"Your cart is empty."</p> }.into_any()
    } else {
        view! {
            <ul id="cart-list" class="cart-list">
                {lines
                    .into_iter()
                    .map(|line| view! { <CartLineRow line=line storefront=storefront /> })
                    .collect_view()}
            </ul>
        }
        .into_any()
    };

    view! {
        <h2 class="panel-title">{cart_heading_text(count)}</h2>
        <div class="panel-card">{body}</div>
        <CartSummary total=storefront.formatted_total() />
    }
    .into_any()
}

/// Cart panel component. Re-renders in full on every cart change.
#[component]
pub fn CartPanel(
    /// Page state.
    storefront: Storefront,
) -> impl IntoView {
    view! {
        <aside id="cart-panel" class="cart-panel">
            {move || render_cart_panel_content(storefront)}
        </aside>
    }
}
