//! Application components.
//!
//! Every piece of storefront state lives in one `StoreApp` behind a
//! signal. Components translate DOM events into `StoreEvent`s through
//! [`dispatch`], which also executes the returned effects (toast timers,
//! scroll lock, the WhatsApp handoff). Render effects need no handling
//! here: updating the signal already re-renders whatever reads it.

use leptos::prelude::*;
use leptos::task::spawn_local;
use toko_commerce::controller::Effect;
use toko_commerce::prelude::*;

use crate::api;

// UI strings (single id-ID locale).
const TOAST_ADDED: &str = "Ditambahkan ke keranjang!";
const EMPTY_CART_NOTE: &str = "Keranjang masih kosong.";
const CATALOG_ERROR: &str = "Gagal memuat produk. Silakan muat ulang halaman.";
const LOADING_NOTE: &str = "Memuat produk...";
const CONFIRM_NOTE: &str = "Periksa kembali pesananmu sebelum melanjutkan ke WhatsApp.";
const VALIDATION_MESSAGE: &str =
    "Mohon isi semua data, pilih metode pembayaran, dan tambahkan produk.";

/// Signals shared by every component.
#[derive(Clone, Copy)]
struct Shell {
    app: RwSignal<StoreApp>,
    toasts: RwSignal<Vec<(u64, &'static str)>>,
    toast_seq: RwSignal<u64>,
    form_error: RwSignal<Option<String>>,
}

/// Run one event through the controller and execute the effects.
fn dispatch(shell: Shell, event: StoreEvent) {
    let effects = shell
        .app
        .try_update(|app| app.handle(event))
        .unwrap_or_default();
    for effect in effects {
        match effect {
            // Signal updates already re-render the readers.
            Effect::RenderGrid | Effect::RenderCart => {}
            Effect::ToastAdded => show_toast(shell),
            Effect::ScrollLock(lock) => scroll_lock(lock),
            Effect::OpenExternal(url) => {
                let _ = window().open_with_url_and_target(&url, "_blank");
            }
            Effect::FormError(_) => shell.form_error.set(Some(VALIDATION_MESSAGE.to_string())),
        }
    }
}

/// Push a toast and arm its independent dismiss timer. Overlapping toasts
/// stack; timers are never cancelled.
fn show_toast(shell: Shell) {
    let id = shell.toast_seq.get_untracked() + 1;
    shell.toast_seq.set(id);
    shell.toasts.update(|toasts| toasts.push((id, TOAST_ADDED)));

    let duration = shell.app.with_untracked(|app| app.config().toast_duration_ms);
    set_timeout(
        move || shell.toasts.update(|toasts| toasts.retain(|(tid, _)| *tid != id)),
        std::time::Duration::from_millis(u64::from(duration)),
    );
}

fn scroll_lock(lock: bool) {
    if let Some(body) = document().body() {
        let overflow = if lock { "hidden" } else { "auto" };
        let _ = body.style().set_property("overflow", overflow);
    }
}

#[component]
pub fn App() -> impl IntoView {
    match StoreApp::new(StoreConfig::default()) {
        Err(err) => view! { <ConfigError message=err.to_string()/> }.into_any(),
        Ok(app) => {
            let shell = Shell {
                app: RwSignal::new(app),
                toasts: RwSignal::new(Vec::new()),
                toast_seq: RwSignal::new(0),
                form_error: RwSignal::new(None),
            };
            provide_context(shell);

            // One fetch per page load; no retry.
            let url = shell.app.with_untracked(|app| app.config().catalog_url.clone());
            spawn_local(async move {
                match api::fetch_catalog(&url).await {
                    Ok(products) => dispatch(shell, StoreEvent::CatalogLoaded(products)),
                    Err(err) => {
                        leptos::logging::error!("catalog fetch failed: {err}");
                        dispatch(shell, StoreEvent::CatalogFailed);
                    }
                }
            });

            view! {
                <Header/>
                <main>
                    <FilterBar/>
                    <ProductGrid/>
                </main>
                <CartModal/>
                <ConfirmDialog/>
                <ToastStack/>
            }
            .into_any()
        }
    }
}

#[component]
fn ConfigError(message: String) -> impl IntoView {
    view! {
        <div class="config-error">
            <h1>"Configuration error"</h1>
            <p>{message}</p>
        </div>
    }
}

#[component]
fn Header() -> impl IntoView {
    let shell = expect_context::<Shell>();
    let count = move || shell.app.with(|app| app.cart().item_count());

    view! {
        <header>
            <h1>"TokoKu"</h1>
            <button class="open-cart" on:click=move |_| dispatch(shell, StoreEvent::OpenCart)>
                "Keranjang" <span class="cart-count">{count}</span>
            </button>
        </header>
    }
}

#[component]
fn FilterBar() -> impl IntoView {
    let shell = expect_context::<Shell>();
    // Categories change only when the catalog loads; the memo keeps the
    // select's options from being rebuilt on unrelated state changes.
    let categories = Memo::new(move |_| shell.app.with(|app| app.categories()));

    view! {
        <div class="filters">
            <input
                type="search"
                placeholder="Cari produk..."
                on:input=move |ev| {
                    dispatch(shell, StoreEvent::SearchChanged(event_target_value(&ev)))
                }
            />
            <select on:change=move |ev| {
                dispatch(shell, StoreEvent::CategoryChanged(event_target_value(&ev)))
            }>
                {move || {
                    categories
                        .get()
                        .into_iter()
                        .map(|CategoryOption { value, label }| {
                            view! { <option value=value>{label}</option> }
                        })
                        .collect::<Vec<_>>()
                }}
            </select>
        </div>
    }
}

#[component]
fn ProductGrid() -> impl IntoView {
    let shell = expect_context::<Shell>();

    view! {
        <section class="grid">
            {move || {
                shell
                    .app
                    .with(|app| match app.catalog().state() {
                        CatalogState::Loading => {
                            view! { <div class="loader">{LOADING_NOTE}</div> }.into_any()
                        }
                        CatalogState::Unavailable => {
                            view! { <div class="error-banner">{CATALOG_ERROR}</div> }.into_any()
                        }
                        CatalogState::Ready => {
                            let budget = app.config().grid_title_budget;
                            let cards = app
                                .visible_products()
                                .into_iter()
                                .map(|product| {
                                    let id = product.id.clone();
                                    view! {
                                        <div class="product-card">
                                            <img src=product.image.clone() alt=product.title.clone()/>
                                            <span class="category">{product.category.clone()}</span>
                                            <h3>{clip_title(&product.title, budget)}</h3>
                                            <div class="card-foot">
                                                <p class="price">{app.display_price(product).display()}</p>
                                                <button
                                                    class="add"
                                                    on:click=move |_| {
                                                        dispatch(shell, StoreEvent::AddToCart(id.clone()))
                                                    }
                                                >
                                                    "+"
                                                </button>
                                            </div>
                                        </div>
                                    }
                                })
                                .collect::<Vec<_>>();
                            view! { <div class="products">{cards}</div> }.into_any()
                        }
                    })
            }}
        </section>
    }
}

#[component]
fn CartModal() -> impl IntoView {
    let shell = expect_context::<Shell>();
    let open = move || shell.app.with(|app| app.stage() != Stage::Browsing);

    view! {
        <Show when=open>
            <div class="modal-backdrop">
                <div class="modal">
                    <div class="modal-head">
                        <h2>"Keranjangmu"</h2>
                        <button
                            class="close"
                            on:click=move |_| dispatch(shell, StoreEvent::CloseCart)
                        >
                            "\u{00d7}"
                        </button>
                    </div>
                    <CartLines/>
                    <CheckoutForm/>
                </div>
            </div>
        </Show>
    }
}

#[component]
fn CartLines() -> impl IntoView {
    let shell = expect_context::<Shell>();

    view! {
        <div class="cart-items">
            {move || {
                shell
                    .app
                    .with(|app| {
                        if app.cart().is_empty() {
                            return view! { <p class="cart-empty">{EMPTY_CART_NOTE}</p> }
                                .into_any();
                        }
                        let budget = app.config().cart_title_budget;
                        let rows = app
                            .cart()
                            .lines()
                            .iter()
                            .map(|line| {
                                let dec = line.product_id.clone();
                                let inc = line.product_id.clone();
                                let del = line.product_id.clone();
                                view! {
                                    <div class="cart-line">
                                        <img src=line.image.clone() alt=line.title.clone()/>
                                        <div class="line-info">
                                            <p class="line-title">
                                                {clip_title(&line.title, budget)}
                                            </p>
                                            <p class="line-price">{line.unit_price.display()}</p>
                                        </div>
                                        <div class="line-controls">
                                            <button
                                                class="decrease"
                                                on:click=move |_| {
                                                    dispatch(shell, StoreEvent::Decrement(dec.clone()))
                                                }
                                            >
                                                "-"
                                            </button>
                                            <span class="qty">{line.quantity}</span>
                                            <button
                                                class="increase"
                                                on:click=move |_| {
                                                    dispatch(shell, StoreEvent::Increment(inc.clone()))
                                                }
                                            >
                                                "+"
                                            </button>
                                            <button
                                                class="remove"
                                                on:click=move |_| {
                                                    dispatch(shell, StoreEvent::Remove(del.clone()))
                                                }
                                            >
                                                "Hapus"
                                            </button>
                                        </div>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>();
                        let total = app.cart().total().display();
                        view! {
                            <div>
                                {rows}
                                <p class="cart-total">"Total: " {total}</p>
                            </div>
                        }
                        .into_any()
                    })
            }}
        </div>
    }
}

#[component]
fn CheckoutForm() -> impl IntoView {
    let shell = expect_context::<Shell>();
    let name = RwSignal::new(String::new());
    let address = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let method = RwSignal::new(String::new());

    let hint = move || shell.app.with(|app| app.transfer_hint());
    let error = move || shell.form_error.get();

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        shell.form_error.set(None);
        let draft = OrderDraft::from_form(&name.get(), &address.get(), &phone.get(), &method.get());
        dispatch(shell, StoreEvent::Submit(draft));
    };

    view! {
        <form class="checkout" on:submit=submit>
            <input
                placeholder="Nama"
                prop:value=move || name.get()
                on:input=move |ev| name.set(event_target_value(&ev))
            />
            <input
                placeholder="Alamat"
                prop:value=move || address.get()
                on:input=move |ev| address.set(event_target_value(&ev))
            />
            <input
                placeholder="No. HP"
                prop:value=move || phone.get()
                on:input=move |ev| phone.set(event_target_value(&ev))
            />
            <select on:change=move |ev| {
                let value = event_target_value(&ev);
                method.set(value.clone());
                dispatch(shell, StoreEvent::PaymentMethodChanged(value));
            }>
                <option value="">"Pilih Metode Pembayaran"</option>
                {PaymentMethod::ALL
                    .iter()
                    .map(|m| view! { <option value=m.as_str()>{m.as_str()}</option> })
                    .collect::<Vec<_>>()}
            </select>
            <Show when=move || hint().is_some()>
                <p class="payment-info">{move || hint().unwrap_or_default()}</p>
            </Show>
            <Show when=move || error().is_some()>
                <p class="form-error">{move || error().unwrap_or_default()}</p>
            </Show>
            <button type="submit" class="submit">"Checkout via WhatsApp"</button>
        </form>
    }
}

#[component]
fn ConfirmDialog() -> impl IntoView {
    let shell = expect_context::<Shell>();
    let open = move || shell.app.with(|app| app.stage() == Stage::ConfirmingOrder);
    let message = move || {
        shell.app.with(|app| app.pending_order().unwrap_or_default().to_string())
    };
    let title = shell
        .app
        .with_untracked(|app| format!("Chat on WhatsApp with +{}", app.config().seller_phone));

    view! {
        <Show when=open>
            <div class="overlay">
                <div class="confirm">
                    <h3>{title.clone()}</h3>
                    <p>{CONFIRM_NOTE}</p>
                    <pre class="order-preview">{message}</pre>
                    <div class="confirm-actions">
                        <button
                            class="confirm-send"
                            on:click=move |_| dispatch(shell, StoreEvent::Confirm)
                        >
                            "Open App"
                        </button>
                        <button
                            class="confirm-cancel"
                            on:click=move |_| dispatch(shell, StoreEvent::Cancel)
                        >
                            "Batal"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}

#[component]
fn ToastStack() -> impl IntoView {
    let shell = expect_context::<Shell>();

    view! {
        <div class="toast-container">
            {move || {
                shell
                    .toasts
                    .get()
                    .into_iter()
                    .map(|(_, text)| view! { <div class="toast">{text}</div> })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
