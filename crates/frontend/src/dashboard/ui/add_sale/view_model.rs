use contracts::catalog::{Customer, Product};
use contracts::sales::{NewSaleItem, NewSaleRequest};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::dashboard::api;

const VALIDATION_MESSAGE: &str =
    "Please select a product and ensure quantity is greater than 0 for all items.";

/// One editable line of the draft sale. `product_id` mirrors the select
/// element value, so "" means no product chosen yet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DraftItem {
    pub product_id: String,
    pub quantity: i64,
}

impl Default for DraftItem {
    fn default() -> Self {
        Self {
            product_id: String::new(),
            quantity: 1,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
}

impl StatusMessage {
    fn success(text: String) -> Self {
        Self {
            kind: StatusKind::Success,
            text,
        }
    }

    fn error(text: String) -> Self {
        Self {
            kind: StatusKind::Error,
            text,
        }
    }
}

/// ViewModel for the add-sale form.
///
/// Owns the reference lists, the draft rows and the submit lifecycle. The
/// draft is purely client-side; it is turned into a `NewSaleRequest` at
/// submit time and discarded on success.
#[derive(Clone, Copy)]
pub struct AddSaleViewModel {
    pub products: RwSignal<Vec<Product>>,
    pub customers: RwSignal<Vec<Customer>>,
    /// Selected customer id as a select value, "" for none.
    pub selected_customer: RwSignal<String>,
    pub items: RwSignal<Vec<DraftItem>>,
    pub submitting: RwSignal<bool>,
    pub status: RwSignal<Option<StatusMessage>>,
}

impl AddSaleViewModel {
    pub fn new() -> Self {
        Self {
            products: RwSignal::new(Vec::new()),
            customers: RwSignal::new(Vec::new()),
            selected_customer: RwSignal::new(String::new()),
            items: RwSignal::new(vec![DraftItem::default()]),
            submitting: RwSignal::new(false),
            status: RwSignal::new(None),
        }
    }

    /// Fetch products and customers independently; one failing does not
    /// block the other list from loading.
    pub fn load_reference_data(&self) {
        let vm = *self;
        spawn_local(async move {
            let result = api::fetch_products().await;
            if let Err(e) = &result {
                log::error!("products fetch failed: {}", e);
            }
            let mut list = vm.products.get_untracked();
            let mut status = vm.status.get_untracked();
            apply_reference_result(&mut list, &mut status, result);
            vm.products.set(list);
            vm.status.set(status);
        });

        let vm = *self;
        spawn_local(async move {
            let result = api::fetch_customers().await;
            if let Err(e) = &result {
                log::error!("customers fetch failed: {}", e);
            }
            let mut list = vm.customers.get_untracked();
            let mut status = vm.status.get_untracked();
            apply_reference_result(&mut list, &mut status, result);
            vm.customers.set(list);
            vm.status.set(status);
        });
    }

    pub fn add_row(&self) {
        self.items.update(|items| items.push(DraftItem::default()));
    }

    pub fn remove_row(&self, index: usize) {
        self.items.update(|items| remove_item(items, index));
    }

    pub fn set_row_product(&self, index: usize, product_id: String) {
        self.items
            .update(|items| choose_product(items, index, product_id));
    }

    pub fn set_row_quantity(&self, index: usize, raw: String) {
        let quantity = raw.trim().parse::<i64>().unwrap_or(0);
        self.items.update(|items| {
            if let Some(item) = items.get_mut(index) {
                item.quantity = quantity;
            }
        });
    }

    /// Reactive preview total over the current rows and product list.
    pub fn preview_total(&self) -> f64 {
        self.items
            .with(|items| self.products.with(|products| preview_total(items, products)))
    }

    /// Validate locally, then POST the draft. On success the form resets to a
    /// single empty row and the parent is notified exactly once; on failure
    /// the draft stays intact for correction.
    pub fn submit(&self, on_saved: Callback<()>) {
        self.status.set(None);

        let items = self.items.get_untracked();
        let customer = self.selected_customer.get_untracked();
        let request = match build_request(&customer, &items) {
            Ok(request) => request,
            Err(message) => {
                self.status.set(Some(StatusMessage::error(message)));
                return;
            }
        };

        self.submitting.set(true);
        let vm = *self;
        spawn_local(async move {
            let result = api::submit_sale(&request).await;
            vm.submitting.set(false);
            let mut customer = vm.selected_customer.get_untracked();
            let mut items = vm.items.get_untracked();
            let mut status = vm.status.get_untracked();
            let notify = apply_submit_result(&mut customer, &mut items, &mut status, result);
            vm.selected_customer.set(customer);
            vm.items.set(items);
            vm.status.set(status);
            if notify {
                on_saved.run(());
            }
        });
    }
}

impl Default for AddSaleViewModel {
    fn default() -> Self {
        Self::new()
    }
}

/// Apply one reference-list fetch outcome. Success replaces the list; failure
/// surfaces the message and leaves the list as it was, so the other list can
/// still load and render.
fn apply_reference_result<T>(
    list: &mut Vec<T>,
    status: &mut Option<StatusMessage>,
    result: Result<Vec<T>, String>,
) {
    match result {
        Ok(items) => *list = items,
        Err(message) => *status = Some(StatusMessage::error(message)),
    }
}

/// Apply the submit outcome to the draft. On success the draft resets to a
/// single empty row with no customer selected; on failure it is left intact
/// for correction. Returns true when the parent should be told to refresh.
fn apply_submit_result(
    customer: &mut String,
    items: &mut Vec<DraftItem>,
    status: &mut Option<StatusMessage>,
    result: Result<String, String>,
) -> bool {
    match result {
        Ok(message) => {
            *status = Some(StatusMessage::success(message));
            customer.clear();
            *items = vec![DraftItem::default()];
            true
        }
        Err(message) => {
            *status = Some(StatusMessage::error(message));
            false
        }
    }
}

/// Set a row's product. A zero-quantity row gets its quantity bumped to 1 on
/// product selection, so picking a product never leaves an unsubmittable row
/// behind by default.
fn choose_product(items: &mut [DraftItem], index: usize, product_id: String) {
    if let Some(item) = items.get_mut(index) {
        item.product_id = product_id;
        if item.quantity == 0 {
            item.quantity = 1;
        }
    }
}

/// Remove a row, refusing to drop the last one: a sale needs at least one
/// line item.
fn remove_item(items: &mut Vec<DraftItem>, index: usize) {
    if items.len() > 1 && index < items.len() {
        items.remove(index);
    }
}

/// Client-side preview of the sale total: sum of price x quantity over rows
/// whose product id resolves against the loaded product list. Unresolved rows
/// contribute zero. Display only; the backend computes the real amount.
pub fn preview_total(items: &[DraftItem], products: &[Product]) -> f64 {
    items
        .iter()
        .filter_map(|item| {
            let id: i64 = item.product_id.parse().ok()?;
            let product = products.iter().find(|p| p.id == id)?;
            Some(product.price * item.quantity as f64)
        })
        .sum()
}

/// Turn the draft into a request body, rejecting any row without a selected
/// product or with a non-positive quantity. No network call happens when this
/// fails.
pub fn build_request(
    selected_customer: &str,
    items: &[DraftItem],
) -> Result<NewSaleRequest, String> {
    let mut out = Vec::with_capacity(items.len());
    for item in items {
        let product_id: i64 = item
            .product_id
            .parse()
            .map_err(|_| VALIDATION_MESSAGE.to_string())?;
        if item.quantity <= 0 {
            return Err(VALIDATION_MESSAGE.to_string());
        }
        out.push(NewSaleItem {
            product_id,
            quantity: item.quantity,
        });
    }
    let customer_id = if selected_customer.is_empty() {
        None
    } else {
        selected_customer.parse::<i64>().ok()
    };
    Ok(NewSaleRequest {
        customer_id,
        items: out,
    })
}
