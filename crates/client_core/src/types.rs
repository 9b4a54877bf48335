use serde::Serialize;

use shared::domain::Product;

/// Snapshot of everything the product list screen needs to render.
///
/// `filtered_products` always reflects the last completed filter pass and is
/// a subsequence of `products` in catalog order; it may lag `search_query`
/// while a debounce window is open.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ListViewState {
    pub is_loading: bool,
    pub products: Vec<Product>,
    pub filtered_products: Vec<Product>,
    pub search_query: String,
    pub error: Option<String>,
}

impl ListViewState {
    pub(crate) fn loading() -> Self {
        Self {
            is_loading: true,
            ..Self::default()
        }
    }

    pub(crate) fn loaded(products: Vec<Product>) -> Self {
        Self {
            is_loading: false,
            filtered_products: products.clone(),
            products,
            search_query: String::new(),
            error: None,
        }
    }

    pub(crate) fn failed(message: String) -> Self {
        Self {
            is_loading: false,
            error: Some(message),
            ..Self::default()
        }
    }
}

/// Snapshot for the product detail screen. While loading both `product` and
/// `error` are `None`; once loading completes exactly one is `Some`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DetailViewState {
    pub product: Option<Product>,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl DetailViewState {
    pub(crate) fn loading() -> Self {
        Self {
            product: None,
            is_loading: true,
            error: None,
        }
    }

    pub(crate) fn found(product: Product) -> Self {
        Self {
            product: Some(product),
            is_loading: false,
            error: None,
        }
    }

    pub(crate) fn failed(message: String) -> Self {
        Self {
            product: None,
            is_loading: false,
            error: Some(message),
        }
    }
}
