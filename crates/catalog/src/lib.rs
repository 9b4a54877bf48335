use std::{fs, path::Path};

use anyhow::{Context, Result};

use shared::domain::{Product, ProductIcon, ProductId};

/// Immutable, ordered collection of products. Constructed once and shared;
/// there is no mutation API and queries have no error conditions.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn from_products(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// The built-in demo fixture. A real deployment would load a fixture
    /// file or front a remote source instead.
    pub fn seeded() -> Self {
        let products = vec![
            Product {
                id: ProductId(1),
                name: "Phone".into(),
                description: "A simple phone".into(),
                price: 199.99,
                icon: ProductIcon::Smartphone,
            },
            Product {
                id: ProductId(2),
                name: "Laptop".into(),
                description: "A simple laptop".into(),
                price: 599.99,
                icon: ProductIcon::Laptop,
            },
            Product {
                id: ProductId(3),
                name: "Desktop PC".into(),
                description: "A simple computer".into(),
                price: 399.99,
                icon: ProductIcon::PcCase,
            },
            Product {
                id: ProductId(4),
                name: "Mini PC".into(),
                description: "A smaller computer".into(),
                price: 499.99,
                icon: ProductIcon::Server,
            },
            Product {
                id: ProductId(5),
                name: "Console".into(),
                description: "A simple console".into(),
                price: 499.99,
                icon: ProductIcon::RadioReceiver,
            },
            Product {
                id: ProductId(6),
                name: "Camera".into(),
                description: "A simple camera".into(),
                price: 299.99,
                icon: ProductIcon::Camera,
            },
            Product {
                id: ProductId(7),
                name: "Tablet".into(),
                description: "A simple tablet".into(),
                price: 250.0,
                icon: ProductIcon::Tablet,
            },
            Product {
                id: ProductId(8),
                name: "Monitor".into(),
                description: "A simple monitor".into(),
                price: 99.99,
                icon: ProductIcon::Monitor,
            },
            Product {
                id: ProductId(9),
                name: "Mouse".into(),
                description: "A simple peripheral".into(),
                price: 19.99,
                icon: ProductIcon::Mouse,
            },
            Product {
                id: ProductId(10),
                name: "Keyboard".into(),
                description: "A simple peripheral".into(),
                price: 29.99,
                icon: ProductIcon::Keyboard,
            },
        ];
        Self { products }
    }

    /// Parses a JSON array of products.
    pub fn from_json_str(raw: &str) -> Result<Self> {
        let products: Vec<Product> =
            serde_json::from_str(raw).context("catalog fixture is not a valid product array")?;
        Ok(Self::from_products(products))
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read catalog file: {}", path.display()))?;
        Self::from_json_str(&raw)
            .with_context(|| format!("failed to parse catalog file: {}", path.display()))
    }

    /// The fixed catalog in its stable, deterministic order.
    pub fn list(&self) -> &[Product] {
        &self.products
    }

    /// First record whose id matches, if any.
    pub fn find_by_id(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
