use serde::{Deserialize, Serialize};

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(pub i64);
    };
}

id_newtype!(ProductId);

/// Display glyph for a product. Opaque to all catalog and controller logic;
/// only the presentation layer gives it meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductIcon {
    Smartphone,
    Laptop,
    PcCase,
    Server,
    RadioReceiver,
    Camera,
    Tablet,
    Monitor,
    Mouse,
    Keyboard,
}

/// A catalog record. Constructed once at catalog initialization and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub icon: ProductIcon,
}
