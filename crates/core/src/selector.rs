//! Product detail option selector.
//!
//! The detail page keeps one active value per option group plus a quantity.
//! The state round-trips through query parameters, so every option button is
//! a plain link built from [`DetailSelection::with`].

use crate::cart::LineOptions;
use crate::catalog::Product;
use crate::types::Price;

/// Smallest quantity the stepper allows.
pub const MIN_QUANTITY: u32 = 1;

/// Largest quantity the stepper allows.
pub const MAX_QUANTITY: u32 = 10;

/// An option button group on the detail page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionGroup {
    Size,
    Color,
    Material,
}

impl OptionGroup {
    pub const ALL: [Self; 3] = [Self::Size, Self::Color, Self::Material];

    /// Query parameter and cart option key.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Size => "size",
            Self::Color => "color",
            Self::Material => "material",
        }
    }

    /// Allowed values, in button order.
    #[must_use]
    pub const fn values(self) -> &'static [&'static str] {
        match self {
            Self::Size => &["150x200", "200x250", "300x270"],
            Self::Color => &["Oq", "Bej", "Oltin", "Qizil"],
            Self::Material => &["silk", "cotton", "velvet", "linen", "polyester"],
        }
    }

    /// Heading shown above the group.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Size => "O'lcham",
            Self::Color => "Rang",
            Self::Material => "Material",
        }
    }

    /// Button text for a value.
    #[must_use]
    pub fn value_label(self, value: &str) -> &str {
        match (self, value) {
            (Self::Material, "silk") => "Ipak",
            (Self::Material, "cotton") => "Paxta",
            (Self::Material, "velvet") => "Baxmal",
            (Self::Material, "linen") => "Zig'ir",
            (Self::Material, "polyester") => "Poliester",
            _ => value,
        }
    }

    /// DOM id of the button container.
    #[must_use]
    pub const fn container_id(self) -> &'static str {
        match self {
            Self::Size => "sizeOptions",
            Self::Color => "colorOptions",
            Self::Material => "materialOptions",
        }
    }

    /// The value if it belongs to this group.
    fn accept(self, raw: Option<&str>) -> Option<&'static str> {
        let raw = raw?.trim();
        self.values().iter().copied().find(|v| *v == raw)
    }
}

/// Clamp a requested quantity into the stepper's range.
#[must_use]
pub fn clamp_quantity(requested: i64) -> u32 {
    let clamped = requested.clamp(i64::from(MIN_QUANTITY), i64::from(MAX_QUANTITY));
    u32::try_from(clamped).unwrap_or(MIN_QUANTITY)
}

/// Active selection on the detail page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetailSelection {
    pub size: Option<&'static str>,
    pub color: Option<&'static str>,
    pub material: Option<&'static str>,
    pub quantity: u32,
}

impl Default for DetailSelection {
    fn default() -> Self {
        Self {
            size: None,
            color: None,
            material: None,
            quantity: MIN_QUANTITY,
        }
    }
}

impl DetailSelection {
    /// Build a selection from raw query values.
    ///
    /// Values outside their group are dropped; quantity is clamped, and a
    /// missing or non-numeric quantity means one.
    #[must_use]
    pub fn from_params(
        size: Option<&str>,
        color: Option<&str>,
        material: Option<&str>,
        qty: Option<&str>,
    ) -> Self {
        let quantity = qty
            .and_then(|q| q.trim().parse::<i64>().ok())
            .map_or(MIN_QUANTITY, clamp_quantity);
        Self {
            size: OptionGroup::Size.accept(size),
            color: OptionGroup::Color.accept(color),
            material: OptionGroup::Material.accept(material),
            quantity,
        }
    }

    /// Active value for a group.
    #[must_use]
    pub const fn get(&self, group: OptionGroup) -> Option<&'static str> {
        match group {
            OptionGroup::Size => self.size,
            OptionGroup::Color => self.color,
            OptionGroup::Material => self.material,
        }
    }

    /// Whether `value` is the active button in `group`.
    #[must_use]
    pub fn is_active(&self, group: OptionGroup, value: &str) -> bool {
        self.get(group) == Some(value)
    }

    /// Copy with one group's value replaced; siblings are implicitly
    /// deactivated since a group holds a single value.
    #[must_use]
    pub fn with(mut self, group: OptionGroup, value: &'static str) -> Self {
        let value = OptionGroup::accept(group, Some(value));
        match group {
            OptionGroup::Size => self.size = value,
            OptionGroup::Color => self.color = value,
            OptionGroup::Material => self.material = value,
        }
        self
    }

    /// Copy with the quantity moved by `delta`, clamped.
    #[must_use]
    pub fn step(mut self, delta: i64) -> Self {
        self.quantity = clamp_quantity(i64::from(self.quantity) + delta);
        self
    }

    /// Query string that reproduces this selection, without a leading `?`.
    #[must_use]
    pub fn query_string(&self) -> String {
        let mut parts: Vec<String> = OptionGroup::ALL
            .into_iter()
            .filter_map(|g| self.get(g).map(|v| format!("{}={v}", g.key())))
            .collect();
        parts.push(format!("qty={}", self.quantity));
        parts.join("&")
    }

    /// Cart options for this selection. Groups with nothing chosen are left out.
    #[must_use]
    pub fn options(&self) -> LineOptions {
        OptionGroup::ALL
            .into_iter()
            .filter_map(|g| self.get(g).map(|v| (g.key().to_owned(), v.to_owned())))
            .collect()
    }

    /// Displayed total: the product's unit price times the quantity.
    #[must_use]
    pub fn total_price(&self, product: &Product) -> Price {
        product.unit_price * self.quantity
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::types::ProductId;

    #[test]
    fn test_quantity_clamps() {
        assert_eq!(clamp_quantity(0), 1);
        assert_eq!(clamp_quantity(-4), 1);
        assert_eq!(clamp_quantity(5), 5);
        assert_eq!(clamp_quantity(11), 10);
        assert_eq!(clamp_quantity(i64::MAX), 10);
    }

    #[test]
    fn test_stepper_stays_in_range() {
        let sel = DetailSelection::default();
        assert_eq!(sel.step(-1).quantity, 1);
        let top = DetailSelection::from_params(None, None, None, Some("10"));
        assert_eq!(top.step(1).quantity, 10);
        assert_eq!(top.step(-1).quantity, 9);
    }

    #[test]
    fn test_unknown_values_are_dropped() {
        let sel = DetailSelection::from_params(Some("999x999"), Some("Oltin"), Some("wool"), Some("x"));
        assert_eq!(sel.size, None);
        assert_eq!(sel.color, Some("Oltin"));
        assert_eq!(sel.material, None);
        assert_eq!(sel.quantity, 1);
    }

    #[test]
    fn test_choosing_replaces_sibling() {
        let sel = DetailSelection::default()
            .with(OptionGroup::Color, "Oq")
            .with(OptionGroup::Color, "Qizil");
        assert!(sel.is_active(OptionGroup::Color, "Qizil"));
        assert!(!sel.is_active(OptionGroup::Color, "Oq"));
    }

    #[test]
    fn test_total_uses_catalog_price() {
        let catalog = Catalog::standard();
        let karniz = catalog.get(ProductId::new(8)).unwrap();
        let sel = DetailSelection::from_params(None, None, None, Some("3"));
        assert_eq!(sel.total_price(karniz), Price::new(450_000));
    }

    #[test]
    fn test_options_skip_unselected_groups() {
        let sel = DetailSelection::from_params(Some("200x250"), None, Some("velvet"), None);
        let options = sel.options();
        assert_eq!(options.len(), 2);
        assert_eq!(options.get("size").map(String::as_str), Some("200x250"));
        assert!(!options.contains_key("color"));
        assert!(DetailSelection::default().options().is_empty());
    }

    #[test]
    fn test_query_string_round_trip() {
        let sel = DetailSelection::from_params(Some("150x200"), Some("Bej"), None, Some("4"));
        assert_eq!(sel.query_string(), "size=150x200&color=Bej&qty=4");
    }
}
