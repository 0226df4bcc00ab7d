pub mod points;

pub mod prelude {
    pub use super::receipts::{Item, Receipt};
}

pub mod receipts {
    use serde::{Deserialize, Serialize};

    /// Domain model for a submitted purchase Receipt.
    ///
    /// Every field is kept exactly as submitted. Numeric, date and time
    /// fields are only interpreted when points are calculated, so a
    /// malformed value is stored as-is and simply scores nothing.
    ///
    #[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
    #[serde(rename_all = "camelCase", default)]
    pub struct Receipt {
        pub retailer: String,
        pub purchase_date: String,
        pub purchase_time: String,
        pub total: String,
        pub items: Vec<Item>,
    }

    /// One line entry on a receipt.
    #[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
    #[serde(rename_all = "camelCase", default)]
    pub struct Item {
        pub short_description: String,
        pub price: String,
    }

    impl Receipt {
        /// Returns the wire names of the required fields that are empty.
        ///
        /// An empty result means the receipt may be stored.
        ///
        pub fn missing_fields(&self) -> Vec<&'static str> {
            [
                ("retailer", self.retailer.is_empty()),
                ("purchaseDate", self.purchase_date.is_empty()),
                ("purchaseTime", self.purchase_time.is_empty()),
                ("total", self.total.is_empty()),
                ("items", self.items.is_empty()),
            ]
            .into_iter()
            .filter_map(|(name, missing)| missing.then_some(name))
            .collect()
        }
    }

}
