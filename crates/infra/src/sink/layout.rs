use std::path::{Path, PathBuf};

/// File names of one simulation run inside its output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLayout {
    dir: PathBuf,
}

impl OutputLayout {
    pub const INVENTORY: &'static str = "inventory.csv";
    pub const INVENTORY_OUT: &'static str = "inventory_out.csv";
    pub const ORDERS: &'static str = "orders.csv";
    pub const ORDERS_RESULT: &'static str = "orders_result.csv";
    pub const ORDERS_OUT: &'static str = "orders_out.json";

    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Create the output directory (and parents) if missing.
    pub fn ensure_dir(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.dir)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Catalog as generated: `sku,item_name,price,quantity`.
    pub fn inventory(&self) -> PathBuf {
        self.dir.join(Self::INVENTORY)
    }

    /// Stock levels after all orders: `sku,quantity`.
    pub fn inventory_out(&self) -> PathBuf {
        self.dir.join(Self::INVENTORY_OUT)
    }

    pub fn orders(&self) -> PathBuf {
        self.dir.join(Self::ORDERS)
    }

    pub fn orders_result(&self) -> PathBuf {
        self.dir.join(Self::ORDERS_RESULT)
    }

    pub fn orders_out(&self) -> PathBuf {
        self.dir.join(Self::ORDERS_OUT)
    }
}
