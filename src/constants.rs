//! Application constants for inventory sync
//!
//! Column names of the inventory export, specification keys, catalog
//! endpoint defaults and the fixed domain values used by the normalizer.

// =============================================================================
// Inventory Export Layout
// =============================================================================

/// Field delimiter used by inventory exports
pub const DEFAULT_DELIMITER: char = ',';

/// Quote character wrapping fields that embed the delimiter
pub const QUOTE: char = '"';

/// Separator for array-valued fields packed into a single column
pub const LIST_SEPARATOR: char = '|';

/// Source columns read by the normalizer
pub mod columns {
    pub const ID: &str = "id";
    pub const NAME: &str = "name";
    pub const CATEGORY: &str = "category";
    pub const BRAND: &str = "brand";
    pub const PRICE: &str = "price";
    pub const STOCK: &str = "stock";
    pub const SOLD: &str = "sold";
    pub const AVAILABLE: &str = "available";

    /// Image columns, in display order
    pub const IMAGES: &[&str] = &[
        "image_1", "image_2", "image_3", "image_4", "image_5", "image_6",
    ];

    pub const TDP_WATTS: &str = "tdp_watts";
    pub const LENGTH_MM: &str = "length_mm";
    pub const HEIGHT_MM: &str = "height_mm";
    pub const SOCKET: &str = "socket";
    pub const FORM_FACTOR: &str = "form_factor";
    pub const MEMORY_TYPE: &str = "memory_type";
    pub const CAPACITY_GB: &str = "capacity_gb";
    pub const INTERFACE: &str = "interface";
    pub const SLOTS: &str = "slots";
    pub const VRAM_GB: &str = "vram_gb";
    pub const CLOCK_SPEED: &str = "clock_speed";
    pub const CHIPSET: &str = "chipset";
    pub const MODULES_COUNT: &str = "modules_count";

    /// Full column layout written by the exporter
    pub const EXPORT_LAYOUT: &[&str] = &[
        ID, NAME, CATEGORY, BRAND, PRICE, STOCK, SOLD, AVAILABLE,
        "image_1", "image_2", "image_3", "image_4", "image_5", "image_6",
        SOCKET, FORM_FACTOR, TDP_WATTS, MEMORY_TYPE, CLOCK_SPEED,
        CHIPSET, VRAM_GB, LENGTH_MM, HEIGHT_MM, SLOTS,
        INTERFACE, CAPACITY_GB, MODULES_COUNT,
    ];
}

// =============================================================================
// Specification Keys
// =============================================================================

pub mod spec_keys {
    pub const TDP: &str = "tdp";
    pub const LENGTH_MM: &str = "length_mm";
    pub const HEIGHT_MM: &str = "height_mm";
    pub const SOCKET: &str = "socket";
    pub const FORM_FACTOR: &str = "form_factor";
    pub const MEMORY_TYPE: &str = "memory_type";
    pub const CAPACITY_GB: &str = "capacity_gb";
    pub const INTERFACE: &str = "interface";
    pub const SUPPORTED_SOCKETS: &str = "supported_sockets";
    pub const SUPPORTED_MOTHERBOARDS: &str = "supported_motherboards";
    pub const CPU_SOCKET: &str = "cpu_socket";
    pub const M2_SLOTS_GEN4: &str = "m2_slots_gen4";
    pub const SATA_PORTS: &str = "sata_ports";
    pub const MEMORY: &str = "memory";
    pub const BASE_CLOCK: &str = "base_clock";

    // Read only by the exporter
    pub const BOOST_CLOCK: &str = "boost_clock";
    pub const CHIPSET: &str = "chipset";
    pub const MAX_GPU_LENGTH_MM: &str = "max_gpu_length_mm";
    pub const MAX_CPU_COOLER_HEIGHT_MM: &str = "max_cpu_cooler_height_mm";
    pub const PCI_SLOTS: &str = "pci_slots";
    pub const CAPACITY: &str = "capacity";
    pub const MAX_MEMORY_GB: &str = "max_memory_gb";
    pub const MODULES: &str = "modules";
}

/// SATA port count stamped on every motherboard record.
///
/// Not derived from the export; no source column carries it. Kept as-is
/// until the catalog data owners confirm a real value per board.
pub const MOTHERBOARD_SATA_PORTS: i64 = 6;

// =============================================================================
// Catalog Service Defaults
// =============================================================================

pub const DEFAULT_CATALOG_BASE_URL: &str = "http://localhost:5001";

/// Batch-create endpoint, relative to the base URL
pub const DEFAULT_BATCH_PATH: &str = "/api/products/batch";

/// Product list endpoint used by exports
pub const DEFAULT_PRODUCTS_PATH: &str = "/api/products";

pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_MAX_RETRIES: u32 = 0;
pub const DEFAULT_RETRY_DELAY_MS: u64 = 1_000;

// =============================================================================
// Configuration
// =============================================================================

/// Directory name under the user config dir
pub const CONFIG_DIR_NAME: &str = "inventory-sync";
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Prefix for environment overrides, e.g. `INVENTORY_SYNC_CATALOG__BASE_URL`
pub const ENV_PREFIX: &str = "INVENTORY_SYNC_";
