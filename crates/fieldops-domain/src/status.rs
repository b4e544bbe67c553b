//! Work-order status labels.
//!
//! Statuses live in an externally managed catalog; only the labels below carry
//! meaning for authorization and reporting, and they are compared verbatim.

/// Work has been requested but not started.
pub const PENDING: &str = "Pendiente";

/// Work is being carried out.
pub const IN_PROGRESS: &str = "En Progreso";

/// Work is done and awaits supervisor review.
pub const IN_REVIEW: &str = "En Revisión";

/// Terminal status. Orders in this status accept no further progress entries.
pub const FINALIZED: &str = "Finalizado";

/// Work was called off.
pub const CANCELLED: &str = "Cancelado";

/// Catalog entry seeded on first migration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogSeed {
    pub name: &'static str,
    pub color: &'static str,
    pub sort_order: i32,
}

/// Default status catalog, in display order.
pub const DEFAULT_CATALOG: [CatalogSeed; 5] = [
    CatalogSeed {
        name: PENDING,
        color: "#FFC107",
        sort_order: 1,
    },
    CatalogSeed {
        name: IN_PROGRESS,
        color: "#2196F3",
        sort_order: 2,
    },
    CatalogSeed {
        name: IN_REVIEW,
        color: "#9C27B0",
        sort_order: 3,
    },
    CatalogSeed {
        name: FINALIZED,
        color: "#4CAF50",
        sort_order: 4,
    },
    CatalogSeed {
        name: CANCELLED,
        color: "#F44336",
        sort_order: 5,
    },
];

/// Color given to catalog entries created without one.
pub const DEFAULT_COLOR: &str = "#808080";
