//! # Sample Data
//!
//! The starter inventory used by the `seed` binary: five suppliers and eight
//! medicines.

use chrono::NaiveDate;
use tracing::{info, warn};

use crate::error::DbResult;
use crate::pool::Database;
use medvault_core::{MedicineInput, Money, NewSupplier};

/// `(name, contact)`
pub const SAMPLE_SUPPLIERS: &[(&str, &str)] = &[
    ("MedSupply Co.", "123-456-7890"),
    ("Pharma Distributors", "234-567-8901"),
    ("HealthCare Solutions", "345-678-9012"),
    ("Global Pharmaceuticals", "456-789-0123"),
    ("MedTech Industries", "567-890-1234"),
];

/// `(name, company, manufactured, expires, quantity, price_cents, supplier)`
///
/// `supplier` is a 1-based index into [`SAMPLE_SUPPLIERS`].
type SampleMedicine = (&'static str, &'static str, &'static str, &'static str, i64, i64, usize);

pub const SAMPLE_MEDICINES: &[SampleMedicine] = &[
    ("Paracetamol 500mg", "PharmaCorp", "2024-01-15", "2026-01-15", 500, 2550, 1),
    ("Amoxicillin 250mg", "MediCare Labs", "2024-02-20", "2025-08-20", 300, 4575, 2),
    ("Ibuprofen 400mg", "HealthPlus", "2024-03-10", "2026-03-10", 250, 3000, 1),
    ("Aspirin 100mg", "Global Meds", "2024-01-05", "2025-12-05", 400, 1525, 3),
    ("Cetirizine 10mg", "PharmaCorp", "2024-04-12", "2025-10-12", 350, 2050, 4),
    ("Omeprazole 20mg", "MediCare Labs", "2024-02-28", "2026-02-28", 200, 5500, 2),
    ("Atorvastatin 10mg", "HealthPlus", "2024-03-15", "2026-09-15", 150, 8075, 5),
    ("Metformin 500mg", "Global Meds", "2024-01-20", "2025-07-20", 450, 3525, 3),
];

/// What a seeding run did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// Rows were inserted.
    Seeded { suppliers: usize, medicines: usize },
    /// The database already had suppliers; nothing was written.
    Skipped { existing_suppliers: i64 },
}

/// Inserts the sample inventory into an empty database.
pub async fn seed_sample_data(db: &Database) -> DbResult<SeedOutcome> {
    let existing = db.suppliers().count().await?;
    if existing > 0 {
        warn!(existing, "Database already has suppliers, skipping seed");
        return Ok(SeedOutcome::Skipped {
            existing_suppliers: existing,
        });
    }

    let mut supplier_ids = Vec::with_capacity(SAMPLE_SUPPLIERS.len());
    for (name, contact) in SAMPLE_SUPPLIERS {
        let id = db
            .suppliers()
            .insert(&NewSupplier {
                name: name.to_string(),
                contact: contact.to_string(),
            })
            .await?;
        supplier_ids.push(id);
    }

    let mut medicines = 0;
    for &(name, company, mfg, exp, quantity, price_cents, supplier) in SAMPLE_MEDICINES {
        let input = MedicineInput {
            name: name.to_string(),
            company: company.to_string(),
            manufacture_date: sample_date(mfg),
            expiry_date: sample_date(exp),
            quantity,
            price: Money::from_cents(price_cents),
            supplier_id: supplier_ids[supplier - 1],
        };
        db.medicines().insert(&input).await?;
        medicines += 1;
    }

    info!(suppliers = supplier_ids.len(), medicines, "Sample data seeded");

    Ok(SeedOutcome::Seeded {
        suppliers: supplier_ids.len(),
        medicines,
    })
}

fn sample_date(text: &str) -> NaiveDate {
    medvault_core::format::parse_date(text).unwrap_or_default()
}
